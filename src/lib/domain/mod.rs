//! The higher abstractions of the program: the entities that the generator
//! reads to produce the descriptors
pub mod custom_command;
pub mod library;
pub mod resource;
pub mod target;
