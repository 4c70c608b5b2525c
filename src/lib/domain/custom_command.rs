//! The command run by a utility target

use serde::Serialize;
use std::borrow::Cow;
use std::path::PathBuf;

/// A single command invocation: `argv[0]` followed by its arguments
pub type CommandLine<'a> = Vec<Cow<'a, str>>;

#[derive(Debug, PartialEq, Eq, Serialize, Clone, Default)]
pub struct CustomCommand<'a> {
    pub working_directory: Option<PathBuf>,
    pub command_lines: Vec<CommandLine<'a>>,
}
