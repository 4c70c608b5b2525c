//! Target identity and kinds

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Strong type for storing the target unique identifier, which instead of being
/// composite within the [`crate::project_model::target::TargetModel`] struct, is
/// externalized in this wrapped type, so we can use it as the key of the targets container
#[derive(Debug, PartialEq, Eq, Serialize, Default, Hash, Clone)]
pub struct TargetIdentifier<'a>(pub Cow<'a, str>);

impl<'a> From<&'a str> for TargetIdentifier<'a> {
    fn from(value: &'a str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl<'a> TargetIdentifier<'a> {
    pub fn name(&self) -> &str {
        self.0.as_ref()
    }
}

impl fmt::Display for TargetIdentifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The different types of final products
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Default, Copy, Clone)]
pub enum TargetKind {
    #[default]
    #[serde(alias = "Executable", alias = "executable", alias = "exe")]
    Executable,
    #[serde(
        alias = "SharedLibrary",
        alias = "shared library",
        alias = "shared-library",
        alias = "shared_library",
        alias = "dll"
    )]
    SharedLibrary,
    #[serde(
        alias = "StaticLibrary",
        alias = "static library",
        alias = "static-library",
        alias = "static_library",
        alias = "lib"
    )]
    StaticLibrary,
    #[serde(alias = "Utility", alias = "utility", alias = "custom")]
    Utility,
}

impl TargetKind {
    /// The `TARGETTYPE` derived from the kind of the target, when there's one
    pub fn default_target_type(&self) -> Option<&'static str> {
        match *self {
            TargetKind::Executable => Some("exe"),
            TargetKind::SharedLibrary => Some("dll"),
            TargetKind::StaticLibrary => Some("lib"),
            TargetKind::Utility => None,
        }
    }

    /// Extension of the file generated for a target of this kind
    pub fn descriptor_extension(&self) -> &'static str {
        match *self {
            TargetKind::Utility => "mk",
            _ => "mmp",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match *self {
            TargetKind::Executable => "executable",
            TargetKind::SharedLibrary => "shared library",
            TargetKind::StaticLibrary => "static library",
            TargetKind::Utility => "utility",
        };
        write!(f, "{kind}")
    }
}
