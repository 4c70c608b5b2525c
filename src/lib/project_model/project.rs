use std::borrow::Cow;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ProjectModel<'a> {
    pub name: Cow<'a, str>,
    pub header_extensions: Vec<Cow<'a, str>>,
    /// The project wide macros, as a `;` separated list
    pub compile_definitions: Option<Cow<'a, str>>,
    pub include_dirs: Vec<PathBuf>,
}

impl<'a> ProjectModel<'a> {
    /// Whether the given extension belongs to the header files ones
    pub fn is_header_extension(&self, extension: &str) -> bool {
        self.header_extensions.iter().any(|ext| ext == extension)
    }
}
