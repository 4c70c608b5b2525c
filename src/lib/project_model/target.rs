use std::borrow::Cow;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::custom_command::CustomCommand;
use crate::domain::library::LinkLibrary;
use crate::domain::resource::SymbianResource;
use crate::domain::target::TargetKind;
use crate::project_model::sourceset::SourceSet;
use crate::utils::constants::properties;

#[derive(Debug, PartialEq, Eq, Serialize, Clone)]
pub struct TargetModel<'a> {
    pub name: Cow<'a, str>,
    pub kind: TargetKind,
    pub output_dir: PathBuf,
    pub sources: SourceSet,
    pub libraries: Vec<LinkLibrary<'a>>,
    pub resources: Vec<SymbianResource<'a>>,
    pub properties: IndexMap<Cow<'a, str>, Cow<'a, str>>,
    pub custom_command: Option<CustomCommand<'a>>,
    #[serde(skip)]
    pub enabled_for_current_program_iteration: bool,
}

impl<'a> TargetModel<'a> {
    /// Creates an empty model for a target, enabled by default
    pub fn new<N: Into<Cow<'a, str>>>(name: N, kind: TargetKind, output_dir: PathBuf) -> Self {
        Self {
            name: name.into(),
            kind,
            output_dir,
            sources: SourceSet::default(),
            libraries: Vec::default(),
            resources: Vec::default(),
            properties: IndexMap::default(),
            custom_command: None,
            enabled_for_current_program_iteration: true,
        }
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|value| value.as_ref())
    }

    /// The target specific macros, as a `;` separated list
    pub fn compile_definitions(&self) -> Option<&str> {
        self.property(properties::COMPILE_DEFINITIONS)
    }
}
