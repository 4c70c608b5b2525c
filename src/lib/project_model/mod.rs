pub mod build;
pub mod project;
pub mod sourceset;
pub mod target;

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::target::TargetIdentifier;

use self::{build::BuildModel, project::ProjectModel, target::TargetModel};

/// The read only data of a mmpgen configuration file, once resolved against
/// the project root: the data consumed by the generator
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct MmpModel<'a> {
    pub project: ProjectModel<'a>,
    pub build: BuildModel,
    /// The variable scope where the per target overrides
    /// (`<target>_SYMBIAN_<OPTION>`) are looked up
    pub definitions: IndexMap<Cow<'a, str>, Cow<'a, str>>,
    pub targets: IndexMap<TargetIdentifier<'a>, TargetModel<'a>>,
}

impl<'a> MmpModel<'a> {
    pub fn definition(&self, name: &str) -> Option<&str> {
        self.definitions.get(name).map(|value| value.as_ref())
    }

    /// The targets that will be generated on the current iteration, in declaration order
    pub fn enabled_targets(&self) -> impl Iterator<Item = &TargetModel<'a>> {
        self.targets
            .values()
            .filter(|target| target.enabled_for_current_program_iteration)
    }
}
