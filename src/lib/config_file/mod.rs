//! root file for the crate where the datastructures that holds the TOML
//! parsed data lives.
pub mod build;
pub mod project;
pub mod resource;
pub mod target;

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use self::{build::BuildAttribute, project::ProjectAttribute, target::TargetAttribute};

/// ```rust
/// use mmpgen::config_file::{self, MmpConfigFile, target::TargetAttribute};
/// use mmpgen::domain::target::TargetKind;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [project]
///     name = 'calculator'
///     compile_definitions = [ 'NDEBUG' ]
///
///     [definitions]
///     calculator_SYMBIAN_VENDORID = '0'
///
///     [targets.calculator]
///     sources = [ 'main.cpp' ]
///     libraries = [ { name = 'euser', kind = 'import' } ]
///
///     [targets.calculator.symbian]
///     uid = '0x100039CE 0xE1234567'
///
///     [targets.engine]
///     sources = [ 'engine.cpp' ]
///     kind = 'static_library'
/// "#;
///
/// let config: MmpConfigFile = config_file::mmp_cfg_from_file(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the mmpgen toml file");
///
/// assert_eq!(config.project.name, "calculator");
/// assert_eq!(config.definitions.get("calculator_SYMBIAN_VENDORID").unwrap(), "0");
///
/// let names: Vec<&str> = config.targets.keys().map(|k| k.as_ref()).collect();
/// assert_eq!(names, vec!["calculator", "engine"]);
///
/// let calculator: &TargetAttribute<'_> = config.targets.get("calculator")
///     .expect("Target named 'calculator' not found on the configuration");
/// assert!(calculator.sources.contains(&"main.cpp".into()));
/// assert!(calculator.kind.unwrap_or_default().eq(&TargetKind::Executable));
/// assert_eq!(calculator.libraries.len(), 1);
/// assert!(calculator.symbian.as_ref().unwrap().contains_key("uid"));
///
/// let engine: &TargetAttribute<'_> = config.targets.get("engine").unwrap();
/// assert!(engine.kind.unwrap_or_default().eq(&TargetKind::StaticLibrary));
/// assert!(engine.libraries.is_empty());
/// ```
/// The [`MmpConfigFile`] is the type that holds
/// the whole hierarchy of mmpgen config file attributes
/// and properties
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MmpConfigFile<'a> {
    #[serde(borrow)]
    pub project: ProjectAttribute<'a>,
    #[serde(borrow)]
    pub build: Option<BuildAttribute<'a>>,
    #[serde(borrow, default)]
    pub definitions: IndexMap<Cow<'a, str>, Cow<'a, str>>,
    #[serde(borrow, default)]
    pub targets: IndexMap<Cow<'a, str>, TargetAttribute<'a>>,
}

pub fn mmp_cfg_from_file(cfg: &'_ str) -> Result<MmpConfigFile<'_>, toml::de::Error> {
    <MmpConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}
