//! Type for holds the Targets generation details

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config_file::resource::ResourceAttribute;
use crate::domain::library::LinkKind;
use crate::domain::target::TargetKind;

/// [`TargetAttribute`] - The type for holding the generation details of every
/// user defined target
/// * `kind` - Determines which type of byproduct will be generated (binary, library...)
/// * `sources` - The sources to be included in the compilation of this target. Glob
/// patterns are allowed
/// * `compile_definitions` - Preprocessor macros only visible to this target
/// * `output_dir` - Overrides the `[build]` output directory for this target
/// * `libraries` - The libraries linked against this target
/// * `resources` - Resource and bitmap declarations, in emission order
/// * `symbian` - Platform options. Every key is published as `<target>_SYMBIAN_<KEY>`
/// * `properties` - Free-form target properties
/// * `custom_command` - The command run by an `utility` target
///
/// ### Tests
///
/// ```rust
/// use mmpgen::config_file::target::TargetAttribute;
/// use mmpgen::domain::{library::LinkKind, target::TargetKind};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[targets.engine]
///     kind = 'dll'
///     sources = [ 'src/*.cpp' ]
///     compile_definitions = [ 'ENGINE' ]
///     libraries = [ { name = 'euser.lib', kind = 'import' } ]
/// "#;
///
/// let config: TargetAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the mmpgen toml file");
///
/// assert_eq!(config.kind, Some(TargetKind::SharedLibrary));
/// assert_eq!(config.sources, vec!["src/*.cpp"]);
/// assert_eq!(config.compile_definitions, Some(vec!["ENGINE".into()]));
/// assert_eq!(config.libraries[0].name, "euser.lib");
/// assert_eq!(config.libraries[0].kind, Some(LinkKind::Import));
/// assert!(config.custom_command.is_none());
/// ```
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the configuration file.
///
/// For a test over a real example, please look at the
/// [`mmpgen::config_file::MmpConfigFile`] doc-test
#[derive(Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TargetAttribute<'a> {
    pub kind: Option<TargetKind>,
    #[serde(borrow, default)]
    pub sources: Vec<Cow<'a, str>>,
    #[serde(borrow)]
    pub compile_definitions: Option<Vec<Cow<'a, str>>>,
    #[serde(borrow)]
    pub output_dir: Option<Cow<'a, str>>,
    #[serde(borrow, default)]
    pub libraries: Vec<LibraryAttribute<'a>>,
    #[serde(borrow, default)]
    pub resources: Vec<ResourceAttribute<'a>>,
    #[serde(borrow)]
    pub symbian: Option<IndexMap<Cow<'a, str>, Cow<'a, str>>>,
    #[serde(borrow)]
    pub properties: Option<IndexMap<Cow<'a, str>, Cow<'a, str>>>,
    #[serde(borrow)]
    pub custom_command: Option<CustomCommandAttribute<'a>>,
}

/// [`LibraryAttribute`] - A library linked against the target. When the `kind`
/// isn't specified, the library is linked statically
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryAttribute<'a> {
    #[serde(borrow)]
    pub name: Cow<'a, str>,
    pub kind: Option<LinkKind>,
}

/// [`CustomCommandAttribute`] - What an `utility` target runs
///
/// ```rust
/// use mmpgen::config_file::target::CustomCommandAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[targets.sis.custom_command]
///     working_directory = 'sis'
///     command_lines = [ [ 'makesis', 'app.pkg' ] ]
/// "#;
///
/// let config: CustomCommandAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the mmpgen toml file");
///
/// assert_eq!(config.working_directory.as_deref(), Some("sis"));
/// assert_eq!(config.command_lines, vec![vec!["makesis", "app.pkg"]]);
/// ```
#[derive(Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CustomCommandAttribute<'a> {
    #[serde(borrow)]
    pub working_directory: Option<Cow<'a, str>>,
    #[serde(borrow, default)]
    pub command_lines: Vec<Vec<Cow<'a, str>>>,
}
