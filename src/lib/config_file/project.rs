//! Metadata about the user's project
use serde::*;
use std::borrow::Cow;

/// [`ProjectAttribute`] - Metadata about the user's project
/// * `name` - The project's name
/// * `header_extensions` - The extensions of the files that are never compiled
/// by themselves. Sources with one of them are left out of the descriptors
/// * `compile_definitions` - Preprocessor macros applied to every target
/// * `include_dirs` - Directories declared as `SYSTEMINCLUDE` on every descriptor
///
/// ### Tests
///
/// ```rust
/// use mmpgen::config_file::project::ProjectAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[project]
///     name = 'calculator'
///     header_extensions = [ 'h', 'hrh' ]
///     compile_definitions = [ 'A=1', 'B=2' ]
///     include_dirs = [ 'inc' ]
///"#;
///
/// let config: ProjectAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the mmpgen toml file");
///
/// assert_eq!(config.name, "calculator");
/// assert_eq!(config.header_extensions, Some(vec!["h".into(), "hrh".into()]));
/// assert_eq!(config.compile_definitions, Some(vec!["A=1".into(), "B=2".into()]));
/// assert_eq!(config.include_dirs, Some(vec!["inc".into()]));
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the configuration file.
///
/// For a test over a real example, please look at the
/// [`mmpgen::config_file::MmpConfigFile`] doc-test
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectAttribute<'a> {
    #[serde(borrow)]
    pub name: Cow<'a, str>,
    #[serde(borrow)]
    pub header_extensions: Option<Vec<Cow<'a, str>>>,
    #[serde(borrow)]
    pub compile_definitions: Option<Vec<Cow<'a, str>>>,
    #[serde(borrow)]
    pub include_dirs: Option<Vec<Cow<'a, str>>>,
}
