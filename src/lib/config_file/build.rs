//! file that contains the configuration options available
//! within mmpgen to configure where the descriptors are written
use serde::*;
use std::borrow::Cow;

/// [`BuildAttribute`] - Stores generation specific configuration
///
/// * `output_dir` - An string representing a relative to the root path
/// where the generated descriptors are written. It's also the base
/// that every path written on them is relative to.
/// If isn't specified, `mmpgen` will use a `./group` folder
/// by default, as the Symbian toolchain expects
///
/// ```rust
/// use mmpgen::config_file::build::BuildAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[build]
///     output_dir = 'group'
///"#;
///
/// let config: BuildAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the mmpgen toml file");
///
/// assert_eq!(config.output_dir.as_deref(), Some("group"));
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BuildAttribute<'a> {
    #[serde(borrow)]
    pub output_dir: Option<Cow<'a, str>>,
}
