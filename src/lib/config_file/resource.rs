//! Resource declarations of a target

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// [`ResourceAttribute`] - Either a generic resource, compiled from a `.rss`
/// file, or a multi-bitmap file. The `type` key selects the shape
///
/// ```rust
/// use mmpgen::config_file::resource::{BitmapDepth, ResourceAttribute};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[[targets.app.resources]]
///     type = 'bitmap'
///     target = 'app.mbm'
///     target_path = '\resource\apps'
///     sources = [ { depth = 8, file = 'icon.bmp' }, { depth = 'c24', file = 'big.bmp' } ]
/// "#;
///
/// let config: ResourceAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the mmpgen toml file");
///
/// match config {
///     ResourceAttribute::Bitmap { target, header, sources, .. } => {
///         assert_eq!(target, "app.mbm");
///         assert!(!header);
///         assert_eq!(sources[0].depth, BitmapDepth::Numeric(8));
///         assert_eq!(sources[1].depth.to_string(), "c24");
///     }
///     ResourceAttribute::Generic { .. } => panic!("Expected a bitmap resource"),
/// }
/// ```
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum ResourceAttribute<'a> {
    Generic {
        #[serde(borrow)]
        source: Cow<'a, str>,
        #[serde(borrow)]
        target: Option<Cow<'a, str>>,
        #[serde(borrow)]
        target_path: Option<Cow<'a, str>>,
        #[serde(default)]
        header: bool,
        #[serde(borrow)]
        lang: Option<Cow<'a, str>>,
        #[serde(borrow)]
        uid: Option<Cow<'a, str>>,
    },
    Bitmap {
        #[serde(borrow)]
        target: Cow<'a, str>,
        #[serde(borrow)]
        target_path: Option<Cow<'a, str>>,
        #[serde(default)]
        header: bool,
        #[serde(borrow, default)]
        sources: Vec<BitmapSourceAttribute<'a>>,
    },
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BitmapSourceAttribute<'a> {
    #[serde(borrow)]
    pub depth: BitmapDepth<'a>,
    #[serde(borrow)]
    pub file: Cow<'a, str>,
}

/// The colour depth of a bitmap source, written either as a plain number
/// of bits or with the colour prefix of the toolchain (`c12`, `c24`...)
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BitmapDepth<'a> {
    Numeric(u32),
    #[serde(borrow)]
    Named(Cow<'a, str>),
}

impl std::fmt::Display for BitmapDepth<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BitmapDepth::Numeric(bits) => write!(f, "{bits}"),
            BitmapDepth::Named(depth) => write!(f, "{depth}"),
        }
    }
}
