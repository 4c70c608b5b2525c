//! Non-code assets bundled into a Symbian target

use serde::Serialize;
use std::borrow::Cow;
use std::path::PathBuf;

/// A resource declaration. Both shapes share almost nothing, so each
/// one carries its own data
#[derive(Debug, PartialEq, Eq, Serialize, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SymbianResource<'a> {
    Generic(GenericResource<'a>),
    Bitmap(BitmapResource<'a>),
}

/// A resource compiled from a `.rss` file
#[derive(Debug, PartialEq, Eq, Serialize, Clone, Default)]
pub struct GenericResource<'a> {
    pub source: PathBuf,
    pub target: Option<Cow<'a, str>>,
    pub target_path: Option<Cow<'a, str>>,
    pub header: bool,
    pub lang: Option<Cow<'a, str>>,
    pub uid: Option<Cow<'a, str>>,
}

/// A multi-bitmap file assembled from several images
#[derive(Debug, PartialEq, Eq, Serialize, Clone, Default)]
pub struct BitmapResource<'a> {
    pub target: Cow<'a, str>,
    pub target_path: Option<Cow<'a, str>>,
    pub header: bool,
    pub sources: Vec<BitmapSource<'a>>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Clone)]
pub struct BitmapSource<'a> {
    /// Colour depth, as written in the descriptor (`8`, `c12`, ...)
    pub depth: Cow<'a, str>,
    pub file: PathBuf,
}
