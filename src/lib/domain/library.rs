//! Libraries linked against a target

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How a library gets linked into the final product
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Default, Copy, Clone)]
pub enum LinkKind {
    #[default]
    #[serde(alias = "static", alias = "Static", alias = "general")]
    Static,
    #[serde(alias = "import", alias = "Import", alias = "dynamic")]
    Import,
}

impl LinkKind {
    /// The MMP keyword that declares a library of this kind
    pub fn keyword(&self) -> &'static str {
        match *self {
            LinkKind::Static => "STATICLIBRARY",
            LinkKind::Import => "LIBRARY",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Clone)]
pub struct LinkLibrary<'a> {
    pub name: Cow<'a, str>,
    pub kind: LinkKind,
}

impl<'a> LinkLibrary<'a> {
    pub fn new<N: Into<Cow<'a, str>>>(name: N, kind: LinkKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
