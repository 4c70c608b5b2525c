use std::path::{Path, PathBuf};

use color_eyre::{eyre::Context, Result};
use serde::Serialize;

use crate::utils::fs::resolve_declared_path;

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize)]
pub struct SourceFile {
    pub path: PathBuf,
    pub extension: String,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, extension }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Glob(GlobPattern),
}

impl Source {
    /// Classifies a declared source, joined to the project root
    pub fn new(declared: &str, project_root: &Path) -> Self {
        let target_src = resolve_declared_path(project_root, declared);
        if declared.contains(['*', '?', '[']) {
            Source::Glob(GlobPattern(target_src))
        } else {
            Source::File(target_src)
        }
    }

    #[inline(always)]
    pub fn paths(&self) -> Result<Vec<PathBuf>> {
        match self {
            Source::File(file) => Ok(vec![file.to_path_buf()]),
            Source::Glob(pattern) => pattern.resolve(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct GlobPattern(pub PathBuf);

impl GlobPattern {
    #[inline(always)]
    fn resolve(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.0.to_string_lossy();
        glob::glob(&pattern)
            .with_context(|| format!("Invalid glob pattern: {pattern}"))?
            .map(|path| path.with_context(|| format!("Unreadable match for: {pattern}")))
            .collect()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize)]
pub struct SourceSet {
    pub sources: Vec<SourceFile>,
}

impl SourceSet {
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.sources.iter()
    }
}

impl FromIterator<PathBuf> for SourceSet {
    fn from_iter<T: IntoIterator<Item = PathBuf>>(iter: T) -> Self {
        Self {
            sources: iter.into_iter().map(SourceFile::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_source_extension() {
        let src = SourceFile::new(PathBuf::from("/project/src/main.cpp"));
        assert_eq!(src.extension, "cpp");

        let no_ext = SourceFile::new(PathBuf::from("/project/Makefile"));
        assert_eq!(no_ext.extension, "");
    }

    #[test]
    fn test_glob_sources_are_resolved_sorted() -> Result<()> {
        let temp = tempdir()?;
        for name in ["b.cpp", "a.cpp", "c.h"] {
            File::create(temp.path().join(name))?;
        }

        let source = Source::new("*.cpp", temp.path());
        assert!(matches!(source, Source::Glob(_)));

        let paths = source.paths()?;
        assert_eq!(
            paths,
            vec![temp.path().join("a.cpp"), temp.path().join("b.cpp")]
        );

        Ok(())
    }

    #[test]
    fn test_parent_components_are_folded() -> Result<()> {
        let source = Source::new("../shared/./util.cpp", Path::new("/work/proj"));
        assert_eq!(source.paths()?, vec![PathBuf::from("/work/shared/util.cpp")]);
        Ok(())
    }

    #[test]
    fn test_plain_sources_do_not_need_to_exist() -> Result<()> {
        let source = Source::new("src/missing.cpp", Path::new("/project"));
        assert_eq!(source.paths()?, vec![PathBuf::from("/project/src/missing.cpp")]);
        Ok(())
    }
}
