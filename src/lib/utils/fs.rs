use std::{
    fs::{DirBuilder, File},
    io::Write,
    path::{Component, Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};

pub fn create_file<'a>(path: &Path, filename: &'a str, buff_write: &'a [u8]) -> Result<()> {
    let file_path = path.join(filename);

    File::create(&file_path)
        .with_context(|| format!("Could not create file {file_path:?}"))?
        .write_all(buff_write)
        .with_context(|| format!("Could not write to file {file_path:?}"))
}

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Resolves the absolute path of the project root. Every path written on the
/// descriptors is computed from it
pub fn get_project_root_absolute_path(project_root: &Path) -> Result<PathBuf> {
    project_root
        .canonicalize()
        .with_context(|| format!("Could not resolve the absolute path of {project_root:?}"))
        .map(strip_verbatim_prefix)
}

/// Joins `declared` to `base` and folds the `.` and `..` components, without
/// touching the filesystem. Leading `..` of a relative path are kept
pub fn resolve_declared_path(base: &Path, declared: &str) -> PathBuf {
    normalize_path(&base.join(declared))
}

pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(Component::ParentDir),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

/// `canonicalize` returns verbatim paths (`\\?\C:\...`) on Windows, that
/// other tools don't understand
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    if cfg!(target_os = "windows") {
        let rendered = path.to_string_lossy();
        if let Some(stripped) = rendered.strip_prefix(r"\\?\") {
            return PathBuf::from(stripped);
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_project_root_is_absolute() -> Result<()> {
        let temp = tempdir()?;
        let nested = temp.path().join("a").join("b");
        create_directory(&nested)?;

        let root = get_project_root_absolute_path(&nested.join(".."))?;
        assert!(root.is_absolute());
        assert!(root.ends_with("a"));

        assert!(get_project_root_absolute_path(&temp.path().join("missing")).is_err());

        Ok(())
    }

    #[test]
    fn test_declared_paths_are_normalized() {
        let root = Path::new("/work/proj");

        assert_eq!(resolve_declared_path(root, "../out"), PathBuf::from("/work/out"));
        assert_eq!(resolve_declared_path(root, "./group"), PathBuf::from("/work/proj/group"));
        assert_eq!(
            resolve_declared_path(root, "src/../inc/./x.h"),
            PathBuf::from("/work/proj/inc/x.h")
        );
        assert_eq!(resolve_declared_path(Path::new("/"), "../etc"), PathBuf::from("/etc"));
        assert_eq!(normalize_path(Path::new("../a/../../b")), PathBuf::from("../../b"));
    }
}
