pub mod resources;

use crate::utils;
use crate::utils::constants::dir_names;
use color_eyre::eyre::{bail, Context};
use color_eyre::Result;
use std::path::Path;

/// Generates a new Symbian C++ project with an structure that a default
/// mmpgen configuration file is able to describe.
///
/// Base template for the project files and folders:
///    - ./mmpgen.toml
///    - ./src
///       - main.cpp
///    - ./inc
///       - app.h
///    - ./data
///       - <project_name>.rss
///    - ./group
///
/// The `group` folder is where the descriptors are generated, as the Symbian
/// toolchain expects them
pub fn create_templated_project(base_path: &Path, project_name: &str) -> Result<()> {
    check_project_name(project_name)?;

    let project_root = base_path.join(project_name);

    let path_src = project_root.join(dir_names::SOURCES);
    let path_inc = project_root.join(dir_names::INCLUDES);
    let path_data = project_root.join(dir_names::DATA);
    let path_group = project_root.join(dir_names::DEFAULT_OUTPUT_DIR);

    check_project_root_available(&project_root)?;

    utils::fs::create_directory(&project_root)?;
    utils::fs::create_directory(&path_src)?;
    utils::fs::create_directory(&path_inc)?;
    utils::fs::create_directory(&path_data)?;
    utils::fs::create_directory(&path_group)?;

    utils::fs::create_file(&path_src, "main.cpp", resources::MAIN.as_bytes())?;
    utils::fs::create_file(&path_inc, "app.h", resources::HEADER.as_bytes())?;
    utils::fs::create_file(
        &path_data,
        &format!("{project_name}.rss"),
        resources::RESOURCE.as_bytes(),
    )?;

    let template = resources::CONFIG_FILE.replace("<project_name>", project_name);
    utils::fs::create_file(
        &project_root,
        &format!(
            "{}.{}",
            utils::constants::CONFIG_FILE_NAME,
            utils::constants::CONFIG_FILE_EXT
        ),
        template.as_bytes(),
    )?;

    log::info!("Created the new project {project_name} at {project_root:?}");
    Ok(())
}

/// The name of the project becomes the key of its targets on the configuration file
fn check_project_name(project_name: &str) -> Result<()> {
    let valid = !project_name.is_empty()
        && project_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if !valid {
        bail!("Invalid project name {project_name:?}. Only ASCII letters, digits, '_' and '-' are allowed")
    }
    Ok(())
}

fn check_project_root_available(project_root: &Path) -> Result<()> {
    if !project_root.exists() {
        // if it doesn't exist, there is nothing that would be overwritten
        return Ok(());
    }

    if !is_empty_directory(project_root)? {
        bail!("Directory {project_root:?} is not empty")
    }

    Ok(())
}

fn is_empty_directory(path: &Path) -> Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }

    let is_empty = path
        .read_dir()
        .with_context(|| format!("Directory {path:?} is not readable"))?
        .next()
        .is_none();

    Ok(is_empty)
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_create_if_root_not_empty() -> Result<()> {
        let temp = tempdir()?;

        const PROJECT_NAME: &str = "example";

        let project_path = temp.path().join(PROJECT_NAME);
        let dummy_path = project_path.join("dummy.txt");

        std::fs::create_dir(project_path)?;
        std::fs::File::create(dummy_path)?;

        let result = create_templated_project(temp.path(), PROJECT_NAME);
        assert!(
            result.is_err(),
            "The project was created, even though the project root is not empty"
        );

        Ok(())
    }

    #[test]
    fn test_template_layout() -> Result<()> {
        let temp = tempdir()?;
        create_templated_project(temp.path(), "hello")?;

        let root = temp.path().join("hello");
        assert!(root.join("mmpgen.toml").is_file());
        assert!(root.join("src").join("main.cpp").is_file());
        assert!(root.join("inc").join("app.h").is_file());
        assert!(root.join("data").join("hello.rss").is_file());
        assert!(root.join("group").is_dir());

        Ok(())
    }

    #[test]
    fn test_invalid_project_names() {
        let temp = tempdir().unwrap();
        for name in ["", "my app", "a.b", "x]y"] {
            assert!(create_templated_project(temp.path(), name).is_err());
        }
    }
}
