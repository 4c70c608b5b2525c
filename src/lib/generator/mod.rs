//! Turns the targets of the [`MmpModel`] into the files consumed by the
//! Symbian toolchain: a `.mmp` project descriptor for every buildable target,
//! and a `.mk` makefile stub for every utility target

pub mod error;
pub mod format;
pub mod makefile;
pub mod mmp;
pub mod resources;

use std::borrow::Cow;
use std::fs::DirBuilder;
use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;

use crate::domain::target::TargetKind;
use crate::project_model::project::ProjectModel;
use crate::project_model::sourceset::SourceFile;
use crate::project_model::target::TargetModel;
use crate::project_model::MmpModel;
use crate::utils::constants::properties::SYMBIAN_OVERRIDE_INFIX;

use self::error::GenerationError;

/// The project wide data that every descriptor reads, besides its own target
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'m> {
    project: &'m ProjectModel<'m>,
    definitions: &'m IndexMap<Cow<'m, str>, Cow<'m, str>>,
}

impl<'m> GenerationContext<'m> {
    pub fn new(
        project: &'m ProjectModel<'m>,
        definitions: &'m IndexMap<Cow<'m, str>, Cow<'m, str>>,
    ) -> Self {
        Self {
            project,
            definitions,
        }
    }

    pub fn from_model(model: &'m MmpModel<'m>) -> Self {
        Self::new(&model.project, &model.definitions)
    }

    /// Looks up the `<target>_SYMBIAN_<option>` definition
    pub fn symbian_override(&self, target: &str, option: &str) -> Option<&'m str> {
        let key = format!("{target}{SYMBIAN_OVERRIDE_INFIX}{option}");
        self.definitions.get(key.as_str()).map(|value| value.as_ref())
    }

    pub fn compile_definitions(&self) -> Option<&'m str> {
        self.project.compile_definitions.as_deref()
    }

    pub fn include_dirs(&self) -> &'m [PathBuf] {
        &self.project.include_dirs
    }

    pub fn is_header(&self, source: &SourceFile) -> bool {
        self.project.is_header_extension(&source.extension)
    }
}

/// A descriptor rendered in memory, not yet written to the filesystem
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GeneratedDescriptor {
    pub file_name: String,
    pub contents: String,
}

impl GeneratedDescriptor {
    /// Writes the descriptor into `output_dir`, replacing any previous one.
    ///
    /// The contents go first to a temporary file on the same directory, which
    /// is renamed over the destination once it's fully written, so a failure
    /// never leaves a half written descriptor behind
    pub fn persist(&self, output_dir: &Path) -> Result<PathBuf, GenerationError> {
        let path = output_dir.join(&self.file_name);
        let io_error = |source: std::io::Error| GenerationError::Io {
            path: path.clone(),
            source,
        };

        DirBuilder::new()
            .recursive(true)
            .create(output_dir)
            .map_err(io_error)?;

        let mut file = NamedTempFile::new_in(output_dir).map_err(io_error)?;
        file.write_all(self.contents.as_bytes()).map_err(io_error)?;
        file.persist(&path).map_err(|err| io_error(err.error))?;

        Ok(path)
    }
}

/// Renders the file of a single target: the `.mmp` descriptor for the buildable
/// ones, the `.mk` stub for the utility ones
pub fn render_target(
    target: &TargetModel<'_>,
    ctx: &GenerationContext<'_>,
) -> Result<GeneratedDescriptor, GenerationError> {
    let contents = match target.kind {
        TargetKind::Utility => makefile::write_makefile(target)?,
        TargetKind::Executable | TargetKind::SharedLibrary | TargetKind::StaticLibrary => {
            mmp::write_mmp(target, ctx)?
        }
    };

    Ok(GeneratedDescriptor {
        file_name: format!("{}.{}", target.name, target.kind.descriptor_extension()),
        contents,
    })
}

/// Generates one file per target, on the output directory of each target.
/// Stops on the first target that fails, returning its error
pub fn generate_descriptors<'t, 'a: 't, I>(
    targets: I,
    ctx: &GenerationContext<'_>,
) -> Result<Vec<PathBuf>, GenerationError>
where
    I: IntoIterator<Item = &'t TargetModel<'a>>,
{
    targets
        .into_iter()
        .map(|target| -> Result<PathBuf, GenerationError> {
            let descriptor = render_target(target, ctx)?;
            let path = descriptor.persist(&target.output_dir)?;
            log::info!(
                "Generated the descriptor of the {} target {} => {:?}",
                target.kind,
                target.name,
                path
            );
            Ok(path)
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use indexmap::IndexMap;
    use tempfile::tempdir;

    use super::test_support::{project, target};
    use super::*;
    use crate::domain::custom_command::CustomCommand;

    #[test]
    fn test_descriptor_names_follow_the_kind() -> Result<()> {
        let project = project(None, vec![]);
        let definitions = IndexMap::new();
        let ctx = GenerationContext::new(&project, &definitions);

        let app = render_target(&target("app", TargetKind::Executable), &ctx)?;
        assert_eq!(app.file_name, "app.mmp");

        let mut sis = target("sis", TargetKind::Utility);
        sis.custom_command = Some(CustomCommand {
            working_directory: None,
            command_lines: vec![vec!["makesis".into()]],
        });
        let sis = render_target(&sis, &ctx)?;
        assert_eq!(sis.file_name, "sis.mk");
        assert!(sis.contents.starts_with("bld:\n"));

        Ok(())
    }

    #[test]
    fn test_every_target_gets_its_own_file() -> Result<()> {
        let temp = tempdir()?;
        let project = project(None, vec![]);
        let definitions = IndexMap::new();
        let ctx = GenerationContext::new(&project, &definitions);

        let out = temp.path().join("group");
        let mut app = target("app", TargetKind::Executable);
        app.output_dir = out.clone();
        let mut engine = target("engine", TargetKind::StaticLibrary);
        engine.output_dir = out.clone();

        let written = generate_descriptors([&app, &engine], &ctx)?;
        assert_eq!(written, vec![out.join("app.mmp"), out.join("engine.mmp")]);

        let contents = std::fs::read_to_string(out.join("engine.mmp"))?;
        assert_eq!(contents, render_target(&engine, &ctx)?.contents);

        // A second pass rewrites the files with the same bytes
        generate_descriptors([&app, &engine], &ctx)?;
        assert_eq!(std::fs::read_to_string(out.join("engine.mmp"))?, contents);

        Ok(())
    }

    #[test]
    fn test_failed_target_leaves_no_file() -> Result<()> {
        let temp = tempdir()?;
        let project = project(None, vec![]);
        let definitions = IndexMap::new();
        let ctx = GenerationContext::new(&project, &definitions);

        let mut sis = target("sis", TargetKind::Utility);
        sis.output_dir = temp.path().to_path_buf();

        let result = generate_descriptors([&sis], &ctx);
        assert!(matches!(result, Err(GenerationError::MissingCustomCommand(_))));
        assert!(!temp.path().join("sis.mk").exists());
        assert_eq!(std::fs::read_dir(temp.path())?.count(), 0);

        Ok(())
    }

    #[test]
    fn test_unwritable_destination_is_reported() -> Result<()> {
        let descriptor = GeneratedDescriptor {
            file_name: String::from("app.mmp"),
            contents: String::from("TARGET"),
        };
        let temp = tempdir()?;
        let blocker = temp.path().join("not_a_dir");
        std::fs::write(&blocker, "")?;

        let result = descriptor.persist(&blocker.join("group"));
        assert!(matches!(result, Err(GenerationError::Io { .. })));

        Ok(())
    }
}
