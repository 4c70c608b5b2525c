use crate::cli::input::CliArgs;
use crate::config_file::resource::ResourceAttribute;
use crate::config_file::target::{CustomCommandAttribute, TargetAttribute};
use crate::config_file::{build::BuildAttribute, project::ProjectAttribute, MmpConfigFile};
use crate::domain::custom_command::CustomCommand;
use crate::domain::library::LinkLibrary;
use crate::domain::resource::{BitmapResource, BitmapSource, GenericResource, SymbianResource};
use crate::domain::target::{TargetIdentifier, TargetKind};
use crate::project_model::{
    build::BuildModel,
    project::ProjectModel,
    sourceset::{Source, SourceSet},
    target::TargetModel,
    MmpModel,
};
use crate::utils::constants::{
    debug_messages, dir_names, error_messages, properties, CONFIG_FILE_EXT, CONFIG_FILE_NAME,
    DEFAULT_HEADER_EXTENSIONS,
};
use crate::utils::fs::resolve_declared_path;
use color_eyre::eyre::{bail, eyre, Context};
use color_eyre::Result;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Details about a found configuration file on the project
///
/// This is just a configuration file with a valid name found
/// at a valid path in some subdirectory
#[derive(Debug)]
pub struct ConfigFile {
    pub path: PathBuf,
}

/// Checks for the existence of the `mmpgen_<any>.toml` configuration files
/// present under the project root, and returns a collection of the ones found.
///
/// *base_path* - The root of the project. Files are searched until two
/// levels of depth.
/// *filename_match* - When present, only the files whose name contains it
/// are selected
///
/// This function fails if there's no configuration file
/// (or isn't present in any directory of the project)
pub fn find_config_files(
    base_path: &Path,
    filename_match: &Option<String>,
) -> Result<Vec<ConfigFile>> {
    log::debug!("Searching for mmpgen configuration files...");
    let mut files = vec![];

    for e in WalkDir::new(base_path)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let Some(filename) = e.file_name().to_str() else {
            continue;
        };
        let file_match = filename_match.as_deref().unwrap_or(filename);

        if e.file_type().is_file()
            && filename.starts_with(CONFIG_FILE_NAME)
            && filename.ends_with(&format!(".{CONFIG_FILE_EXT}"))
            && filename.contains(file_match)
        {
            log::debug!("Found the configuration file: {:?}", e.path());
            files.push(ConfigFile {
                path: e.path().to_path_buf(),
            })
        }
    }

    if files.is_empty() {
        Err(eyre!("No configuration files found for the project"))
    } else {
        Ok(files)
    }
}

pub fn build_model<'a>(
    config: MmpConfigFile<'a>,
    cli_args: &CliArgs,
    absolute_project_root: &Path,
) -> Result<MmpModel<'a>> {
    log::debug!("{}", debug_messages::MAPPING_CFG_TO_MODEL);

    let project = assemble_project_model(config.project, absolute_project_root);
    let build = assemble_build_model(config.build, absolute_project_root);

    let mut definitions = config.definitions;
    let mut targets = IndexMap::with_capacity(config.targets.len());

    for (name, target_config) in config.targets {
        let target = assemble_target_model(
            name.clone(),
            target_config,
            &build,
            &mut definitions,
            absolute_project_root,
        )
        .with_context(|| format!("{}: {name}", error_messages::PROJECT_MODEL_MAPPING))?;
        targets.insert(TargetIdentifier(name), target);
    }

    let mut model = MmpModel {
        project,
        build,
        definitions,
        targets,
    };
    enable_targets_from_cli(&mut model, cli_args);

    Ok(model)
}

fn assemble_project_model<'a>(config: ProjectAttribute<'a>, project_root: &Path) -> ProjectModel<'a> {
    let header_extensions = config.header_extensions.unwrap_or_else(|| {
        DEFAULT_HEADER_EXTENSIONS
            .iter()
            .map(|ext| Cow::Borrowed(*ext))
            .collect()
    });

    let include_dirs = config
        .include_dirs
        .unwrap_or_default()
        .iter()
        .map(|dir| resolve_declared_path(project_root, dir))
        .collect();

    ProjectModel {
        name: config.name,
        header_extensions,
        compile_definitions: config.compile_definitions.map(join_list),
        include_dirs,
    }
}

fn assemble_build_model(config: Option<BuildAttribute>, project_root: &Path) -> BuildModel {
    let output_dir = config
        .as_ref()
        .and_then(|build| build.output_dir.as_deref())
        .unwrap_or(dir_names::DEFAULT_OUTPUT_DIR);

    BuildModel {
        output_dir: resolve_declared_path(project_root, output_dir),
    }
}

fn assemble_target_model<'a>(
    name: Cow<'a, str>,
    config: TargetAttribute<'a>,
    build: &BuildModel,
    definitions: &mut IndexMap<Cow<'a, str>, Cow<'a, str>>,
    project_root: &Path,
) -> Result<TargetModel<'a>> {
    let kind = config.kind.unwrap_or_default();
    let output_dir = config
        .output_dir
        .map(|dir| resolve_declared_path(project_root, &dir))
        .unwrap_or_else(|| build.output_dir.clone());

    let mut target = TargetModel::new(name, kind, output_dir);
    target.sources = get_sourceset_for(&config.sources, project_root)?;

    target.libraries = config
        .libraries
        .into_iter()
        .map(|lib| LinkLibrary::new(lib.name, lib.kind.unwrap_or_default()))
        .collect();

    target.resources = config
        .resources
        .into_iter()
        .map(|res| assemble_resource(res, project_root))
        .collect();

    if let Some(extra_properties) = config.properties {
        target.properties.extend(extra_properties);
    }
    if let Some(macros) = config.compile_definitions {
        target
            .properties
            .insert(Cow::Borrowed(properties::COMPILE_DEFINITIONS), join_list(macros));
    }

    // The platform options are published on the definitions scope, where
    // the generator looks for the overrides
    for (option, value) in config.symbian.unwrap_or_default() {
        let key = format!(
            "{}{}{}",
            target.name,
            properties::SYMBIAN_OVERRIDE_INFIX,
            option.to_uppercase()
        );
        definitions.insert(Cow::Owned(key), value);
    }

    target.custom_command = config
        .custom_command
        .map(|cmd| assemble_custom_command(cmd, project_root));

    if kind.ne(&TargetKind::Utility) && target.custom_command.is_some() {
        log::warn!(
            "The custom command of the {kind} target {} will be ignored",
            target.name
        );
    }

    Ok(target)
}

fn assemble_resource<'a>(config: ResourceAttribute<'a>, project_root: &Path) -> SymbianResource<'a> {
    match config {
        ResourceAttribute::Generic {
            source,
            target,
            target_path,
            header,
            lang,
            uid,
        } => SymbianResource::Generic(GenericResource {
            source: resolve_declared_path(project_root, &source),
            target,
            target_path,
            header,
            lang,
            uid,
        }),
        ResourceAttribute::Bitmap {
            target,
            target_path,
            header,
            sources,
        } => SymbianResource::Bitmap(BitmapResource {
            target,
            target_path,
            header,
            sources: sources
                .into_iter()
                .map(|src| BitmapSource {
                    depth: Cow::Owned(src.depth.to_string()),
                    file: resolve_declared_path(project_root, &src.file),
                })
                .collect(),
        }),
    }
}

fn assemble_custom_command<'a>(
    config: CustomCommandAttribute<'a>,
    project_root: &Path,
) -> CustomCommand<'a> {
    CustomCommand {
        working_directory: config
            .working_directory
            .map(|dir| resolve_declared_path(project_root, &dir)),
        command_lines: config.command_lines,
    }
}

fn get_sourceset_for(srcs: &[Cow<'_, str>], project_root: &Path) -> Result<SourceSet> {
    let mut paths = Vec::with_capacity(srcs.len());
    for src in srcs {
        let declared = Source::new(src, project_root);
        paths.extend(
            declared
                .paths()
                .with_context(|| format!("Error getting the declared paths for: {src}"))?,
        );
    }

    Ok(paths.into_iter().collect())
}

/// Joins a list of values with the `;` list separator
fn join_list<'a>(values: Vec<Cow<'a, str>>) -> Cow<'a, str> {
    match <[Cow<'a, str>; 1]>::try_from(values) {
        Ok([single]) => single,
        Err(values) => Cow::Owned(values.join(";")),
    }
}

/// Fails when the `--targets` filter names a target that none of the
/// configuration files of the project declares
pub fn check_cli_targets_filter(declared_targets: &[&str], cli_args: &CliArgs) -> Result<()> {
    let Some(filtered_targets) = cli_args.targets.as_ref() else {
        return Ok(());
    };

    for requested in filtered_targets {
        if !declared_targets.contains(&requested.as_str()) {
            bail!(
                "{}: {requested}",
                error_messages::UNKNOWN_TARGET_ON_CLI_FILTER
            );
        }
    }

    Ok(())
}

/// Inspects the [`CliArgs`] to enable or disable the targets for the current iteration
fn enable_targets_from_cli(model: &mut MmpModel<'_>, cli_args: &CliArgs) {
    let Some(filtered_targets) = cli_args.targets.as_ref() else {
        return;
    };

    for (identifier, target) in model.targets.iter_mut() {
        let enabled = filtered_targets.iter().any(|t| t.eq(identifier.name()));
        target.enabled_for_current_program_iteration = enabled;
        log::info!(
            "Target: {identifier} is {} from CLI for this iteration of mmpgen",
            if enabled { "enabled" } else { "disabled" }
        );
    }
}
