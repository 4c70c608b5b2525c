pub mod cli;
pub mod config_file;
pub mod domain;
pub mod generator;
pub mod project_model;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::path::{Path, PathBuf};
    use std::{fs, time::Instant};

    use color_eyre::{eyre::Context, Result};

    use crate::config_file::{self, MmpConfigFile};
    use crate::generator::{self, GenerationContext};
    use crate::project_model::MmpModel;
    use crate::utils::constants::error_messages;
    use crate::{
        cli::input::{CliArgs, Command},
        utils::{
            self,
            reader::{find_config_files, ConfigFile},
            template::create_templated_project,
        },
    };

    /// The main work of the project. Runs the tasks
    /// inputted in the CLI
    pub fn run_mmpgen(cli_args: &CliArgs, base_path: &Path) -> Result<()> {
        // If this run is just for create a new project by template, create it and exit
        if let Command::New { ref name } = cli_args.command {
            return create_templated_project(base_path, name);
        };

        let abs_project_root = determine_absolute_path_of_the_project_root(cli_args, base_path)?;
        let config_files: Vec<ConfigFile> =
            find_config_files(&abs_project_root, &cli_args.match_files)?;

        let mut raw_files = Vec::with_capacity(config_files.len());
        for config_file in config_files {
            let raw_file = fs::read_to_string(&config_file.path).with_context(|| {
                format!("{}: {:?}", error_messages::READ_CFG_FILE, config_file.path)
            })?;
            raw_files.push((config_file.path, raw_file));
        }

        let mut configs = Vec::with_capacity(raw_files.len());
        for (cfg_path, raw_file) in &raw_files {
            let config: MmpConfigFile<'_> = config_file::mmp_cfg_from_file(raw_file.as_str())
                .with_context(|| format!("{}: {:?}", error_messages::PARSE_CFG_FILE, cfg_path))?;
            configs.push((cfg_path, config));
        }

        // The filter spans every configuration file, so it's checked before any work is done
        let declared_targets: Vec<&str> = configs
            .iter()
            .flat_map(|(_, config)| config.targets.keys().map(|name| &**name))
            .collect();
        utils::reader::check_cli_targets_filter(&declared_targets, cli_args)?;

        for (cfg_path, config) in configs {
            log::debug!(
                "Launching a mmpgen work event for the configuration file: {:?}",
                cfg_path,
            );

            // Every path declared on a configuration file is relative to the directory where it lives
            let cfg_root = cfg_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| abs_project_root.clone());

            let program_data: MmpModel<'_> =
                utils::reader::build_model(config, cli_args, &cfg_root)
                    .with_context(|| error_messages::PROJECT_MODEL_MAPPING)?;

            perform_main_work(cli_args, &program_data)
                .with_context(|| format!("Failed to complete the job for: {:?}", cfg_path))?;
        }

        Ok(())
    }

    fn perform_main_work(cli_args: &CliArgs, program_data: &MmpModel<'_>) -> Result<()> {
        match cli_args.command {
            Command::Generate { dry_run: false } => {
                let generation_ts = Instant::now();
                let ctx = GenerationContext::from_model(program_data);
                let written = generator::generate_descriptors(program_data.enabled_targets(), &ctx)
                    .with_context(|| error_messages::FAILURE_GENERATING_DESCRIPTORS)?;

                log::debug!(
                    "mmpgen took a total of {:?} ms on generating {} descriptors",
                    generation_ts.elapsed().as_millis(),
                    written.len()
                );
                Ok(())
            }
            Command::Generate { dry_run: true } => {
                let ctx = GenerationContext::from_model(program_data);
                for target in program_data.enabled_targets() {
                    let descriptor = generator::render_target(target, &ctx)
                        .with_context(|| error_messages::FAILURE_GENERATING_DESCRIPTORS)?;
                    println!(
                        "# {:?}\n{}",
                        target.output_dir.join(&descriptor.file_name),
                        descriptor.contents
                    );
                }
                Ok(())
            }
            Command::Describe => {
                println!("{}", describe_model(program_data)?);
                Ok(())
            }
            Command::New { .. } => Ok(()),
        }
    }

    /// The resolved model as pretty printed JSON
    pub fn describe_model(program_data: &MmpModel<'_>) -> Result<String> {
        serde_json::to_string_pretty(program_data)
            .with_context(|| error_messages::FAILURE_SERIALIZING_MODEL)
    }

    /// Resolves the full path of the location of the project's root on the fs. If the `--root`
    /// [`CliArgs`] arg is present, it will be used as the project root path (relative to the
    /// *base_path*), otherwise, we will assume that the project root is exactly the *base_path*
    fn determine_absolute_path_of_the_project_root(
        cli_args: &CliArgs,
        base_path: &Path,
    ) -> Result<PathBuf> {
        let project_root = cli_args
            .root
            .as_deref()
            .map(|root| base_path.join(root))
            .unwrap_or_else(|| base_path.to_path_buf());

        utils::fs::get_project_root_absolute_path(&project_root)
            .with_context(|| error_messages::FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH)
    }

}
