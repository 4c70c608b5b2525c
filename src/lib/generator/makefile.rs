//! Writes the `.mk` stub of an utility target: a makefile whose `bld` phase
//! runs the custom command of the target, while the rest of the phases
//! requested by the toolchain do nothing

use crate::domain::custom_command::CustomCommand;
use crate::generator::error::GenerationError;
use crate::generator::format::{to_host_separators, DescriptorWriter};
use crate::project_model::target::TargetModel;
use crate::utils::constants::mmp::NO_OP_PHASES;

pub fn write_makefile(target: &TargetModel<'_>) -> Result<String, GenerationError> {
    let command = target
        .custom_command
        .as_ref()
        .ok_or_else(|| GenerationError::MissingCustomCommand(target.name.to_string()))?;

    let mut mk = DescriptorWriter::default();
    mk.line("bld:");
    mk.line(&recipe(&target.name, command)?);
    mk.line(NO_OP_PHASES);
    mk.blank_line();

    Ok(mk.into_contents())
}

/// The shell sequence of the `bld` phase. Every command line is separated
/// from the previous segment by `;`. Without a working directory the first
/// command line is not prefixed, so the recipe never starts with a bare `;`
fn recipe(target: &str, command: &CustomCommand<'_>) -> Result<String, GenerationError> {
    let mut segments = Vec::with_capacity(command.command_lines.len() + 1);

    if let Some(dir) = &command.working_directory {
        segments.push(format!("cd {}", to_host_separators(dir)));
    }

    for (index, command_line) in command.command_lines.iter().enumerate() {
        if command_line.is_empty() {
            return Err(GenerationError::EmptyCommandLine {
                target: target.to_string(),
                index,
            });
        }
        segments.push(command_line.join(" "));
    }

    Ok(format!("\t\t{}", segments.join(";")))
}
