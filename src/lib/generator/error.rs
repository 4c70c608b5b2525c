use std::path::PathBuf;

use thiserror::Error;

use crate::domain::target::TargetKind;

/// The reasons why the descriptor of a target can't be generated
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(
        "Unable to determine the TARGETTYPE of the {kind} target `{target}`. \
        Declare `{target}_SYMBIAN_TARGETTYPE` to provide one"
    )]
    UnresolvedTargetType { target: String, kind: TargetKind },
    #[error("The utility target `{0}` doesn't declare a custom command to run")]
    MissingCustomCommand(String),
    #[error("The command line #{index} of the utility target `{target}` is empty")]
    EmptyCommandLine { target: String, index: usize },
    #[error("Could not write the descriptor {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
