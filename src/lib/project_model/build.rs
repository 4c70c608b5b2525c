use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct BuildModel {
    pub output_dir: PathBuf,
}
