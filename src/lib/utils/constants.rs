//! Constant value definitions to use across the whole program

/// The names of the `mmpgen` specific directories, not their paths
pub mod dir_names {
    pub const DEFAULT_OUTPUT_DIR: &str = "group";
    pub const SOURCES: &str = "src";
    pub const INCLUDES: &str = "inc";
    pub const DATA: &str = "data";
}

/// Well-known names of the target properties
pub mod properties {
    pub const COMPILE_DEFINITIONS: &str = "COMPILE_DEFINITIONS";
    /// The infix of the per target platform overrides: `<target>_SYMBIAN_<OPTION>`
    pub const SYMBIAN_OVERRIDE_INFIX: &str = "_SYMBIAN_";
    pub const TARGETTYPE: &str = "TARGETTYPE";
}

/// The grammar of the generated descriptors
pub mod mmp {
    /// The column where the values of the keywords begin
    pub const COLUMN_WIDTH: usize = 20;
    pub const INDENT: &str = "  ";
    pub const LIBRARY_SUFFIX: &str = ".lib";
    pub const LIST_SEPARATOR: char = ';';

    /// Options looked up as `<target>_SYMBIAN_<OPTION>`, in emission order
    pub const GENERIC_OPTIONS: [&str; 6] = [
        "UID",
        "SECUREID",
        "VENDORID",
        "EPOCSTACKSIZE",
        "EPOCHEAPSIZE",
        "CAPABILITY",
    ];

    /// The phases of the toolchain that don't do anything for an utility target
    pub const NO_OP_PHASES: &str =
        "makmake freeze lib cleanlib clean final resource savespace releaseables:";
}

pub mod debug_messages {
    pub const MAPPING_CFG_TO_MODEL: &str =
        "Proceeding to map the configuration file to the MmpModel entity";
}

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const PROJECT_MODEL_MAPPING: &str = "Error building the project model";
    pub const FAILURE_GENERATING_DESCRIPTORS: &str =
        "Failed to generate the descriptors for the project";
    pub const FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH: &str =
        "An unexpected error happened while resolving the absolute path to the project root";
    pub const FAILURE_SERIALIZING_MODEL: &str = "Unable to serialize the project model";
    pub const UNKNOWN_TARGET_ON_CLI_FILTER: &str =
        "The target requested from the command line isn't declared on any configuration file";
}

pub const CONFIG_FILE_NAME: &str = "mmpgen";
pub const CONFIG_FILE_EXT: &str = "toml";

/// Extensions of the files that are never compiled on their own, when the
/// configuration doesn't declare its owns
pub const DEFAULT_HEADER_EXTENSIONS: [&str; 8] = ["h", "hh", "h++", "hm", "hpp", "hxx", "in", "txx"];
