//! The command line interface of mmpgen

use clap::{Parser, Subcommand};

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use mmpgen::cli::input::{CliArgs, Command};
///
/// let parser = CliArgs::parse_from(["", "-v", "generate"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(parser.command, Command::Generate { dry_run: false });
///
/// let parser = CliArgs::parse_from(["", "--targets", "app,sis", "generate", "--dry-run"]);
/// assert_eq!(parser.targets, Some(vec![String::from("app"), String::from("sis")]));
/// assert_eq!(parser.command, Command::Generate { dry_run: true });
///
/// let parser = CliArgs::parse_from(["", "--root", "project", "describe"]);
/// assert_eq!(parser.root.as_deref(), Some("project"));
/// assert_eq!(parser.command, Command::Describe);
///
/// let parser = CliArgs::parse_from(["", "new", "calculator"]);
/// assert_eq!(parser.command, Command::New { name: String::from("calculator") });
/// ```
#[derive(Parser, Debug)]
#[command(name = "mmpgen")]
#[command(author = "Zero Day Code")]
#[command(version = "0.3.0")]
#[command(
    about = "mmpgen generates the Symbian project descriptors of C++ targets",
    long_about = "mmpgen reads the mmpgen*.toml files of a project and writes a .mmp descriptor \
    for every buildable target, and a .mk makefile stub for every utility target"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, help = "mmpgen maximum allowed verbosity level is: '-v'")]
    pub verbose: u8,

    #[arg(short, long, help = "Allows the user to specify the project's root")]
    pub root: Option<String>,

    #[arg(
        short,
        long,
        help = "Only the configuration files whose name contains this value are processed"
    )]
    pub match_files: Option<String>,

    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Generates only the targets in this comma separated list"
    )]
    pub targets: Option<Vec<String>>,
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Writes the descriptor of every target declared on the configuration files
    Generate {
        #[arg(long, help = "Prints the descriptors instead of writing them")]
        dry_run: bool,
    },
    /// Prints the project model resolved from the configuration files, as JSON
    Describe,
    /// Creates a new project with a template configuration file
    New {
        #[arg(help = "Name of the new project")]
        name: String,
    },
}
