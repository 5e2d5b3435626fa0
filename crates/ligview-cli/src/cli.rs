use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ligview - inspect PDB ligand structures as atom/bond graphs.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output; errors are still reported on exit
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to config.toml in the platform configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a local PDB file and summarize its atoms and bonds.
    Inspect(InspectArgs),
    /// Download a ligand model by its identifier and summarize it.
    Fetch(FetchArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the input PDB file.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Re-export the parsed structure as a normalized PDB file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Arguments for the `fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Ligand identifier, e.g. ATP or HEM.
    #[arg(required = true, value_name = "LIGAND_ID")]
    pub ligand_id: String,

    /// Save the downloaded file to this path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Override the download URL template; `{id}` is replaced with the ligand identifier.
    #[arg(long, value_name = "TEMPLATE")]
    pub url_template: Option<String>,

    /// Override the request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Output options shared by the commands that print a structure.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// List every atom.
    #[arg(long)]
    pub atoms: bool,

    /// List every bond.
    #[arg(long)]
    pub bonds: bool,

    /// Do not print parse diagnostics.
    #[arg(long)]
    pub no_diagnostics: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S fetch.timeout-seconds=10
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}
