use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jcmp_diff::EqualityPolicy;

#[derive(Parser)]
#[command(
    name = "jcmp",
    about = "Structural diff for JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Summary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyArg {
    Serialized,
    Structural,
}

impl From<PolicyArg> for EqualityPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Serialized => EqualityPolicy::Serialized,
            PolicyArg::Structural => EqualityPolicy::Structural,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two JSON documents
    Compare(CompareArgs),
    /// Print the effective settings as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// Left document path, or `-` for stdin
    pub left: String,
    /// Right document path, or `-` for stdin
    pub right: String,
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
    #[arg(long)]
    pub policy: Option<PolicyArg>,
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// Hide unchanged entries
    #[arg(long)]
    pub changes_only: bool,
    #[arg(long)]
    pub no_color: bool,
    /// Exit with status 1 when the documents differ
    #[arg(long)]
    pub exit_code: bool,
}

#[derive(Args)]
pub struct ConfigArgs {}
