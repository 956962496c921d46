use crate::cli::version::ReportArgs;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "verinfo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Report build and version metadata"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Disable logging entirely
    #[arg(short, long, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show version information (honours VERINFO_VERSION and config.toml)
    Version(VersionCmdArgs),
    /// Show version information from embedded build metadata only
    Default(ReportArgs),
}

#[derive(Args)]
pub struct VersionCmdArgs {
    /// Report this version number instead of the resolved one
    #[arg(long, value_name = "VERSION")]
    pub set_version: Option<String>,
    #[command(flatten)]
    pub report: ReportArgs,
}
