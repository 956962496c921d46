#![allow(clippy::module_inception)]
use crate::buildinfo::{BuildInfo, BuildMetadata};
use crate::cli::cli::{Cli, Commands};
use crate::config::Config;
use crate::observability::init_logging;
use clap::Parser;
use std::io;
use std::sync::Arc;
use tracing::debug;

pub mod cli;
pub mod version;

pub use version::{
    register_flags, selection_from_matches, version_command, ReportArgs, VersionCommand,
};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Version(args) => {
            let config = Config::create(args.set_version)?;
            if !cli.quiet {
                init_logging(cli.verbose, config.log_level.as_deref());
            }
            debug!(version = ?config.version, "resolved version override");
            let info = BuildInfo::new(
                BuildMetadata::embedded(),
                config.version.unwrap_or_default(),
            );
            VersionCommand::new(Arc::new(info), io::stdout().lock()).exec(&args.report.flags)?;
        }
        Commands::Default(args) => {
            if !cli.quiet {
                init_logging(cli.verbose, None);
            }
            VersionCommand::with_defaults(io::stdout().lock()).exec(&args.flags)?;
        }
    }

    Ok(())
}
