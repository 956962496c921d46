use crate::buildinfo::{BuildInfo, VersionInfo};
use crate::report::{write_report, Flag, ReportError, SelectionFlags};
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Args, Command, FromArgMatches};
use std::io::Write;
use std::sync::Arc;

fn help(flag: Flag) -> &'static str {
    match flag {
        Flag::All => "Print all information",
        Flag::Number => "Print the version number",
        Flag::Revision => "Print the commit revision identifier",
        Flag::Time => "Print the commit time",
        Flag::Modified => "Print whether the source tree had local modifications",
        Flag::GoVersion => "Print the compiler toolchain version",
        Flag::Json => "Print information as JSON",
    }
}

/// Registers the report flags (`--all/-a` ... `--json`) on `cmd`.
pub fn register_flags(cmd: Command) -> Command {
    Flag::EVERY.into_iter().fold(cmd, |cmd, flag| {
        let mut arg = Arg::new(flag.name())
            .long(flag.name())
            .action(ArgAction::SetTrue)
            .overrides_with(flag.name())
            .help(help(flag));
        if let Some(c) = flag.short() {
            arg = arg.short(c);
        }
        cmd.arg(arg)
    })
}

/// Standalone clap command named `name` carrying the report flags.
pub fn version_command(name: &'static str) -> Command {
    register_flags(Command::new(name).about("Show version information"))
}

/// Flags that were given on the command line, as opposed to defaulted.
///
/// `matches` must come from a command that went through [`register_flags`].
pub fn selection_from_matches(matches: &ArgMatches) -> SelectionFlags {
    Flag::EVERY
        .into_iter()
        .filter(|f| matches.value_source(f.name()) == Some(ValueSource::CommandLine))
        .collect()
}

/// Report flags as a clap argument group; flatten into any derive-based command.
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    pub flags: SelectionFlags,
}

impl FromArgMatches for ReportArgs {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        Ok(Self {
            flags: selection_from_matches(matches),
        })
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        self.flags = selection_from_matches(matches);
        Ok(())
    }
}

impl Args for ReportArgs {
    fn augment_args(cmd: Command) -> Command {
        register_flags(cmd)
    }

    fn augment_args_for_update(cmd: Command) -> Command {
        register_flags(cmd)
    }
}

/// Writes version reports for one [`VersionInfo`] to one output sink.
pub struct VersionCommand<W: Write> {
    info: Arc<dyn VersionInfo>,
    out: W,
}

impl<W: Write> VersionCommand<W> {
    pub fn new(info: Arc<dyn VersionInfo>, out: W) -> Self {
        Self { info, out }
    }

    /// Command over this binary's embedded build metadata, without an
    /// explicit version number.
    pub fn with_defaults(out: W) -> Self {
        Self::new(Arc::new(BuildInfo::embedded()), out)
    }

    pub fn exec(&mut self, flags: &SelectionFlags) -> Result<(), ReportError> {
        write_report(&mut self.out, self.info.as_ref(), flags)
    }

    /// Runs with matches produced by [`version_command`] or any command
    /// passed through [`register_flags`].
    pub fn exec_matches(&mut self, matches: &ArgMatches) -> Result<(), ReportError> {
        self.exec(&selection_from_matches(matches))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
