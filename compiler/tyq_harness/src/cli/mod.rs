//! Command-line parsing for the `tyq` binary.
//!
//! ```text
//! tyq [FILTER] [--sequential] [--verbose|-v] [--list] [--help|-h]
//! ```

use crate::runner::RunnerConfig;

/// What the binary should do.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Run the matching cases.
    Run(RunnerConfig),
    /// Print the full names of the matching cases.
    List(Option<String>),
    Help,
}

/// Bad command line.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}' (filter already set)")]
    ExtraArgument(String),
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, UsageError> {
    let mut config = RunnerConfig::default();
    let mut list = false;

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--sequential" => config.parallel = false,
            "--verbose" | "-v" => config.verbose = true,
            "--list" => list = true,
            flag if flag.starts_with('-') => {
                return Err(UsageError::UnknownOption(flag.to_owned()));
            }
            filter => {
                if config.filter.is_some() {
                    return Err(UsageError::ExtraArgument(filter.to_owned()));
                }
                config.filter = Some(filter.to_owned());
            }
        }
    }

    if list {
        return Ok(Command::List(config.filter));
    }
    Ok(Command::Run(config))
}

/// Usage text for `--help` and usage errors.
pub const USAGE: &str = "\
Usage: tyq [FILTER] [options]

Runs the type classification and deduction suites. FILTER selects cases
whose `group::name` contains it.

Options:
  --sequential     Run cases on the current thread
  -v, --verbose    Report passing cases with timings
  --list           List matching cases instead of running them
  -h, --help       Show this help

Set RUST_LOG (e.g. RUST_LOG=tyq_harness=debug) for tracing output.";

#[cfg(test)]
mod tests;
