//! Command line front-end for `rdfa`.
//!
//! Everything goes through [`main_with_args`] so that tests can run the tool
//! with in-memory input and output.

use clap::{Arg, ArgAction, ArgMatches, Command};
use crate::io::{CliReader, CliWriter, OutputType, Style};
use log::LevelFilter;
use std::path::{Path, PathBuf};

mod commands;
pub mod io;

fn command() -> Command {
    Command::new("rdfa")
        .help_expected(true)
        .disable_help_subcommand(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .about("Check strings against deterministic finite automata")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Prints verbose logs, repeat for more")
                .global(true)
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("FILE")
                .help("Automaton definition to use, defaults to the RDFA_FILE environment variable")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .subcommand(
            Command::new("check")
                .about("Checks whether strings are accepted by the automaton")
                .arg(
                    Arg::new("input")
                        .action(ArgAction::Append)
                        .num_args(0..)
                        .help("Strings to check, read line by line from stdin when omitted"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Prints the tokens of the definition")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Prints tokens as a JSON array"),
                ),
        )
        .subcommand(
            Command::new("audit").about("Reports missing and duplicate transitions and states that can not be entered"),
        )
}

fn log_level(verbose: u8) -> LevelFilter {
    if verbose >= 3 {
        LevelFilter::Trace
    } else if verbose >= 2 {
        LevelFilter::Debug
    } else if verbose >= 1 {
        LevelFilter::Info
    } else {
        LevelFilter::Off
    }
}

fn definition_path(matches: &ArgMatches, default_file: Option<&Path>) -> Option<PathBuf> {
    matches
        .get_one::<PathBuf>("file")
        .cloned()
        .or_else(|| default_file.map(Path::to_path_buf))
}

/// Runs the tool and returns the process exit code.
///
/// `default_file` is used when `--file` is not given, `main` fills it from
/// the `RDFA_FILE` environment variable.
pub fn main_with_args(
    args: &[&str],
    reader: &mut impl CliReader,
    writer: &mut impl CliWriter,
    default_file: Option<&Path>,
) -> i32 {
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => {
            let output_type = if err.use_stderr() {
                OutputType::Error
            } else {
                OutputType::Standard
            };
            writer.write(err.render().to_string(), output_type);
            return err.exit_code();
        }
    };

    // Tests call this repeatedly, only the first call installs the logger.
    let _ = env_logger::builder()
        .filter_level(log_level(matches.get_count("verbose")))
        .try_init();

    log::debug!("{:?}", matches);

    let (subcommand, subcommand_matches) = match matches.subcommand() {
        Some(subcommand) => subcommand,
        None => {
            writer.writeln(Style::error("Missing subcommand"), OutputType::Error);
            return 1;
        }
    };

    let path = match definition_path(subcommand_matches, default_file) {
        Some(path) => path,
        None => {
            writer.writeln(
                Style::error("No automaton definition given, use --file or set RDFA_FILE"),
                OutputType::Error,
            );
            return 1;
        }
    };

    log::info!("reading automaton definition from {}", path.display());

    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            writer.writeln(
                Style::error(format!(
                    "Woops, I couldn't read {} (reason: {}).",
                    path.display(),
                    err
                )),
                OutputType::Error,
            );
            return 1;
        }
    };

    let result = match subcommand {
        "check" => commands::check::callback_exec(subcommand_matches, &path, &source, reader, writer),
        "tokens" => commands::tokens::callback_exec(subcommand_matches, &source, writer),
        "audit" => commands::audit::callback_exec(&path, &source, writer),
        _ => {
            writer.writeln(
                Style::error(format!("Unknown subcommand {}", subcommand)),
                OutputType::Error,
            );
            Err(1)
        }
    };

    match result {
        Ok(()) => 0,
        Err(code) => code,
    }
}
