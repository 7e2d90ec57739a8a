use super::parse_definition;
use crate::io::{CliReader, CliWriter, OutputType, Style};
use rdfa::Automaton;
use std::path::Path;

/// Checks one input and tells whether it was accepted.
fn check_input(automaton: &Automaton, input: &str, writer: &mut impl CliWriter) -> bool {
    let by = automaton
        .name()
        .map(|name| format!(" by automaton {}", name))
        .unwrap_or_default();

    match automaton.check(input) {
        Ok(true) => {
            writer.writeln(
                Style::success(format!("String '{}' is accepted{}", input, by)),
                OutputType::Standard,
            );
            true
        }
        Ok(false) => {
            writer.writeln(
                Style::warning(format!("String '{}' is NOT accepted{}", input, by)),
                OutputType::Standard,
            );
            false
        }
        Err(err) => {
            writer.writeln(
                Style::error(format!("String '{}' is NOT accepted{} ({})", input, by, err)),
                OutputType::Standard,
            );
            false
        }
    }
}

pub fn callback_exec(
    matches: &clap::ArgMatches,
    path: &Path,
    source: &str,
    reader: &mut impl CliReader,
    writer: &mut impl CliWriter,
) -> Result<(), i32> {
    let automaton = parse_definition(path, source, writer)?;

    let mut all_accepted = true;
    match matches.get_many::<String>("input") {
        Some(inputs) => {
            for input in inputs {
                all_accepted &= check_input(&automaton, input, writer);
            }
        }
        None => {
            log::info!("no input given, reading from stdin");
            loop {
                let input = match reader.read_line() {
                    Ok(Some(input)) => input,
                    Ok(None) => break,
                    Err(err) => {
                        writer.writeln(
                            Style::error(format!("Woops, I couldn't read the input (reason: {}).", err)),
                            OutputType::Error,
                        );
                        return Err(1);
                    }
                };
                all_accepted &= check_input(&automaton, &input, writer);
            }
        }
    }

    if all_accepted {
        Ok(())
    } else {
        Err(1)
    }
}
