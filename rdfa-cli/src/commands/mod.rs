use crate::io::{CliWriter, OutputType, Style};
use rdfa::{Automaton, ParseError, Position};
use std::path::Path;

pub mod audit;
pub mod check;
pub mod tokens;

/// Prints the line of `source` holding `position`, with `size` carets under
/// the offending text. Tabs before the carets are kept so they line up.
fn print_location(source: &str, position: Position, size: usize, writer: &mut impl CliWriter) {
    let line = match source.lines().nth(position.line - 1) {
        Some(line) => line,
        None => return,
    };

    writer.writeln(
        format!("Error at line {}:{}", position.line, position.column),
        OutputType::Error,
    );
    let padding: String = line
        .chars()
        .take(position.column - 1)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    writer.writeln(line, OutputType::Error);
    writer.writeln(
        format!("{}{}", padding, "^".repeat(size.max(1))),
        OutputType::Error,
    );
}

/// Parses the definition, reporting what went wrong and where if it can't.
fn parse_definition(path: &Path, source: &str, writer: &mut impl CliWriter) -> Result<Automaton, i32> {
    rdfa::parse(source).map_err(|err| {
        writer.writeln(
            Style::error(format!(
                "Woops, {} is not a valid automaton (reason: {}).",
                path.display(),
                err
            )),
            OutputType::Error,
        );

        let (literal, position) = match &err {
            ParseError::UnexpectedToken {
                literal, position, ..
            }
            | ParseError::SymbolTooLong { literal, position }
            | ParseError::DuplicateState { literal, position }
            | ParseError::DuplicateSymbol { literal, position }
            | ParseError::Definition {
                literal, position, ..
            } => (literal, *position),
        };
        print_location(source, position, literal.chars().count(), writer);

        1
    })
}
