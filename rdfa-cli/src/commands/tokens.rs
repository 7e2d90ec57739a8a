use crate::io::{CliWriter, OutputType, Style};
use rdfa::{TokenKind, Tokenizer};

pub fn callback_exec(
    matches: &clap::ArgMatches,
    source: &str,
    writer: &mut impl CliWriter,
) -> Result<(), i32> {
    let tokens = Tokenizer::new(source).tokenize_all();
    let illegal = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Illegal)
        .count();

    if matches.get_flag("json") {
        let json = serde_json::to_string_pretty(&tokens).map_err(|err| {
            writer.writeln(
                Style::error(format!("Woops, I couldn't serialize the tokens (reason: {}).", err)),
                OutputType::Error,
            );
            1
        })?;
        writer.writeln(json, OutputType::Standard);
    } else {
        for token in &tokens {
            let line = format!(
                "{:<10} {:<6} {}",
                format!("{:?}", token.kind),
                token.literal,
                token.position
            );
            if token.kind == TokenKind::Illegal {
                writer.writeln(Style::error(line), OutputType::Standard);
            } else {
                writer.writeln(Style::info(line), OutputType::Standard);
            }
        }
    }

    if illegal > 0 {
        writer.writeln(
            Style::error(format!("Found {} illegal characters", illegal)),
            OutputType::Error,
        );
        return Err(1);
    }

    Ok(())
}
