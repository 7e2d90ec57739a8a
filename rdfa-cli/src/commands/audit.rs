use super::parse_definition;
use crate::io::{CliWriter, OutputType, Style};
use std::path::Path;

pub fn callback_exec(path: &Path, source: &str, writer: &mut impl CliWriter) -> Result<(), i32> {
    let automaton = parse_definition(path, source, writer)?;
    let findings = automaton.audit();

    if findings.is_empty() {
        writer.writeln(
            Style::success(format!("Done! {} describes a complete DFA.", path.display())),
            OutputType::Standard,
        );
        return Ok(());
    }

    writer.writeln(
        Style::title(format!("{} problems found in {}", findings.len(), path.display())),
        OutputType::Standard,
    );
    for finding in findings {
        writer.writeln(Style::warning(format!("- {}", finding)), OutputType::Standard);
    }

    Err(1)
}
