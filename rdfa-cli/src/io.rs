use ansi_term::Color::{Green, Red, Yellow};
use ansi_term::Style as AnsiTermStyle;
use std::io::Result as IoResult;
use std::io::{BufRead, Cursor, StderrLock, StdinLock, StdoutLock, Write};

pub enum OutputType {
    Standard,
    Error,
}

/// Input that reads from stdin, useful for regular CLI use
pub struct RegularInput<'a> {
    pub stdin_lock: StdinLock<'a>,
}

/// Output for writing to stdout/stderr, useful for regular CLI use
pub struct RegularOutput<'a> {
    pub stdout_lock: StdoutLock<'a>,
    pub stderr_lock: StderrLock<'a>,
}

/// Input that reads from a cursor, useful for tests
#[derive(Default)]
pub struct CursorInput {
    cursor: Cursor<Vec<u8>>,
}

impl CursorInput {
    pub fn new(input: &str) -> CursorInput {
        CursorInput {
            cursor: Cursor::new(input.as_bytes().to_owned()),
        }
    }
}

/// Output for writing to cursors, useful for tests
#[derive(Default)]
pub struct CursorOutput {
    pub standard_cursor: Cursor<Vec<u8>>,
    pub error_cursor: Cursor<Vec<u8>>,
}

impl CursorOutput {
    pub fn new() -> CursorOutput {
        CursorOutput {
            standard_cursor: Cursor::new(Vec::new()),
            error_cursor: Cursor::new(Vec::new()),
        }
    }

    pub fn standard_string(&self) -> String {
        String::from_utf8_lossy(self.standard_cursor.get_ref()).into_owned()
    }

    pub fn error_string(&self) -> String {
        String::from_utf8_lossy(self.error_cursor.get_ref()).into_owned()
    }
}

pub trait CliReader {
    /// Reads one line without its line ending, `None` once the input is exhausted.
    fn read_line(&mut self) -> IoResult<Option<String>>;
}

pub trait CliWriter {
    fn write(&mut self, s: impl ToString, output_type: OutputType);
    fn writeln(&mut self, s: impl ToString, output_type: OutputType);
}

#[derive(Clone)]
pub struct Style;

impl Style {
    pub fn title(s: impl ToString) -> String {
        AnsiTermStyle::new()
            .underline()
            .bold()
            .paint(s.to_string())
            .to_string()
    }

    pub fn info(s: impl ToString) -> String {
        AnsiTermStyle::new().paint(s.to_string()).to_string()
    }

    pub fn warning(s: impl ToString) -> String {
        Yellow.normal().paint(s.to_string()).to_string()
    }

    pub fn error(s: impl ToString) -> String {
        Red.normal().paint(s.to_string()).to_string()
    }

    pub fn success(s: impl ToString) -> String {
        Green.normal().paint(s.to_string()).to_string()
    }
}

fn read_line_from_bufread(source: &mut impl BufRead) -> IoResult<Option<String>> {
    let mut line = String::new();
    if source.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

// A closed pipe is no reason to abort a run, the exit code still matters.
fn emit(destination: &mut impl Write, s: &str) {
    if let Err(err) = destination
        .write_all(s.as_bytes())
        .and_then(|_| destination.flush())
    {
        log::error!("could not write output: {}", err);
    }
}

impl<'a> CliReader for RegularInput<'a> {
    fn read_line(&mut self) -> IoResult<Option<String>> {
        read_line_from_bufread(&mut self.stdin_lock)
    }
}

impl<'a> CliWriter for RegularOutput<'a> {
    fn write(&mut self, s: impl ToString, output_type: OutputType) {
        match output_type {
            OutputType::Standard => emit(&mut self.stdout_lock, &s.to_string()),
            OutputType::Error => emit(&mut self.stderr_lock, &s.to_string()),
        }
    }

    fn writeln(&mut self, s: impl ToString, output_type: OutputType) {
        self.write(s.to_string() + "\n", output_type);
    }
}

impl CliReader for CursorInput {
    fn read_line(&mut self) -> IoResult<Option<String>> {
        read_line_from_bufread(&mut self.cursor)
    }
}

impl CliWriter for CursorOutput {
    fn write(&mut self, s: impl ToString, output_type: OutputType) {
        match output_type {
            OutputType::Standard => emit(&mut self.standard_cursor, &s.to_string()),
            OutputType::Error => emit(&mut self.error_cursor, &s.to_string()),
        }
    }

    fn writeln(&mut self, s: impl ToString, output_type: OutputType) {
        self.write(s.to_string() + "\n", output_type);
    }
}
