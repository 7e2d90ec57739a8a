extern crate rdfa_cli;

use rdfa_cli::io::{RegularInput, RegularOutput};
use std::path::PathBuf;

const RDFA_FILE_ENV_VAR: &'static str = "RDFA_FILE";

fn get_definition_file_path() -> Option<PathBuf> {
    std::env::var_os(RDFA_FILE_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn main() {
    let args = std::env::args().collect::<Vec<String>>();
    let args_refs = args.iter().map(|s| s.as_str()).collect::<Vec<&str>>();

    let definition_file = get_definition_file_path();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    std::process::exit(rdfa_cli::main_with_args(
        args_refs.as_slice(),
        &mut RegularInput {
            stdin_lock: stdin.lock(),
        },
        &mut RegularOutput {
            stdout_lock: stdout.lock(),
            stderr_lock: stderr.lock(),
        },
        definition_file.as_deref(),
    ));
}
