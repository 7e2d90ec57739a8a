pub mod prelude {
    extern crate rdfa_cli;
    extern crate tempfile;

    pub use self::rdfa_cli::io::{CursorInput, CursorOutput};
    pub use self::rdfa_cli::main_with_args;
    use self::tempfile::NamedTempFile;
    use std::io::Write;

    pub const ENDS_WITH_ONE: &str = "s1,s2;0,1;s1,0,s1|s1,1,s2|s2,0,s1|s2,1,s2;s1;s2";

    /// Writes `content` to a temporary file, removed when the handle is dropped.
    pub fn definition_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn file_arg(file: &NamedTempFile) -> String {
        file.path().to_str().unwrap().to_string()
    }
}
