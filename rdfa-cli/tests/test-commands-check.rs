mod helpers;

use helpers::prelude::*;

#[test]
fn test_command_check() {
    let file = definition_file(ENDS_WITH_ONE);
    let path = file_arg(&file);

    let mut output = CursorOutput::new();
    assert_eq!(
        0,
        main_with_args(
            &["rdfa", "check", "--file", path.as_str(), "101", "1"],
            &mut CursorInput::new(""),
            &mut output,
            None
        )
    );
    let output_as_string = output.standard_string();
    assert!(output_as_string.contains("String '101' is accepted"));
    assert!(output_as_string.contains("String '1' is accepted"));

    // One rejected string is enough to fail
    let mut output = CursorOutput::new();
    assert_eq!(
        1,
        main_with_args(
            &["rdfa", "check", "-f", path.as_str(), "101", "10"],
            &mut CursorInput::new(""),
            &mut output,
            None
        )
    );
    assert!(output.standard_string().contains("String '10' is NOT accepted"));
}

#[test]
fn test_command_check_evaluation_error() {
    let file = definition_file(ENDS_WITH_ONE);

    let mut output = CursorOutput::new();
    assert_eq!(
        1,
        main_with_args(
            &["rdfa", "check", "-f", file_arg(&file).as_str(), "12"],
            &mut CursorInput::new(""),
            &mut output,
            None
        )
    );
    assert!(output
        .standard_string()
        .contains("String '12' is NOT accepted (Symbol '2' is not in the alphabet)"));
}

#[test]
fn test_command_check_reads_stdin() {
    let file = definition_file(ENDS_WITH_ONE);

    let mut output = CursorOutput::new();
    assert_eq!(
        0,
        main_with_args(
            &["rdfa", "check", "-f", file_arg(&file).as_str()],
            &mut CursorInput::new("1\n011\r\n"),
            &mut output,
            None
        )
    );
    let output_as_string = output.standard_string();
    assert!(output_as_string.contains("String '1' is accepted"));
    assert!(output_as_string.contains("String '011' is accepted"));
}

#[test]
fn test_command_check_uses_default_file() {
    let file = definition_file(ENDS_WITH_ONE);

    let mut output = CursorOutput::new();
    assert_eq!(
        0,
        main_with_args(
            &["rdfa", "check", "01"],
            &mut CursorInput::new(""),
            &mut output,
            Some(file.path())
        )
    );
}

#[test]
fn test_command_check_without_definition() {
    let mut output = CursorOutput::new();
    assert_eq!(
        1,
        main_with_args(
            &["rdfa", "check", "01"],
            &mut CursorInput::new(""),
            &mut output,
            None
        )
    );
    assert!(output.error_string().contains("use --file or set RDFA_FILE"));
}

#[test]
fn test_command_check_invalid_definition() {
    let file = definition_file("s1,s2;0,1;\ns1,0,s3;s1;s2");

    let mut output = CursorOutput::new();
    assert_eq!(
        1,
        main_with_args(
            &["rdfa", "check", "-f", file_arg(&file).as_str(), "0"],
            &mut CursorInput::new(""),
            &mut output,
            None
        )
    );
    let errors = output.error_string();
    assert!(errors.contains("ToState 's3' is not in the list of states at 2:6"));
    assert!(errors.contains("Error at line 2:6"));
    assert!(errors.contains("s1,0,s3;s1;s2\n     ^^\n"));
}

#[test]
fn test_command_check_duplicate_state_location() {
    let file = definition_file("s1, s2, s1; 0; s1,0,s1; s1; s1");

    let mut output = CursorOutput::new();
    assert_eq!(
        1,
        main_with_args(
            &["rdfa", "check", "-f", file_arg(&file).as_str(), "0"],
            &mut CursorInput::new(""),
            &mut output,
            None
        )
    );
    let errors = output.error_string();
    assert!(errors.contains("State 's1' is already in the list of states"));
    assert!(errors.contains("s1, s2, s1; 0; s1,0,s1; s1; s1\n        ^^\n"));
}

#[test]
fn test_command_check_named_automaton() {
    let file = definition_file("ends_with_one = (s1,s2;0,1;s1,0,s1|s1,1,s2|s2,0,s1|s2,1,s2;s1;s2)");

    let mut output = CursorOutput::new();
    assert_eq!(
        1,
        main_with_args(
            &["rdfa", "check", "-f", file_arg(&file).as_str(), "101", "10"],
            &mut CursorInput::new(""),
            &mut output,
            None
        )
    );
    let output_as_string = output.standard_string();
    assert!(output_as_string.contains("String '101' is accepted by automaton ends_with_one"));
    assert!(output_as_string.contains("String '10' is NOT accepted by automaton ends_with_one"));
}

#[test]
fn test_command_check_syntax_error_location() {
    let file = definition_file("s1,s2;0,1;\ns1,0;s1;s2");

    let mut output = CursorOutput::new();
    assert_eq!(
        1,
        main_with_args(
            &["rdfa", "check", "-f", file_arg(&file).as_str(), "0"],
            &mut CursorInput::new(""),
            &mut output,
            None
        )
    );
    let errors = output.error_string();
    assert!(errors.contains("Error at line 2:5"));
    assert!(errors.contains("s1,0;s1;s2\n    ^\n"));
}
