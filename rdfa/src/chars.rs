//! Character classes used while scanning automaton definitions.
//!
//! Identifiers are restricted to 7 bit ASCII so that a definition reads the
//! same everywhere, whatever the locale of the person who wrote it.

/// Checks if a character is an ASCII letter. The underscore counts as a
/// letter so that `even_ones` is a single identifier.
pub fn is_letter(c: char) -> bool {
    match c {
        'a'..='z' | 'A'..='Z' | '_' => true,
        _ => false,
    }
}

#[test]
fn test_is_letter() {
    assert!(is_letter('a'));
    assert!(is_letter('z'));
    assert!(is_letter('A'));
    assert!(is_letter('Z'));
    assert!(is_letter('_'));

    assert!(!is_letter('0'));
    assert!(!is_letter('-'));
    assert!(!is_letter(' '));
    assert!(!is_letter('é'));
}

/// Checks if a character is an ASCII digit.
pub fn is_digit(c: char) -> bool {
    match c {
        '0'..='9' => true,
        _ => false,
    }
}

#[test]
fn test_is_digit() {
    let mut c = 0;
    while c <= 127 {
        // Keep separate assertions to get better error messages.
        if c >= b'0' && c <= b'9' {
            assert!(is_digit(c as char));
        } else {
            assert!(!is_digit(c as char));
        }
        c += 1;
    }
    assert!(!is_digit('٣'));
}

/// Checks if a character can be part of an identifier.
pub fn is_identifier(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

#[test]
fn test_is_identifier() {
    assert!(is_identifier('s'));
    assert!(is_identifier('1'));
    assert!(is_identifier('_'));
    assert!(!is_identifier(','));
    assert!(!is_identifier('\0'));
}

/// Checks if a character is skipped between tokens.
pub fn is_whitespace(c: char) -> bool {
    match c {
        ' ' | '\t' | '\n' | '\r' => true,
        _ => false,
    }
}

#[test]
fn test_is_whitespace() {
    assert!(is_whitespace(' '));
    assert!(is_whitespace('\t'));
    assert!(is_whitespace('\n'));
    assert!(is_whitespace('\r'));

    // Form feeds and friends are not part of the notation.
    assert!(!is_whitespace('\x0c'));
    assert!(!is_whitespace('\u{a0}'));
}
