use rdfa::{Automaton, DefinitionError, EvaluationError, NoTransition, Transition};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

// Accepts binary strings ending with a 1
fn automaton_ends_with_one() -> Automaton {
    Automaton::new(
        strings(&["s1", "s2"]),
        vec!['0', '1'],
        vec![
            Transition::new("s1", '0', "s1"),
            Transition::new("s1", '1', "s2"),
            Transition::new("s2", '0', "s1"),
            Transition::new("s2", '1', "s2"),
        ],
        "s1",
        strings(&["s2"]),
    )
    .unwrap()
}

// Accepts "ab" and nothing else, every other path falls off the table
fn automaton_partial() -> Automaton {
    Automaton::new(
        strings(&["start", "seen_a", "done"]),
        vec!['a', 'b'],
        vec![
            Transition::new("start", 'a', "seen_a"),
            Transition::new("seen_a", 'b', "done"),
        ],
        "start",
        strings(&["done"]),
    )
    .unwrap()
}

#[test]
fn test_ends_with_one() {
    let am = automaton_ends_with_one();

    assert_eq!(Ok(true), am.check("101"));
    assert_eq!(Ok(true), am.check("1"));
    assert_eq!(Ok(true), am.check("0001"));
    assert_eq!(Ok(false), am.check("10"));
    assert_eq!(Ok(false), am.check(""));
    assert_eq!(Err(EvaluationError::SymbolNotInAlphabet('2')), am.check("12"));
}

#[test]
fn test_bad_symbol_stops_before_missing_transition() {
    let am = automaton_partial();

    // 'c' is checked against the alphabet before anything else
    assert_eq!(Err(EvaluationError::SymbolNotInAlphabet('c')), am.check("c"));
    // the run stops at the first problem, the 'c' is never read
    assert_eq!(
        Err(EvaluationError::NoTransition(NoTransition {
            state: "start".to_string(),
            symbol: 'b',
        })),
        am.check("bc")
    );
}

#[test]
fn test_partial_automaton() {
    let am = automaton_partial();

    assert_eq!(Ok(true), am.check("ab"));
    assert_eq!(Ok(false), am.check("a"));

    let err = am.check("abb").unwrap_err();
    assert_eq!(
        "There is no transition for the state 'done' and symbol 'b'",
        err.to_string()
    );
}

#[test]
fn test_shared_between_threads() {
    let am = std::sync::Arc::new(automaton_ends_with_one());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let am = am.clone();
            std::thread::spawn(move || am.check(&format!("{:b}", i)))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(vec![Ok(false), Ok(true), Ok(false), Ok(true)], results);
}

#[test]
fn test_definition_errors() {
    let err = Automaton::new(strings(&["s1", ""]), vec!['0', '1'], vec![], "s1", strings(&["s1"]))
        .unwrap_err();
    assert_eq!("State of index 1 invalid, can not be empty", err.to_string());

    let err = Automaton::new(
        strings(&["s1", "s2"]),
        vec!['0', '1'],
        vec![Transition::new("abc", '0', "s2")],
        "s1",
        strings(&["s1"]),
    )
    .unwrap_err();
    assert_eq!(
        "Transition of index 0 is invalid! FromState 'abc' is not in the list of states",
        err.to_string()
    );

    let err = Automaton::new(strings(&["s1"]), vec![], vec![], "s2", vec![]).unwrap_err();
    assert_eq!(DefinitionError::InvalidStartState("s2".to_string()), err);
}
