extern crate rdfa;

use rdfa::{Automaton, Transition};

fn main() {
    // Two states, the automaton accepts strings ending with a 1
    let am = Automaton::new(
        vec!["s1".to_string(), "s2".to_string()],
        vec!['0', '1'],
        vec![
            Transition::new("s1", '0', "s1"),
            Transition::new("s1", '1', "s2"),
            Transition::new("s2", '0', "s1"),
            Transition::new("s2", '1', "s2"),
        ],
        "s1",
        vec!["s2".to_string()],
    )
    .unwrap();

    for input in &["101", "10", "12"] {
        println!("{} => {:?}", input, am.check(input));
    }
}
