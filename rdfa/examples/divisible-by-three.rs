use rdfa::Tokenizer;

// Binary numbers divisible by three: the state is the remainder so far
const DEFINITION: &str = "
divisible_by_three = (
    {r0, r1, r2};
    {0, 1};
    {
        (r0,0,r0) | (r0,1,r1) |
        (r1,0,r2) | (r1,1,r0) |
        (r2,0,r1) | (r2,1,r2)
    };
    r0;
    {r0}
)";

fn main() {
    // Print the tokens the parser works with
    for token in Tokenizer::new(DEFINITION) {
        println!("{:?} - '{}' at {}", token.kind, token.literal, token.position);
    }

    let am = rdfa::parse(DEFINITION).unwrap();
    println!("Running automaton {}", am.name().unwrap_or("<unnamed>"));
    for n in 0..10u32 {
        let input = format!("{:b}", n);
        println!(
            "{:>2} = {:>4}: {}",
            n,
            input,
            match am.check(&input) {
                Ok(true) => "divisible by three",
                Ok(false) => "not divisible by three",
                Err(_) => unreachable!(),
            }
        );
    }

    for finding in am.audit() {
        println!("{}", finding);
    }
}
