use afl::fuzz;
use pesel::{calc_control_digit, validate, validate_value};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = String::from_utf8_lossy(input);

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(&input_str, rng);

    Some(())
}

/// Keeps the first 10 characters, then appends random digits up to 11 characters,
/// so most runs get past the structural check.
fn gen_candidate(input: &str, rng: &mut StdRng) -> String {
    let mut candidate: String = input.chars().take(10).collect();
    while candidate.chars().count() < 11 {
        candidate.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    candidate
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let candidate = gen_candidate(input, &mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Candidate: {:?}", candidate);
    }

    for value in [input, candidate.as_str()] {
        let result = validate(value);
        assert_eq!(result.pesel(), value);
        assert_eq!(result.is_valid(), result.error().is_none());
        assert_eq!(result.is_valid(), result.birth_date().is_some());
        assert_eq!(result.is_valid(), result.gender().is_some());

        // a valid PESEL ends with the control digit of its first ten digits
        if result.is_valid() {
            let control = calc_control_digit(&value[..10]);
            assert_eq!(control, value[10..].parse().ok());
        }

        // the same bytes arriving as a JSON string give the same answer
        assert_eq!(validate_value(&serde_json::Value::from(value)), result);
    }

    // whatever JSON the input happens to be, it never panics
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(input) {
        let result = validate_value(&value);
        assert_eq!(result.is_valid(), result.error().is_none());
    }
}
