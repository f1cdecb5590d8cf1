use afl::fuzz;
use cnpj_checksum::{
    compute_check_digits, is_valid, normalize, CNPJ_BASE_LENGTH, FORMATTING_CHARACTERS,
};
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

    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

// Inserts a few mask characters at random char boundaries
fn insert_formatting(input: &str, rng: &mut StdRng) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    for _ in 0..rng.gen_range(0..8) {
        let position = rng.gen_range(0..=chars.len());
        let separator = FORMATTING_CHARACTERS[rng.gen_range(0..FORMATTING_CHARACTERS.len())];
        chars.insert(position, separator);
    }
    chars.into_iter().collect()
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let formatted = insert_formatting(input, &mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Formatted: {:?}", formatted);
    }

    let result = is_valid(input);
    assert_eq!(result, is_valid(&formatted));

    let normalized = normalize(input);
    assert_eq!(normalize(&normalized), normalized);

    // Anything accepted must carry the check digits of its own base
    if result {
        let (base, check_digits) = normalized.split_at(CNPJ_BASE_LENGTH);
        assert_eq!(compute_check_digits(base).as_deref(), Ok(check_digits));
    }
}
