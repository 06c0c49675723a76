#![allow(dead_code)]

use radix_format::{Alphabet, Natural, Printer, Strategy};

pub const STRATEGIES: [Strategy; 4] = Strategy::ALL;

pub const CUSTOM_ALPHABETS: [&str; 4] = [
    "ab",
    "0123456789ABCDEF",
    "!#$%&()*+,-./:;<=>?@[]^_`{|}~",
    "ZYXWVUTSRQPONMLKJIHGFEDCBA9876543210",
];

/// Reads `s` back digit by digit: `acc = acc * radix + digit`.
pub fn decode(s: &str, alphabet: &Alphabet) -> u128 {
    assert!(!s.is_empty(), "empty digit string");
    let radix = alphabet.radix() as u128;
    s.chars().fold(0u128, |acc, c| {
        let digit = alphabet
            .value_of(c)
            .unwrap_or_else(|| panic!("{:?} is not in alphabet {:?}", c, alphabet.as_str()));
        acc * radix + digit as u128
    })
}

/// One printer per strategy, all for the same radix.
pub fn printers<N: Natural>(radix: u8) -> Vec<Printer<N>> {
    STRATEGIES
        .iter()
        .map(|&strategy| Printer::with_radix(strategy, radix).unwrap())
        .collect()
}
