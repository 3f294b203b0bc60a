//! Shared character-class rules and the numbers built from them.
//!
//! Everything here is assembled from the crate's own primitives; grammars
//! are expected to pull these in rather than respell the ranges.

use crate::combinators::alt;
use crate::primitives::{range, CharRange};
use crate::radix::radix;
use crate::repeat::plus;
use crate::rule::Rule;

pub fn lowercase() -> CharRange {
    range('a', 'z')
}

pub fn uppercase() -> CharRange {
    range('A', 'Z')
}

/// A single ASCII letter, either case.
pub fn letter() -> impl Rule<Output = char> {
    alt((lowercase(), uppercase()))
}

/// A decimal digit as its magnitude (`'7'` -> `7`).
pub fn digit() -> impl Rule<Output = u64> {
    range('0', '9').map(|c| c as u64 - '0' as u64)
}

/// A hexadecimal digit as its magnitude, accepting both cases
/// (`'f'` and `'F'` -> `15`).
pub fn hex_digit() -> impl Rule<Output = u64> {
    alt((
        range('0', '9').map(|c| c as u64 - '0' as u64),
        range('a', 'f').map(|c| c as u64 - 'a' as u64 + 10),
        range('A', 'F').map(|c| c as u64 - 'A' as u64 + 10),
    ))
}

/// A base-10 natural number: one or more decimal digits, folded.
pub fn decimal() -> impl Rule<Output = u64> {
    radix(
        10,
        plus(digit()).map(|(first, rest)| std::iter::once(first).chain(rest).collect()),
    )
}

#[cfg(test)]
mod lexis_tests {
    use super::*;
    use crate::input::Input;

    #[test]
    fn digit_classes_produce_magnitudes() {
        assert_eq!(digit().apply(Input::new("7")).value(), Some(7));
        assert!(digit().apply(Input::new("a")).is_miss());
        assert_eq!(hex_digit().apply(Input::new("f")).value(), Some(15));
        assert_eq!(hex_digit().apply(Input::new("F")).value(), Some(15));
        assert_eq!(hex_digit().apply(Input::new("0")).value(), Some(0));
        assert!(hex_digit().apply(Input::new("g")).is_miss());
    }

    #[test]
    fn decimal_reads_multi_digit_numbers() {
        assert_eq!(decimal().apply(Input::new("84")).value(), Some(84));
        assert_eq!(decimal().apply(Input::new("0")).value(), Some(0));
        assert!(decimal().apply(Input::new("")).is_miss());
        assert!(decimal().apply(Input::new("x4")).is_miss());
    }
}
