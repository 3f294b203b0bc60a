//! Positional-notation folding of digit magnitudes.
//!
//! The combinator here never looks at raw characters: the wrapped rule is
//! expected to produce digit *magnitudes* (e.g. `'f'` already turned into
//! `15` with [`Rule::map`]). That keeps radix handling independent of which
//! characters a grammar accepts as digits.

use crate::input::{Input, Step};
use crate::rule::Rule;

/// Smallest radix [`radix`] accepts.
pub const MIN_BASE: u64 = 2;
/// Largest radix [`radix`] accepts.
pub const MAX_BASE: u64 = 36;

/// Folds a digit-magnitude sequence into its positional value:
/// `Σ dᵢ · base^(n−1−i)`. `None` if the value does not fit a `u64`.
///
/// Digits must each be `< base`; the wrapping digit matcher is responsible
/// for guaranteeing that.
pub fn fold_digits(base: u64, digits: &[u64]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, &d| {
        debug_assert!(d < base);
        acc.checked_mul(base)?.checked_add(d)
    })
}

/// Wraps a rule producing a digit-magnitude sequence and folds the sequence
/// into an integer under `base` (2 through 36 inclusive).
///
/// Misses on an empty sequence (positional notation has no zero-digit
/// reading) and on a digit run whose value overflows `u64`.
pub fn radix<R>(base: u64, rule: R) -> Radix<R>
where
    R: Rule<Output = Vec<u64>>,
{
    debug_assert!((MIN_BASE..=MAX_BASE).contains(&base));
    Radix { base, rule }
}

pub struct Radix<R> {
    base: u64,
    rule: R,
}

impl<R> Rule for Radix<R>
where
    R: Rule<Output = Vec<u64>>,
{
    type Output = u64;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, u64> {
        match self.rule.apply(input) {
            Step::Hit(_, digits) if digits.is_empty() => Step::Miss,
            Step::Hit(rest, digits) => match fold_digits(self.base, &digits) {
                Some(value) => Step::Hit(rest, value),
                None => Step::Miss,
            },
            Step::Miss => Step::Miss,
        }
    }
}
