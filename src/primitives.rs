//! Primitive matchers: the leaves every grammar bottoms out in.
//!
//! All four consume from the front of the input and miss without consuming
//! on empty input or mismatch; none of them can panic.

use crate::input::{Input, Step};
use crate::rule::Rule;

/// Matches exactly the character `c` and produces it.
pub fn just(c: char) -> Just {
    Just(c)
}

#[derive(Debug, Copy, Clone)]
pub struct Just(char);

impl Rule for Just {
    type Output = char;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, char> {
        match input.split_first() {
            Some((c, rest)) if c == self.0 => Step::Hit(rest, c),
            _ => Step::Miss,
        }
    }
}

/// Matches any character in the inclusive range `lo..=hi` and produces it.
pub fn range(lo: char, hi: char) -> CharRange {
    CharRange { lo, hi }
}

#[derive(Debug, Copy, Clone)]
pub struct CharRange {
    lo: char,
    hi: char,
}

impl Rule for CharRange {
    type Output = char;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, char> {
        match input.split_first() {
            Some((c, rest)) if self.lo <= c && c <= self.hi => Step::Hit(rest, c),
            _ => Step::Miss,
        }
    }
}

/// Matches any single character and produces it. Misses only on empty input.
pub fn next() -> Next {
    Next
}

#[derive(Debug, Copy, Clone)]
pub struct Next;

impl Rule for Next {
    type Output = char;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, char> {
        match input.split_first() {
            Some((c, rest)) => Step::Hit(rest, c),
            None => Step::Miss,
        }
    }
}

/// Matches the string `text` character by character and produces it.
///
/// Position tracking still sees every character, so a literal containing a
/// newline advances the line counter like anything else.
pub fn word(text: &'static str) -> Word {
    Word(text)
}

#[derive(Debug, Copy, Clone)]
pub struct Word(&'static str);

impl Rule for Word {
    type Output = &'static str;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, &'static str> {
        let mut cur = input;
        for expected in self.0.chars() {
            match cur.split_first() {
                Some((c, rest)) if c == expected => cur = rest,
                _ => return Step::Miss,
            }
        }
        Step::Hit(cur, self.0)
    }
}

#[cfg(test)]
mod primitive_tests {
    use super::*;

    #[test]
    fn just_matches_only_its_character() {
        assert_eq!(just('c').apply(Input::new("c")).value(), Some('c'));
        assert!(just('c').apply(Input::new("d")).is_miss());
        assert!(just('c').apply(Input::new("")).is_miss());
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let letter = range('a', 'z');
        assert_eq!(letter.apply(Input::new("a")).value(), Some('a'));
        assert_eq!(letter.apply(Input::new("z")).value(), Some('z'));
        assert!(letter.apply(Input::new("`")).is_miss()); // just below 'a'
        assert!(letter.apply(Input::new("{")).is_miss()); // just above 'z'
    }

    #[test]
    fn next_consumes_anything_but_emptiness() {
        assert_eq!(next().apply(Input::new("\n")).value(), Some('\n'));
        assert!(next().apply(Input::new("")).is_miss());
    }

    #[test]
    fn word_matches_whole_prefix_or_nothing() {
        match word("wpkh").apply(Input::new("wpkh(")) {
            Step::Hit(rest, matched) => {
                assert_eq!(matched, "wpkh");
                assert_eq!(rest.rest, "(");
            }
            Step::Miss => panic!("expected a hit"),
        }
        assert!(word("wpkh").apply(Input::new("wpx")).is_miss());
    }
}
