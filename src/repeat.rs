//! The repetition family: zero-or-more, one-or-more, their delimited
//! variants, and bounded-count repetition.
//!
//! One-or-more rules produce `(first, rest)` rather than a bare `Vec`, so
//! the nonempty guarantee is visible in the type.
//!
//! Repetition stops, rather than looping, when the inner rule hits without
//! consuming input; `repeat` is already bounded by its `max`.

use crate::input::{Input, Step};
use crate::rule::Rule;

/// Applies `rule` until it misses, collecting every value. Never misses
/// itself: zero applications yield an empty `Vec` with the input unchanged.
pub fn star<R: Rule>(rule: R) -> Star<R> {
    Star(rule)
}

pub struct Star<R>(R);

impl<R: Rule> Rule for Star<R> {
    type Output = Vec<R::Output>;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, Vec<R::Output>> {
        let mut cur = input;
        let mut values = Vec::new();
        while let Step::Hit(rest, value) = self.0.apply(cur) {
            if rest.rest.len() == cur.rest.len() {
                break;
            }
            values.push(value);
            cur = rest;
        }
        Step::Hit(cur, values)
    }
}

/// Like [`star`], but misses if the very first application misses.
pub fn plus<R: Rule>(rule: R) -> Plus<R> {
    Plus(rule)
}

pub struct Plus<R>(R);

impl<R: Rule> Rule for Plus<R> {
    type Output = (R::Output, Vec<R::Output>);

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, Self::Output> {
        let Step::Hit(mut cur, first) = self.0.apply(input) else {
            return Step::Miss;
        };
        let mut rest_values = Vec::new();
        while let Step::Hit(rest, value) = self.0.apply(cur) {
            if rest.rest.len() == cur.rest.len() {
                break;
            }
            rest_values.push(value);
            cur = rest;
        }
        Step::Hit(cur, (first, rest_values))
    }
}

/// Parses `rule (sep rule)*`, also accepting zero occurrences (yielding an
/// empty `Vec` with the input unchanged). A trailing separator with no
/// following value is left unconsumed.
pub fn sep_star<S: Rule, R: Rule>(sep: S, rule: R) -> SepStar<S, R> {
    SepStar { sep, rule }
}

pub struct SepStar<S, R> {
    sep: S,
    rule: R,
}

impl<S: Rule, R: Rule> Rule for SepStar<S, R> {
    type Output = Vec<R::Output>;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, Vec<R::Output>> {
        let Step::Hit(mut cur, first) = self.rule.apply(input) else {
            return Step::Hit(input, Vec::new());
        };
        let mut values = vec![first];
        loop {
            let Step::Hit(after_sep, _) = self.sep.apply(cur) else {
                break;
            };
            let Step::Hit(rest, value) = self.rule.apply(after_sep) else {
                break;
            };
            if rest.rest.len() == cur.rest.len() {
                break;
            }
            values.push(value);
            cur = rest;
        }
        Step::Hit(cur, values)
    }
}

/// Parses `rule (sep rule)*`, requiring at least one value.
pub fn sep_plus<S: Rule, R: Rule>(sep: S, rule: R) -> SepPlus<S, R> {
    SepPlus { sep, rule }
}

pub struct SepPlus<S, R> {
    sep: S,
    rule: R,
}

impl<S: Rule, R: Rule> Rule for SepPlus<S, R> {
    type Output = (R::Output, Vec<R::Output>);

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, Self::Output> {
        let Step::Hit(mut cur, first) = self.rule.apply(input) else {
            return Step::Miss;
        };
        let mut rest_values = Vec::new();
        loop {
            let Step::Hit(after_sep, _) = self.sep.apply(cur) else {
                break;
            };
            let Step::Hit(rest, value) = self.rule.apply(after_sep) else {
                break;
            };
            if rest.rest.len() == cur.rest.len() {
                break;
            }
            rest_values.push(value);
            cur = rest;
        }
        Step::Hit(cur, (first, rest_values))
    }
}

/// Greedily applies `rule` up to `max` times; hits iff the number of
/// applications lands in `min..=max`. `repeat(n, n, rule)` requires exactly
/// `n`; extra matching input beyond `max` is simply left unconsumed.
pub fn repeat<R: Rule>(min: usize, max: usize, rule: R) -> Repeat<R> {
    debug_assert!(min <= max);
    Repeat { min, max, rule }
}

pub struct Repeat<R> {
    min: usize,
    max: usize,
    rule: R,
}

impl<R: Rule> Rule for Repeat<R> {
    type Output = Vec<R::Output>;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, Vec<R::Output>> {
        let mut cur = input;
        let mut values = Vec::new();
        while values.len() < self.max {
            match self.rule.apply(cur) {
                Step::Hit(rest, value) => {
                    values.push(value);
                    cur = rest;
                }
                Step::Miss => break,
            }
        }
        if values.len() >= self.min {
            Step::Hit(cur, values)
        } else {
            Step::Miss
        }
    }
}
