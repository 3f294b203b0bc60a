//! Delimiter combinators: parse surrounding syntax, keep only the value.

use crate::input::{Input, Step};
use crate::rule::Rule;

/// Parses `prefix` then `rule`; produces only `rule`'s value.
pub fn preceded<P: Rule, R: Rule>(prefix: P, rule: R) -> Preceded<P, R> {
    Preceded { prefix, rule }
}

pub struct Preceded<P, R> {
    prefix: P,
    rule: R,
}

impl<P: Rule, R: Rule> Rule for Preceded<P, R> {
    type Output = R::Output;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, R::Output> {
        let Step::Hit(rest, _) = self.prefix.apply(input) else {
            return Step::Miss;
        };
        self.rule.apply(rest)
    }
}

/// Parses `rule` then `suffix`; produces only `rule`'s value.
pub fn terminated<R: Rule, S: Rule>(rule: R, suffix: S) -> Terminated<R, S> {
    Terminated { rule, suffix }
}

pub struct Terminated<R, S> {
    rule: R,
    suffix: S,
}

impl<R: Rule, S: Rule> Rule for Terminated<R, S> {
    type Output = R::Output;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, R::Output> {
        let Step::Hit(rest, value) = self.rule.apply(input) else {
            return Step::Miss;
        };
        match self.suffix.apply(rest) {
            Step::Hit(rest, _) => Step::Hit(rest, value),
            Step::Miss => Step::Miss,
        }
    }
}

/// Parses `open`, `rule`, `close` in order; produces only `rule`'s value.
/// The composition of [`preceded`] and [`terminated`].
pub fn delimited<O: Rule, R: Rule, C: Rule>(open: O, rule: R, close: C) -> Delimited<O, R, C> {
    Delimited {
        inner: preceded(open, terminated(rule, close)),
    }
}

pub struct Delimited<O, R, C> {
    inner: Preceded<O, Terminated<R, C>>,
}

impl<O: Rule, R: Rule, C: Rule> Rule for Delimited<O, R, C> {
    type Output = R::Output;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, R::Output> {
        self.inner.apply(input)
    }
}
