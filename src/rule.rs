//! The `Rule` trait: the unit of composition.
//!
//! A rule is a pure function from an input state to a [`Step`]. Combinators
//! are ordinary values implementing `Rule`, so composing a grammar is
//! composing values; no rule holds hidden state between invocations.

use crate::input::{Input, Step};

/// A composable parsing rule.
///
/// `Output` deliberately carries no borrow of the input, so parsed values
/// outlive the text they were parsed from.
pub trait Rule {
    type Output;

    /// Applies this rule to `input`, returning the state past the match and
    /// the produced value, or [`Step::Miss`] with no progress committed.
    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, Self::Output>;

    /// Replaces the produced value with `f(value)`. A miss passes through.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map { rule: self, f }
    }

    /// Replaces the produced value with `f(value)`, turning the hit into a
    /// miss when `f` returns `None`. Lets a grammar reject a match whose
    /// shape is right but whose value is out of range.
    fn try_map<U, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Option<U>,
    {
        TryMap { rule: self, f }
    }

    /// Discards the produced value and substitutes `value`. The rule is
    /// still applied for its consumption; a miss passes through.
    fn to<U>(self, value: U) -> To<Self, U>
    where
        Self: Sized,
        U: Clone,
    {
        To { rule: self, value }
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    type Output = R::Output;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, Self::Output> {
        (**self).apply(input)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    type Output = R::Output;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, Self::Output> {
        (**self).apply(input)
    }
}

/// A type-erased rule, the form recursive grammars hand back from their
/// factories (see [`crate::recurse::knee`]).
pub type BoxRule<T> = Box<dyn Rule<Output = T>>;

/// See [`Rule::map`].
pub struct Map<R, F> {
    rule: R,
    f: F,
}

impl<R, U, F> Rule for Map<R, F>
where
    R: Rule,
    F: Fn(R::Output) -> U,
{
    type Output = U;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, U> {
        self.rule.apply(input).map(&self.f)
    }
}

/// See [`Rule::try_map`].
pub struct TryMap<R, F> {
    rule: R,
    f: F,
}

impl<R, U, F> Rule for TryMap<R, F>
where
    R: Rule,
    F: Fn(R::Output) -> Option<U>,
{
    type Output = U;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, U> {
        match self.rule.apply(input) {
            Step::Hit(rest, value) => match (self.f)(value) {
                Some(value) => Step::Hit(rest, value),
                None => Step::Miss,
            },
            Step::Miss => Step::Miss,
        }
    }
}

/// See [`Rule::to`].
pub struct To<R, U> {
    rule: R,
    value: U,
}

impl<R, U> Rule for To<R, U>
where
    R: Rule,
    U: Clone,
{
    type Output = U;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, U> {
        self.rule.apply(input).map(|_| self.value.clone())
    }
}
