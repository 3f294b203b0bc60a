//! Reduction over delimited runs, and fixed-arity delimited tuples.

use crate::input::{Input, Step};
use crate::rule::Rule;

/// Parses `rule (sep rule)*` and reduces the values left-to-right with
/// `op`: `op(op(v1, v2), v3)…`.
///
/// Requires at least one value, consistent with the one-or-more contract it
/// is built on; misses on zero matches rather than inventing an identity.
pub fn fold<Op, S, R>(op: Op, sep: S, rule: R) -> Fold<Op, S, R>
where
    Op: Fn(R::Output, R::Output) -> R::Output,
    S: Rule,
    R: Rule,
{
    Fold { op, sep, rule }
}

pub struct Fold<Op, S, R> {
    op: Op,
    sep: S,
    rule: R,
}

impl<Op, S, R> Rule for Fold<Op, S, R>
where
    Op: Fn(R::Output, R::Output) -> R::Output,
    S: Rule,
    R: Rule,
{
    type Output = R::Output;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, R::Output> {
        let Step::Hit(mut cur, mut acc) = self.rule.apply(input) else {
            return Step::Miss;
        };
        loop {
            let Step::Hit(after_sep, _) = self.sep.apply(cur) else {
                break;
            };
            let Step::Hit(rest, value) = self.rule.apply(after_sep) else {
                break;
            };
            if rest.rest.len() == cur.rest.len() {
                break; // a zero-width sep/value pair would repeat forever
            }
            acc = (self.op)(acc, value);
            cur = rest;
        }
        Step::Hit(cur, acc)
    }
}

/// Applies `r1, sep, r2, sep, …, rn` in order and produces the fixed-arity
/// tuple of each rule's value (the separators are discarded). Misses if any
/// element or separator misses.
pub fn seq_sep<S, L>(sep: S, rules: L) -> SeqSep<S, L>
where
    S: Rule,
    L: SeparatedSequence<S>,
{
    SeqSep { sep, rules }
}

pub struct SeqSep<S, L> {
    sep: S,
    rules: L,
}

impl<S, L> Rule for SeqSep<S, L>
where
    S: Rule,
    L: SeparatedSequence<S>,
{
    type Output = L::Output;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, L::Output> {
        self.rules.apply_sep(&self.sep, input)
    }
}

/// Tuples of rules applied with a separator between consecutive elements.
/// Implemented for tuples of arity 2 through 8.
pub trait SeparatedSequence<S> {
    type Output;

    fn apply_sep<'s>(&self, sep: &S, input: Input<'s>) -> Step<'s, Self::Output>;
}

macro_rules! impl_separated {
    ($First:ident $first:ident, $($R:ident $v:ident),+) => {
        impl<S: Rule, $First: Rule, $($R: Rule),+> SeparatedSequence<S> for ($First, $($R,)+) {
            type Output = ($First::Output, $($R::Output,)+);

            fn apply_sep<'s>(&self, sep: &S, input: Input<'s>) -> Step<'s, Self::Output> {
                let ($first, $($v,)+) = self;
                let Step::Hit(input, $first) = $first.apply(input) else {
                    return Step::Miss;
                };
                $(
                    let Step::Hit(input, _) = sep.apply(input) else {
                        return Step::Miss;
                    };
                    let Step::Hit(input, $v) = $v.apply(input) else {
                        return Step::Miss;
                    };
                )+
                Step::Hit(input, ($first, $($v,)+))
            }
        }
    };
}

impl_separated!(A a, B b);
impl_separated!(A a, B b, C c);
impl_separated!(A a, B b, C c, D d);
impl_separated!(A a, B b, C c, D d, E e);
impl_separated!(A a, B b, C c, D d, E e, F f);
impl_separated!(A a, B b, C c, D d, E e, F f, G g);
impl_separated!(A a, B b, C c, D d, E e, F f, G g, H h);
