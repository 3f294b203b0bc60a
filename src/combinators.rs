//! Sequencing and ordered choice over tuples of rules.
//!
//! Both take a tuple of rules (arity 2 through 8) so heterogeneous grammars
//! compose without boxing: `seq` threads the input through every element
//! and produces the tuple of their values; `alt` tries each element against
//! the *original* input in order and commits to the first hit.

use crate::input::{Input, Step};
use crate::rule::Rule;

/// Applies every rule in order, producing the tuple of all their values.
///
/// Misses as a whole if any element misses; no partial tuple is ever
/// observable, and no progress from earlier elements is committed.
pub fn seq<L: Sequence>(rules: L) -> Seq<L> {
    Seq(rules)
}

pub struct Seq<L>(L);

impl<L: Sequence> Rule for Seq<L> {
    type Output = L::Output;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, L::Output> {
        self.0.apply_seq(input)
    }
}

/// Tuples of rules that can be applied in sequence. Implemented for tuples
/// of arity 2 through 8.
pub trait Sequence {
    type Output;

    fn apply_seq<'s>(&self, input: Input<'s>) -> Step<'s, Self::Output>;
}

macro_rules! impl_sequence {
    ($($R:ident $v:ident),+) => {
        impl<$($R: Rule),+> Sequence for ($($R,)+) {
            type Output = ($($R::Output,)+);

            fn apply_seq<'s>(&self, input: Input<'s>) -> Step<'s, Self::Output> {
                let ($($v,)+) = self;
                $(
                    let Step::Hit(input, $v) = $v.apply(input) else {
                        return Step::Miss;
                    };
                )+
                Step::Hit(input, ($($v,)+))
            }
        }
    };
}

impl_sequence!(A a, B b);
impl_sequence!(A a, B b, C c);
impl_sequence!(A a, B b, C c, D d);
impl_sequence!(A a, B b, C c, D d, E e);
impl_sequence!(A a, B b, C c, D d, E e, F f);
impl_sequence!(A a, B b, C c, D d, E e, F f, G g);
impl_sequence!(A a, B b, C c, D d, E e, F f, G g, H h);

/// Tries each rule against the original input in order; the first hit wins.
///
/// A miss from one alternative is the expected signal to try the next — the
/// only place in the crate where a miss is handled rather than propagated.
/// There is no backtracking into a once-successful branch.
pub fn alt<L: Choice>(rules: L) -> Alt<L> {
    Alt(rules)
}

pub struct Alt<L>(L);

impl<L: Choice> Rule for Alt<L> {
    type Output = L::Output;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, L::Output> {
        self.0.apply_alt(input)
    }
}

/// Tuples of same-output rules that can be tried as ordered alternatives.
/// Implemented for tuples of arity 2 through 8.
pub trait Choice {
    type Output;

    fn apply_alt<'s>(&self, input: Input<'s>) -> Step<'s, Self::Output>;
}

macro_rules! impl_choice {
    ($($R:ident $v:ident),+) => {
        impl<T, $($R: Rule<Output = T>),+> Choice for ($($R,)+) {
            type Output = T;

            fn apply_alt<'s>(&self, input: Input<'s>) -> Step<'s, T> {
                let ($($v,)+) = self;
                $(
                    if let Step::Hit(rest, value) = $v.apply(input) {
                        return Step::Hit(rest, value);
                    }
                )+
                Step::Miss
            }
        }
    };
}

impl_choice!(A a, B b);
impl_choice!(A a, B b, C c);
impl_choice!(A a, B b, C c, D d);
impl_choice!(A a, B b, C c, D d, E e);
impl_choice!(A a, B b, C c, D d, E e, F f);
impl_choice!(A a, B b, C c, D d, E e, F f, G g);
impl_choice!(A a, B b, C c, D d, E e, F f, G g, H h);
