//! Controlled recursion for self-referential grammars.
//!
//! A rule is an ordinary value built once, so a definition that mentions
//! itself is circular and cannot be constructed eagerly. [`knee`] breaks the
//! circle with a layer of laziness: the grammar stores a zero-argument
//! factory instead of an expanded rule, and each recursive occurrence
//! rebuilds one unrolling at parse time. Recursion depth is therefore
//! bounded by the nesting depth of the *input*, not by the grammar.
//!
//! ```
//! use skein::prelude::*;
//!
//! // Nesting depth of balanced parentheses: "((()))" -> 3, "" -> 0.
//! fn nesting() -> BoxRule<usize> {
//!     Box::new(
//!         star(delimited(just('('), knee(nesting).map(|d| d + 1), just(')')))
//!             .map(|layers| layers.into_iter().max().unwrap_or(0)),
//!     )
//! }
//!
//! assert_eq!(parse_all(knee(nesting), "((()))").unwrap(), 3);
//! ```

use crate::input::{Input, Step};
use crate::rule::Rule;

/// Defers a rule's construction to parse time so it can reference itself.
///
/// `factory` is typically a named function returning a [`crate::BoxRule`];
/// the function can then appear inside its own body under another `knee`.
pub fn knee<F, R>(factory: F) -> Knee<F>
where
    F: Fn() -> R,
    R: Rule,
{
    Knee(factory)
}

pub struct Knee<F>(F);

impl<F, R> Rule for Knee<F>
where
    F: Fn() -> R,
    R: Rule,
{
    type Output = R::Output;

    fn apply<'s>(&self, input: Input<'s>) -> Step<'s, R::Output> {
        (self.0)().apply(input)
    }
}
