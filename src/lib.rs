//! skein: a small parser-combinator library for building recursive-descent
//! parsers over text, including self-referential grammars and numeric base
//! conversion.
//!
//! A grammar is a [`Rule`] value assembled from primitive matchers
//! ([`primitives`]), composition operators ([`combinators`], [`repeat`],
//! [`delimit`], [`fold`], [`radix`]), and a controlled-recursion escape
//! hatch ([`recurse`]). Two entry points ([`entry`]) drive a finished rule
//! over a complete input: one that propagates a diagnostic error and one
//! that hands back an `Option`.

pub use crate::diagnostics::{SkeinError, Span};
pub use crate::entry::{parse_all, parse_packed, try_parse_all, try_parse_packed};
pub use crate::input::{Input, Position, Step};
pub use crate::rule::{BoxRule, Rule};

pub mod cli;
pub mod combinators;
pub mod delimit;
pub mod diagnostics;
pub mod entry;
pub mod fold;
pub mod input;
pub mod lexis;
pub mod origin;
pub mod prelude;
pub mod primitives;
pub mod radix;
pub mod recurse;
pub mod repeat;
pub mod rule;
