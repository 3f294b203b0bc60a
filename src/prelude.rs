//! The working vocabulary in one import.
//!
//! Grammar modules are expected to start with `use skein::prelude::*;` and
//! have every primitive, combinator, and entry point in scope.

pub use crate::combinators::{alt, seq};
pub use crate::delimit::{delimited, preceded, terminated};
pub use crate::diagnostics::SkeinError;
pub use crate::entry::{
    parse_all, parse_packed, try_parse_all, try_parse_packed, unpack_text,
};
pub use crate::fold::{fold, seq_sep};
pub use crate::input::{Input, Position, Step};
pub use crate::primitives::{just, next, range, word};
pub use crate::radix::{fold_digits, radix};
pub use crate::recurse::knee;
pub use crate::repeat::{plus, repeat, sep_plus, sep_star, star};
pub use crate::rule::{BoxRule, Rule};
