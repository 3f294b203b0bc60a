//! Input state and parse outcomes.
//!
//! Every rule consumes an [`Input`] and produces a [`Step`]. Inputs are
//! small `Copy` values (a position plus the remaining text), so combinators
//! thread them functionally; nothing in the crate mutates shared parser
//! state.

use serde::{Deserialize, Serialize};

/// A line/column pair, both 1-based.
///
/// Advancing past a character bumps the column; advancing past a newline
/// resets the column and bumps the line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The position of the first character of any input.
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// The position after consuming `c` at this position.
    pub fn advance(self, c: char) -> Self {
        if c == '\n' {
            Self {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An immutable input state: current position plus the remaining text.
///
/// On a successful application the returned `rest` is always a suffix of
/// the original, and `pos` reflects exactly the characters consumed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Input<'s> {
    pub pos: Position,
    pub rest: &'s str,
}

impl<'s> Input<'s> {
    /// A fresh input state at the start of `text`.
    pub fn new(text: &'s str) -> Self {
        Self {
            pos: Position::start(),
            rest: text,
        }
    }

    /// Splits off the next character, advancing the position past it.
    /// Returns `None` on empty input.
    pub fn split_first(self) -> Option<(char, Input<'s>)> {
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        Some((
            c,
            Input {
                pos: self.pos.advance(c),
                rest: chars.as_str(),
            },
        ))
    }

    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }
}

/// The outcome of applying a rule to an input state.
///
/// A miss carries no payload: composition must never inspect "what was
/// produced so far" on failure, and ordered choice is the only combinator
/// that treats a miss as anything but a reason to miss itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'s, T> {
    /// The rule matched: the input state past the match, plus the value.
    Hit(Input<'s>, T),
    /// The rule did not match. No progress is committed.
    Miss,
}

impl<'s, T> Step<'s, T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Step<'s, U> {
        match self {
            Step::Hit(rest, value) => Step::Hit(rest, f(value)),
            Step::Miss => Step::Miss,
        }
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, Step::Miss)
    }

    /// The produced value, discarding the input state. `None` on a miss.
    pub fn value(self) -> Option<T> {
        match self {
            Step::Hit(_, value) => Some(value),
            Step::Miss => None,
        }
    }
}

#[cfg(test)]
mod input_tests {
    use super::*;

    #[test]
    fn position_advances_columns_and_lines() {
        let p = Position::start();
        let p = p.advance('a');
        assert_eq!(p, Position { line: 1, column: 2 });
        let p = p.advance('\n');
        assert_eq!(p, Position { line: 2, column: 1 });
        let p = p.advance('x');
        assert_eq!(p, Position { line: 2, column: 2 });
    }

    #[test]
    fn split_first_walks_the_input() {
        let input = Input::new("ab");
        let (c, rest) = input.split_first().unwrap();
        assert_eq!(c, 'a');
        assert_eq!(rest.rest, "b");
        let (c, rest) = rest.split_first().unwrap();
        assert_eq!(c, 'b');
        assert!(rest.is_empty());
        assert!(rest.split_first().is_none());
    }
}
