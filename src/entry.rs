//! Entry points: drive a rule over a complete input.
//!
//! Both variants demand that the rule consume the *entire* input; matching
//! a prefix and stopping is a failure at this level even though the rule
//! itself hit. `parse_all` surfaces that as a [`SkeinError`] for callers
//! that treat a bad parse as fatal and propagate it; `try_parse_all`
//! returns `None` for callers that branch locally.
//!
//! The `_packed` variants accept text packed into an unsigned integer,
//! little-endian byte order, the way the system this crate grew out of
//! ships short strings over the wire: `0x686b7077` unpacks to `"wpkh"`.

use crate::diagnostics::SkeinError;
use crate::input::{Input, Step};
use crate::rule::Rule;

/// Applies `rule` to `text`, requiring full consumption.
pub fn parse_all<R: Rule>(rule: R, text: &str) -> Result<R::Output, SkeinError> {
    match rule.apply(Input::new(text)) {
        Step::Hit(rest, value) if rest.is_empty() => Ok(value),
        Step::Hit(rest, _) => Err(SkeinError::leftover(
            text,
            rest.pos,
            text.len() - rest.rest.len(),
        )),
        Step::Miss => Err(SkeinError::no_match(text)),
    }
}

/// Like [`parse_all`], but hands failure back as `None` instead of an
/// error worth reporting.
pub fn try_parse_all<R: Rule>(rule: R, text: &str) -> Option<R::Output> {
    match rule.apply(Input::new(text)) {
        Step::Hit(rest, value) if rest.is_empty() => Some(value),
        _ => None,
    }
}

/// Decodes a little-endian byte-packed value into text.
///
/// Bytes are taken from the least significant end until the value is
/// exhausted, then validated as UTF-8.
pub fn unpack_text(atom: u128) -> Result<String, SkeinError> {
    let mut bytes = Vec::new();
    let mut n = atom;
    while n > 0 {
        bytes.push((n & 0xff) as u8);
        n >>= 8;
    }
    String::from_utf8(bytes).map_err(|cause| SkeinError::BadEncoding { atom, cause })
}

/// [`parse_all`] over a byte-packed input.
pub fn parse_packed<R: Rule>(rule: R, atom: u128) -> Result<R::Output, SkeinError> {
    let text = unpack_text(atom)?;
    parse_all(rule, &text)
}

/// [`try_parse_all`] over a byte-packed input. Undecodable values are a
/// plain `None` like any other failure.
pub fn try_parse_packed<R: Rule>(rule: R, atom: u128) -> Option<R::Output> {
    let text = unpack_text(atom).ok()?;
    try_parse_all(rule, &text)
}

#[cfg(test)]
mod entry_tests {
    use super::*;
    use crate::primitives::word;
    use crate::repeat::star;

    #[test]
    fn parse_all_requires_full_consumption() {
        assert_eq!(parse_all(word("wpkh"), "wpkh").unwrap(), "wpkh");
        let err = parse_all(word("wpkh"), "wpkh!").unwrap_err();
        assert!(matches!(err, SkeinError::Leftover { .. }));
        let err = parse_all(word("wpkh"), "wpx").unwrap_err();
        assert!(matches!(err, SkeinError::NoMatch { .. }));
    }

    #[test]
    fn parse_all_accepts_empty_matches_of_empty_input() {
        // A rule that consumes nothing still succeeds on empty input.
        assert_eq!(parse_all(star(word("x")), "").unwrap(), Vec::<&str>::new());
    }

    #[test]
    fn try_parse_all_branches_instead_of_erroring() {
        assert_eq!(try_parse_all(word("wpkh"), "wpkh"), Some("wpkh"));
        assert_eq!(try_parse_all(word("wpkh"), "wpkh!"), None);
        assert_eq!(try_parse_all(word("wpkh"), ""), None);
    }

    #[test]
    fn packed_text_unpacks_least_significant_byte_first() {
        assert_eq!(unpack_text(0x686b7077).unwrap(), "wpkh");
        assert_eq!(unpack_text(0).unwrap(), "");
        assert_eq!(parse_packed(word("wpkh"), 0x686b7077).unwrap(), "wpkh");
        assert_eq!(try_parse_packed(word("wpkh"), 0x686b7077), Some("wpkh"));
        assert_eq!(try_parse_packed(word("wpkh"), 0x77), None);
    }

    #[test]
    fn undecodable_packed_values_error() {
        // 0xff alone is not valid UTF-8.
        let err = parse_packed(word("x"), 0xff).unwrap_err();
        assert!(matches!(err, SkeinError::BadEncoding { .. }));
        assert_eq!(try_parse_packed(word("x"), 0xff), None);
    }
}
