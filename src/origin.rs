//! The wallet origin string grammar, built entirely from the core.
//!
//! An origin string names a script kind and the key origin it wraps:
//! a key fingerprint plus a derivation path of child steps, e.g.
//! `wpkh([d34db33f/84'/0'/0'])`. This module is both a useful grammar and
//! the crate's own proof that the combinators compose into something real.

use serde::{Deserialize, Serialize};

use crate::combinators::{alt, seq};
use crate::delimit::{delimited, preceded};
use crate::diagnostics::SkeinError;
use crate::entry::parse_all;
use crate::lexis::{decimal, hex_digit};
use crate::primitives::{just, word};
use crate::radix::radix;
use crate::repeat::{repeat, sep_plus};
use crate::rule::Rule;

/// The script kinds an origin string may open with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKind {
    Pkh,
    Wpkh,
    Sh,
    Wsh,
    Tr,
}

impl std::fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ScriptKind::Pkh => "pkh",
            ScriptKind::Wpkh => "wpkh",
            ScriptKind::Sh => "sh",
            ScriptKind::Wsh => "wsh",
            ScriptKind::Tr => "tr",
        };
        write!(f, "{tag}")
    }
}

/// One step of a derivation path: an index, optionally hardened.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildStep {
    pub index: u32,
    pub hardened: bool,
}

impl std::fmt::Display for ChildStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.index, if self.hardened { "'" } else { "" })
    }
}

/// A parsed wallet origin string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletOrigin {
    pub script: ScriptKind,
    pub fingerprint: u32,
    pub path: Vec<ChildStep>,
}

impl WalletOrigin {
    /// Parses `text` as an origin string, requiring full consumption.
    pub fn parse(text: &str) -> Result<Self, SkeinError> {
        parse_all(origin(), text)
    }
}

impl std::fmt::Display for WalletOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}([{:08x}", self.script, self.fingerprint)?;
        for step in &self.path {
            write!(f, "/{step}")?;
        }
        write!(f, "])")
    }
}

/// The script kind tag. Longer tags come first so `wpkh` is never read as
/// a `w` left dangling before `pkh`, and `sh` never preempts `wsh`.
pub fn script_kind() -> impl Rule<Output = ScriptKind> {
    alt((
        word("wpkh").to(ScriptKind::Wpkh),
        word("wsh").to(ScriptKind::Wsh),
        word("pkh").to(ScriptKind::Pkh),
        word("sh").to(ScriptKind::Sh),
        word("tr").to(ScriptKind::Tr),
    ))
}

/// Exactly eight hex digits, folded base-16 into a key fingerprint.
pub fn fingerprint() -> impl Rule<Output = u32> {
    radix(16, repeat(8, 8, hex_digit())).map(|v| v as u32)
}

/// A derivation step: a decimal index with an optional hardened marker,
/// written `'` or `h`. Indexes past `u32::MAX` are not valid steps.
pub fn child_step() -> impl Rule<Output = ChildStep> {
    seq((decimal(), repeat(0, 1, alt((just('\''), just('h')))))).try_map(|(index, marker)| {
        Some(ChildStep {
            index: u32::try_from(index).ok()?,
            hardened: !marker.is_empty(),
        })
    })
}

/// The whole origin string: `script "([" fingerprint ("/" step)+ "])"`.
pub fn origin() -> impl Rule<Output = WalletOrigin> {
    seq((
        script_kind(),
        preceded(word("(["), fingerprint()),
        delimited(just('/'), sep_plus(just('/'), child_step()), word("])")),
    ))
    .map(|(script, fingerprint, (first, rest))| WalletOrigin {
        script,
        fingerprint,
        path: std::iter::once(first).chain(rest).collect(),
    })
}

#[cfg(test)]
mod origin_tests {
    use super::*;

    #[test]
    fn parses_a_full_origin_string() {
        let parsed = WalletOrigin::parse("wpkh([d34db33f/84'/0'/0'])").unwrap();
        assert_eq!(parsed.script, ScriptKind::Wpkh);
        assert_eq!(parsed.fingerprint, 0xd34d_b33f);
        assert_eq!(
            parsed.path,
            vec![
                ChildStep { index: 84, hardened: true },
                ChildStep { index: 0, hardened: true },
                ChildStep { index: 0, hardened: true },
            ]
        );
    }

    #[test]
    fn truncated_origin_strings_fail() {
        assert!(WalletOrigin::parse("wpkh([d34db33f/84'/0'/0'").is_err());
        assert!(WalletOrigin::parse("wpkh([d34db33f])").is_err());
        assert!(WalletOrigin::parse("wpkh([d34db3/84'])").is_err());
    }

    #[test]
    fn script_kinds_disambiguate_by_order() {
        assert_eq!(
            WalletOrigin::parse("wsh([00000000/0])").unwrap().script,
            ScriptKind::Wsh
        );
        assert_eq!(
            WalletOrigin::parse("sh([00000000/0])").unwrap().script,
            ScriptKind::Sh
        );
    }

    #[test]
    fn hardened_markers_accept_both_spellings() {
        let a = WalletOrigin::parse("tr([00000000/84'/1])").unwrap();
        let b = WalletOrigin::parse("tr([00000000/84h/1])").unwrap();
        assert_eq!(a, b);
        assert!(a.path[0].hardened);
        assert!(!a.path[1].hardened);
    }

    #[test]
    fn child_indexes_past_u32_are_rejected() {
        assert!(WalletOrigin::parse("tr([00000000/4294967296])").is_err());
        let parsed = WalletOrigin::parse("tr([00000000/4294967295])").unwrap();
        assert_eq!(parsed.path[0].index, u32::MAX);
    }

    #[test]
    fn display_round_trips_through_the_grammar() {
        let parsed = WalletOrigin::parse("pkh([0000002a/44'/0'/7])").unwrap();
        assert_eq!(
            WalletOrigin::parse(&parsed.to_string()).unwrap(),
            parsed
        );
    }
}
