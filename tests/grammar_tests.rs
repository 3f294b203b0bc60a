//! Grammar-level behavior of the combinators, driven through the public API.

use skein::origin::{origin, ChildStep, ScriptKind, WalletOrigin};
use skein::prelude::*;

// ---
// Transform composition
// ---

#[test]
fn mapping_twice_equals_mapping_the_composition() {
    let twice = range('0', '9')
        .map(|c| c as u64 - '0' as u64)
        .map(|d| d * 2);
    let composed = range('0', '9').map(|c| (c as u64 - '0' as u64) * 2);

    for text in ["7", "0", "a", ""] {
        assert_eq!(
            twice.apply(Input::new(text)).value(),
            composed.apply(Input::new(text)).value(),
            "inputs disagree on {text:?}"
        );
    }
}

#[test]
fn to_discards_the_consumed_value() {
    assert!(parse_all(word("yes").to(true), "yes").unwrap());
    assert_eq!(try_parse_all(word("yes").to(true), "no"), None);
}

// ---
// Sequencing and choice
// ---

#[test]
fn sequence_reverts_on_a_late_mismatch() {
    let rule = seq((just('w'), just('p'), just('k'), just('h')));
    // The first three characters match, but the rule as a whole misses and
    // commits nothing.
    assert!(rule.apply(Input::new("wpkx")).is_miss());
}

#[test]
fn choice_falls_through_failed_alternatives_in_order() {
    let rule = alt((word("wpkh"), word("wsh"), word("sh")));
    assert_eq!(rule.apply(Input::new("wpkh")).value(), Some("wpkh"));
    assert_eq!(rule.apply(Input::new("wsh")).value(), Some("wsh"));
    assert_eq!(rule.apply(Input::new("sh")).value(), Some("sh"));
    assert!(rule.apply(Input::new("xx")).is_miss());
}

// ---
// Controlled recursion
// ---

fn nesting() -> BoxRule<usize> {
    Box::new(
        star(delimited(just('('), knee(nesting).map(|d| d + 1), just(')')))
            .map(|layers| layers.into_iter().max().unwrap_or(0)),
    )
}

#[test]
fn nested_parenthesis_depth() {
    assert_eq!(parse_all(knee(nesting), "((()))").unwrap(), 3);
    assert_eq!(parse_all(knee(nesting), "()").unwrap(), 1);
    assert_eq!(parse_all(knee(nesting), "").unwrap(), 0);
    assert_eq!(parse_all(knee(nesting), "(())()").unwrap(), 2);
    assert!(parse_all(knee(nesting), "(()").is_err());
    assert_eq!(try_parse_all(knee(nesting), ")("), None);
}

// ---
// End to end: the wallet origin grammar through the entry points
// ---

#[test]
fn wallet_origin_end_to_end() {
    let hardened = |index| ChildStep {
        index,
        hardened: true,
    };
    let parsed = parse_all(origin(), "wpkh([d34db33f/84'/0'/0'])").unwrap();
    assert_eq!(
        parsed,
        WalletOrigin {
            script: ScriptKind::Wpkh,
            fingerprint: 0xd34d_b33f,
            path: vec![hardened(84), hardened(0), hardened(0)],
        }
    );
    assert!(parse_all(origin(), "wpkh([d34db33f/84'/0'/0'").is_err());
}

#[test]
fn wallet_origin_through_a_packed_atom() {
    // "sh([00000000/0])" happens to fit a u128 exactly (16 bytes).
    let text = "sh([00000000/0])";
    let atom = text
        .bytes()
        .rev()
        .fold(0u128, |acc, b| (acc << 8) | u128::from(b));
    let parsed = parse_packed(origin(), atom).unwrap();
    assert_eq!(parsed.script, ScriptKind::Sh);
    assert_eq!(parsed.fingerprint, 0);
    assert_eq!(parsed.path, vec![ChildStep { index: 0, hardened: false }]);
    assert_eq!(try_parse_packed(origin(), atom), Some(parsed));
}
