// Regression tests for the CLI surface: parsed values reach stdout, failed
// parses render as miette diagnostics on stderr.

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn cli_parses_an_origin_string() {
    let mut cmd = Command::cargo_bin("skein").unwrap();
    cmd.arg("origin").arg("wpkh([d34db33f/84'/0'/0'])");
    cmd.assert()
        .success()
        .stdout(contains("wpkh").and(contains("d34db33f")).and(contains("84'/0'/0'")));
}

#[test]
fn cli_emits_json_when_asked() {
    let mut cmd = Command::cargo_bin("skein").unwrap();
    cmd.args(["origin", "tr([0000002a/86'/0])", "--json"]);
    cmd.assert()
        .success()
        .stdout(contains("\"script\": \"tr\"").and(contains("\"fingerprint\": 42")));
}

#[test]
fn cli_reports_miette_diagnostics_on_error() {
    let mut cmd = Command::cargo_bin("skein").unwrap();
    cmd.arg("origin").arg("wpkh([d34db33f/84'/0'/0'");
    cmd.assert()
        .failure()
        .stderr(contains("did not match").or(contains("parsing stopped here")));
}

#[test]
fn cli_unpacks_packed_text() {
    let mut cmd = Command::cargo_bin("skein").unwrap();
    cmd.args(["unpack", "0x686b7077", "--raw"]);
    cmd.assert().success().stdout(contains("wpkh"));
}

#[test]
fn cli_rejects_a_malformed_atom_argument() {
    let mut cmd = Command::cargo_bin("skein").unwrap();
    cmd.args(["unpack", "not-a-number"]);
    cmd.assert().failure().stderr(contains("not a decimal"));
}
