//! Command-line tests that need no network access

use assert_cmd::Command;
use predicates::prelude::*;

fn pokedex() -> Command {
    Command::cargo_bin("pokedex").expect("binary should build")
}

#[test]
fn test_help_lists_commands() {
    pokedex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_list_with_zero_count_prints_empty_json() {
    pokedex()
        .args(["list", "--count", "0", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_list_with_zero_count_prints_text_header() {
    pokedex()
        .args(["list", "--count", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pokédex (0 Pokémon)"));
}

#[test]
fn test_show_requires_number() {
    pokedex().arg("show").assert().failure();
}

#[test]
fn test_show_unreachable_host_fails() {
    pokedex()
        .args([
            "show",
            "1",
            "--base-url",
            "http://127.0.0.1:9/api/v2/pokemon/",
            "--timeout",
            "2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("127.0.0.1:9"));
}

#[test]
fn test_invalid_format_rejected() {
    pokedex()
        .args(["list", "--format", "xml"])
        .assert()
        .failure();
}
