mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;
use yantlr::Token;

fn grammar_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", common::GRAMMAR).unwrap();
    file
}

#[test]
fn test_text_listing() {
    let file = grammar_file();

    Command::cargo_bin("yantlr")
        .unwrap()
        .arg("--input")
        .arg(file.path())
        .arg("--config")
        .arg("missing-config.json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ID:    1 Type: IDEN Line:  1[ 1] Symbol: letter\n",
        ))
        .stdout(predicate::str::contains(
            "Type: SPEC Line:  6[11] Symbol: ?",
        ));
}

#[test]
fn test_json_output() {
    let file = grammar_file();

    let output = Command::cargo_bin("yantlr")
        .unwrap()
        .args(["--format", "json", "--config", "missing-config.json", "--input"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let tokens: Vec<Token> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tokens.first().map(|t| t.symbol.as_str()), Some("letter"));
    assert!(tokens.iter().enumerate().all(|(i, t)| t.id == i + 1));
}

#[test]
fn test_config_file_format() {
    let file = grammar_file();
    let mut config = NamedTempFile::new().unwrap();
    write!(config, r#"{{"output_format": "json", "pretty_json": false}}"#).unwrap();

    Command::cargo_bin("yantlr")
        .unwrap()
        .arg("--input")
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"[{"id":1,"kind":"Identifier""#));
}

#[test]
fn test_missing_input() {
    Command::cargo_bin("yantlr")
        .unwrap()
        .args(["--input", "no/such/grammar.yant", "--config", "missing-config.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to read no/such/grammar.yant"));
}
