//! End-to-end tests for the effectc binary

use assert_cmd::Command;
use effect::effect::testing::EffectSources;
use predicates::prelude::*;
use std::fs;

fn effectc() -> Command {
    Command::cargo_bin("effectc").expect("effectc binary")
}

fn fixture(name: &str) -> String {
    EffectSources::path(name).to_string_lossy().into_owned()
}

#[test]
fn test_check_reports_techniques() {
    effectc()
        .args(["check", &fixture("glass.fx")])
        .assert()
        .success()
        .stdout("ok: glass (2 techniques)\n");
}

#[test]
fn test_check_fails_on_syntax_error() {
    effectc()
        .args(["check", &fixture("invalid/bad_colourop.fx")])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("syntax error: unexpected 'srcalpha' at 5:26"));
}

#[test]
fn test_compile_defaults_to_json() {
    effectc()
        .args(["compile", &fixture("basic.fx")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n"))
        .stdout(predicate::str::contains("\"name\": \"basic\""));
}

#[test]
fn test_compile_with_format() {
    effectc()
        .args(["compile", &fixture("basic.fx"), "--format", "treeviz"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("EFFECT\n├─ STRINGLITERAL \"basic\"\n"));
}

#[test]
fn test_compile_unknown_format() {
    effectc()
        .args(["compile", &fixture("basic.fx"), "-f", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format 'xml' not found"))
        .stderr(predicate::str::contains("json, tokens, treeviz, yaml"));
}

#[test]
fn test_config_file_sets_limits_and_output() {
    let dir = std::env::temp_dir().join(format!("effectc-config-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    let config = dir.join("effect.toml");
    fs::write(
        &config,
        "[compiler]\nmax_texture_units = 1\n\n[output]\nformat = \"yaml\"\npretty = false\n",
    )
    .expect("config written");
    let config = config.to_string_lossy().into_owned();

    effectc()
        .args(["compile", &fixture("basic.fx"), "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name: basic\n"));

    effectc()
        .args(["check", &fixture("glass.fx"), "--config", &config])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass declares more than 1 texture units"));
}

#[test]
fn test_missing_file() {
    effectc()
        .args(["check", "does/not/exist.fx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading does/not/exist.fx"));
}

#[test]
fn test_list_formats() {
    effectc()
        .arg("list-formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens\n    Token stream with source positions"))
        .stdout(predicate::str::contains("yaml"));
}
