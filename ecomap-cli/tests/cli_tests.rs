//! CLI integration tests
//!
//! The chat and analyze commands are exercised without a credential in the
//! environment: the gateway's fallback policy makes both deterministic and
//! offline.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Build command for the ecomap-cli binary (finds it in target/debug when run via cargo test).
fn ecomap_cli() -> Command {
    let mut cmd = cargo_bin_cmd!("ecomap-cli");
    // Make the run deterministic: no credential, no overrides.
    cmd.env_remove("GEMINI_API_KEY");
    cmd.env_remove("ECOMAP_MODEL");
    cmd.env_remove("ECOMAP_BASE_URL");
    cmd
}

fn temp_image() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not really a jpeg, but bytes are bytes").unwrap();
    file
}

#[test]
fn test_cli_help() {
    let mut cmd = ecomap_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("KIN ECO-MAP"));
}

#[test]
fn test_cli_version() {
    let mut cmd = ecomap_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_chat_without_credential_prints_apology() {
    let mut cmd = ecomap_cli();

    cmd.arg("chat").arg("Comment").arg("trier").arg("?");

    // No API key: the gateway answers with the fixed apology, exit 0.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Désolé"));
}

#[test]
fn test_cli_chat_never_prints_a_raw_error() {
    let mut cmd = ecomap_cli();

    cmd.arg("chat").arg("Mbote");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Missing API key").not())
        .stdout(predicate::str::contains("Error").not());
}

#[test]
fn test_cli_analyze_without_credential_prints_fallback() {
    let image = temp_image();
    let mut cmd = ecomap_cli();

    cmd.arg("analyze").arg(image.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Objet détecté"))
        .stdout(predicate::str::contains("Autre"));
}

#[test]
fn test_cli_analyze_json_output() {
    let image = temp_image();
    let mut cmd = ecomap_cli();

    cmd.arg("analyze")
        .arg(image.path())
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"category\": \"other\""))
        .stdout(predicate::str::contains("\"price\": 0"));
}

#[test]
fn test_cli_analyze_nonexistent_file() {
    let mut cmd = ecomap_cli();

    cmd.arg("analyze").arg("does_not_exist.jpg");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_exit_codes() {
    let image = temp_image();

    let mut cmd = ecomap_cli();
    cmd.arg("analyze").arg(image.path());
    cmd.assert().code(0);

    let mut cmd = ecomap_cli();
    cmd.arg("analyze").arg("nonexistent.jpg");
    cmd.assert().code(1);
}

#[test]
fn test_cli_output_formats_are_different() {
    let image = temp_image();

    let mut cmd_human = ecomap_cli();
    cmd_human
        .arg("analyze")
        .arg(image.path())
        .arg("--format")
        .arg("human");
    let human_output = cmd_human.output().unwrap();

    let mut cmd_json = ecomap_cli();
    cmd_json
        .arg("analyze")
        .arg(image.path())
        .arg("--format")
        .arg("json");
    let json_output = cmd_json.output().unwrap();

    assert_ne!(
        human_output.stdout, json_output.stdout,
        "Different formats should produce different output"
    );
}
