//! Behavior of the `keycase` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs the binary from an empty directory with config lookups pointed into
/// it, so neither a local nor the user's global config is picked up.
fn keycase(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("keycase").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"));
    cmd
}

#[test]
fn test_convert_single_text_prints_bare_result() {
    let dir = TempDir::new().unwrap();
    keycase(&dir)
        .args(["convert", "--case", "snake", "addressLine1"])
        .assert()
        .success()
        .stdout("address_line1\n");
}

#[test]
fn test_convert_defaults_to_camel() {
    let dir = TempDir::new().unwrap();
    keycase(&dir)
        .args(["convert", "[one] two-three/four.five"])
        .assert()
        .success()
        .stdout("oneTwoThreeFourFive\n");
}

#[test]
fn test_convert_json_format() {
    let dir = TempDir::new().unwrap();
    let output = keycase(&dir)
        .args(["--format", "json", "convert", "-c", "kebab", "fooBar", "baz_qux"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "case": "kebab",
            "conversions": [
                { "input": "fooBar", "output": "foo-bar" },
                { "input": "baz_qux", "output": "baz-qux" }
            ]
        })
    );
}

#[test]
fn test_convert_rejects_unknown_case() {
    let dir = TempDir::new().unwrap();
    keycase(&dir)
        .args(["convert", "--case", "title", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown case"));
}

#[test]
fn test_local_config_sets_default_case() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".keycase.toml"), "case = \"constant\"\n").unwrap();

    keycase(&dir)
        .args(["convert", "maxRetries"])
        .assert()
        .success()
        .stdout("MAX_RETRIES\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_local_config_overrides_global_with_default_values() {
    let dir = TempDir::new().unwrap();
    let global_dir = dir.path().join("xdg").join("keycase");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(global_dir.join("config.toml"), "case = \"snake\"\npretty = false\n").unwrap();

    keycase(&dir)
        .args(["keys"])
        .write_stdin(r#"{"address_line1":1}"#)
        .assert()
        .success()
        .stdout("{\"address_line1\":1}\n");

    fs::write(dir.path().join(".keycase.toml"), "case = \"camel\"\npretty = true\n").unwrap();

    keycase(&dir)
        .args(["keys"])
        .write_stdin(r#"{"address_line1":1}"#)
        .assert()
        .success()
        .stdout("{\n  \"addressLine1\": 1\n}\n");
}

#[test]
fn test_tokens_text_output() {
    let dir = TempDir::new().unwrap();
    keycase(&dir)
        .args(["--no-color", "tokens", "cased$*String1986"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("word")
                .and(predicate::str::contains("symbol"))
                .and(predicate::str::contains("String1986")),
        );
}

#[test]
fn test_keys_from_stdin() {
    let dir = TempDir::new().unwrap();
    keycase(&dir)
        .args(["keys", "--case", "camel", "--compact"])
        .write_stdin(r#"{"address_line1":"Somestreet 15","tags":["keep_me"]}"#)
        .assert()
        .success()
        .stdout("{\"addressLine1\":\"Somestreet 15\",\"tags\":[\"keep_me\"]}\n");
}

#[test]
fn test_keys_in_place() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("payload.json");
    fs::write(&file, r#"{"addressLine1": "Somestreet 15", "nested": {"zipCode": "123"}}"#).unwrap();

    keycase(&dir)
        .args(["--no-color", "keys", "-c", "snake", "--in-place"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 document rewritten to snake keys"));

    let rewritten: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(
        rewritten,
        serde_json::json!({ "address_line1": "Somestreet 15", "nested": { "zip_code": "123" } })
    );
}

#[test]
fn test_keys_invalid_json_fails() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    fs::write(&good, r#"{"a_b": 1}"#).unwrap();
    fs::write(&bad, "{not json").unwrap();

    keycase(&dir)
        .args(["--no-color", "keys", "--compact"])
        .arg(&good)
        .arg(&bad)
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#"{"aB":1}"#))
        .stderr(predicate::str::contains("bad.json").and(predicate::str::contains("invalid JSON")));
}

#[test]
fn test_no_command_fails() {
    let dir = TempDir::new().unwrap();
    keycase(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No command specified"));
}

#[test]
fn test_completion_generation() {
    let dir = TempDir::new().unwrap();
    keycase(&dir)
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keycase"));
}
