//! Integration tests for the `lexlib` binary

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn lexlib() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lexlib"));
    cmd.env_remove("LEXLIB_CONFIG");
    cmd
}

#[test]
fn test_classify_json() {
    let output = lexlib()
        .args(["classify", "--json", "×", "sin", "zz"])
        .output()
        .expect("Failed to run lexlib");
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["type"], "operation");
    assert_eq!(rows[0]["canonical"], "*");
    assert_eq!(rows[0]["priority"], 6);
    assert_eq!(rows[1]["type"], "function");
    assert!(rows[1]["priority"].is_null());
    assert_eq!(rows[2]["type"], "unknown");
}

#[test]
fn test_list_by_type() {
    let output = lexlib()
        .args(["list", "--type", "bracket-open"])
        .output()
        .expect("Failed to run lexlib");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "(");
}

#[test]
fn test_invalid_type_rejected() {
    let output = lexlib()
        .args(["list", "--type", "bracket"])
        .output()
        .expect("Failed to run lexlib");
    assert!(!output.status.success());
}

#[test]
fn test_config_disables_builtins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lexlib.ron");
    fs::write(&path, "(library: (builtins: false))").unwrap();

    let output = lexlib()
        .arg("--config")
        .arg(&path)
        .arg("max-priority")
        .output()
        .expect("Failed to run lexlib");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0");
}

#[test]
fn test_bad_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lexlib.ron");
    fs::write(&path, "(library: 3)").unwrap();

    let output = lexlib()
        .arg("--config")
        .arg(&path)
        .arg("max-priority")
        .output()
        .expect("Failed to run lexlib");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load config"));
}

#[test]
fn test_help_describes_tool() {
    let output = lexlib()
        .arg("--help")
        .output()
        .expect("Failed to run lexlib");
    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.starts_with("Inspect the lexeme table used to classify expression symbols"));
}
