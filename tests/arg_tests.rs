use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::{io::Write, process::Command};

// These tests only exercise paths that fail (or print) before the designer
// takes over the terminal, since there is no TTY here.

fn get_binary_location() -> String {
    env!("CARGO_BIN_EXE_tfg").to_string()
}

#[test]
fn test_version() {
    Command::new(get_binary_location())
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains("tuiforge"));
}

#[test]
fn test_help_shows_usage() {
    Command::new(get_binary_location())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tfg [OPTIONS] [FILE]"));
}

#[test]
fn test_rejects_non_designer_extension() {
    Command::new(get_binary_location())
        .arg("layout.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("designer file"));
}

#[test]
fn test_rejects_missing_file() {
    Command::new(get_binary_location())
        .arg("definitely_not_here.tui")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_rejects_broken_script() {
    let mut file = tempfile::Builder::new()
        .suffix(".tui")
        .tempfile()
        .unwrap();
    writeln!(file, "Window = FrameView::new()").unwrap();
    writeln!(file, "Window.Wat = 3").unwrap();
    writeln!(file, "Window").unwrap();

    Command::new(get_binary_location())
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_invalid_config_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[flags]").unwrap();
    writeln!(file, "theme = 3").unwrap();

    Command::new(get_binary_location())
        .arg("-C")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file"));
}

#[test]
fn test_invalid_theme() {
    Command::new(get_binary_location())
        .arg("--theme")
        .arg("gruvbox")
        .assert()
        .failure()
        .stderr(predicate::str::contains("color theme"));
}
