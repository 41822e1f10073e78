//! Tests for settings loading and CLI overrides.

use clap::Parser;
use std::io::Write;
use tictacgo::{Cli, Settings};
use tictacgo_core::{DrawPolicy, Mark};

fn settings_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write settings");
    file
}

#[test]
fn test_defaults_match_reference_board() {
    let settings = Settings::default();
    assert_eq!(settings.title(), "Tic Tac Go");
    assert_eq!(*settings.side(), 170.0);
    assert_eq!(*settings.first_mark(), Mark::O);
    assert_eq!(*settings.draw_policy(), DrawPolicy::Continue);
    assert_eq!(settings.geometry().extent(), 510.0);
}

#[test]
fn test_from_file_fills_missing_fields() {
    let file = settings_file("side = 100.0\nfirst_mark = \"x\"\n");
    let settings = Settings::from_file(file.path()).expect("valid settings");
    assert_eq!(*settings.side(), 100.0);
    assert_eq!(*settings.first_mark(), Mark::X);
    assert_eq!(settings.title(), "Tic Tac Go");
    assert_eq!(*settings.draw_policy(), DrawPolicy::Continue);
}

#[test]
fn test_from_file_rejects_bad_side() {
    let file = settings_file("side = -4.0\n");
    let err = Settings::from_file(file.path()).expect_err("negative side");
    assert!(err.message.contains("positive"));
}

#[test]
fn test_from_file_reports_parse_errors() {
    let file = settings_file("draw_policy = \"sometimes\"\n");
    let err = Settings::from_file(file.path()).expect_err("unknown policy");
    assert!(err.message.starts_with("Failed to parse settings"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Settings::from_file(dir.path().join("absent.toml")).expect_err("missing");
    assert!(err.message.starts_with("Failed to read settings file"));
}

#[test]
fn test_flags_override_file() {
    let file = settings_file("side = 100.0\nfirst_mark = \"x\"\ndraw_policy = \"continue\"\n");
    let path = file.path().to_str().expect("utf-8 path");
    let cli = Cli::parse_from([
        "tictacgo",
        "--config",
        path,
        "--first",
        "o",
        "--declare-draws",
    ]);
    let settings = Settings::resolve(&cli).expect("valid settings");
    assert_eq!(*settings.side(), 100.0);
    assert_eq!(*settings.first_mark(), Mark::O);
    assert_eq!(*settings.draw_policy(), DrawPolicy::Declare);
}

#[test]
fn test_flag_side_is_validated() {
    let cli = Cli::parse_from(["tictacgo", "--side", "0"]);
    assert!(Settings::resolve(&cli).is_err());
}
