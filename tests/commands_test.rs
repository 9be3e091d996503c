// Copyright (c) 2025 Marc Rivero López
// Licensed under GPLv3. See LICENSE file for details.
// This test suite validates real code behavior without mocks or stubs.

//! Commands Module Integration Tests
//!
//! Tests the Command Pattern implementation for RiskMapper's operational modes.
//! This test suite validates:
//! - Command creation and naming
//! - Command router logic and priority-based routing
//! - Argument validation and conflict detection
//! - Parsing real command lines into routed commands
//!
//! All tests use real Args structures and actual command implementations.

use clap::Parser;
use riskmapper::Args;
use riskmapper::commands::{CalculateCommand, Command, CommandRouter, ImportCommand};
use riskmapper::error::RiskMapperError;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Command Creation and Naming Tests
// ============================================================================

#[test]
fn test_calculate_command_creation_and_name() {
    let cmd = CalculateCommand::new(Args::default());
    assert_eq!(cmd.name(), "CalculateCommand");
}

#[test]
fn test_import_command_creation_and_name() {
    let mut args = Args::default();
    args.import.files = vec![PathBuf::from("findings.csv")];
    let cmd = ImportCommand::new(args);
    assert_eq!(cmd.name(), "ImportCommand");
}

// ============================================================================
// Routing Tests
// ============================================================================

#[test]
fn test_route_from_command_line() {
    let args = Args::parse_from([
        "riskmapper",
        "--vector",
        "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
        "--output",
        "json",
    ]);
    let cmd = CommandRouter::route(args).expect("vector should route");
    assert_eq!(cmd.name(), "CalculateCommand");

    let args = Args::parse_from(["riskmapper", "--import", "a.csv", "--csv", "out.csv"]);
    let cmd = CommandRouter::route(args).expect("import should route");
    assert_eq!(cmd.name(), "ImportCommand");
}

#[test]
fn test_route_without_mode_is_invalid_input() {
    let err = match CommandRouter::route(Args::default()) {
        Ok(cmd) => panic!("routed to {}", cmd.name()),
        Err(err) => err,
    };
    assert!(matches!(
        err.downcast_ref::<RiskMapperError>(),
        Some(RiskMapperError::InvalidInput { .. })
    ));
}

#[test]
fn test_route_rejects_mixed_modes() {
    let args = Args::parse_from(["riskmapper", "--import", "a.csv", "--av", "N"]);
    assert!(CommandRouter::route(args).is_err());

    let args = Args::parse_from([
        "riskmapper",
        "--vector",
        "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
        "--av",
        "L",
    ]);
    assert!(CommandRouter::validate_routing(&args).is_err());
}

// ============================================================================
// Execution Tests
// ============================================================================

#[test]
fn test_calculate_execute_writes_json_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("score.json");

    let mut args = Args::parse_from([
        "riskmapper", "--av", "N", "--ac", "L", "--pr", "N", "--ui", "R", "--scope", "C", "--c",
        "L", "--i", "L", "--a", "N",
    ]);
    args.output.json = Some(out.clone());
    args.output.no_color = true;

    CommandRouter::route(args).unwrap().execute().unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["score"], 6.1);
    assert_eq!(value["severity"], "Medium");
    assert_eq!(value["vector"], "CVSS:3.1/AV:N/AC:L/PR:N/UI:R/S:C/C:L/I:L/A:N");
}

#[test]
fn test_calculate_execute_reports_invalid_metric() {
    let args = Args::parse_from([
        "riskmapper", "--av", "X", "--ac", "L", "--pr", "N", "--ui", "N", "--s", "U", "--c", "H",
        "--i", "H", "--a", "H",
    ]);
    let err = CommandRouter::route(args).unwrap().execute().unwrap_err();
    assert!(err.to_string().contains("Invalid AV: 'X'"));
}

#[test]
fn test_import_execute_with_unknown_extension_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("findings.xlsx");
    std::fs::write(&path, "irrelevant").unwrap();

    let mut args = Args::default();
    args.import.files = vec![path];
    let err = CommandRouter::route(args).unwrap().execute().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RiskMapperError>(),
        Some(RiskMapperError::UnknownFormat { .. })
    ));
}
