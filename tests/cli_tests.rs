//! Integration tests for the threadfit CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper to get a threadfit command with a hermetic environment
fn threadfit() -> Command {
    let mut cmd = Command::cargo_bin("threadfit").unwrap();
    cmd.env_remove("THREADFIT_CATALOG");
    cmd.env_remove("THREADFIT_FORMAT");
    cmd.env("XDG_CONFIG_HOME", "/nonexistent");
    cmd
}

/// Helper to write a small vendor catalog CSV
fn test_catalog() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "spec_key,mcmaster_pn,description,pack_qty").unwrap();
    writeln!(
        file,
        "screw|shcs|iso4762|M6-1|L20,91292A135,M6 x 1 mm 20 mm socket head cap screw,100"
    )
    .unwrap();
    writeln!(file, "nut|hexnut|iso4032|M6-1,90592A016,M6 steel hex nut,100").unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    threadfit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fastener"));
}

#[test]
fn test_version_displays() {
    threadfit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("threadfit"));
}

#[test]
fn test_unknown_command_fails() {
    threadfit()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Resolve Command Tests
// ============================================================================

#[test]
fn test_resolve_text_format_prints_message() {
    threadfit()
        .args(["resolve", "nut that fits M6 socket screw, 20mm", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Screw: SocketHeadCapScrew (iso4762), M6-1, length 20 mm",
        ))
        .stdout(predicate::str::contains("- Nut: HexNut (iso4032), M6-1"))
        .stdout(predicate::str::contains(
            "These will match by thread size/pitch.",
        ));
}

#[test]
fn test_resolve_json_without_catalog_needs_sourcing() {
    threadfit()
        .args(["resolve", "M6x1, 20mm socket screw", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"size\": \"M6-1\""))
        .stdout(predicate::str::contains("\"status\": \"needs_sourcing\""))
        .stdout(predicate::str::contains("\"valid_sizes\""));
}

#[test]
fn test_resolve_json_with_catalog_resolves_vendor_part() {
    let catalog = test_catalog();
    threadfit()
        .args(["resolve", "M6x1, 20mm socket screw", "-f", "json"])
        .arg("--catalog")
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"resolved\""))
        .stdout(predicate::str::contains("91292A135"))
        .stdout(predicate::str::contains(
            "https://www.mcmaster.com/91292A135/",
        ));
}

#[test]
fn test_resolve_warns_about_unknown_size() {
    threadfit()
        .args(["resolve", "m7x1 hex bolt", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes:"))
        .stdout(predicate::str::contains("M7-1"));
}

#[test]
fn test_resolve_no_vendor_flag_skips_lookup() {
    let catalog = test_catalog();
    threadfit()
        .args(["resolve", "M6x1, 20mm socket screw", "-f", "json", "--no-vendor"])
        .arg("--catalog")
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"needs_sourcing\""));
}

// ============================================================================
// Sizes Command Tests
// ============================================================================

#[test]
fn test_sizes_lists_all_pairs() {
    threadfit()
        .arg("sizes")
        .assert()
        .success()
        .stdout(predicate::str::contains("SocketHeadCapScrew"))
        .stdout(predicate::str::contains("iso4762"))
        .stdout(predicate::str::contains("iso4032"))
        .stdout(predicate::str::contains("M6-1"));
}

#[test]
fn test_sizes_family_filter() {
    threadfit()
        .args(["sizes", "--family", "HexNut"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iso4032"))
        .stdout(predicate::str::contains("iso4762").not());
}

#[test]
fn test_sizes_json() {
    threadfit()
        .args(["sizes", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"family\""))
        .stdout(predicate::str::contains("\"M6-1\""));
}

// ============================================================================
// Key Command Tests
// ============================================================================

#[test]
fn test_key_for_screw() {
    threadfit()
        .args([
            "key", "--part", "screw", "--family", "SocketHeadCapScrew", "--standard", "iso4762",
            "--size", "M6x1", "--length", "20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("screw|shcs|iso4762|M6-1|L20"));
}

#[test]
fn test_key_for_nut_omits_length() {
    threadfit()
        .args([
            "key", "--part", "nut", "--family", "HexNut", "--standard", "iso4032", "--size",
            "M6-1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("nut|hexnut|iso4032|M6-1"));
}

#[test]
fn test_key_screw_without_length_fails() {
    threadfit()
        .args([
            "key", "--part", "screw", "--family", "SocketHeadCapScrew", "--standard", "iso4762",
            "--size", "M6-1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("length"));
}

#[test]
fn test_key_part_family_mismatch_fails() {
    threadfit()
        .args([
            "key", "--part", "nut", "--family", "SocketHeadCapScrew", "--standard", "iso4762",
            "--size", "M6-1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported combination"));
}

// ============================================================================
// Catalog Command Tests
// ============================================================================

#[test]
fn test_catalog_template() {
    threadfit()
        .args(["catalog", "template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spec_key,mcmaster_pn"));
}

#[test]
fn test_catalog_info_without_catalog() {
    threadfit()
        .args(["catalog", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No catalog configured"));
}

#[test]
fn test_catalog_info_with_catalog() {
    let catalog = test_catalog();
    threadfit()
        .args(["catalog", "info", "--catalog"])
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 2"));
}

#[test]
fn test_catalog_lookup_hit_and_miss() {
    let catalog = test_catalog();
    threadfit()
        .args(["catalog", "lookup", "SCREW|SHCS|ISO4762|m6-1|l20", "--catalog"])
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("91292A135"));

    threadfit()
        .args(["catalog", "lookup", "screw|shcs|iso4762|M99-9|L5", "--catalog"])
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no match"));
}

// ============================================================================
// Completions Command Tests
// ============================================================================

#[test]
fn test_completions_bash() {
    threadfit()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("threadfit"));
}
