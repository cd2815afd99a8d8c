//! End-to-end tests of the taxon-solver binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{config_dir, write_checklist, FISH_ROWS};

fn solver() -> Command {
    Command::cargo_bin("taxon-solver").unwrap()
}

#[test]
fn test_id_with_explicit_checklist() {
    let dir = tempfile::tempdir().unwrap();
    let checklist = write_checklist(dir.path(), FISH_ROWS);

    solver()
        .args(["id", "Gadus morhua", "Salmo salar", "--checklist"])
        .arg(&checklist)
        .assert()
        .success()
        .stdout(predicate::str::contains("Gadus morhua: 1"))
        .stdout(predicate::str::contains("Salmo salar: not found"));
}

#[test]
fn test_id_from_config_dir() {
    let config = config_dir();

    solver()
        .args(["id", "Gadidae", "--format", "tsv", "--config-dir"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("name\tresolved_name\tid\tresolution"))
        .stdout(predicate::str::contains("Gadidae\tGadidae\t3\taccepted"));
}

#[test]
fn test_id_follows_synonyms_only_when_asked() {
    let config = config_dir();

    solver()
        .args(["id", "Gadus callarias", "--config-dir"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Gadus callarias: not found"));

    solver()
        .args(["id", "Gadus callarias", "--follow-synonyms", "--config-dir"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Gadus callarias: 1 (via Gadus morhua)"));
}

#[test]
fn test_id_with_translation() {
    let config = config_dir();

    solver()
        .args(["id", "Atlantic cod", "Mystery fish", "--translate", "--format", "json", "--config-dir"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"resolution\": \"translated\""))
        .stdout(predicate::str::contains("\"id\": \"12345\""))
        .stdout(predicate::str::contains("\"resolution\": \"translation_id\""));
}

#[test]
fn test_id_whitelist_filter() {
    let config = config_dir();

    solver()
        .args(["id", "Gadus morhua", "Gadidae", "--filter-whitelist", "--config-dir"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Gadus morhua: 1"))
        .stdout(predicate::str::contains("Gadidae: not found"));
}

#[test]
fn test_strict_rejects_ambiguous_names() {
    let dir = tempfile::tempdir().unwrap();
    let checklist = write_checklist(
        dir.path(),
        &[
            "urn:lsid:dyntaxa.se:Taxon:5\t\t\tFoo bar\tspecies\taccepted\t",
            "urn:lsid:dyntaxa.se:Taxon:8\t\t\tFoo bar\tspecies\taccepted\t",
        ],
    );

    solver()
        .args(["id", "Foo bar", "--checklist"])
        .arg(&checklist)
        .assert()
        .success()
        .stdout(predicate::str::contains("Foo bar: 5"));

    solver()
        .args(["id", "Foo bar", "--strict", "--checklist"])
        .arg(&checklist)
        .assert()
        .failure()
        .stderr(predicate::str::contains("has 2 accepted records"));
}

#[test]
fn test_info_reports_hierarchy() {
    let config = config_dir();

    solver()
        .args(["info", "id=1", "--config-dir"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Gadus morhua (1)"))
        .stdout(predicate::str::contains("taxon_hierarchy: Biota - Gadidae - Gadus - Gadus morhua"))
        .stdout(predicate::str::contains("genus: Gadus"))
        .stdout(predicate::str::contains("family: Gadidae"));
}

#[test]
fn test_info_json_is_flat() {
    let config = config_dir();

    let output = solver()
        .args(["info", "scientificName=Gadus morhua", "--format", "json", "--config-dir"])
        .arg(config.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["genus"], "Gadus");
    assert_eq!(records[0]["vernacularName"], "torsk");
    assert_eq!(
        records[0]["taxon_hierarchy"],
        "Biota - Gadidae - Gadus - Gadus morhua"
    );
}

#[test]
fn test_info_rejects_malformed_filter() {
    solver()
        .args(["info", "no-equals-sign"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("COLUMN=VALUE").or(predicate::str::contains("=")));
}

#[test]
fn test_hierarchy_command() {
    let config = config_dir();

    solver()
        .args(["hierarchy", "Gadus", "--format", "tsv", "--config-dir"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("rank\tscientific_name"))
        .stdout(predicate::str::contains("family\tGadidae"));
}

#[test]
fn test_broken_parent_chain_fails_info() {
    let dir = tempfile::tempdir().unwrap();
    let checklist = write_checklist(
        dir.path(),
        &["urn:lsid:dyntaxa.se:Taxon:20\t\turn:lsid:dyntaxa.se:Taxon:404\tOrphanus\tgenus\taccepted\t"],
    );

    solver()
        .args(["info", "id=20", "--checklist"])
        .arg(&checklist)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parent id '404' matches 0 records"));
}

#[test]
fn test_check_report() {
    let dir = tempfile::tempdir().unwrap();
    let mut rows = FISH_ROWS.to_vec();
    rows.push("urn:lsid:dyntaxa.se:Taxon:20\t\turn:lsid:dyntaxa.se:Taxon:404\tOrphanus\tgenus\taccepted\t");
    let checklist = write_checklist(dir.path(), &rows);

    solver()
        .args(["check", "--checklist"])
        .arg(&checklist)
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment rows: 1"))
        .stdout(predicate::str::contains("Skipped rows: 1"))
        .stdout(predicate::str::contains("Broken parent chains: 1"));

    solver()
        .args(["check", "--fail-on-issues", "--checklist"])
        .arg(&checklist)
        .assert()
        .failure();
}

#[test]
fn test_check_clean_checklist() {
    let config = config_dir();

    solver()
        .args(["check", "--fail-on-issues", "--config-dir"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No integrity problems found."));
}

#[test]
fn test_lookup_tables() {
    let config = config_dir();

    solver()
        .args(["whitelist", "gadus morhua", "Salmo salar", "--config-dir"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("gadus morhua: Gadus morhua"))
        .stdout(predicate::str::contains("Salmo salar: not whitelisted"));

    solver()
        .args(["red-list", "torsk", "--config-dir"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("kategori: VU"));

    solver()
        .args(["translate", "Atlantic cod", "#Old name", "--config-dir"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Atlantic cod: Gadus morhua"))
        .stdout(predicate::str::contains("#Old name: no translation"));
}

#[test]
fn test_missing_checklist_fails() {
    let dir = tempfile::tempdir().unwrap();

    solver()
        .args(["id", "Gadus morhua", "--checklist"])
        .arg(dir.path().join("absent.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load checklist"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    solver()
        .args(["red-list", "torsk", "--config-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("red_list_species.txt"));
}
