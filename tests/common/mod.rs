//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const HEADER: &str =
    "taxonId\tacceptedNameUsageID\tparentNameUsageID\tscientificName\ttaxonRank\ttaxonomicStatus\tvernacularName";

/// A small fish checklist with a synonym, a comment row and a malformed row
pub const FISH_ROWS: &[&str] = &[
    "urn:lsid:dyntaxa.se:Taxon:0\t\t\tBiota\t\taccepted\t",
    "urn:lsid:dyntaxa.se:Taxon:2\turn:lsid:dyntaxa.se:Taxon:2\turn:lsid:dyntaxa.se:Taxon:3\tGadus\tgenus\taccepted\t",
    "urn:lsid:dyntaxa.se:Taxon:3\turn:lsid:dyntaxa.se:Taxon:3\turn:lsid:dyntaxa.se:Taxon:0\tGadidae\tfamily\taccepted\ttorskfiskar",
    "urn:lsid:dyntaxa.se:Taxon:1\turn:lsid:dyntaxa.se:Taxon:1\turn:lsid:dyntaxa.se:Taxon:2\tGadus morhua\tspecies\taccepted\ttorsk",
    "urn:lsid:dyntaxa.se:Taxon:6\turn:lsid:dyntaxa.se:Taxon:1\turn:lsid:dyntaxa.se:Taxon:2\tGadus callarias\tspecies\tsynonym\t",
    "#urn:lsid:dyntaxa.se:Taxon:9\t\t\tCommented out\tspecies\taccepted\t",
    "urn:lsid:dyntaxa.se:Taxon:7\ttoo few fields",
];

pub fn checklist_text(rows: &[&str]) -> String {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

pub fn write_checklist(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("Taxon.csv");
    std::fs::write(&path, checklist_text(rows)).unwrap();
    path
}

/// Config directory holding all four reference files
pub fn config_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let dwca = dir.path().join("dyntaxa_dwca");
    std::fs::create_dir(&dwca).unwrap();
    write_checklist(&dwca, FISH_ROWS);

    std::fs::write(
        dir.path().join("dyntaxa_whitelist.txt"),
        "scientific_name\tauthor\nGadus morhua\tLinnaeus, 1758\n",
    )
    .unwrap();

    std::fs::write(
        dir.path().join("translate_to_dyntaxa.txt"),
        "taxon_name_from\ttaxon_name_to\ttaxon_id (if not in DynTaxa)\n\
         Atlantic cod\tGadus morhua\t\n\
         #Old name\tGadus\t\n\
         Mystery fish\t\t12345\n",
    )
    .unwrap();

    std::fs::write(
        dir.path().join("red_list_species.txt"),
        "TaxonId\tSvenskt namn\tVetenskapligt namn\tKategori\n\
         206199\ttorsk\tGadus morhua\tVU\n",
    )
    .unwrap();

    dir
}
