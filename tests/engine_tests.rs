//! Library-level tests for checklist loading, resolution and hierarchies

mod common;

use std::sync::Arc;

use common::{checklist_text, write_checklist, FISH_ROWS};
use taxon_solver::parsing::checklist::parse_checklist_text;
use taxon_solver::{HierarchyError, LoadError, LoadOptions, RecordFilter, TaxonEngine};

fn fish_engine() -> TaxonEngine {
    let checklist = parse_checklist_text(&checklist_text(FISH_ROWS), &LoadOptions::default()).unwrap();
    TaxonEngine::from_checklist(checklist, None)
}

#[test]
fn test_every_record_reachable_by_id() {
    let engine = fish_engine();
    for record in engine.index().records() {
        let found = engine.index().get_in_namespace(&record.id, &record.id_tag).unwrap();
        assert_eq!(found, record);
    }
}

#[test]
fn test_comment_and_malformed_rows_dropped() {
    let engine = fish_engine();
    let report = engine.check();

    assert_eq!(engine.len(), 5);
    assert_eq!(report.comment_rows, 1);
    assert_eq!(report.skipped_rows, 1);
    assert!(engine.resolve("Commented out").is_none());
    assert!(engine.index().get("9").is_none());
}

#[test]
fn test_get_id_and_info() {
    let engine = fish_engine();
    assert_eq!(engine.get_id("Gadus morhua").as_deref(), Some("1"));
    assert_eq!(engine.get_id("Salmo salar"), None);

    let info = engine.get_info(&RecordFilter::new().with("id", "1")).unwrap();
    assert_eq!(info.len(), 1);
    assert_eq!(
        info[0].get("taxon_hierarchy").as_deref(),
        Some("Biota - Gadidae - Gadus - Gadus morhua")
    );
    assert_eq!(info[0].get("genus").as_deref(), Some("Gadus"));
    assert_eq!(info[0].get("family").as_deref(), Some("Gadidae"));
    assert_eq!(info[0].get("vernacularName").as_deref(), Some("torsk"));
}

#[test]
fn test_synonym_never_resolves_directly() {
    let engine = fish_engine();
    assert!(engine.resolve("Gadus callarias").is_none());
    assert_eq!(
        engine.resolve_with_synonyms("Gadus callarias").map(|r| r.id.as_str()),
        Some("1")
    );
    assert_eq!(engine.get_id_with_synonyms("Gadus callarias").as_deref(), Some("1"));
}

#[test]
fn test_hierarchy_memoized() {
    let engine = fish_engine();
    let first = engine.hierarchy_for("Gadus morhua").unwrap().unwrap();
    let second = engine.hierarchy_for("Gadus morhua").unwrap().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_broken_chain_scoped_to_query() {
    let mut rows = FISH_ROWS.to_vec();
    rows.push("urn:lsid:dyntaxa.se:Taxon:20\t\turn:lsid:dyntaxa.se:Taxon:404\tOrphanus\tgenus\taccepted\t");
    let checklist = parse_checklist_text(&checklist_text(&rows), &LoadOptions::default()).unwrap();
    let engine = TaxonEngine::from_checklist(checklist, None);

    assert_eq!(
        engine.hierarchy_for("Orphanus"),
        Err(HierarchyError::AmbiguousParent {
            parent_id: "404".to_string(),
            matches: 0,
        })
    );
    assert!(engine.hierarchy_for("Gadus morhua").unwrap().is_some());
    assert_eq!(engine.check().broken_chains.len(), 1);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_checklist(dir.path(), FISH_ROWS);

    let engine = TaxonEngine::load(&path, &LoadOptions::default(), None).unwrap();
    assert_eq!(engine.source(), Some(path.as_path()));
    assert_eq!(engine.get_id("Gadidae").as_deref(), Some("3"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = TaxonEngine::load(&dir.path().join("absent.csv"), &LoadOptions::default(), None);
    assert!(matches!(result, Err(LoadError::Io(_))));
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = Arc::new(fish_engine());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || engine.hierarchy_for("Gadus morhua").unwrap().unwrap().depth())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 4);
    }
}

#[test]
fn test_ids_shared_across_namespaces() {
    let rows = [
        "urn:lsid:dyntaxa.se:Taxon:1\turn:lsid:dyntaxa.se:Taxon:1\turn:lsid:dyntaxa.se:Taxon:2\tGadus morhua\tspecies\taccepted\t",
        "urn:lsid:dyntaxa.se:Taxon:2\turn:lsid:dyntaxa.se:Taxon:2\t\tGadus\tgenus\taccepted\t",
        "urn:lsid:dyntaxa.se:TaxonName:2\turn:lsid:dyntaxa.se:Taxon:1\t\tGadus callarias\tspecies\tsynonym\t",
        "urn:lsid:dyntaxa.se:TaxonName:1\turn:lsid:dyntaxa.se:Taxon:1\t\tMorhua vulgaris\tspecies\tsynonym\t",
    ];
    let checklist = parse_checklist_text(&checklist_text(&rows), &LoadOptions::default()).unwrap();
    let engine = TaxonEngine::from_checklist(checklist, None);

    let info = engine.get_info(&RecordFilter::new().with("id_tag", "Taxon").with("id", "1")).unwrap();
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].get("taxon_hierarchy").as_deref(), Some("Gadus - Gadus morhua"));

    assert_eq!(engine.get_id_with_synonyms("Gadus callarias").as_deref(), Some("1"));
    assert_eq!(engine.get_id_with_synonyms("Morhua vulgaris").as_deref(), Some("1"));
    assert!(engine.check().is_clean());
}
