//! Name resolution and the query engine.
//!
//! This module provides the query surface over a loaded checklist:
//!
//! - [`TaxonEngine`]: Main entry point; owns the index and memoized results
//! - [`AcceptedNames`]: Scientific name to accepted record table
//! - [`TaxonInfo`]: A record enriched with its ranked ancestry
//!
//! ## Resolution
//!
//! A name resolves to the record carrying it with status `accepted`. Synonym
//! redirection through `acceptedNameUsageID` is available separately via
//! [`TaxonEngine::resolve_with_synonyms`]. Absence is `None`, never an error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use taxon_solver::{LoadOptions, RecordFilter, TaxonEngine};
//! use std::path::Path;
//!
//! let engine = TaxonEngine::load(Path::new("Taxon.csv"), &LoadOptions::default(), None).unwrap();
//!
//! if let Some(id) = engine.get_id("Gadus morhua") {
//!     let info = engine.get_info(&RecordFilter::new().with("id", id)).unwrap();
//!     for taxon in &info {
//!         println!("{}", taxon.hierarchy.rendered());
//!     }
//! }
//! ```

pub mod engine;
pub mod resolver;

pub use engine::{ChecklistReport, TaxonEngine, TaxonInfo};
pub use resolver::{AcceptedNames, ResolveError};
