//! # taxon-solver
//!
//! A library for resolving free-text scientific names against a taxonomic
//! checklist.
//!
//! Species names arrive from field protocols and lab systems in many forms:
//! synonyms, outdated spellings of accepted names, or names that exist in
//! several ranks. `taxon-solver` loads a Darwin Core style checklist and
//! answers two questions about a name: which stable identifier it has, and
//! where it sits in the taxonomy.
//!
//! ## Features
//!
//! - **Accepted-name resolution**: Maps a name to its accepted checklist record
//! - **Synonym redirection**: Follows `acceptedNameUsageID` to the accepted record
//! - **Hierarchy building**: Walks parent ids up to the root, one ancestor per rank
//! - **Integrity checks**: Reports duplicate ids, ambiguous names and broken chains
//! - **Lookup tables**: Whitelist, red list and translation tables
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use taxon_solver::{LoadOptions, RecordFilter, TaxonEngine};
//!
//! let engine = TaxonEngine::load(Path::new("Taxon.csv"), &LoadOptions::default(), None).unwrap();
//!
//! if let Some(id) = engine.get_id("Gadus morhua") {
//!     println!("Gadus morhua: {id}");
//! }
//!
//! let filter = RecordFilter::new().with("id", "206199");
//! for info in engine.get_info(&filter).unwrap() {
//!     println!("{}", info.hierarchy.rendered());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Record index and hierarchy building
//! - [`core`]: Checklist records and query types
//! - [`matching`]: Name resolution and the query engine
//! - [`parsing`]: Checklist and tab-separated table readers
//! - [`lookup`]: Whitelist, red list and translation tables
//! - [`config`]: Location of the reference files
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod lookup;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::hierarchy::{Hierarchy, HierarchyError};
pub use catalog::index::{NameFilter, TaxonIndex};
pub use core::record::TaxonRecord;
pub use core::types::*;
pub use matching::engine::{ChecklistReport, TaxonEngine, TaxonInfo};
pub use matching::resolver::ResolveError;
pub use parsing::checklist::{LoadError, LoadOptions};
