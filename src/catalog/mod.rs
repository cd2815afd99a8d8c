//! Checklist indexing and hierarchy reconstruction.
//!
//! A loaded checklist is indexed once by [`index::TaxonIndex`]:
//!
//! - **by id**: every record, multiplicity retained so that broken reference
//!   data surfaces as an error instead of a guessed answer
//! - **by name**: records sharing a scientific name, in input order, optionally
//!   narrowed to a whitelist
//!
//! [`hierarchy::build_hierarchy`] walks `parent_id` links upward to produce
//! the ranked ancestry of a record.
//!
//! ## Example
//!
//! ```rust,no_run
//! use taxon_solver::catalog::hierarchy::build_hierarchy;
//! use taxon_solver::catalog::index::TaxonIndex;
//! use taxon_solver::parsing::checklist::{load_checklist, LoadOptions};
//! use std::path::Path;
//!
//! let checklist = load_checklist(Path::new("Taxon.csv"), &LoadOptions::default()).unwrap();
//! let index = TaxonIndex::build(checklist.records, None);
//!
//! if let Some(record) = index.get("206199") {
//!     let hierarchy = build_hierarchy(&index, record).unwrap();
//!     println!("{}", hierarchy.rendered());
//! }
//! ```

pub mod hierarchy;
pub mod index;
