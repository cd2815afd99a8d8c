//! Core data types for taxon resolution.
//!
//! - [`TaxonRecord`]: one parsed checklist row with its derived identifiers
//! - [`ChecklistColumns`]: names of the columns the engine relies on
//! - [`RecordFilter`]: field-value selection used by `get_info`
//!
//! ## Identifiers
//!
//! Checklist identifiers are namespaced, for example
//! `urn:lsid:dyntaxa.se:Taxon:6011638`. Records are indexed on the trailing
//! segment (`6011638`); the segment before it (`Taxon`) is kept as
//! [`TaxonRecord::id_tag`].

pub mod record;
pub mod types;

pub use record::TaxonRecord;
pub use types::{ChecklistColumns, RecordFilter};
