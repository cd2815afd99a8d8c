//! Parsers for checklist and reference-table files.
//!
//! This module provides parsers for:
//!
//! - **Taxon checklists**: Darwin Core style `Taxon.csv` exports, tab separated
//! - **Lookup tables**: small tab-separated files (whitelist, red list,
//!   translation table) read into header-keyed rows
//!
//! ## Example
//!
//! ```rust,no_run
//! use taxon_solver::parsing::checklist::{load_checklist, LoadOptions};
//! use std::path::Path;
//!
//! let checklist = load_checklist(Path::new("Taxon.csv"), &LoadOptions::default()).unwrap();
//! println!("{} records", checklist.records.len());
//! ```
//!
//! ## Encodings
//!
//! Files are decoded with a caller-declared WHATWG label such as `utf-8` or
//! `windows-1252`. A byte-order mark, when present, takes precedence.

use std::path::Path;

use encoding_rs::Encoding;
use tracing::warn;

pub mod checklist;
pub mod tsv;

/// Decode raw bytes with the encoding named by `label`.
///
/// Returns `None` if the label is not a known encoding. Malformed sequences
/// are replaced and reported as a warning.
pub(crate) fn decode_text(bytes: &[u8], label: &str, source: &Path) -> Option<String> {
    let encoding = Encoding::for_label(label.trim().as_bytes())?;

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(
            "Malformed {} sequences replaced while decoding {}",
            used.name(),
            source.display()
        );
    }
    Some(text.into_owned())
}
