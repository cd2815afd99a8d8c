use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::record::TaxonRecord;
use crate::core::types::ChecklistColumns;
use crate::parsing::decode_text;
use crate::utils::normalize::{is_comment, COMMENT_MARKER};

/// Stand-in for literal double quotes while rows are split into columns.
///
/// Checklist exports contain unbalanced `"` inside names and remarks, which a
/// quote-aware reader would treat as field delimiters.
const QUOTE_PLACEHOLDER: char = '\u{E000}';

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("Checklist has no header row")]
    MissingHeader,

    #[error("Checklist header lacks required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid checklist header: {0}")]
    Header(#[from] csv::Error),
}

/// Options controlling how a checklist file is read
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// WHATWG encoding label, e.g. "utf-8" or "windows-1252"
    pub encoding: String,
    /// Names of the required columns
    pub columns: ChecklistColumns,
    /// Rows whose identifier starts with this character are discarded
    pub comment_marker: char,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
            columns: ChecklistColumns::default(),
            comment_marker: COMMENT_MARKER,
        }
    }
}

/// Parsed checklist: header plus records in input order
#[derive(Debug, Clone)]
pub struct Checklist {
    /// File the checklist was read from, if any
    pub source: Option<PathBuf>,
    /// Raw header columns
    pub columns: Arc<[String]>,
    /// Non-comment records in input order
    pub records: Vec<TaxonRecord>,
    /// Number of comment rows discarded
    pub comment_rows: usize,
    /// Number of malformed rows skipped
    pub skipped_rows: usize,
}

/// Load a tab-separated checklist file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read,
/// `LoadError::UnknownEncoding` for an unsupported encoding label, or a header
/// error if the file has no usable header row.
pub fn load_checklist(path: &Path, options: &LoadOptions) -> Result<Checklist, LoadError> {
    let bytes = std::fs::read(path)?;
    let text = decode_text(&bytes, &options.encoding, path)
        .ok_or_else(|| LoadError::UnknownEncoding(options.encoding.clone()))?;
    let mut checklist = parse_checklist_text(&text, options)?;
    checklist.source = Some(path.to_path_buf());

    debug!(
        "Loaded {} records from {} ({} comment rows, {} skipped)",
        checklist.records.len(),
        path.display(),
        checklist.comment_rows,
        checklist.skipped_rows
    );

    Ok(checklist)
}

/// Parse checklist text that has already been decoded
///
/// # Errors
///
/// Returns `LoadError::MissingHeader` if the text has no header row, or
/// `LoadError::MissingColumn` if a required column is absent.
pub fn parse_checklist_text(text: &str, options: &LoadOptions) -> Result<Checklist, LoadError> {
    let escaped = text.replace('"', &QUOTE_PLACEHOLDER.to_string());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true) // row width is checked below so bad rows can be skipped
        .has_headers(true)
        .from_reader(escaped.as_bytes());

    let columns: Arc<[String]> = reader
        .headers()?
        .iter()
        .map(|c| restore_quotes(c).trim().to_string())
        .collect();

    if columns.iter().all(String::is_empty) {
        return Err(LoadError::MissingHeader);
    }
    for required in options.columns.required() {
        if !columns.iter().any(|c| c == required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }
    let id_index = columns
        .iter()
        .position(|c| *c == options.columns.taxon_id)
        .ok_or_else(|| LoadError::MissingColumn(options.columns.taxon_id.clone()))?;

    let mut records = Vec::new();
    let mut comment_rows = 0;
    let mut skipped_rows = 0;

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping unreadable checklist row: {e}");
                skipped_rows += 1;
                continue;
            }
        };

        if row.get(id_index).is_some_and(|id| is_comment(id, options.comment_marker)) {
            comment_rows += 1;
            continue;
        }

        if row.len() != columns.len() {
            let line = row.position().map_or(0, csv::Position::line);
            warn!(
                "Skipping checklist line {line}: expected {} fields, found {}",
                columns.len(),
                row.len()
            );
            skipped_rows += 1;
            continue;
        }

        let values = row.iter().map(restore_quotes).collect();
        records.push(TaxonRecord::from_row(
            Arc::clone(&columns),
            values,
            &options.columns,
        ));
    }

    Ok(Checklist {
        source: None,
        columns,
        records,
        comment_rows,
        skipped_rows,
    })
}

fn restore_quotes(field: &str) -> String {
    field.replace(QUOTE_PLACEHOLDER, "\"")
}
