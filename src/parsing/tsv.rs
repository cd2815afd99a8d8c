use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use crate::parsing::decode_text;

/// One table row keyed by header column
pub type Row = BTreeMap<String, String>;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("Table has no header row")]
    MissingHeader,

    #[error("Table header lacks required column '{0}'")]
    MissingColumn(String),
}

/// A small tab-separated table: header plus rows
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Lowercase every header column, re-keying rows to match
    #[must_use]
    pub fn with_lowercase_header(self) -> Self {
        let header = self.header.iter().map(|c| c.to_lowercase()).collect();
        let rows = self
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect())
            .collect();
        Self { header, rows }
    }

    /// Fail unless every named column is present in the header
    ///
    /// # Errors
    ///
    /// Returns `TableError::MissingColumn` naming the first absent column.
    pub fn require_columns(&self, columns: &[&str]) -> Result<(), TableError> {
        for column in columns {
            if !self.header.iter().any(|c| c == column) {
                return Err(TableError::MissingColumn((*column).to_string()));
            }
        }
        Ok(())
    }
}

/// Read a tab-separated table from a file
///
/// # Errors
///
/// Returns `TableError::Io` if the file cannot be read,
/// `TableError::UnknownEncoding` for an unsupported label, or
/// `TableError::MissingHeader` if the file holds no non-blank line.
pub fn read_table(path: &Path, encoding: &str) -> Result<Table, TableError> {
    let bytes = std::fs::read(path)?;
    let text = decode_text(&bytes, encoding, path)
        .ok_or_else(|| TableError::UnknownEncoding(encoding.to_string()))?;
    parse_table_text(&text)
}

/// Parse tab-separated text into a table.
///
/// Blank lines are skipped and every field is trimmed. The first non-blank
/// line is the header; short rows leave trailing columns absent.
///
/// # Errors
///
/// Returns `TableError::MissingHeader` if the text holds no non-blank line.
pub fn parse_table_text(text: &str) -> Result<Table, TableError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header: Vec<String> = lines
        .next()
        .ok_or(TableError::MissingHeader)?
        .split('\t')
        .map(|c| c.trim().to_string())
        .collect();

    let rows = lines
        .map(|line| {
            header
                .iter()
                .cloned()
                .zip(line.split('\t').map(|v| v.trim().to_string()))
                .collect()
        })
        .collect();

    Ok(Table { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_text() {
        let tsv = "scientific_name\trank\nGadus morhua\tspecies\n\nAbra alba \tspecies\n";
        let table = parse_table_text(tsv).unwrap();

        assert_eq!(table.header, vec!["scientific_name", "rank"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1]["scientific_name"], "Abra alba");
    }

    #[test]
    fn test_short_rows() {
        let table = parse_table_text("a\tb\tc\n1\t2\n").unwrap();
        assert_eq!(table.rows[0].get("b").map(String::as_str), Some("2"));
        assert!(table.rows[0].get("c").is_none());
    }

    #[test]
    fn test_empty_table() {
        assert!(matches!(
            parse_table_text("\n  \n"),
            Err(TableError::MissingHeader)
        ));
    }

    #[test]
    fn test_lowercase_header() {
        let table = parse_table_text("TaxonId\tSvenskt namn\n1\ttorsk\n")
            .unwrap()
            .with_lowercase_header();
        assert_eq!(table.header, vec!["taxonid", "svenskt namn"]);
        assert_eq!(table.rows[0]["svenskt namn"], "torsk");
        assert!(table.require_columns(&["taxonid"]).is_ok());
        assert!(table.require_columns(&["missing"]).is_err());
    }
}
