use std::collections::HashMap;
use std::path::Path;

use crate::parsing::tsv::{read_table, Table, TableError};
use crate::utils::normalize::{is_comment, COMMENT_MARKER};

pub const FROM_COLUMN: &str = "taxon_name_from";
pub const TO_COLUMN: &str = "taxon_name_to";
/// Fallback id for names the checklist does not carry
pub const ID_COLUMN: &str = "taxon_id (if not in DynTaxa)";

/// A translation: target name plus optional fallback id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub name: String,
    pub taxon_id: String,
}

/// Translation table from external taxon names to checklist names
#[derive(Debug, Clone, Default)]
pub struct Translation {
    entries: HashMap<String, TranslationEntry>,
}

impl Translation {
    /// Read a translation table file
    ///
    /// # Errors
    ///
    /// Returns a `TableError` if the file cannot be read or lacks a required
    /// column.
    pub fn load(path: &Path, encoding: &str) -> Result<Self, TableError> {
        Self::from_table(read_table(path, encoding)?)
    }

    /// Build the translation from a parsed table, skipping comment rows
    ///
    /// # Errors
    ///
    /// Returns `TableError::MissingColumn` if the source or target column is
    /// absent.
    pub fn from_table(table: Table) -> Result<Self, TableError> {
        table.require_columns(&[FROM_COLUMN, TO_COLUMN])?;

        let mut entries = HashMap::new();
        for row in table.rows {
            let Some(from) = row.get(FROM_COLUMN) else {
                continue;
            };
            if from.is_empty() || is_comment(from, COMMENT_MARKER) {
                continue;
            }
            // first row for a name wins
            entries.entry(from.clone()).or_insert_with(|| TranslationEntry {
                name: row.get(TO_COLUMN).cloned().unwrap_or_default(),
                taxon_id: row.get(ID_COLUMN).cloned().unwrap_or_default(),
            });
        }

        Ok(Self { entries })
    }

    /// Checklist name for `name`, if translated to a non-empty name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .map(|e| e.name.as_str())
            .filter(|n| !n.is_empty())
    }

    /// Fallback id for `name`, if one is given
    #[must_use]
    pub fn get_taxon_id(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .map(|e| e.taxon_id.as_str())
            .filter(|id| !id.is_empty())
    }

    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&TranslationEntry> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tsv::parse_table_text;

    fn translation() -> Translation {
        let text = "taxon_name_from\ttaxon_name_to\ttaxon_id (if not in DynTaxa)\n\
            Gadus callarias\tGadus morhua\t\n\
            #Old name\tIgnored\t\n\
            Unknown flagellate\t\t900001\n\
            Gadus callarias\tSomething else\t\n";
        Translation::from_table(parse_table_text(text).unwrap()).unwrap()
    }

    #[test]
    fn test_get() {
        let translation = translation();
        assert_eq!(translation.get("Gadus callarias"), Some("Gadus morhua"));
        assert_eq!(translation.get("Gadus morhua"), None);
        assert_eq!(translation.get("Unknown flagellate"), None);
    }

    #[test]
    fn test_get_taxon_id() {
        let translation = translation();
        assert_eq!(translation.get_taxon_id("Unknown flagellate"), Some("900001"));
        assert_eq!(translation.get_taxon_id("Gadus callarias"), None);
    }

    #[test]
    fn test_comment_rows_skipped() {
        let translation = translation();
        assert!(translation.entry("#Old name").is_none());
        assert_eq!(translation.len(), 2);
    }

    #[test]
    fn test_id_column_optional() {
        let table = parse_table_text("taxon_name_from\ttaxon_name_to\nA\tB\n").unwrap();
        let translation = Translation::from_table(table).unwrap();
        assert_eq!(translation.get("A"), Some("B"));
        assert_eq!(translation.get_taxon_id("A"), None);
    }
}
