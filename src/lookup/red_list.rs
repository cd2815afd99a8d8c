use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::parsing::tsv::{read_table, Row, Table, TableError};

/// Columns whose values are lookup keys, after header lowercasing
pub const KEY_COLUMNS: [&str; 3] = ["taxonid", "svenskt namn", "vetenskapligt namn"];

/// Conservation status rows keyed by taxon id, Swedish name or scientific name
#[derive(Debug, Clone, Default)]
pub struct RedList {
    path: Option<PathBuf>,
    header: Vec<String>,
    rows: Vec<Row>,
    by_key: HashMap<String, usize>,
}

impl RedList {
    /// Read a red list file
    ///
    /// # Errors
    ///
    /// Returns a `TableError` if the file cannot be read or lacks a key column.
    pub fn load(path: &Path, encoding: &str) -> Result<Self, TableError> {
        let mut red_list = Self::from_table(read_table(path, encoding)?)?;
        red_list.path = Some(path.to_path_buf());
        Ok(red_list)
    }

    /// Build a red list from a parsed table; header names are lowercased
    ///
    /// # Errors
    ///
    /// Returns `TableError::MissingColumn` if a key column is absent.
    pub fn from_table(table: Table) -> Result<Self, TableError> {
        let table = table.with_lowercase_header();
        table.require_columns(&KEY_COLUMNS)?;

        let mut by_key = HashMap::new();
        for (i, row) in table.rows.iter().enumerate() {
            for column in KEY_COLUMNS {
                if let Some(key) = row.get(column).filter(|k| !k.is_empty()) {
                    // later rows win, matching a plain dictionary load
                    by_key.insert(key.clone(), i);
                }
            }
        }

        Ok(Self {
            path: None,
            header: table.header,
            rows: table.rows,
            by_key,
        })
    }

    /// Row whose taxon id, Swedish name or scientific name equals `key`
    #[must_use]
    pub fn get_info(&self, key: &str) -> Option<&Row> {
        self.by_key.get(key).map(|&i| &self.rows[i])
    }

    /// Every lookup key, sorted
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.by_key.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Lowercased header columns
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// File name the list was read from
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
