use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::catalog::index::NameFilter;
use crate::parsing::tsv::{read_table, Row, Table, TableError};
use crate::utils::normalize::name_key;

/// Column holding the whitelisted name
pub const SPECIES_COLUMN: &str = "scientific_name";

/// Controlled list of scientific names.
///
/// Lookups ignore case and whitespace; the stored spelling is returned.
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    path: Option<PathBuf>,
    header: Vec<String>,
    rows: HashMap<String, Row>,
}

impl Whitelist {
    /// Read a whitelist file
    ///
    /// # Errors
    ///
    /// Returns a `TableError` if the file cannot be read or lacks the
    /// `scientific_name` column.
    pub fn load(path: &Path, encoding: &str) -> Result<Self, TableError> {
        let mut whitelist = Self::from_table(read_table(path, encoding)?)?;
        whitelist.path = Some(path.to_path_buf());
        Ok(whitelist)
    }

    /// Build a whitelist from a parsed table
    ///
    /// # Errors
    ///
    /// Returns `TableError::MissingColumn` if `scientific_name` is absent.
    pub fn from_table(table: Table) -> Result<Self, TableError> {
        table.require_columns(&[SPECIES_COLUMN])?;

        let rows = table
            .rows
            .into_iter()
            .filter_map(|row| {
                let key = name_key(row.get(SPECIES_COLUMN)?);
                (!key.is_empty()).then_some((key, row))
            })
            .collect();

        Ok(Self {
            path: None,
            header: table.header,
            rows,
        })
    }

    /// Whitelisted spelling of `name`, if present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.rows
            .get(&name_key(name))
            .and_then(|row| row.get(SPECIES_COLUMN))
            .map(String::as_str)
    }

    /// Full row for `name`, if present
    #[must_use]
    pub fn row(&self, name: &str) -> Option<&Row> {
        self.rows.get(&name_key(name))
    }

    /// Whitelisted names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .rows
            .values()
            .filter_map(|row| row.get(SPECIES_COLUMN).map(String::as_str))
            .collect();
        names.sort_unstable();
        names
    }

    /// Name filter admitting exactly the whitelisted names
    #[must_use]
    pub fn name_filter(&self) -> NameFilter {
        NameFilter::from_names(self.names())
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
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
