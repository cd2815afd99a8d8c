use serde::{Deserialize, Serialize};

/// Column names that carry the fields every checklist must provide.
///
/// The defaults are the Darwin Core terms used by `Taxon.csv` exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistColumns {
    pub taxon_id: String,
    pub scientific_name: String,
    pub rank: String,
    pub taxonomic_status: String,
    pub accepted_name_usage_id: String,
    pub parent_name_usage_id: String,
}

impl Default for ChecklistColumns {
    fn default() -> Self {
        Self {
            taxon_id: "taxonId".to_string(),
            scientific_name: "scientificName".to_string(),
            rank: "taxonRank".to_string(),
            taxonomic_status: "taxonomicStatus".to_string(),
            accepted_name_usage_id: "acceptedNameUsageID".to_string(),
            parent_name_usage_id: "parentNameUsageID".to_string(),
        }
    }
}

impl ChecklistColumns {
    /// Required column names in a fixed order
    #[must_use]
    pub fn required(&self) -> [&str; 6] {
        [
            &self.taxon_id,
            &self.scientific_name,
            &self.rank,
            &self.taxonomic_status,
            &self.accepted_name_usage_id,
            &self.parent_name_usage_id,
        ]
    }
}

/// Field-value filter used to select records.
///
/// Keys are raw column names or one of the derived keys `id`, `id_tag`,
/// `accepted_id`, `accepted_tag`, `parent_id` and `parent_tag`. A record matches when every pair matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub conditions: Vec<(String, String)>,
}

impl RecordFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `column == value` condition
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.conditions.push((column.into(), value.into()));
        self
    }

    /// Parse a `COLUMN=VALUE` expression as given on the command line
    ///
    /// # Errors
    ///
    /// Returns a message if the expression has no `=` or an empty column.
    pub fn parse_condition(expr: &str) -> Result<(String, String), String> {
        let (column, value) = expr
            .split_once('=')
            .ok_or_else(|| format!("expected COLUMN=VALUE, got '{expr}'"))?;
        let column = column.trim();
        if column.is_empty() {
            return Err(format!("empty column name in '{expr}'"));
        }
        Ok((column.to_string(), value.trim().to_string()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
