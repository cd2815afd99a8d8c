use std::sync::Arc;

use crate::core::types::ChecklistColumns;
use crate::utils::normalize::{last_segment, namespace_tag, ACCEPTED_STATUS};

/// One row of a taxonomic checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonRecord {
    /// Original compound identifier
    pub raw_id: String,

    /// Trailing segment of `raw_id`
    pub id: String,

    /// Namespace segment of `raw_id` (e.g. "Taxon")
    pub id_tag: String,

    pub scientific_name: String,

    /// Free-form rank label (species, genus, family, ...)
    pub rank: String,

    /// Source-defined status, e.g. "accepted" or "synonym"
    pub taxonomic_status: String,

    /// Identifier of the accepted record, empty when absent
    pub accepted_id: String,

    /// Namespace segment of the accepted-name reference
    pub accepted_tag: String,

    /// Identifier of the immediate parent, empty at the root
    pub parent_id: String,

    /// Namespace segment of the parent reference
    pub parent_tag: String,

    // === Pass-through columns ===
    /// Header shared by every record of one checklist
    columns: Arc<[String]>,

    /// Raw values, one per column
    values: Vec<String>,
}

impl TaxonRecord {
    /// Build a record from one row of raw values.
    ///
    /// `columns` and `values` must have the same length. Required columns
    /// missing from the header yield empty fields.
    pub fn from_row(columns: Arc<[String]>, values: Vec<String>, names: &ChecklistColumns) -> Self {
        debug_assert_eq!(columns.len(), values.len());

        let get = |name: &str| -> &str {
            columns
                .iter()
                .position(|c| c == name)
                .and_then(|i| values.get(i))
                .map_or("", String::as_str)
        };

        let raw_id = get(&names.taxon_id).to_string();
        let scientific_name = get(&names.scientific_name).trim().to_string();
        let rank = get(&names.rank).trim().to_string();
        let taxonomic_status = get(&names.taxonomic_status).trim().to_string();
        let accepted_ref = get(&names.accepted_name_usage_id);
        let parent_ref = get(&names.parent_name_usage_id);

        Self {
            id: last_segment(&raw_id),
            id_tag: namespace_tag(&raw_id),
            raw_id,
            scientific_name,
            rank,
            taxonomic_status,
            accepted_id: last_segment(accepted_ref),
            accepted_tag: namespace_tag(accepted_ref),
            parent_id: last_segment(parent_ref),
            parent_tag: namespace_tag(parent_ref),
            columns,
            values,
        }
    }

    /// Whether this record carries the accepted status
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.taxonomic_status == ACCEPTED_STATUS
    }

    /// Whether a reference `tag:id` points at this record.
    ///
    /// An empty tag matches any namespace.
    #[must_use]
    pub fn is_referenced_by(&self, id: &str, tag: &str) -> bool {
        self.id == id && (tag.is_empty() || self.id_tag == tag)
    }

    /// Whether this record is a chain root (no parent)
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }

    /// Look up a field by raw column name or derived key
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "id_tag" => Some(&self.id_tag),
            "accepted_id" => Some(&self.accepted_id),
            "accepted_tag" => Some(&self.accepted_tag),
            "parent_id" => Some(&self.parent_id),
            "parent_tag" => Some(&self.parent_tag),
            _ => self
                .columns
                .iter()
                .position(|c| c == key)
                .and_then(|i| self.values.get(i))
                .map(String::as_str),
        }
    }

    /// Raw (column, value) pairs in header order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}
