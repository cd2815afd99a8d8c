//! Ancestor hierarchy reconstruction.
//!
//! A hierarchy is built by following `parent_id` links from a record up to the
//! root. A parent reference carries a namespace (`Taxon:1234`) and must
//! resolve to exactly one record of that namespace; a chain may not visit the
//! same record twice.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::index::TaxonIndex;
use crate::core::record::TaxonRecord;

/// Separator between names in a rendered hierarchy
pub const HIERARCHY_SEPARATOR: &str = " - ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("Parent id '{parent_id}' matches {matches} records, expected exactly one")]
    AmbiguousParent { parent_id: String, matches: usize },

    #[error("Cyclic ancestry: taxon id '{taxon_id}' appears twice in its parent chain")]
    CyclicAncestry { taxon_id: String },
}

/// Ranked ancestry of one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    /// Ancestor name per rank; excludes the record itself
    pub ranks: BTreeMap<String, String>,
    /// Names from root to leaf; the last entry is the record itself
    pub ancestors: Vec<String>,
}

impl Hierarchy {
    /// Ancestor names joined root to leaf
    #[must_use]
    pub fn rendered(&self) -> String {
        self.ancestors.join(HIERARCHY_SEPARATOR)
    }

    /// Number of names in the chain, including the record itself
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }
}

/// Walk the parent chain of `record`
///
/// # Errors
///
/// Returns `HierarchyError::AmbiguousParent` when a parent id matches zero or
/// several records, or `HierarchyError::CyclicAncestry` when the chain loops.
pub fn build_hierarchy(index: &TaxonIndex, record: &TaxonRecord) -> Result<Hierarchy, HierarchyError> {
    let mut ranks = BTreeMap::new();
    let mut leaf_to_root = vec![record.scientific_name.clone()];

    let mut visited: HashSet<(&str, &str)> = HashSet::new();
    visited.insert((record.id_tag.as_str(), record.id.as_str()));

    let mut current = record;
    while !current.parent_id.is_empty() {
        let parent_id = current.parent_id.as_str();

        let parent = match index.positions_referenced(parent_id, &current.parent_tag).as_slice() {
            [pos] => index.record(*pos),
            matches => {
                return Err(HierarchyError::AmbiguousParent {
                    parent_id: parent_id.to_string(),
                    matches: matches.len(),
                })
            }
        };

        if !visited.insert((parent.id_tag.as_str(), parent.id.as_str())) {
            return Err(HierarchyError::CyclicAncestry {
                taxon_id: parent.id.clone(),
            });
        }

        // last writer wins when a rank repeats along the chain
        if !parent.rank.is_empty() {
            ranks.insert(parent.rank.clone(), parent.scientific_name.clone());
        }
        leaf_to_root.push(parent.scientific_name.clone());
        current = parent;
    }

    leaf_to_root.reverse();
    Ok(Hierarchy {
        ranks,
        ancestors: leaf_to_root,
    })
}
