use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::catalog::hierarchy::{build_hierarchy, Hierarchy, HierarchyError};
use crate::catalog::index::{NameFilter, TaxonIndex};
use crate::core::record::TaxonRecord;
use crate::core::types::RecordFilter;
use crate::matching::resolver::{AcceptedNames, ResolveError};
use crate::parsing::checklist::{load_checklist, Checklist, LoadError, LoadOptions};

/// Key under which the rendered hierarchy is reported
pub const HIERARCHY_KEY: &str = "taxon_hierarchy";

/// A checklist record enriched with its ancestry
#[derive(Debug, Clone)]
pub struct TaxonInfo {
    pub record: TaxonRecord,
    pub hierarchy: Arc<Hierarchy>,
}

impl TaxonInfo {
    /// Raw columns, then `taxon_hierarchy`, then one entry per ancestor rank.
    ///
    /// A rank named like an existing column replaces that column's value.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .record
            .fields()
            .map(|(c, v)| (c.to_string(), v.to_string()))
            .collect();

        let extra = std::iter::once((HIERARCHY_KEY, self.hierarchy.rendered()))
            .chain(
                self.hierarchy
                    .ranks
                    .iter()
                    .map(|(rank, name)| (rank.as_str(), name.clone())),
            );

        for (key, value) in extra {
            match entries.iter_mut().find(|(k, _)| k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key.to_string(), value)),
            }
        }
        entries
    }

    /// Value of a raw column, `taxon_hierarchy`, or an ancestor rank
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl Serialize for TaxonInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A name with more than one accepted record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbiguousName {
    pub name: String,
    pub ids: Vec<String>,
}

/// A record whose parent chain cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenChain {
    pub taxon_id: String,
    pub scientific_name: String,
    pub error: String,
}

/// Data-quality summary of a loaded checklist
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChecklistReport {
    pub source: Option<PathBuf>,
    pub records: usize,
    pub comment_rows: usize,
    pub skipped_rows: usize,
    pub accepted_names: usize,
    pub duplicate_ids: Vec<String>,
    pub ambiguous_names: Vec<AmbiguousName>,
    pub broken_chains: Vec<BrokenChain>,
}

impl ChecklistReport {
    /// Whether the checklist has no integrity problems
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty()
            && self.ambiguous_names.is_empty()
            && self.broken_chains.is_empty()
    }
}

/// Query entry point over one loaded checklist.
///
/// The index is immutable after construction. Name resolution is answered
/// from a table built with the index; hierarchies are memoized per record on
/// first use and live as long as the engine.
#[derive(Debug)]
pub struct TaxonEngine {
    index: TaxonIndex,
    accepted: AcceptedNames,
    hierarchies: RwLock<HashMap<usize, Arc<Hierarchy>>>,
    source: Option<PathBuf>,
    comment_rows: usize,
    skipped_rows: usize,
}

impl TaxonEngine {
    /// Load a checklist file and index it
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the checklist cannot be read or has no usable
    /// header.
    pub fn load(
        path: &Path,
        options: &LoadOptions,
        filter: Option<&NameFilter>,
    ) -> Result<Self, LoadError> {
        let checklist = load_checklist(path, options)?;
        Ok(Self::from_checklist(checklist, filter))
    }

    /// Index an already parsed checklist
    pub fn from_checklist(checklist: Checklist, filter: Option<&NameFilter>) -> Self {
        let Checklist {
            source,
            records,
            comment_rows,
            skipped_rows,
            ..
        } = checklist;

        let index = TaxonIndex::build(records, filter);
        let accepted = AcceptedNames::build(&index);

        debug!(
            "Indexed {} records, {} accepted names{}",
            index.len(),
            accepted.len(),
            if index.is_filtered() { " (name filter active)" } else { "" }
        );

        Self {
            index,
            accepted,
            hierarchies: RwLock::new(HashMap::new()),
            source,
            comment_rows,
            skipped_rows,
        }
    }

    #[must_use]
    pub fn index(&self) -> &TaxonIndex {
        &self.index
    }

    /// Accepted record for `name`, or `None`
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&TaxonRecord> {
        self.accepted
            .position(&self.index, name)
            .map(|pos| self.index.record(pos))
    }

    /// Accepted record for `name`, treating duplicate accepted names as an error
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::AmbiguousName` when several accepted records
    /// share `name`.
    pub fn resolve_strict(&self, name: &str) -> Result<Option<&TaxonRecord>, ResolveError> {
        Ok(self
            .accepted
            .position_strict(&self.index, name)?
            .map(|pos| self.index.record(pos)))
    }

    /// Accepted record for `name`, following a synonym's accepted id
    #[must_use]
    pub fn resolve_with_synonyms(&self, name: &str) -> Option<&TaxonRecord> {
        self.accepted
            .position_with_synonyms(&self.index, name)
            .map(|pos| self.index.record(pos))
    }

    /// Normalized id of the accepted record for `name`
    #[must_use]
    pub fn get_id(&self, name: &str) -> Option<String> {
        self.resolve(name).map(|r| r.id.clone())
    }

    /// Like [`Self::get_id`], redirecting synonyms
    #[must_use]
    pub fn get_id_with_synonyms(&self, name: &str) -> Option<String> {
        self.resolve_with_synonyms(name).map(|r| r.id.clone())
    }

    /// Hierarchy of the accepted record for `name`
    ///
    /// # Errors
    ///
    /// Returns a `HierarchyError` if the record's parent chain is broken.
    pub fn hierarchy_for(&self, name: &str) -> Result<Option<Arc<Hierarchy>>, HierarchyError> {
        self.accepted
            .position(&self.index, name)
            .map(|pos| self.hierarchy_at(pos))
            .transpose()
    }

    /// Every record matching `filter`, each with its ancestry.
    ///
    /// An empty filter matches every record.
    ///
    /// # Errors
    ///
    /// Returns the first `HierarchyError` met; no partial result is returned.
    pub fn get_info(&self, filter: &RecordFilter) -> Result<Vec<TaxonInfo>, HierarchyError> {
        self.index
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| matches_filter(record, filter))
            .map(|(pos, record)| -> Result<TaxonInfo, HierarchyError> {
                Ok(TaxonInfo {
                    record: record.clone(),
                    hierarchy: self.hierarchy_at(pos)?,
                })
            })
            .collect()
    }

    fn hierarchy_at(&self, pos: usize) -> Result<Arc<Hierarchy>, HierarchyError> {
        if let Some(cached) = self
            .hierarchies
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&pos)
        {
            return Ok(Arc::clone(cached));
        }

        let hierarchy = Arc::new(build_hierarchy(&self.index, self.index.record(pos))?);
        self.hierarchies
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(pos, Arc::clone(&hierarchy));
        Ok(hierarchy)
    }

    /// Audit the checklist for duplicate ids, duplicate accepted names and
    /// unresolvable parent chains
    #[must_use]
    pub fn check(&self) -> ChecklistReport {
        let ambiguous_names = self
            .accepted
            .ambiguous(&self.index)
            .map(|(name, ids)| AmbiguousName {
                name: name.to_string(),
                ids: ids.into_iter().map(str::to_string).collect(),
            })
            .collect();

        let broken_chains = self
            .index
            .records()
            .iter()
            .enumerate()
            .filter_map(|(pos, record)| {
                self.hierarchy_at(pos)
                    .err()
                    .map(|e| BrokenChain {
                        taxon_id: record.id.clone(),
                        scientific_name: record.scientific_name.clone(),
                        error: e.to_string(),
                    })
            })
            .collect();

        ChecklistReport {
            source: self.source.clone(),
            records: self.index.len(),
            comment_rows: self.comment_rows,
            skipped_rows: self.skipped_rows,
            accepted_names: self.accepted.len(),
            duplicate_ids: self.index.duplicate_ids(),
            ambiguous_names,
            broken_chains,
        }
    }

    /// File the checklist was loaded from, if any
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn matches_filter(record: &TaxonRecord, filter: &RecordFilter) -> bool {
    filter
        .conditions
        .iter()
        .all(|(key, value)| record.field(key) == Some(value.as_str()))
}
