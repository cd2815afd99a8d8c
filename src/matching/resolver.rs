use std::collections::{BTreeMap, HashMap};

use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::index::TaxonIndex;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Name '{name}' has {} accepted records: {}", .ids.len(), .ids.join(", "))]
    AmbiguousName { name: String, ids: Vec<String> },
}

/// Table of accepted records per scientific name.
///
/// Built once from a [`TaxonIndex`]; every later resolution of a name is a
/// single map lookup returning the same record.
#[derive(Debug, Default)]
pub struct AcceptedNames {
    /// Name -> position of the first accepted record with that name
    by_name: HashMap<String, usize>,

    /// Names with more than one accepted record -> all their positions
    ambiguous: BTreeMap<String, Vec<usize>>,
}

impl AcceptedNames {
    pub fn build(index: &TaxonIndex) -> Self {
        let mut by_name = HashMap::new();
        let mut ambiguous = BTreeMap::new();

        for name in index.names() {
            let accepted: Vec<usize> = index
                .positions_named(name)
                .iter()
                .copied()
                .filter(|&pos| index.record(pos).is_accepted())
                .collect();

            let Some(&first) = accepted.first() else {
                continue;
            };
            by_name.insert(name.to_string(), first);

            if accepted.len() > 1 {
                debug!("{} accepted records share the name '{name}'", accepted.len());
                ambiguous.insert(name.to_string(), accepted);
            }
        }

        if !ambiguous.is_empty() {
            warn!(
                "{} scientific names have more than one accepted record",
                ambiguous.len()
            );
        }

        Self { by_name, ambiguous }
    }

    /// Position of the accepted record for `name`.
    ///
    /// When several accepted records share the name the first in input order
    /// is returned and a warning is logged.
    #[must_use]
    pub fn position(&self, index: &TaxonIndex, name: &str) -> Option<usize> {
        let pos = self.by_name.get(name).copied()?;
        if let Some(all) = self.ambiguous.get(name) {
            warn!(
                "Name '{name}' has {} accepted records; using id {}",
                all.len(),
                index.record(pos).id
            );
        }
        Some(pos)
    }

    /// Like [`Self::position`], but an ambiguous name is an error
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::AmbiguousName` when more than one accepted record
    /// carries `name`.
    pub fn position_strict(&self, index: &TaxonIndex, name: &str) -> Result<Option<usize>, ResolveError> {
        if let Some(all) = self.ambiguous.get(name) {
            return Err(ResolveError::AmbiguousName {
                name: name.to_string(),
                ids: all.iter().map(|&pos| index.record(pos).id.clone()).collect(),
            });
        }
        Ok(self.by_name.get(name).copied())
    }

    /// Resolve `name`, redirecting synonyms to their accepted record.
    ///
    /// An accepted record with the name wins. Otherwise the first record with
    /// the name whose accepted-name reference points at exactly one accepted
    /// record of the referenced namespace is followed.
    #[must_use]
    pub fn position_with_synonyms(&self, index: &TaxonIndex, name: &str) -> Option<usize> {
        if let Some(pos) = self.position(index, name) {
            return Some(pos);
        }

        index
            .positions_named(name)
            .iter()
            .map(|&pos| index.record(pos))
            .filter(|record| !record.accepted_id.is_empty())
            .find_map(|record| {
                match index
                    .positions_referenced(&record.accepted_id, &record.accepted_tag)
                    .as_slice()
                {
                    [target] if index.record(*target).is_accepted() => {
                        debug!(
                            "Redirected '{name}' ({}) to accepted id {}",
                            record.id, record.accepted_id
                        );
                        Some(*target)
                    }
                    _ => None,
                }
            })
    }

    /// Names with more than one accepted record, with their ids
    pub fn ambiguous<'a>(&'a self, index: &'a TaxonIndex) -> impl Iterator<Item = (&'a str, Vec<&'a str>)> + 'a {
        self.ambiguous.iter().map(move |(name, positions)| {
            (
                name.as_str(),
                positions
                    .iter()
                    .map(|&pos| index.record(pos).id.as_str())
                    .collect(),
            )
        })
    }

    /// Number of names that resolve to an accepted record
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
