use std::collections::{HashMap, HashSet};

use crate::core::record::TaxonRecord;
use crate::utils::normalize::name_key;

/// Case- and whitespace-insensitive set of allowed scientific names
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    keys: HashSet<String>,
}

impl NameFilter {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keys: names.into_iter().map(|n| name_key(n.as_ref())).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(&name_key(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Lookup structures over the records of one checklist.
///
/// Identifier lookups always see every record so that ancestor chains stay
/// intact. Name lookups only see records admitted by the optional
/// [`NameFilter`].
#[derive(Debug)]
pub struct TaxonIndex {
    /// All records in input order
    records: Vec<TaxonRecord>,

    /// Index: id -> positions of records carrying that id
    by_id: HashMap<String, Vec<usize>>,

    /// Index: scientific name -> positions, in input order
    by_name: HashMap<String, Vec<usize>>,

    /// Whether a name filter narrowed `by_name`
    filtered: bool,
}

impl TaxonIndex {
    /// Build the index, optionally restricting name lookups to `filter`
    pub fn build(records: Vec<TaxonRecord>, filter: Option<&NameFilter>) -> Self {
        let mut by_id: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, record) in records.iter().enumerate() {
            by_id.entry(record.id.clone()).or_default().push(pos);

            if filter.map_or(true, |f| f.contains(&record.scientific_name)) {
                by_name
                    .entry(record.scientific_name.clone())
                    .or_default()
                    .push(pos);
            }
        }

        Self {
            records,
            by_id,
            by_name,
            filtered: filter.is_some(),
        }
    }

    /// All records in input order
    #[must_use]
    pub fn records(&self) -> &[TaxonRecord] {
        &self.records
    }

    /// Record at a position returned by one of the position lookups
    #[must_use]
    pub fn record(&self, pos: usize) -> &TaxonRecord {
        &self.records[pos]
    }

    /// The record with `id`, if exactly one carries it in any namespace
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TaxonRecord> {
        match self.positions_with_id(id) {
            [pos] => Some(&self.records[*pos]),
            _ => None,
        }
    }

    /// The record with `id` in namespace `tag`, if exactly one carries it
    #[must_use]
    pub fn get_in_namespace(&self, id: &str, tag: &str) -> Option<&TaxonRecord> {
        match self.positions_referenced(id, tag).as_slice() {
            [pos] => Some(&self.records[*pos]),
            _ => None,
        }
    }

    /// Positions of every record carrying `id`, across namespaces
    #[must_use]
    pub fn positions_with_id(&self, id: &str) -> &[usize] {
        self.by_id.get(id).map_or(&[], Vec::as_slice)
    }

    /// Positions of the records a `tag:id` reference points at.
    ///
    /// An empty tag matches every namespace.
    #[must_use]
    pub fn positions_referenced(&self, id: &str, tag: &str) -> Vec<usize> {
        self.positions_with_id(id)
            .iter()
            .copied()
            .filter(|&pos| self.records[pos].is_referenced_by(id, tag))
            .collect()
    }

    /// Positions of records named `name` that pass the name filter
    #[must_use]
    pub fn positions_named(&self, name: &str) -> &[usize] {
        self.by_name.get(name).map_or(&[], Vec::as_slice)
    }

    /// Records named `name` that pass the name filter, in input order
    pub fn records_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a TaxonRecord> + 'a {
        self.positions_named(name)
            .iter()
            .map(move |&pos| &self.records[pos])
    }

    /// Scientific names visible to name lookups
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// Ids carried by more than one record of the same namespace, as
    /// `tag:id` (or the bare id when untagged)
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen: HashMap<(&str, &str), usize> = HashMap::new();
        for record in &self.records {
            *seen.entry((record.id_tag.as_str(), record.id.as_str())).or_default() += 1;
        }

        let mut ids: Vec<String> = seen
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|((tag, id), _)| {
                if tag.is_empty() {
                    id.to_string()
                } else {
                    format!("{tag}:{id}")
                }
            })
            .collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
