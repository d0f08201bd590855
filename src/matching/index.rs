use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::core::record::Record;

/// Find every 1-based character offset at which `needle` occurs in
/// `haystack`, overlapping occurrences included.
///
/// Both strings are compared as given; callers uppercase them first. After a
/// hit the search resumes one character after its start, so `"AA"` in
/// `"AAAA"` yields `[1, 2, 3]`. An empty needle matches once, at offset 1.
#[must_use]
pub fn find_all(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return vec![1];
    }

    let mut offsets = Vec::new();
    let mut from = 0usize;
    let mut chars_before = 0usize;

    while let Some(rel) = haystack[from..].find(needle) {
        let start = from + rel;
        chars_before += haystack[from..start].chars().count();
        offsets.push(chars_before + 1);

        let step = haystack[start..].chars().next().map_or(1, char::len_utf8);
        from = start + step;
        chars_before += 1;
    }

    offsets
}

/// Case-insensitive variant of [`find_all`]: both strings are uppercased
#[must_use]
pub fn find_occurrences(reference: &str, query: &str) -> Vec<usize> {
    find_all(&reference.to_uppercase(), &query.to_uppercase())
}

/// Offsets of one query within one reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceHits {
    pub reference: String,
    pub offsets: Vec<usize>,
}

/// All reference hits for one query, in reference order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryHits {
    pub query: String,
    pub references: Vec<ReferenceHits>,
}

impl QueryHits {
    /// Offsets within the named reference, if that reference exists
    #[must_use]
    pub fn offsets(&self, reference: &str) -> Option<&[usize]> {
        self.references
            .iter()
            .find(|r| r.reference == reference)
            .map(|r| r.offsets.as_slice())
    }

    /// Total number of hits over all references
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.references.iter().map(|r| r.offsets.len()).sum()
    }
}

impl Serialize for QueryHits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.references.len()))?;
        for hits in &self.references {
            map.serialize_entry(&hits.reference, &hits.offsets)?;
        }
        map.end()
    }
}

/// Query id -> reference id -> offsets.
///
/// Every query maps to every reference, with an empty offset list when there
/// is no hit. Queries keep their first-insertion order; inserting a query id
/// that already exists replaces its hits in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTable {
    queries: Vec<QueryHits>,
    positions: HashMap<String, usize>,
}

impl MatchTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, hits: QueryHits) {
        if let Some(&idx) = self.positions.get(&hits.query) {
            self.queries[idx] = hits;
        } else {
            self.positions.insert(hits.query.clone(), self.queries.len());
            self.queries.push(hits);
        }
    }

    #[must_use]
    pub fn get(&self, query: &str) -> Option<&QueryHits> {
        self.positions.get(query).map(|&idx| &self.queries[idx])
    }

    /// Offsets of `query` within `reference`
    #[must_use]
    pub fn offsets(&self, query: &str, reference: &str) -> Option<&[usize]> {
        self.get(query)?.offsets(reference)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryHits> {
        self.queries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

impl Serialize for MatchTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.queries.len()))?;
        for hits in &self.queries {
            map.serialize_entry(&hits.query, hits)?;
        }
        map.end()
    }
}

/// A reference prepared for searching
#[derive(Debug, Clone)]
struct IndexedReference {
    uppercase: String,
    /// Output slot; repeated reference ids share the slot of their first occurrence
    slot: usize,
}

/// Exhaustive exact-match index over a set of references.
///
/// References are uppercased once at construction. Each query is then
/// scanned against every reference.
#[derive(Debug, Clone)]
pub struct MatchIndex {
    references: Vec<IndexedReference>,
    /// Unique reference ids in first-occurrence order
    reference_ids: Vec<String>,
}

impl MatchIndex {
    #[must_use]
    pub fn new(references: &[Record]) -> Self {
        let mut reference_ids: Vec<String> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut indexed = Vec::with_capacity(references.len());

        for record in references {
            let slot = *slots.entry(record.header.as_str()).or_insert_with(|| {
                reference_ids.push(record.header.clone());
                reference_ids.len() - 1
            });
            indexed.push(IndexedReference {
                uppercase: record.residues.to_uppercase(),
                slot,
            });
        }

        Self {
            references: indexed,
            reference_ids,
        }
    }

    /// Number of distinct reference ids
    #[must_use]
    pub fn reference_count(&self) -> usize {
        self.reference_ids.len()
    }

    /// Search one query against every reference
    #[must_use]
    pub fn search(&self, query: &Record) -> QueryHits {
        let needle = query.residues.to_uppercase();

        let mut references: Vec<ReferenceHits> = self
            .reference_ids
            .iter()
            .map(|id| ReferenceHits {
                reference: id.clone(),
                offsets: Vec::new(),
            })
            .collect();

        for reference in &self.references {
            references[reference.slot].offsets = find_all(&reference.uppercase, &needle);
        }

        QueryHits {
            query: query.header.clone(),
            references,
        }
    }

    /// Search every query against every reference
    #[must_use]
    pub fn map_queries(&self, queries: &[Record]) -> MatchTable {
        let mut table = MatchTable::new();
        for query in queries {
            table.insert(self.search(query));
        }

        debug!(
            queries = table.len(),
            references = self.reference_count(),
            hits = table.iter().map(QueryHits::hit_count).sum::<usize>(),
            "Built match table"
        );

        table
    }
}
