//! Per-term postings and rarity weight.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Read-only corpus statistics an entry needs to compute its weight and
/// to score its postings.
///
/// Built by [`Index`](crate::index::Index) from its own tables and
/// handed to [`IndexEntry::compute`] and [`IndexEntry::frequencies`].
#[derive(Debug, Clone, Copy)]
pub struct CorpusStats<'a> {
    /// Number of entities known to the index.
    pub corpus_size: u64,

    /// Normalization floor applied to per-entity term totals.
    pub min_terms: f64,

    /// Total indexed term occurrences per entity.
    pub terms_per_entity: &'a AHashMap<String, u64>,
}

/// The set of entities containing one term, with the term's corpus-wide
/// rarity weight.
///
/// Postings record how often the term was observed per entity; counts
/// only ever grow. The idf weight is 0.0 until [`compute`] runs and
/// reflects the corpus snapshot at the most recent call; if the corpus
/// changes afterwards the weight is stale until recomputed.
///
/// The serialized interchange form is `{ "entities": { id: count } }`;
/// idf is never persisted and must be recomputed after reload.
///
/// [`compute`]: IndexEntry::compute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Inverse document frequency of this term, 0.0 until computed.
    #[serde(skip)]
    idf: f64,

    /// Occurrence count per entity containing this term.
    #[serde(rename = "entities")]
    postings: BTreeMap<String, u64>,
}

impl IndexEntry {
    /// Create an empty entry.
    pub fn new() -> Self {
        IndexEntry::default()
    }

    /// Record one more occurrence of this term for the given entity.
    pub fn add(&mut self, entity_id: &str) {
        *self.postings.entry(entity_id.to_string()).or_insert(0) += 1;
    }

    /// Recompute the idf weight from the current corpus snapshot.
    ///
    /// Uses the smoothed BM25 form
    /// `ln(1 + (N - n + 0.5) / (n + 0.5))` where `N` is the corpus size
    /// and `n` the number of distinct entities containing this term.
    /// Idempotent for an unchanged snapshot; must be rerun whenever the
    /// corpus size or these postings change.
    pub fn compute(&mut self, stats: CorpusStats) {
        let total = stats.corpus_size as f64;
        let entities = self.postings.len() as f64;
        let ratio = (total - entities + 0.5) / (entities + 0.5);
        self.idf = ratio.max(0.0).ln_1p();
    }

    /// Weighted term-frequency scores, one per entity containing this
    /// term.
    ///
    /// Yields `(entity_id, idf * tf)` with
    /// `tf = count / max(terms_per_entity[id], min_terms)`. The floor
    /// keeps entities with very few indexed terms from blowing up the
    /// score. Iteration order is entity id ascending; callers needing
    /// ranked output must sort the accumulated totals themselves.
    pub fn frequencies<'a>(&'a self, stats: CorpusStats<'a>) -> impl Iterator<Item = (&'a str, f64)> {
        let idf = self.idf;
        self.postings
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(move |(entity_id, &count)| {
                let terms = stats
                    .terms_per_entity
                    .get(entity_id)
                    .copied()
                    .unwrap_or(0) as f64;
                let divisor = terms.max(stats.min_terms);
                let tf = if divisor > 0.0 {
                    count as f64 / divisor
                } else {
                    0.0
                };
                (entity_id.as_str(), tf * idf)
            })
    }

    /// The current idf weight.
    pub fn idf(&self) -> f64 {
        self.idf
    }

    /// The postings map: occurrence count per entity.
    pub fn postings(&self) -> &BTreeMap<String, u64> {
        &self.postings
    }

    /// Number of distinct entities containing this term.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check whether no entity contains this term.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
