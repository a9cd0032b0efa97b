//! Index construction, weight computation and candidate ranking.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::{Read, Write};

use ahash::AHashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::entity::Entity;
use crate::error::{CognateError, Result};
use crate::index::entry::{CorpusStats, IndexEntry};

/// Configuration for index creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Normalization floor for per-entity term totals.
    ///
    /// Entities with fewer indexed terms than this are scored as if
    /// they had this many, which stops a record with one or two terms
    /// from dominating the ranking.
    pub min_terms: f64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig { min_terms: 3.0 }
    }
}

/// Statistics about an index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexStats {
    /// Number of distinct terms in the index.
    pub term_count: usize,

    /// Number of entities known to the index.
    pub entity_count: u64,

    /// Whether weights reflect the current corpus snapshot.
    pub committed: bool,
}

/// Serialized form of an index: counts only, no derived weights.
#[derive(Serialize, Deserialize)]
struct IndexSnapshot {
    entries: BTreeMap<String, IndexEntry>,
    terms_per_entity: BTreeMap<String, u64>,
    min_terms: f64,
    corpus_size: u64,
}

/// An inverted index over entity terms, used to generate and rank
/// candidate matches for a query entity.
///
/// Indexing accumulates postings; [`commit`] recomputes every term's
/// rarity weight for the current corpus snapshot; [`candidates`] ranks
/// other entities by accumulated weighted term overlap. Queries are
/// rejected until the index has been committed, since uncommitted
/// weights are all zero and would silently zero every score.
///
/// Writers are exclusive: indexing must not run concurrently with
/// queries against the same instance. For live query traffic, build a
/// fresh index and swap it in via
/// [`SharedIndex`](crate::index::SharedIndex).
///
/// # Examples
///
/// ```
/// use cognate::entity::{Entity, Property};
/// use cognate::index::Index;
///
/// let mut index = Index::default();
/// let a = Entity::builder("a").property(Property::Name, "Maria Gonzalez").build();
/// let b = Entity::builder("b").property(Property::Name, "Maria Gonzales").build();
/// index.index_entity(&a).unwrap();
/// index.index_entity(&b).unwrap();
/// index.commit();
///
/// let ranked = index.candidates(&a, None).unwrap();
/// assert_eq!(ranked[0].0, "b");
/// ```
///
/// [`commit`]: Index::commit
/// [`candidates`]: Index::candidates
pub struct Index {
    /// Tokenizer applied to entity text, both at indexing and query time.
    tokenizer: Box<dyn Tokenizer>,

    /// Term table: one entry per distinct term.
    entries: AHashMap<String, IndexEntry>,

    /// Total indexed term occurrences per entity.
    terms_per_entity: AHashMap<String, u64>,

    /// Normalization floor for per-entity term totals.
    min_terms: f64,

    /// Number of entities known to the index.
    corpus_size: u64,

    /// Whether weights reflect the current corpus snapshot.
    committed: bool,
}

impl Index {
    /// Create an empty index using the given tokenizer.
    pub fn new(tokenizer: Box<dyn Tokenizer>, config: IndexConfig) -> Self {
        Index {
            tokenizer,
            entries: AHashMap::new(),
            terms_per_entity: AHashMap::new(),
            min_terms: config.min_terms,
            corpus_size: 0,
            committed: false,
        }
    }

    /// Index one entity: tokenize its property values and accumulate
    /// postings for every produced term.
    ///
    /// Indexing the same entity twice double-counts its terms; callers
    /// own deduplication. Any previously computed weights go stale, so
    /// [`commit`](Index::commit) must run again before querying.
    pub fn index_entity(&mut self, entity: &Entity) -> Result<()> {
        let mut observed = 0u64;
        for value in entity.index_values() {
            for token in self.tokenizer.tokenize(value)? {
                self.entries.entry(token.text).or_default().add(entity.id());
                observed += 1;
            }
        }
        *self
            .terms_per_entity
            .entry(entity.id().to_string())
            .or_insert(0) += observed;
        self.corpus_size = self.terms_per_entity.len() as u64;
        self.committed = false;
        Ok(())
    }

    /// Recompute every term's rarity weight for the current corpus
    /// snapshot and mark the index queryable.
    ///
    /// Cost scales with the number of (term, entity) pairs observed.
    /// Each entry only reads shared corpus statistics and writes to
    /// itself, so the recomputation runs in parallel across terms.
    pub fn commit(&mut self) {
        let stats = CorpusStats {
            corpus_size: self.corpus_size,
            min_terms: self.min_terms,
            terms_per_entity: &self.terms_per_entity,
        };
        self.entries
            .par_iter_mut()
            .for_each(|(_, entry)| entry.compute(stats));
        self.committed = true;
        debug!(
            terms = self.entries.len(),
            entities = self.corpus_size,
            "index committed"
        );
    }

    /// Rank candidate matches for the given query entity.
    ///
    /// The query entity is tokenized with the same tokenizer used for
    /// indexing; every distinct resulting term contributes its weighted
    /// term-frequency scores, accumulated per candidate. Entities
    /// sharing more, rarer terms with the query rank higher. The query
    /// entity's own id is excluded. Results are ordered by score
    /// descending, then entity id ascending, and truncated to `limit`
    /// when given.
    ///
    /// Returns an error if the index has not been committed since the
    /// last mutation: uncommitted weights are all zero and would
    /// silently zero every score.
    pub fn candidates(&self, query: &Entity, limit: Option<usize>) -> Result<Vec<(String, f64)>> {
        if !self.committed {
            return Err(CognateError::index(
                "index has not been committed; call commit() before querying candidates",
            ));
        }
        let stats = CorpusStats {
            corpus_size: self.corpus_size,
            min_terms: self.min_terms,
            terms_per_entity: &self.terms_per_entity,
        };

        let mut terms: BTreeSet<String> = BTreeSet::new();
        for value in query.index_values() {
            for token in self.tokenizer.tokenize(value)? {
                terms.insert(token.text);
            }
        }

        let mut scores: AHashMap<&str, f64> = AHashMap::new();
        for term in &terms {
            if let Some(entry) = self.entries.get(term.as_str()) {
                for (entity_id, score) in entry.frequencies(stats) {
                    if entity_id == query.id() {
                        continue;
                    }
                    *scores.entry(entity_id).or_insert(0.0) += score;
                }
            }
        }

        let mut ranked: Vec<(String, f64)> = scores
            .into_iter()
            .map(|(entity_id, score)| (entity_id.to_string(), score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        Ok(ranked)
    }

    /// Whether weights reflect the current corpus snapshot.
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Number of entities known to the index.
    pub fn corpus_size(&self) -> u64 {
        self.corpus_size
    }

    /// The normalization floor for per-entity term totals.
    pub fn min_terms(&self) -> f64 {
        self.min_terms
    }

    /// Number of distinct terms in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the index contains no terms.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a term, if any.
    pub fn entry(&self, term: &str) -> Option<&IndexEntry> {
        self.entries.get(term)
    }

    /// Get index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            term_count: self.entries.len(),
            entity_count: self.corpus_size,
            committed: self.committed,
        }
    }

    /// Write the index as a JSON snapshot: postings and counts only.
    ///
    /// Derived weights are never persisted; a reloaded index must be
    /// committed before use. The output is deterministic (maps are
    /// written in key order).
    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        let snapshot = IndexSnapshot {
            entries: self
                .entries
                .iter()
                .map(|(term, entry)| (term.clone(), entry.clone()))
                .collect(),
            terms_per_entity: self
                .terms_per_entity
                .iter()
                .map(|(id, &count)| (id.clone(), count))
                .collect(),
            min_terms: self.min_terms,
            corpus_size: self.corpus_size,
        };
        serde_json::to_writer(writer, &snapshot)?;
        Ok(())
    }

    /// Load an index from a JSON snapshot written by [`save`](Index::save).
    ///
    /// The loaded index is uncommitted: all idf weights are zero until
    /// [`commit`](Index::commit) runs. Malformed snapshots (missing
    /// fields, negative counts, corpus size below the entity count) are
    /// errors.
    pub fn load<R: Read>(tokenizer: Box<dyn Tokenizer>, reader: R) -> Result<Self> {
        let snapshot: IndexSnapshot = serde_json::from_reader(reader)?;
        if snapshot.corpus_size < snapshot.terms_per_entity.len() as u64 {
            return Err(CognateError::index(format!(
                "corpus size {} is smaller than the {} entities in the snapshot",
                snapshot.corpus_size,
                snapshot.terms_per_entity.len()
            )));
        }
        let index = Index {
            tokenizer,
            entries: snapshot.entries.into_iter().collect(),
            terms_per_entity: snapshot.terms_per_entity.into_iter().collect(),
            min_terms: snapshot.min_terms,
            corpus_size: snapshot.corpus_size,
            committed: false,
        };
        debug!(
            terms = index.entries.len(),
            entities = index.corpus_size,
            "index snapshot loaded"
        );
        Ok(index)
    }
}

impl Default for Index {
    fn default() -> Self {
        Index::new(Box::new(UnicodeWordTokenizer::new()), IndexConfig::default())
    }
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("tokenizer", &self.tokenizer.name())
            .field("terms", &self.entries.len())
            .field("entities", &self.corpus_size)
            .field("min_terms", &self.min_terms)
            .field("committed", &self.committed)
            .finish()
    }
}
