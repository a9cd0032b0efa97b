//! Candidate blocking index.
//!
//! The index maps normalized terms to the entities containing them,
//! weighted by term rarity, and ranks candidate matches for a query
//! entity by accumulated weighted term overlap. This keeps entity
//! resolution sub-quadratic: instead of comparing every record against
//! every other, downstream matching only looks at the ranked candidates.

pub mod entry;
pub mod index;
pub mod shared;

pub use entry::{CorpusStats, IndexEntry};
pub use index::{Index, IndexConfig, IndexStats};
pub use shared::SharedIndex;
