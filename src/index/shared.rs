//! Single-writer/multiple-reader index handle.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::index::Index;

/// A swappable, shareable handle to a committed index.
///
/// Readers take a cheap [`snapshot`](SharedIndex::snapshot) and query
/// it for as long as they like; a writer builds a fresh index offline
/// and [`replace`](SharedIndex::replace)s the live one atomically. No
/// reader ever observes an index mid-mutation, and in-flight snapshots
/// stay valid until dropped.
///
/// # Examples
///
/// ```
/// use cognate::index::{Index, SharedIndex};
///
/// let shared = SharedIndex::new(Index::default());
/// let snapshot = shared.snapshot();
///
/// // A rebuild elsewhere swaps in the new corpus; the snapshot taken
/// // above stays valid.
/// let mut rebuilt = Index::default();
/// rebuilt.commit();
/// shared.replace(rebuilt);
/// assert_eq!(snapshot.corpus_size(), 0);
/// ```
#[derive(Debug)]
pub struct SharedIndex {
    inner: RwLock<Arc<Index>>,
}

impl SharedIndex {
    /// Wrap an index for shared read access.
    pub fn new(index: Index) -> Self {
        SharedIndex {
            inner: RwLock::new(Arc::new(index)),
        }
    }

    /// Get the current index snapshot.
    pub fn snapshot(&self) -> Arc<Index> {
        self.inner.read().clone()
    }

    /// Swap in a freshly built index, returning the previous one.
    pub fn replace(&self, index: Index) -> Arc<Index> {
        let mut guard = self.inner.write();
        std::mem::replace(&mut *guard, Arc::new(index))
    }
}
