// Container backends under test.
//
// One capability trait covers everything the benchmark phases need, so
// the same phase driver runs against every backend. Values are unit:
// only key membership is exercised.

use std::hash::BuildHasher;

use hashbrown::HashMap as HbHashMap;
use hashlink::LinkedHashMap;
use indexmap::IndexMap;
use rudy::rudymap::RudyMap;

/// What a container must support to be benchmarked.
pub trait MapBackend {
    fn insert(&mut self, key: u64);
    fn contains(&self, key: u64) -> bool;
    fn clear(&mut self);
    /// Name printed in the run header.
    fn name(&self) -> &'static str;
}

/// Judy-array variant: a compressed trie keyed by machine words.
pub type JudyMap = RudyMap<u64, ()>;
/// Open addressing with entries packed densely outside the probe table.
pub type SppMap<S> = IndexMap<u64, (), S>;
/// SwissTable open addressing, entries stored in the table itself.
pub type DenseMap<S> = HbHashMap<u64, (), S>;
/// Raw-table map with entry nodes linked outside the table.
pub type SparseMap<S> = LinkedHashMap<u64, (), S>;
/// The standard library's hash map.
pub type StdMap<S> = std::collections::HashMap<u64, (), S>;

impl MapBackend for JudyMap {
    fn insert(&mut self, key: u64) {
        self.insert(key, ());
    }

    fn contains(&self, key: u64) -> bool {
        self.get(key).is_some()
    }

    fn clear(&mut self) {
        // The trie frees whole subtrees at once; rebuilding is its
        // clear operation.
        *self = RudyMap::new();
    }

    fn name(&self) -> &'static str {
        "rudy::RudyMap"
    }
}

impl<S: BuildHasher> MapBackend for SppMap<S> {
    fn insert(&mut self, key: u64) {
        self.insert(key, ());
    }

    fn contains(&self, key: u64) -> bool {
        self.contains_key(&key)
    }

    fn clear(&mut self) {
        IndexMap::clear(self);
    }

    fn name(&self) -> &'static str {
        "indexmap::IndexMap"
    }
}

impl<S: BuildHasher> MapBackend for DenseMap<S> {
    fn insert(&mut self, key: u64) {
        self.insert(key, ());
    }

    fn contains(&self, key: u64) -> bool {
        self.contains_key(&key)
    }

    fn clear(&mut self) {
        HbHashMap::clear(self);
    }

    fn name(&self) -> &'static str {
        "hashbrown::HashMap"
    }
}

impl<S: BuildHasher> MapBackend for SparseMap<S> {
    fn insert(&mut self, key: u64) {
        self.insert(key, ());
    }

    fn contains(&self, key: u64) -> bool {
        self.contains_key(&key)
    }

    fn clear(&mut self) {
        LinkedHashMap::clear(self);
    }

    fn name(&self) -> &'static str {
        "hashlink::LinkedHashMap"
    }
}

impl<S: BuildHasher> MapBackend for StdMap<S> {
    fn insert(&mut self, key: u64) {
        self.insert(key, ());
    }

    fn contains(&self, key: u64) -> bool {
        self.contains_key(&key)
    }

    fn clear(&mut self) {
        std::collections::HashMap::clear(self);
    }

    fn name(&self) -> &'static str {
        "std::collections::HashMap"
    }
}
