use std::fmt;
use std::hash::BuildHasher;
use std::mem;

use log::{debug, trace};
use rustc_hash::FxBuildHasher;
use serde::ser::{Serialize, Serializer};

use crate::bucket::{Bucket, Entry};
use crate::entry::{MapEntry, OccupiedEntry, VacantEntry};
use crate::hasher::{PolyBuildHasher, hash_key};
use crate::iter::{IntoIter, Iter, IterMut, Keys, Values};
use crate::key::StrKey;
use crate::stats::Stats;

pub const DEFAULT_CAPACITY: usize = 16;
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Map using `rustc_hash` instead of the polynomial string hash
pub type FxChainMap<V> = HashMap<V, FxBuildHasher>;

/// A hash map with separate chaining and automatic doubling.
///
/// Keys are any [`StrKey`] and are stored in their string form, so numeric
/// and string keys that print the same collide on purpose:
///
/// ```
/// use chainmap::HashMap;
///
/// let mut map = HashMap::new();
/// map.set(42, "num");
/// assert_eq!(map.get("42"), Some(&"num"));
/// ```
///
/// Every `set`/`insert`, overwrites included, first doubles the bucket
/// count if `len() >= capacity() * max_load_factor()`. It never shrinks.
pub struct HashMap<V, S = PolyBuildHasher> {
    buckets: Vec<Bucket<V>>,
    size: usize,
    load_factor: f64,
    hasher: S,
}

fn empty_buckets<V>(capacity: usize) -> Vec<Bucket<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Bucket::default);
    buckets
}

impl<V> HashMap<V, PolyBuildHasher> {
    /// Creates an empty map with 16 buckets
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map with `capacity` buckets (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, PolyBuildHasher)
    }
}

impl<V, S: Default> Default for HashMap<V, S> {
    fn default() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, S::default())
    }
}

impl<V, S> HashMap<V, S> {
    pub(crate) fn from_parts(capacity: usize, load_factor: f64, hasher: S) -> Self {
        Self {
            buckets: empty_buckets(capacity.max(1)),
            size: 0,
            load_factor,
            hasher,
        }
    }

    /// Creates an empty map with `capacity` buckets (at least one) and the given hasher
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self::from_parts(capacity, DEFAULT_LOAD_FACTOR, hasher)
    }

    /// Returns the number of key-value pairs in the map
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map contains no elements
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the current number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor of the map (len / capacity)
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Returns the load factor at which the map grows
    pub fn max_load_factor(&self) -> f64 {
        self.load_factor
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Check if the next insertion needs a larger table
    fn should_resize(&self) -> bool {
        self.size as f64 >= self.capacity() as f64 * self.load_factor
    }

    /// Removes every entry, keeping the current capacity
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Bucket::clear);
        self.size = 0;
        trace!("cleared table, capacity {}", self.capacity());
    }

    /// Iterates over `(key, value)` pairs in slot order, then chain order.
    ///
    /// The borrow keeps the map from being mutated while the iterator lives.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.buckets, self.size)
    }

    /// Same as [`HashMap::iter`]
    pub fn entries(&self) -> Iter<'_, V> {
        self.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut::new(&mut self.buckets, self.size)
    }

    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(self.iter())
    }

    pub fn values(&self) -> Values<'_, V> {
        Values::new(self.iter())
    }

    /// Calls `f(value, key)` for every entry in iteration order
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &str),
    {
        for (k, v) in self.iter() {
            f(v, k);
        }
    }

    /// Walks every bucket once and reports how the entries are spread
    pub fn stats(&self) -> Stats {
        Stats::collect(&self.buckets, self.size)
    }
}

impl<V, S: BuildHasher> HashMap<V, S> {
    /// Bucket index of an already stringified key
    fn slot(&self, key: &str) -> usize {
        (hash_key(&self.hasher, key) % self.capacity() as u64) as usize
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        let moved = self.size;
        self.size = 0;

        // Re-place all existing entries under the new capacity
        for bucket in old_buckets {
            for entry in bucket.into_entries() {
                let slot = self.slot(&entry.key);
                self.buckets[slot].push(entry);
                self.size += 1;
            }
        }
        debug_assert_eq!(moved, self.size);
        debug!("resized table from {old_capacity} to {new_capacity} buckets, moved {moved} entries");
    }

    /// Appends a key known to be absent, growing first if needed.
    /// Returns the slot it landed in.
    pub(crate) fn push_new(&mut self, key: String, value: V) -> usize {
        if self.should_resize() {
            self.grow();
        }
        self.place_new(key, value)
    }

    fn place_new(&mut self, key: String, value: V) -> usize {
        let slot = self.slot(&key);
        self.buckets[slot].push(Entry::new(key, value));
        self.size += 1;
        slot
    }

    pub(crate) fn bucket(&self, slot: usize) -> &Bucket<V> {
        &self.buckets[slot]
    }

    pub(crate) fn bucket_mut(&mut self, slot: usize) -> &mut Bucket<V> {
        &mut self.buckets[slot]
    }

    pub(crate) fn take_at(&mut self, slot: usize, pos: usize) -> Entry<V> {
        let entry = self.buckets[slot].remove(pos);
        self.size -= 1;
        entry
    }

    /// Insert a key-value pair into the map, returning the previous value if it existed
    pub fn insert<K: StrKey>(&mut self, key: K, value: V) -> Option<V> {
        // threshold is checked before the lookup, so overwrites can grow too
        if self.should_resize() {
            self.grow();
        }

        let key = key.as_key();
        let slot = self.slot(&key);

        if let Some(entry) = self.buckets[slot].find_mut(&key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        self.place_new(key.into_owned(), value);
        None
    }

    /// Insert or overwrite, returning the map for chaining
    pub fn set<K: StrKey>(&mut self, key: K, value: V) -> &mut Self {
        self.insert(key, value);
        self
    }

    /// Get a value by key
    pub fn get<K: StrKey>(&self, key: K) -> Option<&V> {
        let key = key.as_key();
        self.buckets[self.slot(&key)].find(&key).map(|e| &e.value)
    }

    pub fn get_mut<K: StrKey>(&mut self, key: K) -> Option<&mut V> {
        let key = key.as_key();
        let slot = self.slot(&key);
        self.buckets[slot].find_mut(&key).map(|e| &mut e.value)
    }

    /// Returns true if the key is stored, whatever its value
    pub fn has<K: StrKey>(&self, key: K) -> bool {
        let key = key.as_key();
        self.buckets[self.slot(&key)].position(&key).is_some()
    }

    /// Removes a key, returning its value if it was present
    pub fn remove<K: StrKey>(&mut self, key: K) -> Option<V> {
        let key = key.as_key();
        let slot = self.slot(&key);
        let pos = self.buckets[slot].position(&key)?;
        Some(self.take_at(slot, pos).value)
    }

    /// Removes a key, returning whether it was present
    pub fn delete<K: StrKey>(&mut self, key: K) -> bool {
        self.remove(key).is_some()
    }

    /// Gets the entry for `key` for in-place manipulation
    pub fn entry<K: StrKey>(&mut self, key: K) -> MapEntry<'_, V, S> {
        let key = key.as_key();
        let slot = self.slot(&key);
        match self.buckets[slot].position(&key) {
            Some(pos) => MapEntry::Occupied(OccupiedEntry::new(self, slot, pos)),
            None => MapEntry::Vacant(VacantEntry::new(self, key.into_owned())),
        }
    }
}

impl<V: Clone, S: Clone> Clone for HashMap<V, S> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            size: self.size,
            load_factor: self.load_factor,
            hasher: self.hasher.clone(),
        }
    }
}

impl<V: fmt::Debug, S> fmt::Debug for HashMap<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: Serialize, S> Serialize for HashMap<V, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<K: StrKey, V, S: BuildHasher + Default> FromIterator<(K, V)> for HashMap<V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K: StrKey, V, S: BuildHasher> Extend<(K, V)> for HashMap<V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, V, S> IntoIterator for &'a HashMap<V, S> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, S> IntoIterator for &'a mut HashMap<V, S> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V, S> IntoIterator for HashMap<V, S> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buckets, self.size)
    }
}
