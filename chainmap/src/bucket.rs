/// A stored key-value pair. The key is kept in its canonical string form.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry<V> {
    pub(crate) key: String,
    pub(crate) value: V,
}

impl<V> Entry<V> {
    pub(crate) fn new(key: String, value: V) -> Self {
        Self { key, value }
    }
}

/// One slot of the table: every entry whose key hashes to this slot,
/// in insertion order. An empty bucket holds no allocation.
#[derive(Debug, Clone)]
pub(crate) struct Bucket<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Default for Bucket<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> Bucket<V> {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear scan for `key`
    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub(crate) fn find(&self, key: &str) -> Option<&Entry<V>> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut Entry<V>> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    pub(crate) fn push(&mut self, entry: Entry<V>) {
        self.entries.push(entry);
    }

    /// Removes the entry at `pos`, keeping the order of the rest of the chain
    pub(crate) fn remove(&mut self, pos: usize) -> Entry<V> {
        self.entries.remove(pos)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn entries(&self) -> &[Entry<V>] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [Entry<V>] {
        &mut self.entries
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Entry<V>> {
        self.entries.last_mut()
    }

    pub(crate) fn into_entries(self) -> Vec<Entry<V>> {
        self.entries
    }
}
