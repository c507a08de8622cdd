use std::hash::BuildHasher;

use crate::bucket::Entry;
use crate::hash_map::HashMap;

/// Entry API for the HashMap, similar to std::collections::HashMap
pub enum MapEntry<'a, V, S> {
    Occupied(OccupiedEntry<'a, V, S>),
    Vacant(VacantEntry<'a, V, S>),
}

/// A view into an occupied entry in the map
pub struct OccupiedEntry<'a, V, S> {
    map: &'a mut HashMap<V, S>,
    slot: usize,
    pos: usize,
}

/// A view into a vacant entry in the map
pub struct VacantEntry<'a, V, S> {
    map: &'a mut HashMap<V, S>,
    key: String,
}

impl<'a, V, S: BuildHasher> MapEntry<'a, V, S> {
    /// Returns true if the entry is occupied
    pub fn is_occupied(&self) -> bool {
        matches!(self, MapEntry::Occupied(_))
    }

    /// Returns true if the entry is vacant
    pub fn is_vacant(&self) -> bool {
        matches!(self, MapEntry::Vacant(_))
    }

    pub fn key(&self) -> &str {
        match self {
            MapEntry::Occupied(entry) => entry.key(),
            MapEntry::Vacant(entry) => entry.key(),
        }
    }

    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            MapEntry::Occupied(entry) => entry.into_mut(),
            MapEntry::Vacant(entry) => entry.insert(default),
        }
    }

    pub fn or_insert_with<F>(self, f: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            MapEntry::Occupied(entry) => entry.into_mut(),
            MapEntry::Vacant(entry) => entry.insert(f()),
        }
    }

    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }

    /// Runs `f` on the value if the entry is occupied
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let MapEntry::Occupied(entry) = &mut self {
            f(entry.get_mut());
        }
        self
    }
}

impl<'a, V, S: BuildHasher> OccupiedEntry<'a, V, S> {
    pub(crate) fn new(map: &'a mut HashMap<V, S>, slot: usize, pos: usize) -> Self {
        Self { map, slot, pos }
    }

    pub fn key(&self) -> &str {
        &self.entry().key
    }

    pub fn get(&self) -> &V {
        &self.entry().value
    }

    pub fn get_mut(&mut self) -> &mut V {
        &mut self.map.bucket_mut(self.slot).entries_mut()[self.pos].value
    }

    pub fn into_mut(self) -> &'a mut V {
        let Self { map, slot, pos } = self;
        &mut map.bucket_mut(slot).entries_mut()[pos].value
    }

    /// Replaces the value, returning the old one
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(self.get_mut(), value)
    }

    /// Takes the entry out of the map
    pub fn remove(self) -> V {
        self.map.take_at(self.slot, self.pos).value
    }

    fn entry(&self) -> &Entry<V> {
        &self.map.bucket(self.slot).entries()[self.pos]
    }
}

impl<'a, V, S: BuildHasher> VacantEntry<'a, V, S> {
    pub(crate) fn new(map: &'a mut HashMap<V, S>, key: String) -> Self {
        Self { map, key }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn into_key(self) -> String {
        self.key
    }

    /// Inserts the value, growing the table first if it is at its load factor
    pub fn insert(self, value: V) -> &'a mut V {
        let Self { map, key } = self;
        let slot = map.push_new(key, value);
        let entry = map
            .bucket_mut(slot)
            .last_mut()
            .expect("bucket holds the entry just pushed");
        &mut entry.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_api_vacant() {
        let mut map: HashMap<String> = HashMap::new();

        match map.entry("key1") {
            MapEntry::Vacant(entry) => {
                assert_eq!(entry.key(), "key1");
                let value_ref = entry.insert("value1".to_string());
                assert_eq!(value_ref.as_str(), "value1");
            }
            MapEntry::Occupied(_) => panic!("Expected vacant entry"),
        }

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("key1").map(String::as_str), Some("value1"));
    }

    #[test]
    fn test_entry_api_occupied() {
        let mut map = HashMap::new();
        map.set("key1", "value1");

        match map.entry("key1") {
            MapEntry::Occupied(mut entry) => {
                assert_eq!(entry.get(), &"value1");
                let old_value = entry.insert("value2");
                assert_eq!(old_value, "value1");
            }
            MapEntry::Vacant(_) => panic!("Expected occupied entry"),
        }

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("key1"), Some(&"value2"));
    }

    #[test]
    fn test_entry_api_or_insert_with() {
        let mut map: HashMap<i32> = HashMap::new();

        let value = map.entry("key1").or_insert_with(|| 7);
        assert_eq!(*value, 7);
        *map.entry("key1").or_insert_with(|| unreachable!()) += 1;

        assert_eq!(map.get("key1"), Some(&8));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_word_count() {
        let mut counts: HashMap<usize> = HashMap::with_capacity(2);
        for word in "the cat and the dog and the bird".split(' ') {
            *counts.entry(word).or_default() += 1;
        }

        assert_eq!(counts.len(), 5);
        assert_eq!(counts.get("the"), Some(&3));
        assert_eq!(counts.get("and"), Some(&2));
        assert_eq!(counts.get("cat"), Some(&1));
    }

    #[test]
    fn test_and_modify() {
        let mut map: HashMap<i32> = HashMap::new();
        map.entry("a").and_modify(|v| *v += 1).or_insert(1);
        map.entry("a").and_modify(|v| *v += 1).or_insert(1);
        assert_eq!(map.get("a"), Some(&2));
    }

    #[test]
    fn test_occupied_remove() {
        let mut map = HashMap::new();
        map.set("Aa", 1).set("BB", 2);

        match map.entry("Aa") {
            MapEntry::Occupied(entry) => assert_eq!(entry.remove(), 1),
            MapEntry::Vacant(_) => panic!("Expected occupied entry"),
        }

        assert_eq!(map.len(), 1);
        assert!(!map.has("Aa"));
        assert_eq!(map.get("BB"), Some(&2));
    }

    #[test]
    fn test_vacant_insert_grows() {
        let mut map = HashMap::with_capacity(4);
        map.set("a", 1).set("b", 2).set("c", 3);
        assert!(map.entry("d").is_vacant());
        assert_eq!(map.capacity(), 4);

        *map.entry("d").or_insert(0) += 4;
        assert_eq!(map.capacity(), 8);
        assert_eq!(map.get("d"), Some(&4));
        assert_eq!(map.get("a"), Some(&1));
    }

    #[test]
    fn test_entry_numeric_key() {
        let mut map = HashMap::new();
        map.set("42", 'x');
        let entry = map.entry(42);
        assert!(entry.is_occupied());
        assert_eq!(entry.key(), "42");
    }
}
