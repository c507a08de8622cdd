use std::iter::FusedIterator;
use std::{slice, vec};

use crate::bucket::{Bucket, Entry};

/// Iterator over key-value pairs in a HashMap.
///
/// Visits buckets in slot order and each chain in insertion order. The order
/// changes whenever the table resizes, so it is only stable between mutations.
pub struct Iter<'a, V> {
    buckets: slice::Iter<'a, Bucket<V>>,
    chain: slice::Iter<'a, Entry<V>>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(buckets: &'a [Bucket<V>], len: usize) -> Self {
        Self {
            buckets: buckets.iter(),
            chain: Default::default(),
            remaining: len,
        }
    }
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            chain: self.chain.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some((entry.key.as_str(), &entry.value));
            }
            self.chain = self.buckets.next()?.entries().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// Mutable iterator over key-value pairs in a HashMap
pub struct IterMut<'a, V> {
    buckets: slice::IterMut<'a, Bucket<V>>,
    chain: slice::IterMut<'a, Entry<V>>,
    remaining: usize,
}

impl<'a, V> IterMut<'a, V> {
    pub(crate) fn new(buckets: &'a mut [Bucket<V>], len: usize) -> Self {
        Self {
            buckets: buckets.iter_mut(),
            chain: Default::default(),
            remaining: len,
        }
    }
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some((entry.key.as_str(), &mut entry.value));
            }
            self.chain = self.buckets.next()?.entries_mut().iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
impl<V> FusedIterator for IterMut<'_, V> {}

/// Owning iterator, yields `(String, V)` in the same order as [`Iter`]
pub struct IntoIter<V> {
    buckets: vec::IntoIter<Bucket<V>>,
    chain: vec::IntoIter<Entry<V>>,
    remaining: usize,
}

impl<V> IntoIter<V> {
    pub(crate) fn new(buckets: Vec<Bucket<V>>, len: usize) -> Self {
        Self {
            buckets: buckets.into_iter(),
            chain: Default::default(),
            remaining: len,
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some((entry.key, entry.value));
            }
            self.chain = self.buckets.next()?.into_entries().into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}

pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(crate) fn new(inner: Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<V> Clone for Keys<'_, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}
impl<V> FusedIterator for Keys<'_, V> {}

pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(inner: Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<V> Clone for Values<'_, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}
impl<V> FusedIterator for Values<'_, V> {}

#[cfg(test)]
mod tests {
    use crate::HashMap;

    #[test]
    fn test_visits_every_entry_once() {
        let mut map = HashMap::with_capacity(2);
        for i in 0..50 {
            map.set(i, i);
        }

        let mut seen: Vec<i32> = map.values().copied().collect();
        seen.sort();
        assert_eq!(seen, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_exact_size() {
        let mut map = HashMap::new();
        map.set("a", 1).set("b", 2).set("c", 3);

        let mut iter = map.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(map.keys().len(), 3);
        assert_eq!(map.values().len(), 3);
    }

    #[test]
    fn test_fused_after_end() {
        let mut map = HashMap::new();
        map.set("only", 1);

        let mut iter = map.iter();
        assert_eq!(iter.next(), Some(("only", &1)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty_map_iterators() {
        let map: HashMap<u8> = HashMap::with_capacity(64);
        assert_eq!(map.iter().next(), None);
        assert_eq!(map.keys().count(), 0);
        assert_eq!(map.into_iter().count(), 0);
    }

    #[test]
    fn test_clone_restarts_from_same_point() {
        let mut map = HashMap::new();
        map.set("a", 1).set("b", 2);

        let mut iter = map.keys();
        iter.next();
        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest, iter.collect::<Vec<_>>());
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn test_into_iter_matches_iter_order() {
        let mut map = HashMap::with_capacity(4);
        for k in ["x", "Aa", "BB", "y", "z"] {
            map.set(k, k.len());
        }

        let borrowed: Vec<_> = map.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        let owned: Vec<_> = map.into_iter().collect();
        assert_eq!(borrowed, owned);
    }
}
