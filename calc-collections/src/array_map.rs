//! An associative store backed by an array of key-value pairs.

use std::{borrow::Borrow, fmt};
use super::error::{CollectionError, NoSuchKey};

/// The capacity reserved by the first insertion into an [`ArrayMap`].
pub const INITIAL_CAPACITY: usize = 16;

/// A map from keys to values stored as an array of pairs.
///
/// Lookups scan the pairs linearly, so every operation except iteration is `O(n)` in the number of
/// entries; appending a new pair is amortized `O(1)` on top of that scan, since the backing array
/// doubles its capacity whenever it fills up.
///
/// Removing an entry moves the last pair into the removed pair's place, so the iteration order of
/// the remaining entries is not preserved.
#[derive(Clone)]
pub struct ArrayMap<K, V> {
    pairs: Vec<(K, V)>,
}

impl<K, V> Default for ArrayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ArrayMap<K, V> {
    /// Creates an empty map. No memory is allocated until the first insertion.
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of entries the map can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    /// Removes all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Returns an iterator over the entries, in storage order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.pairs.iter().map(|(k, v)| (k, v))
    }

    /// Returns an iterator over the keys, in storage order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.pairs.iter().map(|(k, _)| k)
    }

    /// Returns the position of the pair with the given key.
    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.pairs.iter().position(|(k, _)| k.borrow() == key)
    }

    /// Grows the backing array to twice its size if it is full.
    fn reserve_one(&mut self) {
        if self.pairs.len() == self.pairs.capacity() {
            let additional = self.pairs.capacity().max(INITIAL_CAPACITY);
            self.pairs.reserve_exact(additional);
        }
    }
}

impl<K: PartialEq, V> ArrayMap<K, V> {
    /// Returns true if the map contains an entry for the key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Returns a reference to the value bound to the key.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, CollectionError>
    where
        K: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.position(key)
            .map(|index| &self.pairs[index].1)
            .ok_or_else(|| missing(key))
    }

    /// Returns a mutable reference to the value bound to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, CollectionError>
    where
        K: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let index = self.position(key).ok_or_else(|| missing(key))?;
        Ok(&mut self.pairs[index].1)
    }

    /// Binds the key to the value.
    ///
    /// If the key already had a binding, its value is overwritten in place and the old value is
    /// returned. Otherwise, the pair is appended.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.pairs[index].1, value)),
            None => {
                self.reserve_one();
                self.pairs.push((key, value));
                None
            },
        }
    }

    /// Removes the entry for the key and returns its value.
    ///
    /// The last pair of the map takes the removed pair's place.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, CollectionError>
    where
        K: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let index = self.position(key).ok_or_else(|| missing(key))?;
        Ok(self.pairs.swap_remove(index).1)
    }
}

/// Builds the error for a key that is not in the map.
fn missing<Q: fmt::Debug + ?Sized>(key: &Q) -> CollectionError {
    NoSuchKey { key: format!("{:?}", key) }.into()
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ArrayMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for ArrayMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ArrayMap::new();
        map.extend(iter);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for ArrayMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn put_then_get() {
        let mut map = ArrayMap::new();
        assert_eq!(map.put("x".to_string(), 1), None);
        assert_eq!(map.put("y".to_string(), 2), None);
        assert_eq!(map.get("x"), Ok(&1));
        assert_eq!(map.get("y"), Ok(&2));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn put_overwrites_in_place() {
        let mut map: ArrayMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(map.put("b", 20), Some(2));
        assert_eq!(map.len(), 3);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(map.get(&"b"), Ok(&20));
    }

    #[test]
    fn get_missing_key() {
        let map = ArrayMap::<String, i32>::new();
        assert_eq!(
            map.get("nope"),
            Err(CollectionError::NoSuchKey(NoSuchKey { key: "\"nope\"".to_string() })),
        );
    }

    #[test]
    fn put_then_remove() {
        let mut map = ArrayMap::new();
        map.put("k".to_string(), 'v');
        assert_eq!(map.remove("k"), Ok('v'));
        assert!(!map.contains_key("k"));
        assert!(map.get("k").is_err());
        assert!(map.remove("k").is_err());
        assert!(map.is_empty());
    }

    #[test]
    fn remove_keeps_unrelated_keys() {
        let mut map: ArrayMap<i32, i32> = (0..10).map(|i| (i, i * i)).collect();
        map.remove(&3).unwrap();
        map.remove(&0).unwrap();
        map.remove(&9).unwrap();
        assert_eq!(map.len(), 7);
        for i in [1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(map.get(&i), Ok(&(i * i)));
        }
    }

    #[test]
    fn remove_moves_last_pair_into_hole() {
        let mut map: ArrayMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3), ("d", 4)].into_iter().collect();
        map.remove(&"b").unwrap();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "d", "c"]);
    }

    #[test]
    fn capacity_doubles() {
        let mut map = ArrayMap::new();
        map.put(0, ());
        assert_eq!(map.capacity(), INITIAL_CAPACITY);
        for i in 1..=INITIAL_CAPACITY {
            map.put(i, ());
        }
        assert_eq!(map.capacity(), INITIAL_CAPACITY * 2);
        assert_eq!(map.len(), INITIAL_CAPACITY + 1);
    }

    #[test]
    fn many_entries() {
        let mut map = ArrayMap::new();
        for i in 0..1000 {
            map.put(i, i + 1);
        }
        for i in 0..1000 {
            assert_eq!(map.get(&i), Ok(&(i + 1)));
        }
        for i in (0..1000).step_by(2) {
            map.remove(&i).unwrap();
        }
        assert_eq!(map.len(), 500);
        assert!(map.contains_key(&999));
        assert!(!map.contains_key(&998));
    }

    #[test]
    fn absent_keys_are_equal_to_each_other() {
        let mut map = ArrayMap::new();
        map.put(None, 1);
        map.put(Some("a"), 2);
        assert_eq!(map.put(None, 3), Some(1));
        assert_eq!(map.get(&None), Ok(&3));
        assert_eq!(map.len(), 2);
        assert!(!map.contains_key(&Some("b")));
    }

    #[test]
    fn get_mut_updates() {
        let mut map: ArrayMap<String, Vec<i32>> = ArrayMap::new();
        map.put("xs".to_string(), vec![1]);
        map.get_mut("xs").unwrap().push(2);
        assert_eq!(map.get("xs"), Ok(&vec![1, 2]));
        assert!(map.get_mut("ys").is_err());
    }
}
