//! Map addressed by a pair of keys.

use hashbrown::Equivalent;
use hashbrown::hash_map::Entry;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// A two-level map: values are addressed by `(K1, K2)` and grouped by their first key.
///
/// Grouping makes "every entry under `k1`" a single lookup, which a flat map keyed by tuples
/// cannot offer. Empty groups are removed eagerly.
#[derive(Debug, Clone)]
pub struct MultiKeyMap<K1, K2, V> {
    map: HashMap<K1, HashMap<K2, V>>,
    len: usize,
}

impl<K1, K2, V> Default for MultiKeyMap<K1, K2, V> {
    fn default() -> Self {
        Self {
            map: HashMap::default(),
            len: 0,
        }
    }
}

impl<K1, K2, V> MultiKeyMap<K1, K2, V>
where
    K1: Hash + Eq,
    K2: Hash + Eq,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.len = 0;
    }

    /// Inserts `value` under `(k1, k2)`, returning the value it replaced.
    pub fn insert(&mut self, k1: K1, k2: K2, value: V) -> Option<V> {
        let prev = self.map.entry(k1).or_default().insert(k2, value);
        if prev.is_none() {
            self.len += 1;
        }
        prev
    }

    pub fn get<Q1, Q2>(&self, k1: &Q1, k2: &Q2) -> Option<&V>
    where
        Q1: Hash + Equivalent<K1> + ?Sized,
        Q2: Hash + Equivalent<K2> + ?Sized,
    {
        self.map.get(k1)?.get(k2)
    }

    pub fn get_mut<Q1, Q2>(&mut self, k1: &Q1, k2: &Q2) -> Option<&mut V>
    where
        Q1: Hash + Equivalent<K1> + ?Sized,
        Q2: Hash + Equivalent<K2> + ?Sized,
    {
        self.map.get_mut(k1)?.get_mut(k2)
    }

    pub fn contains<Q1, Q2>(&self, k1: &Q1, k2: &Q2) -> bool
    where
        Q1: Hash + Equivalent<K1> + ?Sized,
        Q2: Hash + Equivalent<K2> + ?Sized,
    {
        self.get(k1, k2).is_some()
    }

    /// Returns the value under `(k1, k2)`, inserting `V::default()` first if absent.
    pub fn get_or_default(&mut self, k1: K1, k2: K2) -> &mut V
    where
        V: Default,
    {
        match self.map.entry(k1).or_default().entry(k2) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.len += 1;
                entry.insert(V::default())
            }
        }
    }

    pub fn remove<Q1, Q2>(&mut self, k1: &Q1, k2: &Q2) -> Option<V>
    where
        Q1: Hash + Equivalent<K1> + ?Sized,
        Q2: Hash + Equivalent<K2> + ?Sized,
    {
        let group = self.map.get_mut(k1)?;
        let removed = group.remove(k2)?;
        if group.is_empty() {
            self.map.remove(k1);
        }
        self.len -= 1;
        Some(removed)
    }

    /// All `(k2, value)` entries stored under `k1`, in unspecified order.
    pub fn inner<Q1>(&self, k1: &Q1) -> impl Iterator<Item = (&K2, &V)>
    where
        Q1: Hash + Equivalent<K1> + ?Sized,
    {
        self.map.get(k1).into_iter().flat_map(|group| group.iter())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K1, &K2, &V)> {
        self.map
            .iter()
            .flat_map(|(k1, group)| group.iter().map(move |(k2, v)| (k1, k2, v)))
    }
}

impl<K1, K2, V> FromIterator<(K1, K2, V)> for MultiKeyMap<K1, K2, V>
where
    K1: Hash + Eq,
    K2: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K1, K2, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k1, k2, v) in iter {
            map.insert(k1, k2, v);
        }
        map
    }
}
