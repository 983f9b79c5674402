//! Weighted quick-union with full path compression.
//!
//! Elements are addressed by value; internally each value maps to a dense index into the
//! `parent` / `size` arrays. `parent[i] == i` iff `i` heads its set, and `size[head]` is the
//! cardinality of that set (absorbed heads keep `0`).

use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    data: Vec<T>,
    parent: Vec<usize>,
    size: Vec<usize>,
    elements: HashMap<T, usize>,
    sets_num: usize,
}

impl<T> Default for UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self {
            data: Vec::new(),
            parent: Vec::new(),
            size: Vec::new(),
            elements: HashMap::default(),
            sets_num: 0,
        }
    }
}

impl<T> UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    /// Every distinct item starts as its own singleton set. Repeated values are kept once.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();
        let mut uf = Self::default();
        uf.data.reserve(items.size_hint().0);
        for item in items {
            uf.add(item);
        }
        uf
    }

    /// Adds `item` as a new singleton set. Returns `false` if it is already tracked.
    pub fn add(&mut self, item: T) -> bool {
        if self.elements.contains_key(&item) {
            return false;
        }
        let index = self.data.len();
        self.data.push(item.clone());
        self.parent.push(index);
        self.size.push(1);
        self.elements.insert(item, index);
        self.sets_num += 1;
        true
    }

    /// Returns the representative element of `item`'s set.
    pub fn find(&mut self, item: &T) -> Result<&T> {
        let index = self.index_of(item)?;
        let head = self.find_head(index);
        Ok(&self.data[head])
    }

    pub fn is_same_set(&mut self, a: &T, b: &T) -> Result<bool> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        Ok(self.find_head(a) == self.find_head(b))
    }

    /// Merges the sets of `a` and `b`. Returns `true` iff two distinct sets were joined.
    pub fn union(&mut self, a: &T, b: &T) -> Result<bool> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        let head_a = self.find_head(a);
        let head_b = self.find_head(b);
        if head_a == head_b {
            return Ok(false);
        }

        let (bigger, smaller) = if self.size[head_a] >= self.size[head_b] {
            (head_a, head_b)
        } else {
            (head_b, head_a)
        };
        self.parent[smaller] = bigger;
        self.size[bigger] = self.size[head_a] + self.size[head_b];
        self.size[smaller] = 0;
        self.sets_num -= 1;
        tracing::trace!(
            head = bigger,
            absorbed = smaller,
            sets = self.sets_num,
            "union-find merged sets"
        );
        Ok(true)
    }

    /// Number of elements in `item`'s set.
    pub fn set_size(&mut self, item: &T) -> Result<usize> {
        let index = self.index_of(item)?;
        let head = self.find_head(index);
        Ok(self.size[head])
    }

    /// Current number of disjoint sets.
    pub fn sets_num(&self) -> usize {
        self.sets_num
    }

    pub fn contains(&self, item: &T) -> bool {
        self.elements.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn index_of(&self, item: &T) -> Result<usize> {
        self.elements
            .get(item)
            .copied()
            .ok_or(Error::UnknownElement)
    }

    fn find_head(&mut self, index: usize) -> usize {
        let mut head = index;
        while self.parent[head] != head {
            head = self.parent[head];
        }

        let mut node = index;
        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = head;
            node = next;
        }
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_compresses_the_whole_path() {
        let mut uf = UnionFind::new(0..4);
        uf.union(&0, &1).unwrap();
        uf.union(&2, &3).unwrap();
        uf.union(&1, &3).unwrap();

        let head = *uf.find(&3).unwrap();
        let head_ix = uf.elements[&head];
        for item in 0..4 {
            uf.find(&item).unwrap();
            assert_eq!(uf.parent[uf.elements[&item]], head_ix);
        }
        assert_eq!(uf.size[head_ix], 4);
        assert_eq!(uf.size.iter().filter(|&&s| s > 0).count(), 1);
    }
}
