use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use smallvec::{smallvec, SmallVec};

use super::array::INLINE;
use super::{Key, NodeStore};

/// Tower height cap; with p = 1/2 this is ample for any node-sized store.
const MAX_LEVEL: usize = 16;

/// Fixed seed so level coin-flips, and therefore benchmark runs, are
/// reproducible.
const LEVEL_SEED: u64 = 1_234_567;

struct SkipNode {
    key: Key,
    /// `forward[l]` is the next tower at level `l`; the tower's height is
    /// `forward.len()`.
    forward: SmallVec<[Option<usize>; 4]>,
}

/// A keys-only skip list over a sorted slice, stored as indices into a
/// vector of towers.
struct SkipIndex {
    nodes: SmallVec<[SkipNode; INLINE]>,
    head: [Option<usize>; MAX_LEVEL],
}

impl SkipIndex {
    fn new() -> Self {
        SkipIndex {
            nodes: SmallVec::new(),
            head: [None; MAX_LEVEL],
        }
    }

    fn random_level(rng: &mut SmallRng) -> usize {
        let mut level = 1;
        while level < MAX_LEVEL && rng.gen_bool(0.5) {
            level += 1;
        }
        level
    }

    /// Discards the towers and relinks every key. `keys` must be ascending;
    /// appending in order makes each new tower the rightmost at every level
    /// it reaches.
    fn rebuild(&mut self, keys: &[Key], rng: &mut SmallRng) {
        self.nodes.clear();
        self.head = [None; MAX_LEVEL];

        let mut tails: [Option<usize>; MAX_LEVEL] = [None; MAX_LEVEL];
        for &key in keys {
            let level = Self::random_level(rng);
            let index = self.nodes.len();
            self.nodes.push(SkipNode {
                key,
                forward: smallvec![None; level],
            });
            for (l, tail) in tails.iter_mut().enumerate().take(level) {
                match *tail {
                    Some(prev) => self.nodes[prev].forward[l] = Some(index),
                    None => self.head[l] = Some(index),
                }
                *tail = Some(index);
            }
        }
    }

    /// Position of the first key `>= key`, counted along the level-0 links.
    fn lower_bound(&self, key: Key) -> usize {
        let mut index = 0;
        let mut cur = self.head[0];
        while let Some(i) = cur {
            let node = &self.nodes[i];
            if node.key >= key {
                break;
            }
            index += 1;
            cur = node.forward[0];
        }
        index
    }
}

/// The skip-mirror backend: the same parallel arrays as [`ArrayStore`]
/// (authoritative for every positional operation), shadowed by a keys-only
/// [skip list](https://en.wikipedia.org/wiki/Skip_list) that is torn down
/// and relinked after every key mutation.
///
/// This backend exists as a benchmark baseline: it is never faster than
/// [`ArrayStore`], and the gap between the two measures the cost of keeping
/// an auxiliary ordered index in sync. Ordered lookups go through the
/// mirror's level-0 links.
///
/// [`ArrayStore`]: super::ArrayStore
pub struct SkipMirrorStore<V> {
    cap: usize,
    keys: SmallVec<[Key; INLINE]>,
    vals: SmallVec<[V; INLINE]>,
    index: SkipIndex,
    rng: SmallRng,
}

impl<V> SkipMirrorStore<V> {
    fn resync(&mut self) {
        self.index.rebuild(&self.keys, &mut self.rng);
        debug_assert_eq!(self.index.nodes.len(), self.keys.len());
    }
}

impl<V: Copy> NodeStore<V> for SkipMirrorStore<V> {
    fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "`SkipMirrorStore::with_capacity()` - `capacity` must be positive!");
        SkipMirrorStore {
            cap: capacity,
            keys: SmallVec::with_capacity(capacity),
            vals: SmallVec::with_capacity(capacity),
            index: SkipIndex::new(),
            rng: SmallRng::seed_from_u64(LEVEL_SEED),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.cap
    }

    fn clear(&mut self) {
        self.keys.clear();
        self.vals.clear();
        self.resync();
    }

    #[inline]
    fn key_at(&self, index: usize) -> Key {
        self.keys[index]
    }

    #[inline]
    fn val_at(&self, index: usize) -> V {
        self.vals[index]
    }

    #[inline]
    fn set_val(&mut self, index: usize, value: V) {
        // The mirror tracks keys only; payload writes do not touch it.
        self.vals[index] = value;
    }

    fn lower_bound(&self, key: Key) -> usize {
        self.index.lower_bound(key)
    }

    fn insert_at(&mut self, index: usize, key: Key, value: V) {
        assert!(index <= self.keys.len(), "`SkipMirrorStore::insert_at()` - `index` is out of bounds!");
        assert!(self.keys.len() < self.cap, "`SkipMirrorStore::insert_at()` - store is full!");
        self.keys.insert(index, key);
        self.vals.insert(index, value);
        self.resync();
    }

    fn erase_at(&mut self, index: usize) {
        assert!(index < self.keys.len(), "`SkipMirrorStore::erase_at()` - `index` is out of bounds!");
        self.keys.remove(index);
        self.vals.remove(index);
        self.resync();
    }

    fn split_into(&mut self, right: &mut Self) -> Key {
        assert!(right.is_empty(), "`SkipMirrorStore::split_into()` - `right` is not empty!");
        assert!(self.len() >= 2, "`SkipMirrorStore::split_into()` - nothing to split!");

        let keep = (self.len() / 2).max(1);
        right.keys.extend(self.keys.drain(keep..));
        right.vals.extend(self.vals.drain(keep..));
        self.resync();
        right.resync();
        right.keys[0]
    }
}
