use smallvec::SmallVec;

use super::{Key, NodeStore};

/// Slots kept inline before the arrays spill to the heap; trees of order up
/// to `INLINE` allocate nothing per node.
pub(crate) const INLINE: usize = 16;

/// The contiguous backend: two parallel sorted arrays.
///
/// `lower_bound` is a binary search; `insert_at` and `erase_at` shift the
/// tail. This is the default backend and the yardstick the other two are
/// measured against.
pub struct ArrayStore<V> {
    cap: usize,
    keys: SmallVec<[Key; INLINE]>,
    vals: SmallVec<[V; INLINE]>,
}

impl<V: Copy> NodeStore<V> for ArrayStore<V> {
    fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "`ArrayStore::with_capacity()` - `capacity` must be positive!");
        ArrayStore {
            cap: capacity,
            keys: SmallVec::with_capacity(capacity),
            vals: SmallVec::with_capacity(capacity),
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
        self.vals[index] = value;
    }

    #[inline]
    fn lower_bound(&self, key: Key) -> usize {
        self.keys.partition_point(|&k| k < key)
    }

    fn insert_at(&mut self, index: usize, key: Key, value: V) {
        assert!(index <= self.keys.len(), "`ArrayStore::insert_at()` - `index` is out of bounds!");
        assert!(self.keys.len() < self.cap, "`ArrayStore::insert_at()` - store is full!");
        self.keys.insert(index, key);
        self.vals.insert(index, value);
    }

    fn erase_at(&mut self, index: usize) {
        assert!(index < self.keys.len(), "`ArrayStore::erase_at()` - `index` is out of bounds!");
        self.keys.remove(index);
        self.vals.remove(index);
    }

    fn split_into(&mut self, right: &mut Self) -> Key {
        assert!(right.is_empty(), "`ArrayStore::split_into()` - `right` is not empty!");
        assert!(self.len() >= 2, "`ArrayStore::split_into()` - nothing to split!");

        let keep = (self.len() / 2).max(1);
        right.keys.extend(self.keys.drain(keep..));
        right.vals.extend(self.vals.drain(keep..));
        right.keys[0]
    }
}
