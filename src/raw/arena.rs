use alloc::vec::Vec;

use super::handle::Handle;

/// Slab of tree nodes addressed by [`Handle`].
///
/// Freed slots are recycled through a free list, so handles are only stable
/// while their node is live; the tree never keeps a handle to a freed node.
/// Dropping the arena drops every live node at once, which is how the tree
/// tears down without walking the structure.
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Live node count (allocated minus freed).
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn alloc(&mut self, node: T) -> Handle {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.to_index()] = Some(node);
            handle
        } else {
            assert!(
                self.slots.len() <= Handle::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX
            );
            self.slots.push(Some(node));
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is stale!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is stale!")
    }

    /// Drops the node and recycles its slot.
    pub(crate) fn free(&mut self, handle: Handle) {
        let node = self.slots[handle.to_index()].take();
        assert!(node.is_some(), "`Arena::free()` - `handle` is stale!");
        self.free.push(handle);
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
