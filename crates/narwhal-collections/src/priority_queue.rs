//! Binary min-heap with a handle-addressed position index.
//!
//! Every item pushed into the queue receives an [`ItemHandle`]. The queue keeps the current
//! array slot of each handle in lock-step with every swap, so an item whose priority changed
//! can be re-sifted (or removed) from its known position without searching for it.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;

/// Stable identity of an item inside an [`IndexedPriorityQueue`].
///
/// Handles are never reused by a queue until [`IndexedPriorityQueue::clear`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemHandle(usize);

impl ItemHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    item: T,
    position: usize,
}

pub struct IndexedPriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    compare: F,
    heap: Vec<ItemHandle>,
    // Indexed by `ItemHandle`; `None` once the item has left the heap.
    slots: Vec<Option<Slot<T>>>,
}

impl<T, F> IndexedPriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty queue ordered by `compare` (smallest item on top).
    pub fn new(compare: F) -> Self {
        Self {
            compare,
            heap: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Bulk-loads `items` and heapifies bottom-up.
    ///
    /// Only valid on an empty queue. Returned handles follow the order of `items`.
    pub fn init<I>(&mut self, items: I) -> Result<Vec<ItemHandle>>
    where
        I: IntoIterator<Item = T>,
    {
        if !self.heap.is_empty() {
            return Err(Error::HeapAlreadyInitialized);
        }

        let items = items.into_iter();
        let mut handles = Vec::with_capacity(items.size_hint().0);
        for item in items {
            let handle = self.push_slot(item, self.heap.len());
            self.heap.push(handle);
            handles.push(handle);
        }
        for index in (0..self.heap.len() / 2).rev() {
            self.sift_down(index);
        }
        tracing::trace!(len = self.heap.len(), "priority queue initialized");
        Ok(handles)
    }

    pub fn add(&mut self, item: T) -> ItemHandle {
        let position = self.heap.len();
        let handle = self.push_slot(item, position);
        self.heap.push(handle);
        self.sift_up(position);
        handle
    }

    /// Removes and returns the smallest item, or `None` when the queue is empty.
    pub fn offer(&mut self) -> Option<T> {
        self.offer_with_handle().map(|(_, item)| item)
    }

    pub fn offer_with_handle(&mut self) -> Option<(ItemHandle, T)> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let handle = self.heap.pop()?;
        let slot = self.slots.get_mut(handle.0)?.take()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((handle, slot.item))
    }

    /// Removes an arbitrary item by handle.
    pub fn remove(&mut self, handle: ItemHandle) -> Result<T> {
        let position = self.position(handle)?;
        let last = self.heap.len() - 1;
        self.swap(position, last);
        self.heap.pop();
        let slot = self
            .slots
            .get_mut(handle.0)
            .and_then(Option::take)
            .ok_or(Error::UnknownHandle { handle })?;
        if position < self.heap.len() {
            // The element moved into `position` may belong above or below it.
            let position = self.sift_down(position);
            self.sift_up(position);
        }
        Ok(slot.item)
    }

    /// Restores heap order around `handle` after its priority was changed through
    /// [`get_mut`](Self::get_mut).
    pub fn update(&mut self, handle: ItemHandle) -> Result<()> {
        let position = self.position(handle)?;
        let position = self.sift_down(position);
        self.sift_up(position);
        Ok(())
    }

    /// Mutates the item behind `handle` and re-establishes heap order in one step.
    pub fn update_with<M>(&mut self, handle: ItemHandle, mutate: M) -> Result<()>
    where
        M: FnOnce(&mut T),
    {
        let item = self.get_mut(handle).ok_or(Error::UnknownHandle { handle })?;
        mutate(item);
        self.update(handle)
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.first().and_then(|&handle| self.get(handle))
    }

    pub fn peek_handle(&self) -> Option<ItemHandle> {
        self.heap.first().copied()
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&T> {
        self.slots
            .get(handle.0)
            .and_then(Option::as_ref)
            .map(|slot| &slot.item)
    }

    /// Mutable access to a queued item. Call [`update`](Self::update) afterwards if the
    /// mutation affects ordering.
    pub fn get_mut(&mut self, handle: ItemHandle) -> Option<&mut T> {
        self.slots
            .get_mut(handle.0)
            .and_then(Option::as_mut)
            .map(|slot| &mut slot.item)
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.get(handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
    }

    fn push_slot(&mut self, item: T, position: usize) -> ItemHandle {
        let handle = ItemHandle(self.slots.len());
        self.slots.push(Some(Slot { item, position }));
        handle
    }

    fn position(&self, handle: ItemHandle) -> Result<usize> {
        self.slots
            .get(handle.0)
            .and_then(Option::as_ref)
            .map(|slot| slot.position)
            .ok_or(Error::UnknownHandle { handle })
    }

    fn set_position(&mut self, index: usize) {
        let handle = self.heap[index];
        let Some(slot) = self.slots.get_mut(handle.0).and_then(Option::as_mut) else {
            debug_assert!(false, "heap entry without a slot");
            return;
        };
        slot.position = index;
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.set_position(a);
        self.set_position(b);
    }

    fn compare_at(&self, a: usize, b: usize) -> Ordering {
        let left = self.heap.get(a).and_then(|&h| self.get(h));
        let right = self.heap.get(b).and_then(|&h| self.get(h));
        match (left, right) {
            (Some(left), Some(right)) => (self.compare)(left, right),
            _ => {
                debug_assert!(false, "heap entry without a slot");
                Ordering::Equal
            }
        }
    }

    /// Returns the final index of the element that started at `index`.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            // With a single child the clamped right index points at the left child.
            let right = if left + 1 < len { left + 1 } else { len - 1 };
            let child = if self.compare_at(left, right) == Ordering::Less {
                left
            } else {
                right
            };
            if self.compare_at(index, child) == Ordering::Greater {
                self.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
        index
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare_at(parent, index) == Ordering::Greater {
                self.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
        index
    }
}

impl<T, F> fmt::Debug for IndexedPriorityQueue<T, F>
where
    T: fmt::Debug,
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.heap.iter().filter_map(|&h| self.get(h)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap_order<T, F>(q: &IndexedPriorityQueue<T, F>)
    where
        F: Fn(&T, &T) -> Ordering,
    {
        for index in 1..q.heap.len() {
            let parent = (index - 1) / 2;
            assert_ne!(q.compare_at(parent, index), Ordering::Greater);
        }
        for (index, handle) in q.heap.iter().enumerate() {
            assert_eq!(q.position(*handle), Ok(index));
        }
        let tracked = q.slots.iter().filter(|s| s.is_some()).count();
        assert_eq!(tracked, q.heap.len());
    }

    #[test]
    fn positions_follow_every_swap() {
        let mut q = IndexedPriorityQueue::new(|a: &i32, b: &i32| a.cmp(b));
        let handles = q.init([9, 4, 7, 1, 8, 2]).unwrap();
        assert_heap_order(&q);

        q.update_with(handles[0], |v| *v = 0).unwrap();
        assert_heap_order(&q);
        q.update_with(handles[3], |v| *v = 10).unwrap();
        assert_heap_order(&q);

        q.remove(handles[4]).unwrap();
        assert_heap_order(&q);
        q.offer();
        assert_heap_order(&q);
    }

    #[test]
    fn single_child_sift_down_compares_against_the_left_child() {
        let mut q = IndexedPriorityQueue::new(|a: &i32, b: &i32| a.cmp(b));
        let handles = q.init([1, 2]).unwrap();
        q.update_with(handles[0], |v| *v = 3).unwrap();
        assert_heap_order(&q);
        assert_eq!(q.peek(), Some(&2));
    }
}
