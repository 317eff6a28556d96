use std::fmt::Debug;

use crate::{Error, IndexError, Result};

/// A slot in the heap array: the external index and its current key
#[derive(Debug, Clone, Copy)]
struct Entry<K> {
    index: usize,
    key: K,
}

/// Indexed binary min-heap over the integer indices `0..capacity`
///
/// Heap order lives in one contiguous array; a companion position table maps
/// each index to its slot, which is what makes `decrease_key` O(log n).
/// Invariants:
/// - `key(heap[parent(s)]) <= key(heap[s])` for every slot `s > 0`
/// - `position[i] == Some(s)` iff `heap[s].index == i`
#[derive(Debug, Clone)]
pub struct IndexMinPQ<K>
where
    K: PartialOrd + Copy + Debug,
{
    /// Heap-ordered entries; the root is at slot 0
    heap: Vec<Entry<K>>,

    /// Slot of each index in `heap`, `None` when the index is not queued
    position: Vec<Option<usize>>,
}

impl<K> IndexMinPQ<K>
where
    K: PartialOrd + Copy + Debug,
{
    /// Creates an empty queue accepting indices `0..capacity`
    pub fn new(capacity: usize) -> Self {
        IndexMinPQ {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    /// Returns true if `index` is currently queued
    pub fn contains(&self, index: usize) -> Result<bool> {
        self.validate_index(index)?;
        Ok(self.position[index].is_some())
    }

    /// Current key of `index`, if queued
    pub fn key_of(&self, index: usize) -> Result<Option<K>> {
        self.validate_index(index)?;
        Ok(self.position[index].map(|slot| self.heap[slot].key))
    }

    /// Index and key at the root, without removing it
    pub fn peek(&self) -> Option<(usize, K)> {
        self.heap.first().map(|entry| (entry.index, entry.key))
    }

    /// Inserts `index` with priority `key`
    pub fn insert(&mut self, index: usize, key: K) -> Result<()> {
        self.validate_index(index)?;
        if self.position[index].is_some() {
            return Err(Error::InvalidIndex {
                index,
                reason: IndexError::AlreadyPresent,
            });
        }

        let slot = self.heap.len();
        self.heap.push(Entry { index, key });
        self.position[index] = Some(slot);
        self.swim(slot);
        Ok(())
    }

    /// Lowers the key of a queued index; the new key must be strictly smaller
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<()> {
        self.validate_index(index)?;
        let slot = self.position[index].ok_or(Error::InvalidIndex {
            index,
            reason: IndexError::NotPresent,
        })?;

        // Written as a negation so that NaN keys are refused too
        if !(key < self.heap[slot].key) {
            return Err(Error::InvalidIndex {
                index,
                reason: IndexError::KeyNotDecreased,
            });
        }

        self.heap[slot].key = key;
        self.swim(slot);
        Ok(())
    }

    /// Removes the index with the smallest key and returns it
    pub fn del_min(&mut self) -> Result<usize> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let last = self.heap.len() - 1;
        self.exchange(0, last);
        let min = self.heap.swap_remove(last);
        self.position[min.index] = None;
        if !self.heap.is_empty() {
            self.sink(0);
        }
        Ok(min.index)
    }

    /// Checks both heap invariants; O(n), meant for tests and debugging
    pub fn is_min_heap(&self) -> bool {
        let ordered = (1..self.heap.len()).all(|slot| !(self.heap[slot].key < self.heap[parent(slot)].key));
        let indexed = self
            .heap
            .iter()
            .enumerate()
            .all(|(slot, entry)| self.position[entry.index] == Some(slot));
        let counted = self.position.iter().filter(|p| p.is_some()).count() == self.heap.len();
        ordered && indexed && counted
    }

    fn validate_index(&self, index: usize) -> Result<()> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(Error::InvalidIndex {
                index,
                reason: IndexError::OutOfRange {
                    capacity: self.capacity(),
                },
            })
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].key < self.heap[b].key
    }

    /// Swaps two heap slots and keeps the position table in step
    fn exchange(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a].index] = Some(a);
        self.position[self.heap[b].index] = Some(b);
    }

    fn swim(&mut self, mut slot: usize) {
        while slot > 0 && self.less(slot, parent(slot)) {
            self.exchange(slot, parent(slot));
            slot = parent(slot);
        }
    }

    fn sink(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }

            // Ties go to the left child
            let right = left + 1;
            let child = if right < len && self.less(right, left) { right } else { left };
            if !self.less(child, slot) {
                break;
            }
            self.exchange(slot, child);
            slot = child;
        }
    }
}

fn parent(slot: usize) -> usize {
    (slot - 1) / 2
}
