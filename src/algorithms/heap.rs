//! Keyed binary heap with extract-extreme and update-key.
//!
//! Keeps ids and their keys in parallel vectors, in heap shape under an
//! [`Order`] policy, reusing [`heapify`] for every downward fix-up. The
//! greedy balancer uses it for both the task side and the PE side: the PE
//! at the root is re-keyed after each assignment instead of rebuilding
//! the heap.

use std::marker::PhantomData;

use super::ordering::{build_heap, heapify, identity_map, is_heap, Order};

/// Binary heap of ids ordered by an external key.
///
/// # Example
/// ```
/// use u_balance::algorithms::heap::KeyedHeap;
/// use u_balance::algorithms::ordering::Ascending;
///
/// let mut heap: KeyedHeap<u32, Ascending> = KeyedHeap::from_keys(vec![4, 0, 2]);
/// assert_eq!(heap.peek(), Some((1, &0)));
///
/// heap.update_top(9);
/// assert_eq!(heap.pop(), Some((2, 2)));
/// ```
#[derive(Debug, Clone)]
pub struct KeyedHeap<K, O> {
    ids: Vec<usize>,
    keys: Vec<K>,
    _order: PhantomData<O>,
}

impl<K: PartialOrd, O: Order> KeyedHeap<K, O> {
    /// Builds a heap over ids `0..keys.len()`. O(n).
    pub fn from_keys(keys: Vec<K>) -> Self {
        let ids = identity_map(keys.len());
        Self::from_parts(ids, keys)
    }

    /// Builds a heap over explicit ids. O(n).
    ///
    /// # Panics
    /// If `ids` and `keys` differ in length.
    pub fn from_parts(mut ids: Vec<usize>, mut keys: Vec<K>) -> Self {
        build_heap::<O, K>(&mut ids, &mut keys);
        Self {
            ids,
            keys,
            _order: PhantomData,
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The extreme entry (id, key) without removing it.
    pub fn peek(&self) -> Option<(usize, &K)> {
        Some((*self.ids.first()?, self.keys.first()?))
    }

    /// Removes and returns the extreme entry. O(log n).
    pub fn pop(&mut self) -> Option<(usize, K)> {
        if self.keys.is_empty() {
            return None;
        }
        let last = self.keys.len() - 1;
        self.keys.swap(0, last);
        self.ids.swap(0, last);
        let key = self.keys.pop()?;
        let id = self.ids.pop()?;
        let n = self.keys.len();
        if n > 1 {
            heapify::<O, K>(&mut self.ids, &mut self.keys, n, 0);
        }
        Some((id, key))
    }

    /// Inserts an entry. O(log n).
    pub fn push(&mut self, id: usize, key: K) {
        self.ids.push(id);
        self.keys.push(key);
        self.sift_up(self.keys.len() - 1);
    }

    /// Replaces the root's key and restores the heap. O(log n).
    ///
    /// Does nothing on an empty heap.
    pub fn update_top(&mut self, key: K) {
        if let Some(slot) = self.keys.first_mut() {
            *slot = key;
            let n = self.keys.len();
            heapify::<O, K>(&mut self.ids, &mut self.keys, n, 0);
        }
    }

    /// Replaces the key of `id` and restores the heap.
    ///
    /// The lookup is linear; the fix-up is O(log n) in either direction.
    /// Returns `false` if `id` is not in the heap.
    pub fn update_key(&mut self, id: usize, key: K) -> bool {
        let Some(pos) = self.ids.iter().position(|&x| x == id) else {
            return false;
        };
        self.keys[pos] = key;
        let pos = self.sift_up(pos);
        let n = self.keys.len();
        heapify::<O, K>(&mut self.ids, &mut self.keys, n, pos);
        true
    }

    /// Whether the heap invariant currently holds.
    pub fn is_valid(&self) -> bool {
        is_heap::<O, K>(&self.keys, self.keys.len())
    }

    /// Ids in heap (array) order.
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !O::precedes(&self.keys[pos], &self.keys[parent]) {
                break;
            }
            self.keys.swap(pos, parent);
            self.ids.swap(pos, parent);
            pos = parent;
        }
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::ordering::{Ascending, Descending};

    #[test]
    fn test_pop_yields_ordered_keys() {
        let mut heap: KeyedHeap<i32, Descending> = KeyedHeap::from_keys(vec![3, 9, 1, 7, 5]);
        let mut popped = Vec::new();
        while let Some((id, key)) = heap.pop() {
            assert!(heap.is_valid());
            popped.push((id, key));
        }
        assert_eq!(popped, vec![(1, 9), (3, 7), (4, 5), (0, 3), (2, 1)]);
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: KeyedHeap<u8, Ascending> = KeyedHeap::from_keys(Vec::new());
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        heap.update_top(3);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_update_top_moves_root_down() {
        let mut heap: KeyedHeap<u32, Ascending> = KeyedHeap::from_keys(vec![0, 0, 0]);
        let (root, _) = heap.peek().unwrap();
        heap.update_top(5);
        assert!(heap.is_valid());
        let (next, key) = heap.peek().unwrap();
        assert_ne!(next, root);
        assert_eq!(*key, 0);
    }

    #[test]
    fn test_update_key_both_directions() {
        let mut heap: KeyedHeap<i32, Ascending> =
            KeyedHeap::from_keys(vec![10, 20, 30, 40, 50]);

        assert!(heap.update_key(4, -1));
        assert!(heap.is_valid());
        assert_eq!(heap.peek(), Some((4, &-1)));

        assert!(heap.update_key(4, 100));
        assert!(heap.is_valid());
        assert_eq!(heap.peek(), Some((0, &10)));

        assert!(!heap.update_key(99, 0));
    }

    #[test]
    fn test_push_and_explicit_ids() {
        let mut heap: KeyedHeap<f64, Descending> =
            KeyedHeap::from_parts(vec![10, 20], vec![1.5, 2.5]);
        heap.push(30, 4.0);
        heap.push(40, 0.5);
        assert!(heap.is_valid());
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.ids()[0], 30);
        let mut ids = heap.ids().to_vec();
        ids.sort_unstable();
        assert_eq!(ids, vec![10, 20, 30, 40]);
        assert_eq!(heap.pop(), Some((30, 4.0)));
        assert_eq!(heap.pop(), Some((20, 2.5)));
        assert_eq!(heap.pop(), Some((10, 1.5)));
        assert_eq!(heap.pop(), Some((40, 0.5)));
    }
}
