//! Binary Min-Heap implementation
//!
//! An array-backed binary min-heap. The tree is stored in level order in a
//! single `Vec`: the element at index `i` has its parent at `(i - 1) / 2` and
//! its children at `2i + 1` and `2i + 2`.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `delete_min` | O(log n)   |
//! | `find_min`   | O(1)       |
//! | `build_heap` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use binary_min_heap::{BinaryMinHeap, MinHeap};
//!
//! let mut heap = BinaryMinHeap::new();
//! heap.build_heap(vec![2, 3, 9, 4, 1, 8, 7, 15, 20, 41, 32, 5]);
//!
//! assert_eq!(heap.find_min(), Ok(&1));
//! assert_eq!(heap.delete_min(), Ok(1));
//! assert_eq!(heap.delete_min(), Ok(2));
//! assert_eq!(heap.len(), 10);
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::config::HeapConfig;
use crate::traits::{HeapError, HeapResult, MinHeap};

/// A binary min-heap
///
/// Always yields its smallest element first. Duplicates are allowed and are
/// returned in no particular order relative to each other.
#[derive(Debug, Clone)]
pub struct BinaryMinHeap<T: Ord> {
    /// Live elements in level order; `data.len()` is the heap size
    data: Vec<T>,
}

impl<T: Ord> MinHeap<T> for BinaryMinHeap<T> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, value: T) {
        self.data.push(value);
        self.percolate_up(self.data.len() - 1);
    }

    fn find_min(&self) -> HeapResult<&T> {
        self.data.first().ok_or_else(|| underflow("find_min"))
    }

    fn delete_min(&mut self) -> HeapResult<T> {
        if self.data.is_empty() {
            return Err(underflow("delete_min"));
        }

        // The last element takes the root's slot.
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.percolate_down(0);
        }

        Ok(min)
    }

    fn build_heap<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.data.clear();
        self.data.extend(elements);
        self.heapify();
        debug!(len = self.data.len(), "built heap");
    }
}

impl<T: Ord> BinaryMinHeap<T> {
    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Creates an empty heap using the given settings
    pub fn with_config(config: &HeapConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Builds a heap from a vector in O(n), reusing its allocation
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        heap.heapify();
        heap
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.delete_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Consumes the heap, returning the backing storage in level order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns true if every element is no smaller than its parent
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2] <= self.data[i])
    }

    /// Move element at index up while its parent is strictly greater
    fn percolate_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[parent] > self.data[index] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while its smaller child is strictly less
    fn percolate_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let min_child = if right >= len || self.data[left] < self.data[right] {
                left
            } else {
                right
            };

            if self.data[min_child] < self.data[index] {
                self.data.swap(index, min_child);
                index = min_child;
            } else {
                break;
            }
        }
    }

    /// Restore heap order over the whole vector, bottom-up
    fn heapify(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.percolate_down(index);
        }
    }
}

fn underflow(operation: &'static str) -> HeapError {
    trace!(operation, "heap underflow");
    HeapError::Underflow { operation }
}

impl<T: Ord> Default for BinaryMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for BinaryMinHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Ord> FromIterator<T> for BinaryMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for BinaryMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord + fmt::Display> fmt::Display for BinaryMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryMinHeap[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;

    #[test]
    fn test_basic_operations() {
        let mut heap = BinaryMinHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.insert(5);
        heap.insert(3);
        heap.insert(8);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.delete_min(), Ok(3));
        assert_eq!(heap.find_min(), Ok(&5));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_empty_heap_underflows() {
        let mut heap: BinaryMinHeap<i32> = BinaryMinHeap::new();

        assert!(heap.is_empty());
        assert_eq!(
            heap.find_min(),
            Err(HeapError::Underflow {
                operation: "find_min"
            })
        );
        assert_eq!(
            heap.delete_min(),
            Err(HeapError::Underflow {
                operation: "delete_min"
            })
        );
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_single_element_round_trip() {
        let mut heap = BinaryMinHeap::new();
        heap.insert(42);

        assert_eq!(heap.delete_min(), Ok(42));
        assert!(heap.is_empty());
        assert!(heap.delete_min().is_err());

        // Reusable after draining
        heap.insert(7);
        assert_eq!(heap.find_min(), Ok(&7));
    }

    #[test]
    fn test_build_heap_layout() {
        let mut heap = BinaryMinHeap::new();
        heap.build_heap(vec![2, 3, 9, 4, 1, 8, 7, 15, 20, 41, 32, 5]);

        assert_eq!(heap.len(), 12);
        assert!(heap.is_valid());
        assert_eq!(
            heap.clone().into_vec(),
            vec![1, 2, 5, 4, 3, 8, 7, 15, 20, 41, 32, 9]
        );
        assert_eq!(
            heap.into_sorted_vec(),
            vec![1, 2, 3, 4, 5, 7, 8, 9, 15, 20, 32, 41]
        );
    }

    #[test]
    fn test_build_heap_overwrites_previous_contents() {
        let mut heap = BinaryMinHeap::new();
        heap.insert(-10);
        heap.insert(-20);

        heap.build_heap(vec![3, 1, 2]);

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_build_heap_empty_input() {
        let mut heap = BinaryMinHeap::from_vec(vec![1, 2, 3]);
        heap.build_heap(Vec::new());

        assert!(heap.is_empty());
        assert!(heap.find_min().is_err());
    }

    #[test]
    fn test_duplicates() {
        let mut heap = BinaryMinHeap::new();
        heap.build_heap(vec![4, 1, 4, 1, 4, 1]);

        assert_eq!(heap.into_sorted_vec(), vec![1, 1, 1, 4, 4, 4]);
    }

    #[test]
    fn test_find_min_is_idempotent() {
        let heap: BinaryMinHeap<i32> = vec![9, 4, 6].into();

        assert_eq!(heap.find_min(), Ok(&4));
        assert_eq!(heap.find_min(), Ok(&4));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = BinaryMinHeap::new();

        for i in 0..100 {
            heap.insert(i);
        }

        for i in 0..100 {
            assert_eq!(heap.delete_min(), Ok(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = BinaryMinHeap::new();

        for i in (0..100).rev() {
            heap.insert(i);
            assert!(heap.is_valid());
        }

        for i in 0..100 {
            assert_eq!(heap.delete_min(), Ok(i));
        }
    }

    #[test]
    fn test_reverse_gives_max_heap() {
        let mut heap: BinaryMinHeap<Reverse<i32>> =
            [3, 9, 1].into_iter().map(Reverse).collect();

        assert_eq!(heap.delete_min(), Ok(Reverse(9)));
        assert_eq!(heap.delete_min(), Ok(Reverse(3)));
        assert_eq!(heap.delete_min(), Ok(Reverse(1)));
    }

    #[test]
    fn test_extend_inserts_each_element() {
        let mut heap = BinaryMinHeap::new();
        heap.insert(10);
        heap.extend(vec![7, 12, 1]);

        assert_eq!(heap.len(), 4);
        assert!(heap.is_valid());
        assert_eq!(heap.find_min(), Ok(&1));
    }

    #[test]
    fn test_display_shows_level_order() {
        let heap = BinaryMinHeap::from_vec(vec![3, 1, 2]);
        assert_eq!(heap.to_string(), "BinaryMinHeap[1, 3, 2]");

        let empty: BinaryMinHeap<i32> = BinaryMinHeap::new();
        assert_eq!(empty.to_string(), "BinaryMinHeap[]");
    }

    #[test]
    fn test_with_config_reserves_capacity() {
        let config = HeapConfig::default().with_initial_capacity(32);
        let heap: BinaryMinHeap<u8> = BinaryMinHeap::with_config(&config);

        assert!(heap.capacity() >= 32);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut heap = BinaryMinHeap::from_vec(vec![5, 6, 7]);
        heap.clear();

        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
    }
}
