//! Common trait and error type for min-heaps
//!
//! [`MinHeap`] names the operation set shared by the heaps in this crate so
//! callers and tests can be written generically. Reads on an empty heap are
//! reported through [`HeapError::Underflow`] rather than `None`; the
//! `Option`-returning `peek`/`pop` pair is provided on top for callers who
//! prefer the `std::collections::BinaryHeap` idiom.

use thiserror::Error;

/// Error type for heap operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `find_min` or `delete_min` was called on an empty heap
    #[error("heap underflow: {operation} called on an empty heap")]
    Underflow {
        /// Name of the operation that underflowed
        operation: &'static str,
    },
}

/// Result alias for fallible heap operations
pub type HeapResult<T> = Result<T, HeapError>;

/// Base trait for min-heap data structures
///
/// Elements are ordered by their own [`Ord`] implementation; the smallest
/// element is always at the front. Wrap elements in [`std::cmp::Reverse`] to
/// get max-heap behavior.
///
/// # Example
///
/// ```rust
/// use binary_min_heap::{BinaryMinHeap, HeapError, MinHeap};
///
/// let mut heap = BinaryMinHeap::new();
/// heap.insert(5);
/// heap.insert(3);
/// heap.insert(8);
///
/// assert_eq!(heap.delete_min(), Ok(3));
/// assert_eq!(heap.find_min(), Ok(&5));
///
/// let mut empty: BinaryMinHeap<i32> = BinaryMinHeap::new();
/// assert!(matches!(empty.delete_min(), Err(HeapError::Underflow { .. })));
/// ```
pub trait MinHeap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: T);

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn find_min(&self) -> HeapResult<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn delete_min(&mut self) -> HeapResult<T>;

    /// Replaces the contents of the heap with `elements` and restores heap order
    ///
    /// Any previous contents are dropped.
    ///
    /// # Time Complexity
    /// O(n) for the binary heap's bottom-up construction.
    fn build_heap<I: IntoIterator<Item = T>>(&mut self, elements: I);

    /// Returns the minimum element, or `None` if the heap is empty
    fn peek(&self) -> Option<&T> {
        self.find_min().ok()
    }

    /// Removes and returns the minimum element, or `None` if the heap is empty
    fn pop(&mut self) -> Option<T> {
        self.delete_min().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_message_names_operation() {
        let err = HeapError::Underflow {
            operation: "delete_min",
        };
        assert_eq!(
            err.to_string(),
            "heap underflow: delete_min called on an empty heap"
        );
    }
}
