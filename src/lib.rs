//! Binary Min-Heap for Rust
//!
//! This crate provides an array-backed binary min-heap: a priority container
//! with O(log n) insertion and minimum removal, O(1) access to the minimum, and
//! O(n) bulk construction from an arbitrary sequence.
//!
//! Reading or removing the minimum of an empty heap is an explicit
//! [`HeapError::Underflow`], never a panic.
//!
//! # Example
//!
//! ```rust
//! use binary_min_heap::{BinaryMinHeap, MinHeap};
//!
//! let mut heap = BinaryMinHeap::new();
//! heap.build_heap(vec![2, 3, 9, 4, 1, 8, 7, 15, 20, 41, 32, 5]);
//! heap.insert(0);
//!
//! assert_eq!(heap.find_min(), Ok(&0));
//! assert_eq!(heap.delete_min(), Ok(0));
//! assert_eq!(heap.delete_min(), Ok(1));
//! ```

pub mod binary;
pub mod config;
pub mod traits;

pub use binary::BinaryMinHeap;
pub use config::HeapConfig;
pub use traits::{HeapError, HeapResult, MinHeap};
