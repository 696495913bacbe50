//! Construction-time settings for [`BinaryMinHeap`](crate::binary::BinaryMinHeap)

/// Settings applied when a heap is created
///
/// ```rust
/// use binary_min_heap::{BinaryMinHeap, HeapConfig};
///
/// let config = HeapConfig::default().with_initial_capacity(64);
/// let heap: BinaryMinHeap<u32> = BinaryMinHeap::with_config(&config);
/// assert!(heap.capacity() >= 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeapConfig {
    /// Number of elements to reserve storage for up front
    pub initial_capacity: usize,
}

impl HeapConfig {
    /// Sets the number of elements to reserve storage for
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}
