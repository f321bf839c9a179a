//! Fixed-capacity output collection.
//!
//! Producers that fill caller-sized buffers (layout lines, verse lookups)
//! share one shape-stability contract: the caller supplies a maximum count
//! and receives the actual count. [`Bounded`] carries that contract as an
//! owned value instead of raw pointer/length pairs: items past the capacity
//! are dropped, but the required count keeps growing so the caller can
//! reallocate and retry exactly once.

/// An ordered collection that never grows past its capacity, while
/// remembering how many items were actually produced.
#[derive(Debug, Clone)]
pub struct Bounded<T> {
    items: Vec<T>,
    capacity: usize,
    required: usize,
}

impl<T> Bounded<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            required: 0,
        }
    }

    /// Appends an item if the capacity allows. Returns false when the item
    /// was dropped; the required count grows either way.
    pub fn push(&mut self, item: T) -> bool {
        self.required += 1;
        if self.items.len() < self.capacity {
            self.items.push(item);
            true
        } else {
            false
        }
    }

    /// The number of items the producer emitted in total. When this
    /// exceeds [`len`](Self::len), the caller should retry with this
    /// capacity.
    pub fn required(&self) -> usize {
        self.required
    }

    pub fn is_truncated(&self) -> bool {
        self.required > self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Extend<T> for Bounded<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
