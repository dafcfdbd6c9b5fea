//! Capacity-bounded FIFO buffer.

use std::collections::VecDeque;

/// An ordered buffer that drops its oldest entries once `capacity` is
/// exceeded.
///
/// Output surfaces grow for as long as the page is open, so every push
/// keeps memory bounded at O(1) cost.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundedBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedBuffer<T> {
    /// Creates an empty buffer. A zero capacity is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            self.push(item);
        }
    }

    /// Replaces every entry with `items`, keeping only the newest ones
    /// that fit.
    pub fn replace_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.clear();
        self.extend(items);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.back_mut()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Clone> BoundedBuffer<T> {
    /// Snapshot in oldest-first order.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for BoundedBuffer<T> {
    fn default() -> Self {
        Self::new(crate::config::MAX_TERMINAL_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_within_capacity() {
        let mut buf = BoundedBuffer::new(3);
        buf.push(1);
        buf.push(2);
        assert_eq!(buf.to_vec(), vec![1, 2]);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_push_drops_oldest() {
        let mut buf = BoundedBuffer::new(3);
        buf.extend(1..=5);
        assert_eq!(buf.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn test_replace_all_and_clear() {
        let mut buf = BoundedBuffer::new(2);
        buf.extend([1, 2]);
        buf.replace_all([7, 8, 9]);
        assert_eq!(buf.to_vec(), vec![8, 9]);
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_last_mut() {
        let mut buf = BoundedBuffer::new(4);
        assert!(buf.last_mut().is_none());
        buf.extend([1, 2]);
        if let Some(last) = buf.last_mut() {
            *last = 20;
        }
        assert_eq!(buf.to_vec(), vec![1, 20]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut buf = BoundedBuffer::new(0);
        buf.extend([1, 2]);
        assert_eq!(buf.capacity(), 1);
        assert_eq!(buf.to_vec(), vec![2]);
    }
}
