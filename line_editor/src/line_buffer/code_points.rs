// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Fill value for unused storage slots past `size`.
const EMPTY_SLOT: char = '\0';

/// Growable, contiguous code point storage for the active line.
///
/// The backing vector is always fully initialized and is at least `size` long. It
/// doubles when an insert would overflow it, and only shrinks back to a fresh
/// allocation via [`CodePoints::with_capacity`]. Slots in `[size, capacity)` hold
/// `'\0'` and are never observable through the public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePoints {
    storage: Vec<char>,
    size: usize,
}

impl Default for CodePoints {
    fn default() -> Self { Self::with_capacity(super::DEFAULT_INITIAL_CAPACITY) }
}

impl CodePoints {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![EMPTY_SLOT; capacity.max(1)],
            size: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.size }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.size == 0 }

    #[must_use]
    pub fn capacity(&self) -> usize { self.storage.len() }

    #[must_use]
    pub fn as_slice(&self) -> &[char] { &self.storage[..self.size] }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.as_slice().get(index).copied()
    }

    /// Overwrite the code point at `index`. Returns `false` if `index >= len()`.
    pub fn set(&mut self, index: usize, ch: char) -> bool {
        match self.storage[..self.size].get_mut(index) {
            Some(slot) => {
                *slot = ch;
                true
            }
            None => false,
        }
    }

    /// Insert `ch` at `index`, moving `[index, len)` one slot to the right. `index` is
    /// clamped to `len()`.
    pub fn insert_at(&mut self, index: usize, ch: char) {
        let index = index.min(self.size);
        self.ensure_capacity(self.size + 1);
        self.shift_right(index, 1);
        self.storage[index] = ch;
        self.size += 1;
    }

    /// Remove `count` code points starting at `index`. The range is clamped to the
    /// content. Returns how many were removed.
    pub fn remove_range(&mut self, index: usize, count: usize) -> usize {
        let index = index.min(self.size);
        let count = count.min(self.size - index);
        if count == 0 {
            return 0;
        }
        self.shift_left(index + count, count);
        let old_size = self.size;
        self.size -= count;
        self.storage[self.size..old_size].fill(EMPTY_SLOT);
        count
    }

    /// Drop all content, keeping the allocation.
    pub fn clear(&mut self) {
        self.storage[..self.size].fill(EMPTY_SLOT);
        self.size = 0;
    }

    /// Grow to at least `required` slots. Doubles the current capacity when that is
    /// enough, so a sequence of single inserts stays amortized O(1).
    fn ensure_capacity(&mut self, required: usize) {
        let capacity = self.capacity();
        if required <= capacity {
            return;
        }
        let new_capacity = required.max(capacity.saturating_mul(2));
        self.storage.resize(new_capacity, EMPTY_SLOT);
    }

    /// Move `[from, size)` to `[from + by, size + by)`. Capacity must already fit.
    fn shift_right(&mut self, from: usize, by: usize) {
        if from < self.size {
            self.storage.copy_within(from..self.size, from + by);
        }
    }

    /// Move `[from, size)` to `[from - by, size - by)`.
    fn shift_left(&mut self, from: usize, by: usize) {
        if from < self.size {
            self.storage.copy_within(from..self.size, from - by);
        }
    }
}

impl std::fmt::Display for CodePoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.as_slice() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn from_str(text: &str, capacity: usize) -> CodePoints {
        let mut it = CodePoints::with_capacity(capacity);
        for ch in text.chars() {
            it.insert_at(it.len(), ch);
        }
        it
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut it = from_str("ac", 8);
        it.insert_at(1, 'b');
        assert_eq2!(it.to_string(), "abc");
        assert_eq2!(it.len(), 3);
    }

    #[test]
    fn test_insert_past_end_is_clamped() {
        let mut it = from_str("ab", 8);
        it.insert_at(10, 'c');
        assert_eq2!(it.to_string(), "abc");
    }

    #[test]
    fn test_capacity_doubles() {
        let mut it = from_str("abcd", 4);
        assert_eq2!(it.capacity(), 4);
        it.insert_at(0, 'z');
        assert_eq2!(it.capacity(), 8);
        assert_eq2!(it.to_string(), "zabcd");
    }

    #[test]
    fn test_zero_capacity_still_grows() {
        let mut it = CodePoints::with_capacity(0);
        assert_eq2!(it.capacity(), 1);
        it.insert_at(0, 'a');
        it.insert_at(1, 'b');
        assert_eq2!(it.to_string(), "ab");
    }

    #[test]
    fn test_remove_range() {
        let mut it = from_str("hello world", 16);
        assert_eq2!(it.remove_range(5, 6), 6);
        assert_eq2!(it.to_string(), "hello");
        assert_eq2!(it.remove_range(0, 1), 1);
        assert_eq2!(it.to_string(), "ello");
    }

    #[test]
    fn test_remove_range_is_clamped() {
        let mut it = from_str("abc", 4);
        assert_eq2!(it.remove_range(1, 99), 2);
        assert_eq2!(it.to_string(), "a");
        assert_eq2!(it.remove_range(5, 1), 0);
        assert_eq2!(it.to_string(), "a");
    }

    #[test]
    fn test_freed_slots_are_not_observable() {
        let mut it = from_str("abc", 4);
        it.remove_range(0, 3);
        assert_eq2!(it.get(0), None);
        it.insert_at(0, 'x');
        assert_eq2!(it.as_slice(), &['x']);
    }

    #[test]
    fn test_set_and_get() {
        let mut it = from_str("abc", 4);
        assert!(it.set(1, 'B'));
        assert!(!it.set(3, 'D'));
        assert_eq2!(it.get(1), Some('B'));
        assert_eq2!(it.to_string(), "aBc");
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut it = from_str("abcdefghij", 2);
        let capacity = it.capacity();
        it.clear();
        assert!(it.is_empty());
        assert_eq2!(it.capacity(), capacity);
    }
}
