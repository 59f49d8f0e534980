//! Fixed-capacity ring buffer that overwrites its oldest element when full.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

/// A FIFO queue holding at most `CAP` elements.
///
/// Pushing into a full queue evicts the oldest element, so the queue always holds the `CAP`
/// most recent pushes. Index `0` is the oldest element.
#[derive(Clone)]
pub struct CircularQueue<T, const CAP: usize> {
    slots: [Option<T>; CAP],
    // Slot of the oldest element.
    head: usize,
    len: usize,
}

impl<T, const CAP: usize> CircularQueue<T, CAP> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        CAP
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == CAP
    }

    /// Appends `item` as the newest element.
    ///
    /// Returns the evicted oldest element when the queue was already full. A zero-capacity
    /// queue hands `item` straight back.
    pub fn push(&mut self, item: T) -> Option<T> {
        if CAP == 0 {
            return Some(item);
        }
        let evicted = if self.is_full() { self.pop() } else { None };
        let slot = (self.head + self.len) % CAP;
        self.slots[slot] = Some(item);
        self.len += 1;
        evicted
    }

    /// Removes and returns the oldest element.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % CAP;
        self.len -= 1;
        item
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.slot(index)].as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.slot(index);
        self.slots[slot].as_mut()
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Iterates from the oldest to the newest element.
    pub fn iter(&self) -> Iter<'_, T, CAP> {
        Iter {
            queue: self,
            front: 0,
            back: self.len,
        }
    }

    fn slot(&self, index: usize) -> usize {
        (self.head + index) % CAP
    }
}

impl<T, const CAP: usize> Default for CircularQueue<T, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CAP: usize> Index<usize> for CircularQueue<T, CAP> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len;
        self.get(index)
            .unwrap_or_else(|| panic!("index {index} out of range for queue of length {len}"))
    }
}

impl<T, const CAP: usize> IndexMut<usize> for CircularQueue<T, CAP> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        self.get_mut(index)
            .unwrap_or_else(|| panic!("index {index} out of range for queue of length {len}"))
    }
}

impl<T, const CAP: usize> FromIterator<T> for CircularQueue<T, CAP> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T, const CAP: usize> Extend<T> for CircularQueue<T, CAP> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: PartialEq, const CAP: usize> PartialEq for CircularQueue<T, CAP> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq, const CAP: usize> Eq for CircularQueue<T, CAP> {}

impl<T: fmt::Debug, const CAP: usize> fmt::Debug for CircularQueue<T, CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements oldest first, separated by `", "`.
impl<T: fmt::Display, const CAP: usize> fmt::Display for CircularQueue<T, CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<'a, T, const CAP: usize> IntoIterator for &'a CircularQueue<T, CAP> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, CAP>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T, const CAP: usize> {
    queue: &'a CircularQueue<T, CAP>,
    front: usize,
    back: usize,
}

impl<'a, T, const CAP: usize> Iterator for Iter<'a, T, CAP> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.queue.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T, const CAP: usize> DoubleEndedIterator for Iter<'a, T, CAP> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.queue.get(self.back)
    }
}

impl<T, const CAP: usize> ExactSizeIterator for Iter<'_, T, CAP> {}

impl<T, const CAP: usize> FusedIterator for Iter<'_, T, CAP> {}
