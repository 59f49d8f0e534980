//! Paired view over two slices.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// Element-wise pairing of two slices.
///
/// The view is as long as the shorter slice; trailing elements of the longer one are never
/// visited. Items are `(&A, &B)` tuples borrowed from the underlying slices.
pub struct Zip<'a, A, B> {
    first: &'a [A],
    second: &'a [B],
}

impl<'a, A, B> Zip<'a, A, B> {
    pub fn new(first: &'a [A], second: &'a [B]) -> Self {
        let len = first.len().min(second.len());
        Self {
            first: &first[..len],
            second: &second[..len],
        }
    }

    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(&'a A, &'a B)> {
        Some((self.first.get(index)?, self.second.get(index)?))
    }

    pub fn first(&self) -> Option<(&'a A, &'a B)> {
        self.get(0)
    }

    pub fn last(&self) -> Option<(&'a A, &'a B)> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> Iter<'a, A, B> {
        Iter {
            inner: self.first.iter().zip(self.second.iter()),
        }
    }
}

impl<A, B> Clone for Zip<'_, A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B> Copy for Zip<'_, A, B> {}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for Zip<'_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, A, B> IntoIterator for &Zip<'a, A, B> {
    type Item = (&'a A, &'a B);
    type IntoIter = Iter<'a, A, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A, B> IntoIterator for Zip<'a, A, B> {
    type Item = (&'a A, &'a B);
    type IntoIter = Iter<'a, A, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'a, A, B> {
    inner: std::iter::Zip<slice::Iter<'a, A>, slice::Iter<'a, B>>,
}

impl<'a, A, B> Iterator for Iter<'a, A, B> {
    type Item = (&'a A, &'a B);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n)
    }
}

impl<A, B> DoubleEndedIterator for Iter<'_, A, B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<A, B> ExactSizeIterator for Iter<'_, A, B> {}

impl<A, B> FusedIterator for Iter<'_, A, B> {}
