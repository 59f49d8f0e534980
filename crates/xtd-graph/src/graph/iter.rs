use std::collections::{BTreeSet, btree_map, btree_set};
use std::iter::FusedIterator;

use super::edge::{EdgeRef, OutEdge};

type Inner<'a, N, E> = (&'a N, btree_set::Iter<'a, OutEdge<N, E>>);

/// Iterator over every edge of a [`DirectedWeightedGraph`](super::DirectedWeightedGraph) in
/// ascending `(from, to, weight)` order.
///
/// Walks the node map with an outer iterator and keeps one inner iterator per end. Nodes without
/// outgoing edges are skipped from either direction.
#[derive(Debug, Clone)]
pub struct Edges<'a, N, E> {
    outer: btree_map::Iter<'a, N, BTreeSet<OutEdge<N, E>>>,
    front: Option<Inner<'a, N, E>>,
    back: Option<Inner<'a, N, E>>,
    remaining: usize,
}

impl<'a, N, E> Edges<'a, N, E> {
    pub(crate) fn new(
        outer: btree_map::Iter<'a, N, BTreeSet<OutEdge<N, E>>>,
        remaining: usize,
    ) -> Self {
        Self {
            outer,
            front: None,
            back: None,
            remaining,
        }
    }

    fn yielded(&mut self, from: &'a N, edge: &'a OutEdge<N, E>) -> Option<EdgeRef<'a, N, E>> {
        self.remaining -= 1;
        Some(EdgeRef::new(from, edge))
    }
}

impl<'a, N, E> Iterator for Edges<'a, N, E> {
    type Item = EdgeRef<'a, N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((from, inner)) = &mut self.front {
                let from = *from;
                if let Some(edge) = inner.next() {
                    return self.yielded(from, edge);
                }
                self.front = None;
            }
            match self.outer.next() {
                Some((from, edges)) => self.front = Some((from, edges.iter())),
                None => {
                    // The back inner iterator holds whatever is left.
                    let (from, inner) = self.back.as_mut()?;
                    let from = *from;
                    let edge = inner.next()?;
                    return self.yielded(from, edge);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N, E> DoubleEndedIterator for Edges<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((from, inner)) = &mut self.back {
                let from = *from;
                if let Some(edge) = inner.next_back() {
                    return self.yielded(from, edge);
                }
                self.back = None;
            }
            match self.outer.next_back() {
                Some((from, edges)) => self.back = Some((from, edges.iter())),
                None => {
                    let (from, inner) = self.front.as_mut()?;
                    let from = *from;
                    let edge = inner.next_back()?;
                    return self.yielded(from, edge);
                }
            }
        }
    }
}

impl<N, E> ExactSizeIterator for Edges<'_, N, E> {}

impl<N, E> FusedIterator for Edges<'_, N, E> {}
