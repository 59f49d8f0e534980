use std::ops::Bound;

use super::DirectedWeightedGraph;
use super::edge::{Edge, EdgeRef, OutEdge};

/// Owned position in the global edge order of a graph.
///
/// A cursor is either past-the-end or the key of one edge. It borrows nothing, so it stays
/// usable across mutations: navigating from a cursor whose edge has since been erased moves to
/// the neighbouring edges that remain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor<N, E> {
    position: Option<(N, OutEdge<N, E>)>,
}

impl<N, E> Cursor<N, E> {
    pub fn end() -> Self {
        Self { position: None }
    }

    pub(crate) fn at(from: N, edge: OutEdge<N, E>) -> Self {
        Self {
            position: Some((from, edge)),
        }
    }

    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }

    pub fn source(&self) -> Option<&N> {
        self.position.as_ref().map(|(from, _)| from)
    }

    pub fn target(&self) -> Option<&N> {
        self.position.as_ref().map(|(_, edge)| &edge.to)
    }

    pub fn weight(&self) -> Option<&E> {
        self.position.as_ref().map(|(_, edge)| &edge.weight)
    }

    /// The edge key this cursor denotes, whether or not it is still in the graph.
    pub fn into_edge(self) -> Option<Edge<N, E>> {
        self.position
            .map(|(from, edge)| Edge::new(from, edge.to, edge.weight))
    }
}

impl<N, E> Default for Cursor<N, E> {
    fn default() -> Self {
        Self::end()
    }
}

impl<N, E> DirectedWeightedGraph<N, E>
where
    N: Ord + Clone,
    E: Ord + Clone,
{
    /// Cursor to the first edge, or [`Cursor::end`] when the graph has no edges.
    pub fn begin(&self) -> Cursor<N, E> {
        self.first_edge_in((Bound::Unbounded, Bound::Unbounded))
    }

    pub fn end(&self) -> Cursor<N, E> {
        Cursor::end()
    }

    /// Cursor to the edge `src -> dst` with `weight`, or end when there is no such edge.
    pub fn find(&self, src: &N, dst: &N, weight: &E) -> Cursor<N, E> {
        let probe = OutEdge {
            to: dst.clone(),
            weight: weight.clone(),
        };
        match self.adjacency.get(src) {
            Some(edges) if edges.contains(&probe) => Cursor::at(src.clone(), probe),
            _ => Cursor::end(),
        }
    }

    /// The edge `cursor` denotes, if it is still present.
    pub fn get(&self, cursor: &Cursor<N, E>) -> Option<EdgeRef<'_, N, E>> {
        let (from, key) = cursor.position.as_ref()?;
        let (from, edges) = self.adjacency.get_key_value(from)?;
        edges.get(key).map(|edge| EdgeRef::new(from, edge))
    }

    /// Cursor to the first edge ordered after `cursor`. Advancing the end cursor stays at end.
    pub fn next(&self, cursor: &Cursor<N, E>) -> Cursor<N, E> {
        match &cursor.position {
            Some((from, key)) => self.edge_after(from, key),
            None => Cursor::end(),
        }
    }

    /// Cursor to the last edge ordered before `cursor`.
    ///
    /// Retreating from end yields the last edge. There is nothing before the first edge, so
    /// retreating from it yields end.
    pub fn prev(&self, cursor: &Cursor<N, E>) -> Cursor<N, E> {
        match &cursor.position {
            Some((from, key)) => {
                let before = self
                    .adjacency
                    .get(from)
                    .and_then(|edges| {
                        edges
                            .range::<OutEdge<N, E>, _>((Bound::Unbounded, Bound::Excluded(key)))
                            .next_back()
                    });
                match before {
                    Some(edge) => Cursor::at(from.clone(), edge.clone()),
                    None => self.last_edge_in((Bound::Unbounded, Bound::Excluded(from))),
                }
            }
            None => self.last_edge_in((Bound::Unbounded, Bound::Unbounded)),
        }
    }

    /// Removes the edge `cursor` denotes and returns a cursor to the edge that followed it.
    pub fn erase_edge_at(&mut self, cursor: Cursor<N, E>) -> Cursor<N, E> {
        let Some((from, key)) = cursor.position else {
            return Cursor::end();
        };
        if self
            .adjacency
            .get_mut(&from)
            .is_some_and(|edges| edges.remove(&key))
        {
            tracing::trace!("erased edge at cursor");
            self.edges -= 1;
        }
        self.edge_after(&from, &key)
    }

    /// Removes every edge in `[first, last)` and returns the cursor where erasing stopped.
    ///
    /// That is `last` when it was reached, or end when `last` does not follow `first`.
    pub fn erase_edge_range(&mut self, first: Cursor<N, E>, last: Cursor<N, E>) -> Cursor<N, E> {
        let mut cursor = first;
        while !cursor.is_end() && cursor != last {
            cursor = self.erase_edge_at(cursor);
        }
        cursor
    }

    fn edge_after(&self, from: &N, key: &OutEdge<N, E>) -> Cursor<N, E> {
        let after = self
            .adjacency
            .get(from)
            .and_then(|edges| {
                edges
                    .range::<OutEdge<N, E>, _>((Bound::Excluded(key), Bound::Unbounded))
                    .next()
            });
        match after {
            Some(edge) => Cursor::at(from.clone(), edge.clone()),
            None => self.first_edge_in((Bound::Excluded(from), Bound::Unbounded)),
        }
    }

    fn first_edge_in(&self, nodes: (Bound<&N>, Bound<&N>)) -> Cursor<N, E> {
        self.adjacency
            .range::<N, _>(nodes)
            .find_map(|(from, edges)| {
                edges
                    .first()
                    .map(|edge| Cursor::at(from.clone(), edge.clone()))
            })
            .unwrap_or_default()
    }

    fn last_edge_in(&self, nodes: (Bound<&N>, Bound<&N>)) -> Cursor<N, E> {
        self.adjacency
            .range::<N, _>(nodes)
            .rev()
            .find_map(|(from, edges)| {
                edges
                    .last()
                    .map(|edge| Cursor::at(from.clone(), edge.clone()))
            })
            .unwrap_or_default()
    }
}
