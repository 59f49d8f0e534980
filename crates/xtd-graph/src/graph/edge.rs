use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// Entry of a node's outgoing set. Field order gives the `(destination, weight)` ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct OutEdge<N, E> {
    pub(crate) to: N,
    pub(crate) weight: E,
}

/// Lookup key into a node's outgoing set. A missing weight sorts before every weight, so
/// [`FirstTo`] marks where the edges towards one destination begin.
pub(crate) trait OutKey<N, E> {
    fn key(&self) -> (&N, Option<&E>);
}

impl<N, E> OutKey<N, E> for OutEdge<N, E> {
    fn key(&self) -> (&N, Option<&E>) {
        (&self.to, Some(&self.weight))
    }
}

pub(crate) struct FirstTo<'a, N>(pub(crate) &'a N);

impl<N, E> OutKey<N, E> for FirstTo<'_, N> {
    fn key(&self) -> (&N, Option<&E>) {
        (self.0, None)
    }
}

impl<'a, N: 'a, E: 'a> Borrow<dyn OutKey<N, E> + 'a> for OutEdge<N, E> {
    fn borrow(&self) -> &(dyn OutKey<N, E> + 'a) {
        self
    }
}

impl<N: PartialEq, E: PartialEq> PartialEq for dyn OutKey<N, E> + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<N: Eq, E: Eq> Eq for dyn OutKey<N, E> + '_ {}

impl<N: Ord, E: Ord> PartialOrd for dyn OutKey<N, E> + '_ {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, E: Ord> Ord for dyn OutKey<N, E> + '_ {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Borrowed view of one edge, produced while walking the graph.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeRef<'a, N, E> {
    pub from: &'a N,
    pub to: &'a N,
    pub weight: &'a E,
}

impl<'a, N, E> EdgeRef<'a, N, E> {
    pub(crate) fn new(from: &'a N, edge: &'a OutEdge<N, E>) -> Self {
        Self {
            from,
            to: &edge.to,
            weight: &edge.weight,
        }
    }

    pub fn to_owned_edge(&self) -> Edge<N, E>
    where
        N: Clone,
        E: Clone,
    {
        Edge {
            from: self.from.clone(),
            to: self.to.clone(),
            weight: self.weight.clone(),
        }
    }
}

impl<N, E> Clone for EdgeRef<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for EdgeRef<'_, N, E> {}

impl<N: PartialEq, E: PartialEq> PartialEq<Edge<N, E>> for EdgeRef<'_, N, E> {
    fn eq(&self, other: &Edge<N, E>) -> bool {
        *self.from == other.from && *self.to == other.to && *self.weight == other.weight
    }
}

/// Owned `(from, to, weight)` triple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N, E> {
    pub from: N,
    pub to: N,
    pub weight: E,
}

impl<N, E> Edge<N, E> {
    pub fn new(from: N, to: N, weight: E) -> Self {
        Self { from, to, weight }
    }
}

impl<N: fmt::Display, E: fmt::Display> fmt::Display for Edge<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ({}, {})", self.from, self.to, self.weight)
    }
}
