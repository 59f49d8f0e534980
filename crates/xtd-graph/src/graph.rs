use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::Bound;

use xtd_algo::transform_if;

use crate::error::{GraphError, Result};

mod cursor;
mod edge;
mod iter;

pub mod alg;

pub use cursor::Cursor;
pub use edge::{Edge, EdgeRef};
pub use iter::Edges;

use edge::{FirstTo, OutEdge, OutKey};

/// Directed weighted multigraph with ordered nodes and ordered edges.
///
/// Each node maps to the set of its outgoing `(destination, weight)` pairs. An edge is
/// identified by its `(from, to, weight)` triple, so two nodes may be joined by several edges
/// as long as their weights differ. Self-loops are allowed and nodes without edges are kept.
///
/// Operations that name nodes which are not in the graph return [`GraphError`] and leave the
/// graph untouched.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DirectedWeightedGraph<N, E> {
    adjacency: BTreeMap<N, BTreeSet<OutEdge<N, E>>>,
    edges: usize,
}

impl<N, E> Default for DirectedWeightedGraph<N, E> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            edges: 0,
        }
    }
}

impl<N, E> DirectedWeightedGraph<N, E>
where
    N: Ord + Clone,
    E: Ord + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        let mut g = Self::new();
        g.extend(nodes);
        g
    }

    /// Adds `value` as a node. Returns `false` if it was already present.
    pub fn insert_node(&mut self, value: N) -> bool {
        match self.adjacency.entry(value) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(BTreeSet::new());
                tracing::trace!(nodes = self.adjacency.len(), "inserted node");
                true
            }
        }
    }

    /// Adds the edge `src -> dst` with `weight`. Returns `Ok(false)` if that exact edge exists.
    pub fn insert_edge(&mut self, src: &N, dst: &N, weight: E) -> Result<bool> {
        if !self.adjacency.contains_key(dst) {
            return Err(missing_endpoint("insert_edge"));
        }
        let Some(edges) = self.adjacency.get_mut(src) else {
            return Err(missing_endpoint("insert_edge"));
        };
        let inserted = edges.insert(OutEdge {
            to: dst.clone(),
            weight,
        });
        if inserted {
            tracing::trace!(out_degree = edges.len(), "inserted edge");
            self.edges += 1;
        }
        Ok(inserted)
    }

    /// Renames `old` to `new`, carrying every incoming and outgoing edge along.
    ///
    /// Returns `Ok(false)` without touching the graph when `new` is already a node.
    pub fn replace_node(&mut self, old: &N, new: N) -> Result<bool> {
        if !self.adjacency.contains_key(old) {
            return Err(missing_node("replace_node"));
        }
        if self.adjacency.contains_key(&new) {
            return Ok(false);
        }
        self.redirect(old, &new);
        tracing::trace!(edges = self.edge_count(), "replaced node");
        Ok(true)
    }

    /// Folds `old` into `new`: every edge touching `old` is re-pointed at `new`, edges that
    /// become identical collapse into one, and `old` is removed.
    pub fn merge_replace_node(&mut self, old: &N, new: &N) -> Result<()> {
        if !self.adjacency.contains_key(old) || !self.adjacency.contains_key(new) {
            return Err(missing_endpoint("merge_replace_node"));
        }
        if old == new {
            return Ok(());
        }
        self.redirect(old, new);
        tracing::trace!(
            nodes = self.adjacency.len(),
            edges = self.edge_count(),
            "merged node"
        );
        Ok(())
    }

    /// Removes `value` together with every edge into or out of it.
    pub fn erase_node(&mut self, value: &N) -> bool {
        let Some(outgoing) = self.adjacency.remove(value) else {
            return false;
        };
        let mut removed = outgoing.len();
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|edge| edge.to != *value);
            removed += before - edges.len();
        }
        self.edges -= removed;
        tracing::trace!(nodes = self.adjacency.len(), removed, "erased node");
        true
    }

    /// Removes the edge `src -> dst` with `weight`. Returns `Ok(false)` if there was none.
    pub fn erase_edge(&mut self, src: &N, dst: &N, weight: &E) -> Result<bool> {
        if !self.adjacency.contains_key(dst) {
            return Err(missing_endpoint("erase_edge"));
        }
        let Some(edges) = self.adjacency.get_mut(src) else {
            return Err(missing_endpoint("erase_edge"));
        };
        let removed = edges.remove(&OutEdge {
            to: dst.clone(),
            weight: weight.clone(),
        });
        if removed {
            tracing::trace!(out_degree = edges.len(), "erased edge");
            self.edges -= 1;
        }
        Ok(removed)
    }

    pub fn clear(&mut self) {
        tracing::trace!(nodes = self.adjacency.len(), "cleared graph");
        self.adjacency.clear();
        self.edges = 0;
    }

    pub fn is_node(&self, value: &N) -> bool {
        self.adjacency.contains_key(value)
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Whether at least one edge runs from `src` to `dst`.
    pub fn is_connected(&self, src: &N, dst: &N) -> Result<bool> {
        let edges = self.endpoint_edges(src, dst, "is_connected")?;
        Ok(edges_to(edges, dst).next().is_some())
    }

    /// All nodes in ascending order.
    pub fn nodes(&self) -> Vec<N> {
        self.adjacency.keys().cloned().collect()
    }

    /// Weights of every edge from `src` to `dst`, ascending.
    pub fn weights(&self, src: &N, dst: &N) -> Result<Vec<E>> {
        let edges = self.endpoint_edges(src, dst, "weights")?;
        Ok(edges_to(edges, dst)
            .map(|edge| edge.weight.clone())
            .collect())
    }

    /// Distinct destinations reachable over one edge from `src`, ascending.
    pub fn connections(&self, src: &N) -> Result<Vec<N>> {
        let Some(edges) = self.adjacency.get(src) else {
            return Err(missing_node("connections"));
        };
        let mut out: Vec<N> = edges.iter().map(|edge| edge.to.clone()).collect();
        out.dedup();
        Ok(out)
    }

    /// Distinct nodes with at least one edge into `dst`, ascending.
    pub fn predecessors(&self, dst: &N) -> Result<Vec<N>> {
        if !self.adjacency.contains_key(dst) {
            return Err(missing_node("predecessors"));
        }
        let mut out = Vec::new();
        transform_if(
            &self.adjacency,
            &mut out,
            |(_, edges)| edges_to(*edges, dst).next().is_some(),
            |(from, _)| from.clone(),
        );
        Ok(out)
    }

    /// Outgoing edges of `src` in `(to, weight)` order, or `None` if `src` is not a node.
    pub fn out_edges<'a>(
        &'a self,
        src: &N,
    ) -> Option<impl DoubleEndedIterator<Item = EdgeRef<'a, N, E>> + use<'a, N, E>> {
        let (from, edges) = self.adjacency.get_key_value(src)?;
        Some(edges.iter().map(move |edge| EdgeRef::new(from, edge)))
    }

    /// Every edge in ascending `(from, to, weight)` order.
    pub fn iter(&self) -> Edges<'_, N, E> {
        Edges::new(self.adjacency.iter(), self.edges)
    }

    fn endpoint_edges(
        &self,
        src: &N,
        dst: &N,
        operation: &'static str,
    ) -> Result<&BTreeSet<OutEdge<N, E>>> {
        if !self.adjacency.contains_key(dst) {
            return Err(missing_endpoint(operation));
        }
        self.adjacency
            .get(src)
            .ok_or_else(|| missing_endpoint(operation))
    }

    // Moves every edge endpoint from `old` to `new` and drops `old`. Creates `new` if needed.
    // Edges that become identical collapse, so the edge count is settled afterwards.
    fn redirect(&mut self, old: &N, new: &N) {
        let outgoing = self.adjacency.remove(old).unwrap_or_default();
        let target = self.adjacency.entry(new.clone()).or_default();
        for edge in outgoing {
            let to = if edge.to == *old { new.clone() } else { edge.to };
            target.insert(OutEdge {
                to,
                weight: edge.weight,
            });
        }

        for edges in self.adjacency.values_mut() {
            if edges_to(edges, old).next().is_none() {
                continue;
            }
            let (incoming, mut kept): (BTreeSet<_>, BTreeSet<_>) = std::mem::take(edges)
                .into_iter()
                .partition(|edge| edge.to == *old);
            kept.extend(incoming.into_iter().map(|edge| OutEdge {
                to: new.clone(),
                weight: edge.weight,
            }));
            *edges = kept;
        }
        self.edges = self.adjacency.values().map(BTreeSet::len).sum();
    }
}

// The contiguous run of edges towards `dst`.
fn edges_to<'a, N: Ord, E: Ord>(
    edges: &'a BTreeSet<OutEdge<N, E>>,
    dst: &'a N,
) -> impl Iterator<Item = &'a OutEdge<N, E>> {
    let start: &dyn OutKey<N, E> = &FirstTo(dst);
    edges
        .range::<dyn OutKey<N, E>, _>((Bound::Included(start), Bound::Unbounded))
        .take_while(move |edge| edge.to == *dst)
}

fn missing_endpoint(operation: &'static str) -> GraphError {
    tracing::debug!(operation = operation, "rejected: src or dst node does not exist");
    GraphError::MissingEndpoint { operation }
}

fn missing_node(operation: &'static str) -> GraphError {
    tracing::debug!(operation = operation, "rejected: node does not exist");
    GraphError::MissingNode { operation }
}

impl<'a, N, E> IntoIterator for &'a DirectedWeightedGraph<N, E>
where
    N: Ord + Clone,
    E: Ord + Clone,
{
    type Item = EdgeRef<'a, N, E>;
    type IntoIter = Edges<'a, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N, E> Extend<N> for DirectedWeightedGraph<N, E>
where
    N: Ord + Clone,
    E: Ord + Clone,
{
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for node in iter {
            self.insert_node(node);
        }
    }
}

impl<N, E> FromIterator<N> for DirectedWeightedGraph<N, E>
where
    N: Ord + Clone,
    E: Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self::from_nodes(iter)
    }
}

impl<N, E, const K: usize> From<[N; K]> for DirectedWeightedGraph<N, E>
where
    N: Ord + Clone,
    E: Ord + Clone,
{
    fn from(nodes: [N; K]) -> Self {
        Self::from_nodes(nodes)
    }
}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for DirectedWeightedGraph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.adjacency.iter().map(|(node, edges)| {
                (
                    node,
                    edges
                        .iter()
                        .map(|edge| (&edge.to, &edge.weight))
                        .collect::<Vec<_>>(),
                )
            }))
            .finish()
    }
}

/// One block per node in ascending order:
///
/// ```text
/// 1 (
///   2 | 3
///   2 | 4
/// )
/// 2 (
/// )
/// ```
impl<N: fmt::Display, E: fmt::Display> fmt::Display for DirectedWeightedGraph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, edges) in &self.adjacency {
            writeln!(f, "{node} (")?;
            for edge in edges {
                writeln!(f, "  {} | {}", edge.to, edge.weight)?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
