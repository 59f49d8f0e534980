//! Path search over a [`DirectedWeightedGraph`].

use super::DirectedWeightedGraph;
use crate::error::{GraphError, Result};
use std::collections::VecDeque;

/// Every simple path from `from` to `to`, shortest first.
///
/// Paths are discovered breadth-first, following edges in `(to, weight)` order. Parallel edges
/// are distinct routes, so two edges `1 -> 2` yield the path `[1, 2]` twice. A path never
/// revisits a node, which keeps the search finite on cyclic graphs.
pub fn breadth_first_search<N, E>(
    g: &DirectedWeightedGraph<N, E>,
    from: &N,
    to: &N,
) -> Result<Vec<Vec<N>>>
where
    N: Ord + Clone,
    E: Ord + Clone,
{
    if !g.is_node(from) || !g.is_node(to) {
        tracing::debug!("rejected breadth_first_search: src or dst node does not exist");
        return Err(GraphError::MissingEndpoint {
            operation: "breadth_first_search",
        });
    }

    let mut paths: Vec<Vec<N>> = Vec::new();
    let mut queue: VecDeque<Vec<N>> = VecDeque::new();
    queue.push_back(vec![from.clone()]);

    while let Some(path) = queue.pop_front() {
        let Some(current) = path.last() else {
            continue;
        };
        if current == to {
            paths.push(path);
            continue;
        }
        let Some(edges) = g.out_edges(current) else {
            continue;
        };
        for edge in edges {
            if path.contains(edge.to) {
                continue;
            }
            let mut next = path.clone();
            next.push(edge.to.clone());
            queue.push_back(next);
        }
    }

    tracing::trace!(paths = paths.len(), "breadth_first_search finished");
    Ok(paths)
}
