#![forbid(unsafe_code)]

//! Ordered directed weighted multigraph.
//!
//! Nodes are kept in ascending order and every node owns an ordered set of outgoing
//! `(destination, weight)` pairs, so the whole graph iterates as a sorted sequence of
//! `(from, to, weight)` triples. Parallel edges are allowed as long as their weights differ.

pub mod error;
mod graph;

pub use error::{GraphError, Result};
pub use graph::{Cursor, DirectedWeightedGraph, Edge, EdgeRef, Edges, alg};
