#![forbid(unsafe_code)]

//! Small generic sequence algorithms and containers.
//!
//! Every item in this crate stands on its own: the functions operate on slices or iterators and
//! the containers own their storage. `xtd-graph` uses [`transform_if`] to build filtered edge
//! listings; nothing else here depends on the graph.

pub mod adjacent;
pub mod circular_queue;
pub mod contains;
pub mod error;
pub mod float;
pub mod intervals;
pub mod invert;
pub mod multikey_map;
pub mod search;
pub mod sliding_window;
pub mod tokenise;
pub mod transform_if;
pub mod zip;

pub use adjacent::adjacent_all_of;
pub use circular_queue::CircularQueue;
pub use contains::{contains, contains_by};
pub use error::{Error, Result};
pub use float::{DEFAULT_EPSILON, approx_eq, approx_eq_with};
pub use intervals::maximum_disjoint_set;
pub use invert::invert_element_order;
pub use multikey_map::MultiKeyMap;
pub use search::{lower_bound_index, lower_bound_index_by};
pub use sliding_window::{SlidingWindowOptions, sliding_window};
pub use tokenise::tokenise;
pub use transform_if::{TransformIf, TransformIfExt, transform_if};
pub use zip::Zip;
