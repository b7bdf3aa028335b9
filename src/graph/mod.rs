//! Low-level lineage graphs, directed and undirected.
//!
//! Vertices and edges are lightweight ID's, essentially `usize`,
//! so traversal algorithms can copy and store them freely.
//! Caller-defined segment values are attached on top by [crate::lineage::LineageGraph].
//!
//! Two storages are provided, each in a directed and an undirected flavour:
//!
//! * `TreeBackedGraph`, indexed by BTrees, iterating in insertion order;
//! * `PetgraphBackedGraph`, wrapping a `petgraph` stable graph.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;

pub mod petgraph_backed;
pub mod tree_backed;

pub mod directed;
pub mod undirected;
