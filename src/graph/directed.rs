//! Directed lineage graphs: links point forward in time, from parent segment to child segment.

/// Directed [crate::graph::tree_backed::TreeBackedGraph].
pub type TreeBackedGraph = super::tree_backed::TreeBackedGraph<true>;

/// Directed [crate::graph::petgraph_backed::PetgraphBackedGraph].
pub type PetgraphBackedGraph = super::petgraph_backed::PetgraphBackedGraph<true>;

#[cfg(test)]
pub use self::tests::*;
