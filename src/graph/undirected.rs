//! Undirected lineage graphs: links carry no time direction.

/// Undirected [crate::graph::tree_backed::TreeBackedGraph].
pub type TreeBackedGraph = super::tree_backed::TreeBackedGraph<false>;

/// Undirected [crate::graph::petgraph_backed::PetgraphBackedGraph].
pub type PetgraphBackedGraph = super::petgraph_backed::PetgraphBackedGraph<false>;
