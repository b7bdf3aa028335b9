use crate::graph::*;

/// Graphs that can be built up one vertex and one edge at a time.
///
/// Lineage graphs are append-only: once built they are only queried and traversed.
pub trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self) -> VertexId;
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId;
}

/// Read-only queries over vertices and edges.
///
/// For undirected graphs, `in_edges` and `out_edges` both return every incident edge.
/// `out_edges` orients them so that the queried vertex is the source,
/// `in_edges` so that it is the sink.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    /// Iterates over vertices.
    ///
    /// Implementations must return the same order on every call,
    /// as traversals rely on it to pick roots reproducibly.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, e: &EdgeId) -> bool;
    fn find_edge(&self, e: &EdgeId) -> Option<Edge>;
    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized + DirectedOrNot,
    {
        GraphDebug::new(self)
    }
}

/// Whether a graph type is directed, known at compile time.
pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}
