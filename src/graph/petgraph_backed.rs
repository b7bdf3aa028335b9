//! Graph storage on top of `petgraph`'s stable adjacency lists.
use crate::graph::*;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    stable_graph::StableDiGraph,
    visit::EdgeRef,
    Direction,
};

/// A graph stored in a [StableDiGraph], for callers who already build their
/// lineage with `petgraph`.
///
/// Each petgraph edge carries its own endpoints as weight,
/// so orientation never depends on how petgraph reports incoming edges.
/// The undirected flavour shares the storage and only changes what counts as
/// an in-edge or an out-edge.
#[derive(Clone)]
pub struct PetgraphBackedGraph<const DIRECTED: bool>(StableDiGraph<(), (VertexId, VertexId), usize>);

impl<const DIRECTED: bool> DirectedOrNot for PetgraphBackedGraph<DIRECTED> {
    const DIRECTED_OR_NOT: bool = DIRECTED;
}

impl<const DIRECTED: bool> std::fmt::Debug for PetgraphBackedGraph<DIRECTED> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PetgraphBackedGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl<const DIRECTED: bool> Default for PetgraphBackedGraph<DIRECTED> {
    fn default() -> Self {
        <Self as GrowableGraph>::new()
    }
}

impl<const DIRECTED: bool> GrowableGraph for PetgraphBackedGraph<DIRECTED> {
    fn new() -> Self {
        Self(StableDiGraph::with_capacity(0, 0))
    }

    fn add_vertex(&mut self) -> VertexId {
        let nidx = self.0.add_node(());
        VertexId::new(nidx.index())
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        let a = NodeIndex::new(source.to_raw());
        let b = NodeIndex::new(sink.to_raw());
        debug_assert!(self.0.contains_node(a));
        debug_assert!(self.0.contains_node(b));
        let eidx = self.0.add_edge(a, b, (source, sink));
        EdgeId::new(eidx.index())
    }
}

impl<const DIRECTED: bool> PetgraphBackedGraph<DIRECTED> {
    fn along(&self, v: &VertexId, dir: Direction) -> impl Iterator<Item = Edge> + '_ {
        let nidx = NodeIndex::new(v.to_raw());
        self.0.edges_directed(nidx, dir).map(|x| {
            let (source, sink) = x.weight();
            Edge {
                id: EdgeId::new(x.id().index()),
                source: *source,
                sink: *sink,
            }
        })
    }

    fn incident(&self, v: &VertexId) -> impl Iterator<Item = Edge> + '_ {
        let entering = self
            .along(v, Direction::Incoming)
            .filter(|e| e.source != e.sink)
            .map(|e| e.reversed());
        self.along(v, Direction::Outgoing).chain(entering)
    }
}

impl<const DIRECTED: bool> QueryableGraph for PetgraphBackedGraph<DIRECTED> {
    fn vertex_size(&self) -> usize {
        self.0.node_count()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let it = self.0.node_indices().map(|x| VertexId::new(x.index()));
        Box::new(it)
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.0.contains_node(NodeIndex::new(v.to_raw()))
    }

    fn edge_size(&self) -> usize {
        self.0.edge_count()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.0.edge_indices().filter_map(|x| {
            self.0.edge_weight(x).map(|(source, sink)| Edge {
                id: EdgeId::new(x.index()),
                source: *source,
                sink: *sink,
            })
        });
        Box::new(it)
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.0.edge_weight(EdgeIndex::new(e.to_raw())).is_some()
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.0
            .edge_weight(EdgeIndex::new(e.to_raw()))
            .map(|(source, sink)| Edge {
                id: *e,
                source: *source,
                sink: *sink,
            })
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        if !self.contains_vertex(v) {
            return Box::new(std::iter::empty());
        }
        if DIRECTED {
            Box::new(self.along(v, Direction::Incoming))
        } else {
            Box::new(self.incident(v).map(|e| e.reversed()))
        }
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        if !self.contains_vertex(v) {
            return Box::new(std::iter::empty());
        }
        if DIRECTED {
            Box::new(self.along(v, Direction::Outgoing))
        } else {
            Box::new(self.incident(v))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    fn edge_sets<G: QueryableGraph>(g: &G) -> Vec<(BTreeSet<Edge>, BTreeSet<Edge>)> {
        g.iter_vertices()
            .map(|v| (g.in_edges(&v).collect(), g.out_edges(&v).collect()))
            .collect()
    }

    #[quickcheck]
    fn directed_agrees_with_tree_backed(ops: directed::Ops) {
        let oracle: directed::TreeBackedGraph = ops.build();
        let trial: directed::PetgraphBackedGraph = ops.build();
        assert_eq!(
            oracle.iter_vertices().collect::<Vec<_>>(),
            trial.iter_vertices().collect::<Vec<_>>()
        );
        assert_eq!(
            oracle.iter_edges().collect::<BTreeSet<_>>(),
            trial.iter_edges().collect::<BTreeSet<_>>()
        );
        assert_eq!(edge_sets(&oracle), edge_sets(&trial));
        for e in oracle.iter_edges() {
            assert!(trial.contains_edge(&e.id));
            assert_eq!(trial.find_edge(&e.id), Some(e));
        }
        let unused = EdgeId(oracle.edge_size());
        assert!(!oracle.contains_edge(&unused));
        assert!(!trial.contains_edge(&unused));
        assert_eq!(trial.find_edge(&unused), None);
    }

    #[quickcheck]
    fn undirected_agrees_with_tree_backed(ops: directed::Ops) {
        let oracle: undirected::TreeBackedGraph = ops.build();
        let trial: undirected::PetgraphBackedGraph = ops.build();
        assert_eq!(edge_sets(&oracle), edge_sets(&trial));
    }
}
