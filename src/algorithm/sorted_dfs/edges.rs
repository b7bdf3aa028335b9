use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// Which edges of a vertex lead to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeEnumeration {
    /// Out-edges only, i.e. forward lineage.
    Directed,
    /// Every incident edge, whatever its direction.
    Undirected,
}

impl EdgeEnumeration {
    /// Picks the enumeration matching how `G` stores its edges.
    pub fn of<G: DirectedOrNot>() -> Self {
        if G::DIRECTED_OR_NOT {
            Self::Directed
        } else {
            Self::Undirected
        }
    }

    /// Edges to follow out of `v`, each oriented with `v` as its source.
    ///
    /// Under `Undirected` every edge is reported once, even a self-loop
    /// or an edge both `in_edges` and `out_edges` return.
    pub fn edges_of<'a, G>(&self, graph: &'a G, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'a>
    where
        G: QueryableGraph,
    {
        match self {
            Self::Directed => graph.out_edges(v),
            Self::Undirected => {
                let v = *v;
                let mut reported = HashSet::with_hasher(RandomState::new());
                let it = graph
                    .out_edges(&v)
                    .chain(graph.in_edges(&v))
                    .map(move |e| e.leaving(&v))
                    .filter(move |e| reported.insert(e.id));
                Box::new(it)
            }
        }
    }
}
