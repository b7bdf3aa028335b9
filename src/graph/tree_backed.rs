//! BTree-indexed graph storage shared by the directed and undirected flavours.
use crate::graph::*;
use std::collections::{BTreeMap, BTreeSet};

/// A graph with balanced computational complexity, backed by BTree indexes.
///
/// `DIRECTED` picks the flavour; use [directed::TreeBackedGraph] or
/// [undirected::TreeBackedGraph] rather than spelling it out.
///
/// |                    | Complexity                                        |
/// | ------------------ | ------------------------------------------------- |
/// | `add_vertex`       | O(log V)                                          |
/// | `add_edge`         | O(log V + log E)                                  |
/// | `vertex_size`      | O(1)                                              |
/// | `iter_vertices`    | amortized O(1) per step, in insertion order       |
/// | `contains_vertex`  | O(log V)                                          |
/// | `edge_size`        | O(1)                                              |
/// | `iter_edges`       | amortized O(1) per step, in insertion order       |
/// | `contains_edge`    | O(log E)                                          |
/// | `find_edge`        | O(log E)                                          |
/// | `in_edges`         | returns in O(log E), amortized O(1) per step      |
/// | `out_edges`        | returns in O(log E), amortized O(1) per step      |
///
/// `V` and `E` are the numbers of vertices and edges.
#[derive(Clone)]
pub struct TreeBackedGraph<const DIRECTED: bool> {
    vid_factory: VertexIdFactory,
    eid_factory: EdgeIdFactory,
    vertices: BTreeSet<VertexId>,
    edges: BTreeMap<EdgeId, (VertexId, VertexId)>,
    // (source, sink, edge)
    by_source: BTreeSet<(VertexId, VertexId, EdgeId)>,
    // (sink, source, edge)
    by_sink: BTreeSet<(VertexId, VertexId, EdgeId)>,
}

impl<const DIRECTED: bool> DirectedOrNot for TreeBackedGraph<DIRECTED> {
    const DIRECTED_OR_NOT: bool = DIRECTED;
}

impl<const DIRECTED: bool> std::fmt::Debug for TreeBackedGraph<DIRECTED> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackedGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl<const DIRECTED: bool> Default for TreeBackedGraph<DIRECTED> {
    fn default() -> Self {
        <Self as GrowableGraph>::new()
    }
}

impl<const DIRECTED: bool> GrowableGraph for TreeBackedGraph<DIRECTED> {
    fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            eid_factory: EdgeIdFactory::new(),
            vertices: BTreeSet::new(),
            edges: BTreeMap::new(),
            by_source: BTreeSet::new(),
            by_sink: BTreeSet::new(),
        }
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.vid_factory.one_more();
        self.vertices.insert(vid);
        vid
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        debug_assert!(self.vertices.contains(&source));
        debug_assert!(self.vertices.contains(&sink));
        let eid = self.eid_factory.one_more();
        self.edges.insert(eid, (source, sink));
        self.by_source.insert((source, sink, eid));
        self.by_sink.insert((sink, source, eid));
        eid
    }
}

impl<const DIRECTED: bool> TreeBackedGraph<DIRECTED> {
    fn leaving(&self, v: &VertexId) -> impl Iterator<Item = Edge> + '_ {
        let start = (*v, VertexId::MIN, EdgeId::MIN);
        let end = (v.next(), VertexId::MIN, EdgeId::MIN);
        self.by_source
            .range(start..end)
            .map(|(src, snk, e)| Edge {
                id: *e,
                source: *src,
                sink: *snk,
            })
    }

    fn entering(&self, v: &VertexId) -> impl Iterator<Item = Edge> + '_ {
        let start = (*v, VertexId::MIN, EdgeId::MIN);
        let end = (v.next(), VertexId::MIN, EdgeId::MIN);
        self.by_sink.range(start..end).map(|(snk, src, e)| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        })
    }

    // Every incident edge exactly once, oriented away from `v`.
    fn incident(&self, v: &VertexId) -> impl Iterator<Item = Edge> + '_ {
        let entering = self
            .entering(v)
            .filter(|e| e.source != e.sink)
            .map(|e| e.reversed());
        self.leaving(v).chain(entering)
    }
}

impl<const DIRECTED: bool> QueryableGraph for TreeBackedGraph<DIRECTED> {
    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertices.contains(v)
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.iter().map(|(e, (src, snk))| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        }))
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.edges.contains_key(e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.edges.get(e).map(|(src, snk)| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        })
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        if DIRECTED {
            Box::new(self.entering(v))
        } else {
            Box::new(self.incident(v).map(|e| e.reversed()))
        }
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        if DIRECTED {
            Box::new(self.leaving(v))
        } else {
            Box::new(self.incident(v))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    fn sinks<G: QueryableGraph>(g: &G, v: VertexId) -> Vec<VertexId> {
        g.out_edges(&v).map(|e| e.sink).collect()
    }

    fn sources<G: QueryableGraph>(g: &G, v: VertexId) -> Vec<VertexId> {
        g.in_edges(&v).map(|e| e.source).collect()
    }

    #[test]
    fn directed_keeps_orientation() {
        let mut g = directed::TreeBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        g.add_edge(v0, v1);
        g.add_edge(v2, v0);
        assert_eq!(sinks(&g, v0), vec![v1]);
        assert_eq!(sources(&g, v0), vec![v2]);
        assert_eq!(sinks(&g, v1), vec![]);
        assert_eq!(g.edge_size(), 2);
    }

    #[test]
    fn edges_are_found_by_id() {
        let mut g = undirected::TreeBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        let e = g.add_edge(v1, v0);
        assert!(g.contains_edge(&e));
        assert!(!g.contains_edge(&EdgeId(e.to_raw() + 1)));
        assert_eq!(
            g.find_edge(&e),
            Some(Edge {
                id: e,
                source: v1,
                sink: v0,
            })
        );
        assert_eq!(g.find_edge(&EdgeId(e.to_raw() + 1)), None);
    }

    #[test]
    fn undirected_reports_every_incident_edge_once() {
        let mut g = undirected::TreeBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        g.add_edge(v0, v1);
        g.add_edge(v2, v0);
        g.add_edge(v0, v0);
        let mut out = sinks(&g, v0);
        out.sort();
        assert_eq!(out, vec![v0, v1, v2]);
        assert!(g.out_edges(&v0).all(|e| e.source == v0));
        assert!(g.in_edges(&v0).all(|e| e.sink == v0));
        assert_eq!(sinks(&g, v1), vec![v0]);
    }

    #[test]
    fn debug_lists_out_edges() {
        let mut g = directed::TreeBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        g.add_edge(v0, v1);
        let trial = format!("{:?}", g.debug());
        assert_eq!(
            trial,
            "VertexId(0) out=1 in=0\n  EdgeId(0) -> VertexId(1)\nVertexId(1) out=0 in=1\n"
        );
    }

    #[test]
    fn debug_lists_undirected_links_from_both_ends() {
        let mut g = undirected::TreeBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        g.add_edge(v1, v0);
        let trial = format!("{:?}", g.debug().indent(2, 4));
        assert_eq!(
            trial,
            "  VertexId(0) degree=1\n      EdgeId(0) -- VertexId(1)\n  VertexId(1) degree=1\n      EdgeId(0) -- VertexId(0)\n"
        );
    }
}
