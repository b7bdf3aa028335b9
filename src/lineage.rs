//! Lineage graphs whose vertices are caller-defined segments.
//!
//! A [LineageGraph] keeps a 1-1 mapping between segments and the [VertexId]s
//! of an underlying low-level graph, and traverses segments in an order given
//! by a comparator over segments.
//!
//! ```rust
//! use lineagraph::lineage::*;
//!
//! #[derive(Debug, Clone, Hash, PartialEq, Eq)]
//! struct Spot {
//!     frame: u32,
//!     area: u32,
//! }
//!
//! let mother = Spot { frame: 0, area: 40 };
//! let small = Spot { frame: 1, area: 15 };
//! let large = Spot { frame: 1, area: 25 };
//!
//! let mut lineage = LineageGraph::<Spot>::new();
//! lineage.add_segment(mother.clone());
//! lineage.add_segment(small.clone());
//! lineage.add_segment(large.clone());
//! lineage.link(&mother, &small).unwrap();
//! lineage.link(&mother, &large).unwrap();
//!
//! // larger daughters first
//! let order: Vec<_> = lineage
//!     .sorted_dfs(Some(&mother), |a, b| a.area.cmp(&b.area))
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(order, vec![&mother, &large, &small]);
//! ```
use crate::{algorithm::*, graph::*};
use ahash::RandomState;
use bimap::BiHashMap;
use std::{cmp::Ordering, hash::Hash};

/// Segments of type `V` linked by tracking edges stored in a low-level graph `G`.
///
/// Adding a segment equal to an existing one returns the existing vertex.
#[derive(Clone)]
pub struct LineageGraph<V, G = directed::TreeBackedGraph>
where
    V: Hash + Eq,
{
    lower_graph: G,
    segments: BiHashMap<VertexId, V, RandomState, RandomState>,
}

impl<V, G> DirectedOrNot for LineageGraph<V, G>
where
    V: Hash + Eq,
    G: DirectedOrNot,
{
    const DIRECTED_OR_NOT: bool = G::DIRECTED_OR_NOT;
}

impl<V, G> Default for LineageGraph<V, G>
where
    V: Hash + Eq,
    G: GrowableGraph,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, G> LineageGraph<V, G>
where
    V: Hash + Eq,
    G: GrowableGraph,
{
    pub fn new() -> Self {
        Self {
            lower_graph: G::new(),
            segments: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
        }
    }

    /// Adds a segment if it is not there yet, and returns its vertex.
    pub fn add_segment(&mut self, seg: V) -> VertexId {
        if let Some(vid) = self.segments.get_by_right(&seg) {
            *vid
        } else {
            let vid = self.lower_graph.add_vertex();
            self.segments.insert(vid, seg);
            vid
        }
    }

    /// Links two segments, or returns `None` if either of them is unknown.
    pub fn link(&mut self, source: &V, sink: &V) -> Option<EdgeId> {
        let src = *self.segments.get_by_right(source)?;
        let snk = *self.segments.get_by_right(sink)?;
        Some(self.lower_graph.add_edge(src, snk))
    }
}

impl<V, G> LineageGraph<V, G>
where
    V: Hash + Eq,
{
    pub fn lower_graph(&self) -> &G {
        &self.lower_graph
    }

    pub fn segment_size(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, vid: &VertexId) -> Option<&V> {
        self.segments.get_by_left(vid)
    }

    pub fn id_of(&self, seg: &V) -> Option<VertexId> {
        self.segments.get_by_right(seg).copied()
    }
}

impl<V, G> LineageGraph<V, G>
where
    V: Hash + Eq,
    G: QueryableGraph,
{
    /// Iterates over segments in the order the low-level graph enumerates vertices.
    pub fn segments(&self) -> impl Iterator<Item = &V> + '_ {
        self.lower_graph
            .iter_vertices()
            .filter_map(|vid| self.segment(&vid))
    }
}

impl<V, G> LineageGraph<V, G>
where
    V: Hash + Eq,
    G: QueryableGraph + DirectedOrNot,
{
    /// Traverses segments depth-first, descending into the greatest child
    /// segment w.r.t. `cmp` first.
    ///
    /// See [SortedDfs] for how `start` shapes the traversal.
    pub fn sorted_dfs<'a, F>(
        &'a self,
        start: Option<&V>,
        mut cmp: F,
    ) -> Result<SegmentDfs<'a, V, G>, TraversalError>
    where
        F: FnMut(&V, &V) -> Ordering + 'a,
    {
        let start = match start {
            None => None,
            Some(seg) => Some(self.id_of(seg).ok_or_else(|| {
                TraversalError::InvalidArgument(
                    "lineage must contain the start segment".to_owned(),
                )
            })?),
        };
        let segments = &self.segments;
        let by_segment = move |a: &VertexId, b: &VertexId| {
            match (segments.get_by_left(a), segments.get_by_left(b)) {
                (Some(x), Some(y)) => cmp(x, y),
                _ => a.cmp(b),
            }
        };
        let inner = SortedDfs::new(
            &self.lower_graph,
            EdgeEnumeration::of::<G>(),
            start,
            Box::new(by_segment) as SegmentOrder<'a>,
        )?;
        Ok(SegmentDfs { inner, segments })
    }
}

impl<V, G> std::fmt::Debug for LineageGraph<V, G>
where
    V: Hash + Eq + std::fmt::Debug,
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for vid in self.lower_graph.iter_vertices() {
            if let Some(seg) = self.segment(&vid) {
                writeln!(f, "{:?}", seg)?;
                for e in self.lower_graph.out_edges(&vid) {
                    if let Some(sink) = self.segment(&e.sink) {
                        writeln!(f, "  -> {:?}", sink)?;
                    }
                }
            }
        }
        Ok(())
    }
}

type SegmentOrder<'a> = Box<dyn FnMut(&VertexId, &VertexId) -> Ordering + 'a>;

/// Sorted depth-first traversal over the segments of a [LineageGraph].
///
/// Listeners still receive vertex ids; [LineageGraph::segment] translates them.
pub struct SegmentDfs<'a, V, G> {
    inner: SortedDfs<'a, G, SegmentOrder<'a>>,
    segments: &'a BiHashMap<VertexId, V, RandomState, RandomState>,
}

impl<'a, V, G> SegmentDfs<'a, V, G>
where
    V: Hash + Eq,
    G: QueryableGraph,
{
    pub fn with_listener<L>(mut self, listener: L) -> Self
    where
        L: DfsListener + 'a,
    {
        self.inner = self.inner.with_listener(listener);
        self
    }

    pub fn with_cross_component(mut self, cross_component: bool) -> Self {
        self.inner = self.inner.with_cross_component(cross_component);
        self
    }

    pub fn has_next(&mut self) -> bool {
        self.inner.has_next()
    }

    pub fn next_segment(&mut self) -> Result<&'a V, TraversalError> {
        let vid = self.inner.next_vertex()?;
        self.segments
            .get_by_left(&vid)
            .ok_or(TraversalError::InternalInvariantViolation(vid))
    }

    /// State of `seg`, or `None` if it is unknown or not discovered yet.
    pub fn visit_state(&self, seg: &V) -> Option<VisitState> {
        self.segments
            .get_by_right(seg)
            .and_then(|vid| self.inner.visit_state(vid))
    }
}

impl<'a, V, G> Iterator for SegmentDfs<'a, V, G>
where
    V: Hash + Eq,
    G: QueryableGraph,
{
    type Item = Result<&'a V, TraversalError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_segment() {
            Err(TraversalError::Exhausted) => None,
            res => Some(res),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Hash, PartialEq, Eq)]
    struct Spot {
        frame: u32,
        label: char,
        area: u32,
    }

    fn spot(frame: u32, label: char, area: u32) -> Spot {
        Spot { frame, label, area }
    }

    fn by_area(a: &Spot, b: &Spot) -> Ordering {
        a.area.cmp(&b.area)
    }

    fn labels<'a, I>(it: I) -> String
    where
        I: Iterator<Item = Result<&'a Spot, TraversalError>>,
    {
        it.map(|s| s.unwrap().label).collect()
    }

    // a0 splits into b1 and c1; c1 goes on to d2; e0 is a lone track
    fn split_lineage<G: GrowableGraph>() -> (LineageGraph<Spot, G>, Vec<Spot>) {
        let spots = vec![
            spot(0, 'a', 30),
            spot(1, 'b', 10),
            spot(1, 'c', 20),
            spot(2, 'd', 21),
            spot(0, 'e', 5),
        ];
        let mut lineage = LineageGraph::new();
        for s in spots.iter() {
            lineage.add_segment(s.clone());
        }
        lineage.link(&spots[0], &spots[1]).unwrap();
        lineage.link(&spots[0], &spots[2]).unwrap();
        lineage.link(&spots[2], &spots[3]).unwrap();
        (lineage, spots)
    }

    #[test]
    fn adding_a_segment_twice_keeps_one_vertex() {
        let mut lineage = LineageGraph::<Spot>::new();
        let v0 = lineage.add_segment(spot(0, 'a', 1));
        let v1 = lineage.add_segment(spot(0, 'a', 1));
        assert_eq!(v0, v1);
        assert_eq!(lineage.segment_size(), 1);
        assert_eq!(lineage.lower_graph().vertex_size(), 1);
        assert_eq!(lineage.segment(&v0), Some(&spot(0, 'a', 1)));
        assert_eq!(lineage.id_of(&spot(0, 'a', 1)), Some(v0));
    }

    #[test]
    fn segments_follow_insertion_order() {
        let (lineage, spots) = split_lineage::<directed::PetgraphBackedGraph>();
        let trial: Vec<_> = lineage.segments().collect();
        assert_eq!(trial, spots.iter().collect::<Vec<_>>());
    }

    #[test]
    fn linking_unknown_segment_fails() {
        let mut lineage = LineageGraph::<Spot>::new();
        lineage.add_segment(spot(0, 'a', 1));
        assert_eq!(lineage.link(&spot(0, 'a', 1), &spot(1, 'z', 1)), None);
        assert_eq!(lineage.lower_graph().edge_size(), 0);
    }

    #[test]
    fn larger_daughter_first() {
        let (lineage, spots) = split_lineage::<directed::TreeBackedGraph>();
        let dfs = lineage.sorted_dfs(Some(&spots[0]), by_area).unwrap();
        assert_eq!(labels(dfs), "acdb");
        let dfs = lineage
            .sorted_dfs(Some(&spots[0]), |a, b| b.area.cmp(&a.area))
            .unwrap();
        assert_eq!(labels(dfs), "abcd");
    }

    #[test]
    fn whole_lineage_without_start() {
        let (lineage, _) = split_lineage::<directed::PetgraphBackedGraph>();
        let dfs = lineage.sorted_dfs(None, by_area).unwrap();
        assert_eq!(labels(dfs), "acdbe");
    }

    #[test]
    fn undirected_lineage_walks_back_to_mother() {
        let (lineage, spots) = split_lineage::<undirected::TreeBackedGraph>();
        let dfs = lineage.sorted_dfs(Some(&spots[1]), by_area).unwrap();
        assert_eq!(labels(dfs), "bacd");
    }

    #[test]
    fn unknown_start_segment_is_rejected() {
        let (lineage, _) = split_lineage::<directed::TreeBackedGraph>();
        let res = lineage.sorted_dfs(Some(&spot(9, 'z', 0)), by_area);
        assert!(matches!(res, Err(TraversalError::InvalidArgument(_))));
    }

    #[test]
    fn segment_states_and_events() {
        let (lineage, spots) = split_lineage::<directed::TreeBackedGraph>();
        let mut log = EventLog::new();
        {
            let mut dfs = lineage
                .sorted_dfs(Some(&spots[2]), by_area)
                .unwrap()
                .with_listener(&mut log);
            assert_eq!(dfs.next_segment(), Ok(&spots[2]));
            assert_eq!(dfs.visit_state(&spots[2]), Some(VisitState::Active));
            assert_eq!(dfs.visit_state(&spots[3]), Some(VisitState::Discovered));
            assert_eq!(dfs.visit_state(&spots[0]), None);
            assert_eq!(dfs.next_segment(), Ok(&spots[3]));
            assert!(!dfs.has_next());
            assert_eq!(dfs.next_segment(), Err(TraversalError::Exhausted));
        }
        let finished: Vec<_> = log
            .finished()
            .iter()
            .map(|vid| lineage.segment(vid).unwrap().label)
            .collect();
        assert_eq!(finished, vec!['d', 'c']);
    }

    #[test]
    fn debug_lists_links() {
        let mut lineage = LineageGraph::<char>::new();
        lineage.add_segment('a');
        lineage.add_segment('b');
        lineage.link(&'a', &'b').unwrap();
        assert_eq!(format!("{:?}", lineage), "'a'\n  -> 'b'\n'b'\n");
    }
}
