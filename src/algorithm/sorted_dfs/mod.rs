//! Depth-first traversal whose branching order is picked by a comparator.
//!
//! Plain depth-first search branches in whatever order the graph happens to
//! store its edges. [SortedDfs] instead sorts the undiscovered children of
//! each vertex with a caller-supplied comparator, and always descends into
//! the greatest one first. The visit order then depends only on the comparator
//! and on the order the graph enumerates its vertices.
//!
//! The traversal is driven by an explicit stack holding both vertices
//! waiting to be visited and finish markers of vertices being expanded,
//! so arbitrarily deep lineages never hit the call stack limit.
//!
//! # Examples
//!
//! ```rust
//! use lineagraph::{algorithm::*, graph::*};
//!
//! let mut g = directed::TreeBackedGraph::new();
//! let root = g.add_vertex();
//! let small = g.add_vertex();
//! let large = g.add_vertex();
//! g.add_edge(root, small);
//! g.add_edge(root, large);
//!
//! // greater ids first
//! let order: Vec<_> = g
//!     .sorted_dfs(Some(root), |a, b| a.cmp(b))
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(order, vec![root, large, small]);
//! ```
mod edges;
pub use self::edges::*;
mod error;
pub use self::error::*;
mod listener;
pub use self::listener::*;
mod state;
pub use self::state::*;

use crate::graph::*;
use ahash::RandomState;
use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};
use tracing::{debug, error, trace};

/// Sorted depth-first traversal for any queryable graph.
///
/// The edge enumeration follows the graph's own directedness.
pub trait SortedDepthFirst
where
    Self: QueryableGraph + DirectedOrNot + Sized,
{
    /// Starts a traversal.
    ///
    /// With `start` given, only vertices reachable from it are visited.
    /// Without, every vertex of the graph is visited, component after component.
    fn sorted_dfs<F>(
        &self,
        start: Option<VertexId>,
        cmp: F,
    ) -> Result<SortedDfs<'_, Self, F>, TraversalError>
    where
        F: FnMut(&VertexId, &VertexId) -> Ordering,
    {
        SortedDfs::new(self, EdgeEnumeration::of::<Self>(), start, cmp)
    }
}

impl<G: QueryableGraph + DirectedOrNot> SortedDepthFirst for G {}

/// A depth-first iterator which, when branching, takes the greatest child
/// w.r.t. a comparator first.
///
/// Besides being an [Iterator], it exposes the traversal as a pair of
/// `has_next`/`next_vertex` calls, and notifies [DfsListener]s of vertex,
/// edge and component lifecycle events.
pub struct SortedDfs<'a, G, F> {
    graph: &'a G,
    edges: EdgeEnumeration,
    cmp: F,
    seen: HashMap<VertexId, VisitState, RandomState>,
    stack: Vec<StackEntry>,
    start: Option<VertexId>,
    roots: Box<dyn Iterator<Item = VertexId> + 'a>,
    cross_component: bool,
    phase: ComponentPhase,
    listeners: Vec<Box<dyn DfsListener + 'a>>,
}

impl<'a, G, F> SortedDfs<'a, G, F>
where
    G: QueryableGraph,
    F: FnMut(&VertexId, &VertexId) -> Ordering,
{
    /// Creates a traversal of `graph`.
    ///
    /// If `start` is `None`, the traversal starts at the first vertex `graph`
    /// enumerates and crosses over to every other component afterwards.
    /// Otherwise it stays in the part reachable from `start`,
    /// which must be in the graph.
    pub fn new(
        graph: &'a G,
        edges: EdgeEnumeration,
        start: Option<VertexId>,
        cmp: F,
    ) -> Result<Self, TraversalError> {
        let mut roots = graph.iter_vertices();
        let cross_component = start.is_none();
        let start = match start {
            None => roots.next(),
            Some(v) if graph.contains_vertex(&v) => Some(v),
            Some(v) => {
                return Err(TraversalError::InvalidArgument(format!(
                    "graph must contain the start vertex {:?}",
                    v
                )))
            }
        };
        Ok(Self {
            graph,
            edges,
            cmp,
            seen: HashMap::with_hasher(RandomState::new()),
            stack: vec![],
            start,
            roots,
            cross_component,
            phase: ComponentPhase::BeforeComponent,
            listeners: vec![],
        })
    }

    /// Registers a listener. Listeners are notified in registration order.
    pub fn with_listener<L>(mut self, listener: L) -> Self
    where
        L: DfsListener + 'a,
    {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Overrides whether the traversal goes on into unvisited components
    /// once the current one is exhausted.
    ///
    /// Only meaningful before the first call to `has_next` or `next_vertex`.
    pub fn with_cross_component(mut self, cross_component: bool) -> Self {
        self.cross_component = cross_component;
        self
    }

    pub fn is_cross_component(&self) -> bool {
        self.cross_component
    }

    pub fn phase(&self) -> ComponentPhase {
        self.phase
    }

    /// State of `v`, or `None` if it has not been discovered yet.
    pub fn visit_state(&self, v: &VertexId) -> Option<VisitState> {
        self.seen.get(v).copied()
    }

    /// Whether `next_vertex` would return a vertex.
    ///
    /// It finishes vertices whose finish markers are on top of the stack
    /// and may move on to the next component, notifying listeners accordingly.
    pub fn has_next(&mut self) -> bool {
        if let Some(v) = self.start.take() {
            self.encounter_root(v);
        }
        if !self.component_exhausted() {
            return true;
        }
        if self.phase == ComponentPhase::WithinComponent {
            self.phase = ComponentPhase::AfterComponent;
            debug!("connected component finished");
            self.notify(|l| l.on_component_finished());
        }
        if self.cross_component {
            while let Some(v) = self.roots.next() {
                if !self.seen.contains_key(&v) {
                    debug!(root = ?v, "crossing over to a new connected component");
                    self.encounter_root(v);
                    self.phase = ComponentPhase::BeforeComponent;
                    return true;
                }
            }
        }
        false
    }

    /// Returns the next vertex and pushes its sorted undiscovered children.
    pub fn next_vertex(&mut self) -> Result<VertexId, TraversalError> {
        if !self.has_next() {
            return Err(TraversalError::Exhausted);
        }
        if self.phase == ComponentPhase::BeforeComponent {
            self.phase = ComponentPhase::WithinComponent;
            debug!("connected component started");
            self.notify(|l| l.on_component_started());
            // a fresh component holds nothing but its root
            if let Some(StackEntry::Vertex(root)) = self.stack.last().copied() {
                self.notify(|l| l.on_vertex_discovered(root));
            }
        }
        let v = self.provide_next_vertex()?;
        trace!(vertex = ?v, "visited");
        self.notify(|l| l.on_vertex_visited(v));
        self.add_unseen_children_of(v)?;
        Ok(v)
    }

    fn notify(&mut self, mut f: impl FnMut(&mut (dyn DfsListener + 'a))) {
        for l in self.listeners.iter_mut() {
            f(l.as_mut());
        }
    }

    fn encounter_root(&mut self, v: VertexId) {
        self.seen.insert(v, VisitState::Discovered);
        self.stack.push(StackEntry::Vertex(v));
    }

    // Pops finish markers until a vertex shows up or the stack runs empty.
    fn component_exhausted(&mut self) -> bool {
        loop {
            match self.stack.last() {
                None => return true,
                Some(StackEntry::Vertex(_)) => return false,
                Some(StackEntry::Finish(v)) => {
                    let v = *v;
                    self.stack.pop();
                    self.record_finish(v);
                }
            }
        }
    }

    fn record_finish(&mut self, v: VertexId) {
        self.seen.insert(v, VisitState::Finished);
        trace!(vertex = ?v, "finished");
        self.notify(|l| l.on_vertex_finished(v));
    }

    fn provide_next_vertex(&mut self) -> Result<VertexId, TraversalError> {
        while let Some(entry) = self.stack.pop() {
            match entry {
                StackEntry::Finish(v) => self.record_finish(v),
                StackEntry::Vertex(v) => {
                    self.stack.push(StackEntry::Finish(v));
                    self.seen.insert(v, VisitState::Active);
                    return Ok(v);
                }
            }
        }
        Err(TraversalError::Exhausted)
    }

    fn add_unseen_children_of(&mut self, v: VertexId) -> Result<(), TraversalError> {
        let graph = self.graph;
        let mut children = vec![];
        // the last edge reaching a child is the one reported
        let mut tree_edges = HashMap::with_hasher(RandomState::new());
        let mut again = HashSet::with_hasher(RandomState::new());
        for e in self.edges.edges_of(graph, &v) {
            let u = e.opposite(&v);
            match self.seen.get(&u).copied() {
                None => {
                    if tree_edges.insert(u, e).is_none() {
                        children.push(u);
                    }
                }
                Some(state) => {
                    if state == VisitState::Discovered {
                        again.insert(u);
                    }
                    self.notify(|l| l.on_edge_traversed(&e));
                }
            }
        }

        let mut again: Vec<_> = again.into_iter().collect();
        let cmp = &mut self.cmp;
        again.sort_by(|a, b| cmp(a, b));
        for u in again {
            self.encounter_again(u)?;
        }

        // ascending, so that the greatest child ends on top of the stack
        let cmp = &mut self.cmp;
        children.sort_by(|a, b| cmp(a, b));
        for u in children {
            self.seen.insert(u, VisitState::Discovered);
            self.stack.push(StackEntry::Vertex(u));
            if let Some(e) = tree_edges.remove(&u) {
                self.notify(|l| l.on_edge_traversed(&e));
            }
            self.notify(|l| l.on_vertex_discovered(u));
        }
        Ok(())
    }

    // Moves a discovered vertex to the top of the stack, so the latest path to it wins.
    fn encounter_again(&mut self, u: VertexId) -> Result<(), TraversalError> {
        let pending = StackEntry::Vertex(u);
        match self.stack.iter().rposition(|entry| *entry == pending) {
            Some(idx) => {
                self.stack.remove(idx);
                self.stack.push(pending);
                Ok(())
            }
            None => {
                error!(vertex = ?u, "discovered vertex is missing from the traversal stack");
                Err(TraversalError::InternalInvariantViolation(u))
            }
        }
    }
}

impl<'a, G, F> Iterator for SortedDfs<'a, G, F>
where
    G: QueryableGraph,
    F: FnMut(&VertexId, &VertexId) -> Ordering,
{
    type Item = Result<VertexId, TraversalError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_vertex() {
            Err(TraversalError::Exhausted) => None,
            res => Some(res),
        }
    }
}
