use crate::graph::*;

/// Observer of a sorted depth-first traversal.
///
/// Every method does nothing by default, so implementors pick the events they care about.
/// Callbacks run synchronously inside `has_next`/`next_vertex`, in traversal order.
pub trait DfsListener {
    /// The first vertex of a new connected component is about to be returned.
    fn on_component_started(&mut self) {}
    /// The last vertex of the current component has finished.
    fn on_component_finished(&mut self) {}
    /// A vertex is about to be returned and expanded.
    fn on_vertex_visited(&mut self, _v: VertexId) {}
    /// A vertex was pushed on the stack for the first time.
    ///
    /// Children are reported while their parent is expanded. A root is
    /// reported right after its component starts, before it is visited.
    fn on_vertex_discovered(&mut self, _v: VertexId) {}
    /// All vertices below a vertex have been finished.
    fn on_vertex_finished(&mut self, _v: VertexId) {}
    /// An edge was looked at while expanding its source.
    fn on_edge_traversed(&mut self, _e: &Edge) {}
}

impl<L: DfsListener + ?Sized> DfsListener for &mut L {
    fn on_component_started(&mut self) {
        (**self).on_component_started()
    }

    fn on_component_finished(&mut self) {
        (**self).on_component_finished()
    }

    fn on_vertex_visited(&mut self, v: VertexId) {
        (**self).on_vertex_visited(v)
    }

    fn on_vertex_discovered(&mut self, v: VertexId) {
        (**self).on_vertex_discovered(v)
    }

    fn on_vertex_finished(&mut self, v: VertexId) {
        (**self).on_vertex_finished(v)
    }

    fn on_edge_traversed(&mut self, e: &Edge) {
        (**self).on_edge_traversed(e)
    }
}

/// A lifecycle event, as recorded by [EventLog].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalEvent {
    ComponentStarted,
    ComponentFinished,
    VertexVisited(VertexId),
    VertexDiscovered(VertexId),
    VertexFinished(VertexId),
    EdgeTraversed(Edge),
}

/// Records every event it is told about.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<TraversalEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices in the order they were visited.
    pub fn visited(&self) -> Vec<VertexId> {
        self.events
            .iter()
            .filter_map(|ev| match ev {
                TraversalEvent::VertexVisited(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    /// Vertices in the order they were finished, i.e. postorder.
    pub fn finished(&self) -> Vec<VertexId> {
        self.events
            .iter()
            .filter_map(|ev| match ev {
                TraversalEvent::VertexFinished(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    /// Position of `event` in the log.
    pub fn position(&self, event: &TraversalEvent) -> Option<usize> {
        self.events.iter().position(|ev| ev == event)
    }
}

impl DfsListener for EventLog {
    fn on_component_started(&mut self) {
        self.events.push(TraversalEvent::ComponentStarted);
    }

    fn on_component_finished(&mut self) {
        self.events.push(TraversalEvent::ComponentFinished);
    }

    fn on_vertex_visited(&mut self, v: VertexId) {
        self.events.push(TraversalEvent::VertexVisited(v));
    }

    fn on_vertex_discovered(&mut self, v: VertexId) {
        self.events.push(TraversalEvent::VertexDiscovered(v));
    }

    fn on_vertex_finished(&mut self, v: VertexId) {
        self.events.push(TraversalEvent::VertexFinished(v));
    }

    fn on_edge_traversed(&mut self, e: &Edge) {
        self.events.push(TraversalEvent::EdgeTraversed(*e));
    }
}
