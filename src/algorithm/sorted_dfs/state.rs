use crate::graph::VertexId;

/// Where a vertex is in its traversal lifecycle.
///
/// Vertices absent from the seen map are undiscovered.
/// A vertex moves `Discovered -> Active -> Finished`, each exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitState {
    /// Pushed on the stack, not returned yet.
    Discovered,
    /// Returned; its finish marker is still on the stack.
    Active,
    /// Finish marker popped; will never be touched again.
    Finished,
}

/// One slot of the traversal stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEntry {
    /// A discovered vertex waiting to be returned and expanded.
    Vertex(VertexId),
    /// Popping it finishes the vertex. Present iff the vertex is active.
    Finish(VertexId),
}

/// Where the traversal is with respect to connected component boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentPhase {
    BeforeComponent,
    WithinComponent,
    AfterComponent,
}
