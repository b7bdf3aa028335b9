use super::VertexId;

/// ID for edges, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely.
#[derive(Debug, Clone, Default)]
pub struct EdgeIdFactory(usize);

/// A tracking link between two vertices.
///
/// In directed graphs `source` is the earlier segment and `sink` the later one.
/// In undirected graphs the two endpoints are interchangeable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl EdgeId {
    pub const MIN: EdgeId = EdgeId(0);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

impl Edge {
    /// The endpoint on the other side of `v`.
    ///
    /// For self-loops this is `v` itself.
    /// `v` is expected to be one of the endpoints; otherwise the source is returned.
    pub fn opposite(&self, v: &VertexId) -> VertexId {
        if self.source == *v {
            self.sink
        } else {
            self.source
        }
    }

    /// The same edge seen from its sink.
    pub fn reversed(&self) -> Self {
        Self {
            id: self.id,
            source: self.sink,
            sink: self.source,
        }
    }

    /// The same edge oriented so that `v` is its source.
    pub fn leaving(&self, v: &VertexId) -> Self {
        if self.source == *v {
            *self
        } else {
            self.reversed()
        }
    }
}
