/// ID for vertices, which are essentially `usize`.
///
/// In a lineage graph one vertex stands for one tracked segment at one point in time.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// A factory to hand out `VertexId`s in increasing order.
#[derive(Debug, Clone, Default)]
pub struct VertexIdFactory(usize);

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }
}

impl VertexId {
    pub const MIN: VertexId = VertexId(0);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    /// The smallest id strictly greater than this one.
    ///
    /// Useful as an exclusive upper bound when scanning BTree indexes keyed by vertex.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_hands_out_sequential_ids() {
        let mut factory = VertexIdFactory::new();
        let ids: Vec<_> = (0..3).map(|_| factory.one_more()).collect();
        assert_eq!(ids, vec![VertexId(0), VertexId(1), VertexId(2)]);
        assert_eq!(ids[1].next(), ids[2]);
    }
}
