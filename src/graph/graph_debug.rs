use crate::graph::*;

/// Adjacency dump of a graph, one vertex per line followed by its links.
///
/// Directed graphs show out- and in-degrees and list out-edges as `->`.
/// Undirected graphs show the degree and list every incident edge as `--`,
/// seen from the vertex on the current line.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph + DirectedOrNot,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph + DirectedOrNot,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    /// Indents vertex lines by `init` and their links by `init + step`.
    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn write_vertex(&self, f: &mut std::fmt::Formatter<'_>, v: &VertexId) -> std::fmt::Result {
        let width = self.init_indent;
        if G::DIRECTED_OR_NOT {
            let out = self.graph.out_edges(v).count();
            let inward = self.graph.in_edges(v).count();
            writeln!(f, "{:width$}{:?} out={} in={}", "", v, out, inward)
        } else {
            let degree = self.graph.out_edges(v).count();
            writeln!(f, "{:width$}{:?} degree={}", "", v, degree)
        }
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph + DirectedOrNot,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let link = if G::DIRECTED_OR_NOT { "->" } else { "--" };
        let width = self.init_indent + self.indent_step;
        for v in self.graph.iter_vertices() {
            self.write_vertex(f, &v)?;
            for e in self.graph.out_edges(&v) {
                writeln!(f, "{:width$}{:?} {} {:?}", "", e.id, link, e.sink)?;
            }
        }
        Ok(())
    }
}
