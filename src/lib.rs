//! Comparator-ordered depth-first traversal over lineage graphs.
//!
//! A lineage graph links tracked segments (objects detected at successive
//! points in time) by tracking edges. Walking such a graph depth-first in
//! whatever order edges happen to be stored gives results that change from
//! one storage to another. This crate walks it in an order chosen by a
//! comparator instead: when a vertex branches, the greatest child goes first.
//!
//! * [graph]: low-level directed and undirected graphs, with lightweight ID's
//!   for vertices and edges.
//! * [algorithm]: [algorithm::SortedDfs], the traversal itself, with
//!   finish-time tracking, component bracketing and event listeners.
//! * [lineage]: [lineage::LineageGraph], which attaches caller-defined
//!   segments to vertices and traverses segments directly.
pub mod algorithm;
pub mod graph;
pub mod lineage;
