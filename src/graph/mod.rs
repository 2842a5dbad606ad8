//! In-memory graph operations: the core data structure.

pub mod builder;
pub mod route_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use route_graph::RouteGraph;
pub use traversal::{dijkstra, ShortestPaths};
