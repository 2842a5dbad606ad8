//! metro-graph: an in-memory airline route graph.
//!
//! Stores cities ("metros") keyed by airport code and the undirected routes
//! between them, and answers listing, statistics, itinerary and shortest-path
//! queries while keeping routes consistent with cities under every mutation.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    CityDetail, CityEdit, CityLabel, FlightModel, GraphSummary, Hubs, ItineraryEngine,
    ItineraryReport, QueryEngine, ShortestPath, WriteEngine,
};
pub use format::{DatasetReader, DatasetRecord, DatasetWriter, RouteRecord};
pub use graph::{dijkstra, GraphBuilder, RouteGraph, ShortestPaths};
pub use types::{
    City, CityBuilder, CityField, Coordinates, ErrorKind, Latitude, Leg, Longitude, MetroError,
    MetroResult, Route,
};
