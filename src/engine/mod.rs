//! High-level operations: write, query and itinerary engines.

pub mod itinerary;
pub mod query;
pub mod write;

pub use itinerary::{FlightModel, ItineraryEngine, ItineraryReport, ShortestPath};
pub use query::{CityDetail, CityLabel, GraphSummary, Hubs, QueryEngine};
pub use write::{CityEdit, WriteEngine};
