//! All data types for the metro route graph.

pub mod city;
pub mod error;
pub mod route;

pub use city::{City, CityBuilder, CityField, Coordinates, Latitude, Longitude};
pub use error::{ErrorKind, MetroError, MetroResult};
pub use route::{Leg, Route};

/// Length of every airport code.
pub const CODE_LEN: usize = 3;

/// Westernmost valid UTC offset.
pub const MIN_TIMEZONE: i32 = -12;

/// Easternmost valid UTC offset.
pub const MAX_TIMEZONE: i32 = 14;

/// Distance covered while climbing to (and again while descending from) cruise altitude.
pub const CLIMB_DISTANCE: f64 = 200.0;

/// Cruise speed in distance units per hour.
pub const CRUISE_SPEED: f64 = 750.0;

/// Fare rate per distance unit charged on the first leg of an itinerary.
pub const BASE_RATE: f64 = 0.35;

/// Rate discount applied after each leg.
pub const RATE_STEP: f64 = 0.05;

/// Longest possible layover, in hours.
pub const MAX_LAYOVER_HOURS: f64 = 2.0;

/// Layover hours saved for every outbound route beyond the first.
pub const LAYOVER_RELIEF_PER_ROUTE: f64 = 1.0 / 6.0;

/// Great Circle Mapper endpoint used to draw the route map.
pub const GCMAP_URL: &str = "http://www.gcmap.com/mapui?P=";
