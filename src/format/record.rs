//! The flat record structure a dataset is loaded from and saved to.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{City, Route};

/// A whole dataset as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Provenance entries, carried through untouched.
    #[serde(rename = "data sources", default)]
    pub data_sources: Vec<Value>,
    pub metros: Vec<City>,
    pub routes: Vec<RouteRecord>,
}

/// A route as stored on disk: two ports and a distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub ports: [String; 2],
    pub distance: u64,
}

impl From<RouteRecord> for Route {
    fn from(record: RouteRecord) -> Self {
        let [a, b] = record.ports;
        Route::new(a, b, record.distance)
    }
}

impl From<&Route> for RouteRecord {
    fn from(route: &Route) -> Self {
        Self {
            ports: [route.a.clone(), route.b.clone()],
            distance: route.distance,
        }
    }
}
