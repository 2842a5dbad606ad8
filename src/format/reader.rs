//! Reads dataset files into an in-memory graph.

use std::io::Read;
use std::path::Path;

use crate::graph::RouteGraph;
use crate::types::error::MetroResult;
use crate::types::Route;

use super::record::DatasetRecord;

/// Reader for JSON dataset files.
pub struct DatasetReader;

impl DatasetReader {
    /// Read a dataset file into a RouteGraph.
    pub fn read_from_file(path: &Path) -> MetroResult<RouteGraph> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        let graph = Self::read_from(&mut reader)?;
        log::info!(
            "Loaded {} ({} cities, {} routes)",
            path.display(),
            graph.city_count(),
            graph.route_count()
        );
        Ok(graph)
    }

    /// Read from any reader into a RouteGraph.
    pub fn read_from(reader: &mut impl Read) -> MetroResult<RouteGraph> {
        let record: DatasetRecord = serde_json::from_reader(reader)?;
        Self::load(record)
    }

    /// Build a graph from an already parsed record.
    ///
    /// Fails on duplicate codes, invalid cities, self-loops and routes whose
    /// endpoints are not metros. Identical route records collapse to one.
    pub fn load(record: DatasetRecord) -> MetroResult<RouteGraph> {
        let route_records = record.routes.len();
        let routes: Vec<Route> = record.routes.into_iter().map(Route::from).collect();
        let graph = RouteGraph::from_parts(record.metros, routes, record.data_sources)?;

        if graph.route_count() < route_records {
            log::debug!(
                "Collapsed {} duplicate route records",
                route_records - graph.route_count()
            );
        }
        Ok(graph)
    }
}
