//! Writes dataset files from an in-memory graph.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::graph::RouteGraph;
use crate::types::error::MetroResult;
use crate::types::City;

use super::record::{DatasetRecord, RouteRecord};

/// Writer for JSON dataset files.
pub struct DatasetWriter {
    indent: Vec<u8>,
}

impl DatasetWriter {
    /// Create a writer that indents with tabs.
    pub fn new() -> Self {
        Self::with_indent(b"\t")
    }

    /// Create a writer with a custom indent string.
    pub fn with_indent(indent: &[u8]) -> Self {
        Self {
            indent: indent.to_vec(),
        }
    }

    /// Flatten a graph into the dataset record structure.
    ///
    /// Metros are ordered by code and routes by `(a, b, distance)`.
    pub fn serialize(graph: &RouteGraph) -> DatasetRecord {
        let mut metros: Vec<City> = graph.cities().cloned().collect();
        metros.sort_by(|a, b| a.code.cmp(&b.code));

        DatasetRecord {
            data_sources: graph.sources().to_vec(),
            metros,
            routes: graph.routes().iter().map(RouteRecord::from).collect(),
        }
    }

    /// Write a complete RouteGraph to a dataset file.
    pub fn write_to_file(&self, graph: &RouteGraph, path: &Path) -> MetroResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        log::info!(
            "Saved {} ({} cities, {} routes)",
            path.display(),
            graph.city_count(),
            graph.route_count()
        );
        Ok(())
    }

    /// Write a complete RouteGraph to any writer.
    pub fn write_to(&self, graph: &RouteGraph, writer: &mut impl Write) -> MetroResult<()> {
        let record = Self::serialize(graph);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&self.indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
        record.serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        log::debug!("Serialized {} metros", record.metros.len());
        Ok(())
    }
}

impl Default for DatasetWriter {
    fn default() -> Self {
        Self::new()
    }
}
