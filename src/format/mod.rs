//! Dataset I/O: the record structure and its JSON files.

pub mod reader;
pub mod record;
pub mod writer;

pub use reader::DatasetReader;
pub use record::{DatasetRecord, RouteRecord};
pub use writer::DatasetWriter;
