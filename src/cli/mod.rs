//! Command-line front end for the `mgraph` binary.

pub mod commands;

pub use commands::Statistic;
