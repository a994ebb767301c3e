//! Input loading.
//!
//! Reads the two text sources (connections, station delays) from disk and
//! splits them into raw delimited rows. Everything here is shape-agnostic:
//! schema validation belongs to the domain validators.

mod loader;

pub use loader::{LoadError, connection_rows, read_lines, station_rows};
