//! Network construction.
//!
//! Validated connection records flow through line grouping, terminal
//! synthesis, and delay attachment into the linked station/line arena.

mod build;
mod graph;
mod grouping;

pub use build::build_network;
pub use graph::{Line, LineId, Network, Station, StationId};
pub use grouping::{
    EnrichedGroup, LineGroup, RawStationRow, StationRow, attach_delays, group_by_line,
    synthesize_terminals, unique_lines,
};
