//! The station/line arena.
//!
//! Lines and stations form a cyclic reference graph (station → line →
//! stations, station → next/previous station). The graph is stored as an
//! arena of entities addressed by index newtypes, with relationships held
//! as indices instead of owning references. Topology is immutable once
//! built; only per-train state changes during simulation.

use crate::domain::Direction;

/// Index of a line in the network arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(pub usize);

/// Index of a station in the network arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(pub usize);

/// A named line and the stations it owns.
#[derive(Debug, Clone)]
pub struct Line {
    /// Line identifier as seen in the connection rows.
    pub name: String,

    /// Flat count of station rows belonging to this line.
    ///
    /// Counted across rows, not deduplicated by name, matching the row
    /// counting of the build stage.
    pub total_stations: usize,

    /// The line's stations in build order. Positional indices in this
    /// sequence define step distances for reachability.
    pub stations: Vec<StationId>,
}

/// A station node on a line.
///
/// At most one next and one previous reference. A station whose `next`
/// is absent is the line's terminal in its stored direction.
#[derive(Debug, Clone)]
pub struct Station {
    /// Station name. The same name may exist on multiple lines as
    /// distinct entities.
    pub name: String,

    /// The owning line.
    pub line: LineId,

    /// Probability that a train is delayed here on one tick.
    pub delay_probability: f64,

    /// Direction token inherited from the station's outgoing connection.
    pub direction: Direction,

    /// The next station along the line, if any.
    pub next: Option<StationId>,

    /// The previous station along the line, if any.
    pub previous: Option<StationId>,
}

/// The built subway network: an arena of lines and stations.
#[derive(Debug, Clone)]
pub struct Network {
    lines: Vec<Line>,
    stations: Vec<Station>,
}

impl Network {
    pub(crate) fn new(lines: Vec<Line>, stations: Vec<Station>) -> Self {
        Self { lines, stations }
    }

    /// All lines, in build order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All stations, in build order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Look up a line by id.
    pub fn line(&self, id: LineId) -> &Line {
        // Ids are only minted by the builder; indexing cannot fail.
        &self.lines[id.0]
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.0]
    }

    /// Resolve a station name to its first matching entity,
    /// case-insensitively.
    ///
    /// Interchange names exist on several lines; the entity on the
    /// earliest-built line anchors queries.
    pub fn resolve(&self, name: &str) -> Option<StationId> {
        self.stations
            .iter()
            .position(|station| station.name.eq_ignore_ascii_case(name))
            .map(StationId)
    }

    /// Whether a station with this name exists on any line.
    pub fn has_station(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}
