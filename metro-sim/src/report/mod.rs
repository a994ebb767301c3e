//! Train status reporting.
//!
//! Snapshots of the running fleet for the menu layer: plain-text status
//! lines and serializable records for export.

use std::fmt;

use serde::Serialize;

use crate::network::Network;
use crate::sim::Train;

/// Snapshot of one train's position and state.
#[derive(Debug, Clone, Serialize)]
pub struct TrainStatus {
    /// Train id
    pub id: u32,

    /// Name of the line the train rides
    pub line: String,

    /// Name of the current station
    pub station: String,

    /// Current heading, "N" or "S"
    pub direction: String,

    /// Whether the train was delayed on the latest tick
    pub delayed: bool,
}

impl TrainStatus {
    fn snapshot(network: &Network, train: &Train) -> Self {
        Self {
            id: train.id(),
            line: network.line(train.line()).name.clone(),
            station: network.station(train.station()).name.clone(),
            direction: train.direction().to_string(),
            delayed: train.is_delayed(),
        }
    }
}

impl fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Train {} on {} line is at station {} heading in {} direction",
            self.id,
            self.line.to_uppercase(),
            self.station,
            self.direction
        )?;
        if self.delayed {
            write!(f, " (DELAY)")?;
        }
        Ok(())
    }
}

/// Snapshot one train by id, if it exists.
pub fn status(network: &Network, trains: &[Train], id: u32) -> Option<TrainStatus> {
    trains
        .iter()
        .find(|train| train.id() == id)
        .map(|train| TrainStatus::snapshot(network, train))
}

/// Snapshot the whole fleet, in id order.
pub fn status_all(network: &Network, trains: &[Train]) -> Vec<TrainStatus> {
    trains
        .iter()
        .map(|train| TrainStatus::snapshot(network, train))
        .collect()
}
