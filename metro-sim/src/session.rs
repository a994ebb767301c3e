//! Explicit simulation session.
//!
//! Bundles the built network and the train fleet into one context struct
//! that the binary threads through every operation. All state lives here;
//! nothing is ambient.

use rand::Rng;

use crate::domain::GraphError;
use crate::network::{Network, build_network};
use crate::query::{self, Reachability};
use crate::report::{self, TrainStatus};
use crate::sim::{self, Train};

/// One run's worth of state: the immutable network and the mutable fleet.
#[derive(Debug)]
pub struct Session {
    network: Network,
    trains: Vec<Train>,
}

impl Session {
    /// Build a session from raw delimited rows and generate the fleet.
    ///
    /// # Errors
    ///
    /// Returns `GraphError` when the rows yield no usable network.
    pub fn build(
        connection_rows: &[Vec<String>],
        station_rows: &[Vec<String>],
        train_count: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, GraphError> {
        let network = build_network(connection_rows, station_rows)?;
        let trains = sim::generate_trains(train_count, &network, rng);
        Ok(Self { network, trains })
    }

    /// The built network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The current fleet.
    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    /// Number of trains in the fleet.
    pub fn train_count(&self) -> usize {
        self.trains.len()
    }

    /// Advance every train one tick.
    pub fn advance_all(&mut self, rng: &mut impl Rng) {
        sim::advance_all(&self.network, &mut self.trains, rng);
    }

    /// Snapshot one train by id.
    pub fn status(&self, id: u32) -> Option<TrainStatus> {
        report::status(&self.network, &self.trains, id)
    }

    /// Snapshot the whole fleet.
    pub fn status_all(&self) -> Vec<TrainStatus> {
        report::status_all(&self.network, &self.trains)
    }

    /// Route query between two named stations.
    pub fn check_route(&self, from: &str, to: &str, max_steps: usize) -> Reachability {
        query::check_route(&self.network, from, to, max_steps)
    }
}
