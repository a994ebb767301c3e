//! Train generation and fleet simulation.

use rand::Rng;
use tracing::trace;

use crate::domain::Direction;
use crate::network::{Network, StationId};

use super::train::Train;

/// Place `count` trains at random stations and directions.
///
/// Stations are drawn uniformly with replacement; each train rides the
/// line of the station it starts on, with a direction drawn independently
/// of the station's own token. An empty network yields an empty fleet
/// rather than an error.
pub fn generate_trains(count: u32, network: &Network, rng: &mut impl Rng) -> Vec<Train> {
    if network.stations().is_empty() {
        return Vec::new();
    }

    (1..=count)
        .map(|id| {
            let station = StationId(rng.random_range(0..network.stations().len()));
            let direction = if rng.random_bool(0.5) {
                Direction::North
            } else {
                Direction::South
            };
            Train::new(id, network.station(station).line, station, direction)
        })
        .collect()
}

/// Advance every train one tick.
///
/// Trains never interact; each draws its own delay outcome and moves
/// independently, so no ordering between them is significant.
pub fn advance_all(network: &Network, trains: &mut [Train], rng: &mut impl Rng) {
    for train in trains.iter_mut() {
        train.advance(network, rng);
        trace!(
            train = train.id(),
            station = %network.station(train.station()).name,
            direction = %train.direction(),
            delayed = train.is_delayed(),
            "tick"
        );
    }
}
