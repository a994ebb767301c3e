//! The train entity.

use rand::Rng;

use crate::domain::Direction;
use crate::network::{LineId, Network, StationId};

/// A train riding the network.
///
/// Created once at a random station and direction, then mutated every
/// simulation tick. Only the current station, direction, and delayed flag
/// change; the owning line is fixed for the train's lifetime.
#[derive(Debug, Clone)]
pub struct Train {
    id: u32,
    line: LineId,
    station: StationId,
    direction: Direction,
    delayed: bool,
}

impl Train {
    pub(crate) fn new(id: u32, line: LineId, station: StationId, direction: Direction) -> Self {
        Self {
            id,
            line,
            station,
            direction,
            delayed: false,
        }
    }

    /// Sequential train id, starting at 1.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The line this train rides.
    pub fn line(&self) -> LineId {
        self.line
    }

    /// The station the train is currently at.
    pub fn station(&self) -> StationId {
        self.station
    }

    /// The direction the train is currently heading.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the most recent delay draw held the train in place.
    pub fn is_delayed(&self) -> bool {
        self.delayed
    }

    /// Advance one tick.
    ///
    /// Draws a delay outcome against the current station's probability.
    /// When not delayed, the train moves along its line: to the next
    /// station when its direction matches the station's stored token,
    /// to the previous one otherwise. A missing target means the train is
    /// at the line's end in its direction of travel: it stays put and
    /// reverses instead.
    pub fn advance(&mut self, network: &Network, rng: &mut impl Rng) {
        let station = network.station(self.station);

        self.delayed = rng.random::<f64>() < station.delay_probability;
        if self.delayed {
            return;
        }

        let target = if self.direction == station.direction {
            station.next
        } else {
            station.previous
        };

        match target {
            Some(next) => self.station = next,
            None => self.direction = self.direction.reversed(),
        }
    }
}
