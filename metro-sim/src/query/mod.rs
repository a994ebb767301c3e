//! Reachability queries.
//!
//! Answers "can a passenger get from station A to station B within a given
//! number of steps", crossing lines at shared interchange stations when
//! the two endpoints ride different lines.

use tracing::debug;

use crate::network::{Line, Network, StationId};

/// Outcome of a route query.
///
/// `is_reachable` gives the boolean view; the other variants carry the
/// diagnostic the caller renders for a negative answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reachability {
    /// The destination is within the step budget.
    Within { steps: usize },

    /// A route exists but needs more steps than allowed.
    Beyond { steps: usize },

    /// The two lines share no interchange station.
    NoInterchange,

    /// A station name did not resolve on any line.
    UnknownStation(String),
}

impl Reachability {
    /// Whether the destination is reachable within the queried budget.
    pub fn is_reachable(&self) -> bool {
        matches!(self, Reachability::Within { .. })
    }
}

/// Steps between two stations on the same line.
///
/// The step count is the positional distance in the line's build order.
/// Same-line membership is the caller's contract; violating it is a bug
/// in the caller, not a recoverable input condition.
pub fn steps_between(network: &Network, a: StationId, b: StationId) -> usize {
    let line = network.line(network.station(a).line);
    // Contract: both stations live on `line`, so the lookup cannot fail.
    steps_on(network, line, &network.station(a).name, &network.station(b).name).unwrap()
}

/// All stations on `a`'s line whose name also appears on `b`'s line.
///
/// Interchange is by name: the same name on two lines is two distinct
/// station entities joined for transfer purposes.
pub fn shared_stations(network: &Network, a: StationId, b: StationId) -> Vec<StationId> {
    let line_a = network.line(network.station(a).line);
    let line_b = network.line(network.station(b).line);

    line_a
        .stations
        .iter()
        .copied()
        .filter(|&id| position_by_name(network, line_b, &network.station(id).name).is_some())
        .collect()
}

/// The cheapest transfer route between stations on different lines.
///
/// For each shared station: steps from `a` to it on `a`'s line, plus steps
/// from `b` to it on `b`'s line; the minimum total wins. `shared` must be
/// non-empty; the caller checks for the no-interchange case first.
pub fn shortest_transfer_steps(
    network: &Network,
    a: StationId,
    b: StationId,
    shared: &[StationId],
) -> usize {
    let line_b = network.line(network.station(b).line);

    shared
        .iter()
        .map(|&interchange| {
            let name = network.station(interchange).name.as_str();
            let to_interchange = steps_between(network, a, interchange);
            // Contract: shared names appear on both lines.
            let from_interchange =
                steps_on(network, line_b, &network.station(b).name, name).unwrap();
            to_interchange + from_interchange
        })
        .min()
        // Contract: `shared` is non-empty.
        .unwrap()
}

/// Route query over station names.
///
/// Names resolve case-insensitively to their first matching entity. Both
/// endpoints on one line compare against the direct step distance;
/// endpoints on different lines compare against the cheapest interchange
/// transfer. Unknown names and missing interchanges are negative outcomes,
/// never faults.
pub fn check_route(network: &Network, from: &str, to: &str, max_steps: usize) -> Reachability {
    let Some(a) = network.resolve(from) else {
        debug!(station = from, "route query for unknown station");
        return Reachability::UnknownStation(from.to_string());
    };
    let Some(b) = network.resolve(to) else {
        debug!(station = to, "route query for unknown station");
        return Reachability::UnknownStation(to.to_string());
    };

    let steps = if network.station(a).line == network.station(b).line {
        steps_between(network, a, b)
    } else {
        let shared = shared_stations(network, a, b);
        if shared.is_empty() {
            return Reachability::NoInterchange;
        }
        shortest_transfer_steps(network, a, b, &shared)
    };

    if steps <= max_steps {
        Reachability::Within { steps }
    } else {
        Reachability::Beyond { steps }
    }
}

/// Boolean view of [`check_route`].
pub fn is_reachable(network: &Network, from: &str, to: &str, max_steps: usize) -> bool {
    check_route(network, from, to, max_steps).is_reachable()
}

fn steps_on(network: &Network, line: &Line, from: &str, to: &str) -> Option<usize> {
    let from_pos = position_by_name(network, line, from)?;
    let to_pos = position_by_name(network, line, to)?;
    Some(from_pos.abs_diff(to_pos))
}

fn position_by_name(network: &Network, line: &Line, name: &str) -> Option<usize> {
    line.stations
        .iter()
        .position(|&id| network.station(id).name == name)
}
