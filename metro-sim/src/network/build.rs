//! Graph building.
//!
//! Turns enriched per-line row groups into the linked station arena:
//! one `Line` per distinct line id, one `Station` per row, next/previous
//! references resolved by name within each line, and line↔station
//! cross-references filled in both directions.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{GraphError, validate_connections, validate_stations};

use super::graph::{Line, LineId, Network, Station, StationId};
use super::grouping::{
    EnrichedGroup, attach_delays, group_by_line, synthesize_terminals, unique_lines,
};

/// Next/previous station names recorded per station for the linking pass.
struct LinkNames {
    next: Option<String>,
    previous: Option<String>,
}

/// Build a network from raw delimited rows.
///
/// Runs the whole forward pipeline: validation, line grouping, terminal
/// synthesis, delay attachment, and graph assembly.
///
/// # Errors
///
/// Returns `GraphError` when validation yields no usable lines or
/// stations. Individually malformed rows are dropped, never reported.
pub fn build_network(
    connection_rows: &[Vec<String>],
    station_rows: &[Vec<String>],
) -> Result<Network, GraphError> {
    let connections = validate_connections(connection_rows);
    let delays = validate_stations(station_rows);

    let line_names = unique_lines(&connections);
    if line_names.is_empty() {
        return Err(GraphError::NoLines);
    }

    let mut groups = group_by_line(&connections, &line_names);
    synthesize_terminals(&mut groups);
    let groups = attach_delays(groups, &delays);

    let mut lines = build_lines(&groups);
    let (mut stations, links) = build_stations(&groups);
    if stations.is_empty() {
        return Err(GraphError::NoStations);
    }

    link_stations(&mut stations, &links);
    attach_line_stations(&mut lines, &stations);

    debug!(
        lines = lines.len(),
        stations = stations.len(),
        "network built"
    );

    Ok(Network::new(lines, stations))
}

/// Create one `Line` per group with its flat station count.
///
/// The count is rows-per-line, not deduplicated by name.
fn build_lines(groups: &[EnrichedGroup]) -> Vec<Line> {
    groups
        .iter()
        .map(|group| Line {
            name: group.line.clone(),
            total_stations: group.rows.len(),
            stations: Vec::new(),
        })
        .collect()
}

/// Create one `Station` per row, recording link names for the linking pass.
///
/// A station's previous-station name is resolved by scanning its own group
/// for the first row hopping into it; no match means the row is the line's
/// starting terminal.
fn build_stations(groups: &[EnrichedGroup]) -> (Vec<Station>, Vec<LinkNames>) {
    let mut stations = Vec::new();
    let mut links = Vec::new();

    // Groups are created from the unique line names in order, so the group
    // index is the line's arena id.
    for (line_idx, group) in groups.iter().enumerate() {
        for row in &group.rows {
            let previous = group
                .rows
                .iter()
                .find(|other| other.next.as_deref() == Some(row.name.as_str()))
                .map(|other| other.name.clone());

            stations.push(Station {
                name: row.name.clone(),
                line: LineId(line_idx),
                delay_probability: row.delay,
                direction: row.direction,
                next: None,
                previous: None,
            });
            links.push(LinkNames {
                next: row.next.clone(),
                previous,
            });
        }
    }

    (stations, links)
}

/// Resolve each station's next/previous names to arena ids.
///
/// Names are matched within the owning line only; the first station built
/// under a name wins (names are unique per line by construction, so ties
/// cannot arise from well-formed input).
fn link_stations(stations: &mut [Station], links: &[LinkNames]) {
    let mut by_name: HashMap<(LineId, &str), StationId> = HashMap::new();
    for (idx, station) in stations.iter().enumerate() {
        by_name
            .entry((station.line, station.name.as_str()))
            .or_insert(StationId(idx));
    }

    let resolved: Vec<(Option<StationId>, Option<StationId>)> = stations
        .iter()
        .zip(links)
        .map(|(station, link)| {
            let lookup = |name: &Option<String>| {
                name.as_deref()
                    .and_then(|n| by_name.get(&(station.line, n)).copied())
            };
            (lookup(&link.next), lookup(&link.previous))
        })
        .collect();

    for (station, (next, previous)) in stations.iter_mut().zip(resolved) {
        station.next = next;
        station.previous = previous;
    }
}

/// Fill each line's owned-station list, in build order.
fn attach_line_stations(lines: &mut [Line], stations: &[Station]) {
    for (idx, station) in stations.iter().enumerate() {
        lines[station.line.0].stations.push(StationId(idx));
    }
}
