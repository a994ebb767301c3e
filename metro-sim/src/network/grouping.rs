//! Line grouping.
//!
//! Partitions validated connection records by line, synthesizes the
//! terminal rows that the raw connection list never mentions as origins,
//! and attaches a delay probability to every row. The output is the
//! enriched per-line row set the graph builder consumes.

use crate::domain::{ConnectionRecord, DelayRecord, Direction};

/// A station row before delay attachment.
///
/// `next` is `None` for synthesized terminal rows, which have no outgoing
/// hop on their line.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStationRow {
    pub name: String,
    pub next: Option<String>,
    pub direction: Direction,
}

/// A station row with its delay probability resolved.
///
/// This is the only row shape the graph builder accepts, so a missing
/// delay is unrepresentable rather than a runtime error.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRow {
    pub name: String,
    pub next: Option<String>,
    pub direction: Direction,
    pub delay: f64,
}

/// One line's station rows, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGroup {
    pub line: String,
    pub rows: Vec<RawStationRow>,
}

/// One line's station rows with delays attached.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedGroup {
    pub line: String,
    pub rows: Vec<StationRow>,
}

/// Returns the distinct line identifiers, in first-appearance order.
pub fn unique_lines(connections: &[ConnectionRecord]) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for record in connections {
        if !lines.contains(&record.line) {
            lines.push(record.line.clone());
        }
    }
    lines
}

/// Group connection records by line, preserving relative order within
/// each group.
pub fn group_by_line(connections: &[ConnectionRecord], lines: &[String]) -> Vec<LineGroup> {
    lines
        .iter()
        .map(|line| LineGroup {
            line: line.clone(),
            rows: connections
                .iter()
                .filter(|record| &record.line == line)
                .map(|record| RawStationRow {
                    name: record.from.clone(),
                    next: Some(record.to.clone()),
                    direction: record.direction,
                })
                .collect(),
        })
        .collect()
}

/// Append each line's terminal stations.
///
/// A destination name that never appears as an origin on its line is the
/// line's terminal: it gets a synthesized row with no outgoing hop,
/// carrying the group's first-row direction token (a line has one dominant
/// direction value across its rows).
pub fn synthesize_terminals(groups: &mut [LineGroup]) {
    for group in groups {
        let Some(first) = group.rows.first() else {
            continue;
        };
        let line_direction = first.direction;

        let origins: Vec<String> = group.rows.iter().map(|row| row.name.clone()).collect();
        let destinations: Vec<String> = group
            .rows
            .iter()
            .filter_map(|row| row.next.clone())
            .collect();

        let mut appended: Vec<String> = Vec::new();
        for destination in destinations {
            if origins.contains(&destination) || appended.contains(&destination) {
                continue;
            }
            appended.push(destination.clone());
            group.rows.push(RawStationRow {
                name: destination,
                next: None,
                direction: line_direction,
            });
        }
    }
}

/// Attach a delay probability to every row.
///
/// The first delay record matching the row's station name wins; stations
/// absent from the delay source default to 0.0.
pub fn attach_delays(groups: Vec<LineGroup>, delays: &[DelayRecord]) -> Vec<EnrichedGroup> {
    groups
        .into_iter()
        .map(|group| EnrichedGroup {
            line: group.line,
            rows: group
                .rows
                .into_iter()
                .map(|row| {
                    let delay = delays
                        .iter()
                        .find(|record| record.station == row.name)
                        .map(|record| record.probability)
                        .unwrap_or(0.0);
                    StationRow {
                        name: row.name,
                        next: row.next,
                        direction: row.direction,
                        delay,
                    }
                })
                .collect(),
        })
        .collect()
}
