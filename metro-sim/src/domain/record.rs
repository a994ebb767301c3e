//! Validated input records.
//!
//! Raw delimited rows arrive as loosely-shaped string vectors; the
//! validators here turn them into typed records, dropping anything that
//! does not fit the schema. Dropping is the defined recovery policy for
//! malformed rows; no per-row errors are surfaced.

use super::Direction;

/// A validated connection row: one directed hop on a line.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionRecord {
    /// Station the hop leaves from.
    pub from: String,

    /// Station the hop arrives at.
    pub to: String,

    /// Identifier of the line the hop belongs to.
    pub line: String,

    /// Direction token attached to the hop.
    pub direction: Direction,
}

impl ConnectionRecord {
    /// Parse a raw row into a connection record.
    ///
    /// The row must have exactly 4 non-empty fields and a direction that
    /// parses case-insensitively as N or S. Returns `None` otherwise.
    pub fn parse(fields: &[String]) -> Option<Self> {
        let [from, to, line, direction] = fields else {
            return None;
        };

        if from.is_empty() || to.is_empty() || line.is_empty() || direction.is_empty() {
            return None;
        }

        let direction = Direction::parse(direction).ok()?;

        Some(ConnectionRecord {
            from: from.clone(),
            to: to.clone(),
            line: line.clone(),
            direction,
        })
    }
}

/// A validated station delay row.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayRecord {
    /// Name of the station the probability applies to.
    pub station: String,

    /// Probability that a train is delayed at this station on one tick.
    /// No bounds are enforced at this layer.
    pub probability: f64,
}

impl DelayRecord {
    /// Parse a raw row into a delay record.
    ///
    /// The row must have exactly 2 fields: a non-empty station name and a
    /// value that parses as a real number. Returns `None` otherwise.
    pub fn parse(fields: &[String]) -> Option<Self> {
        let [station, probability] = fields else {
            return None;
        };

        if station.is_empty() {
            return None;
        }

        let probability = probability.trim().parse::<f64>().ok()?;

        Some(DelayRecord {
            station: station.clone(),
            probability,
        })
    }
}

/// Validate raw connection rows, keeping only well-formed ones.
///
/// Pure and total: bad rows are dropped silently, empty input yields
/// empty output.
pub fn validate_connections(rows: &[Vec<String>]) -> Vec<ConnectionRecord> {
    rows.iter()
        .filter_map(|row| ConnectionRecord::parse(row))
        .collect()
}

/// Validate raw station delay rows, keeping only well-formed ones.
///
/// The probability field is coerced to `f64` in the returned records.
pub fn validate_stations(rows: &[Vec<String>]) -> Vec<DelayRecord> {
    rows.iter()
        .filter_map(|row| DelayRecord::parse(row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn parse_valid_connection() {
        let record = ConnectionRecord::parse(&row(&["A", "B", "Red", "N"])).unwrap();
        assert_eq!(record.from, "A");
        assert_eq!(record.to, "B");
        assert_eq!(record.line, "Red");
        assert_eq!(record.direction, Direction::North);
    }

    #[test]
    fn connection_direction_is_case_insensitive() {
        let record = ConnectionRecord::parse(&row(&["A", "B", "Red", "s"])).unwrap();
        assert_eq!(record.direction, Direction::South);
    }

    #[test]
    fn reject_connection_with_wrong_field_count() {
        assert!(ConnectionRecord::parse(&row(&["A", "B", "Red"])).is_none());
        assert!(ConnectionRecord::parse(&row(&["A", "B", "Red", "N", "extra"])).is_none());
        assert!(ConnectionRecord::parse(&row(&[])).is_none());
    }

    #[test]
    fn reject_connection_with_empty_field() {
        assert!(ConnectionRecord::parse(&row(&["", "B", "Red", "N"])).is_none());
        assert!(ConnectionRecord::parse(&row(&["A", "", "Red", "N"])).is_none());
        assert!(ConnectionRecord::parse(&row(&["A", "B", "", "N"])).is_none());
        assert!(ConnectionRecord::parse(&row(&["A", "B", "Red", ""])).is_none());
    }

    #[test]
    fn reject_connection_with_bad_direction() {
        assert!(ConnectionRecord::parse(&row(&["A", "B", "Red", "E"])).is_none());
        assert!(ConnectionRecord::parse(&row(&["A", "B", "Red", "north"])).is_none());
    }

    #[test]
    fn parse_valid_delay() {
        let record = DelayRecord::parse(&row(&["Central", "0.35"])).unwrap();
        assert_eq!(record.station, "Central");
        assert_eq!(record.probability, 0.35);
    }

    #[test]
    fn delay_probability_tolerates_whitespace() {
        let record = DelayRecord::parse(&row(&["Central", " 0.5 "])).unwrap();
        assert_eq!(record.probability, 0.5);
    }

    #[test]
    fn delay_probability_is_unbounded_here() {
        // Bounds are not this layer's concern.
        assert_eq!(DelayRecord::parse(&row(&["A", "1.5"])).unwrap().probability, 1.5);
        assert_eq!(DelayRecord::parse(&row(&["A", "-1"])).unwrap().probability, -1.0);
    }

    #[test]
    fn reject_delay_with_bad_shape() {
        assert!(DelayRecord::parse(&row(&["Central"])).is_none());
        assert!(DelayRecord::parse(&row(&["Central", "0.1", "extra"])).is_none());
        assert!(DelayRecord::parse(&row(&["", "0.1"])).is_none());
        assert!(DelayRecord::parse(&row(&["Central", "often"])).is_none());
    }

    #[test]
    fn validate_connections_drops_bad_rows() {
        let rows = vec![
            row(&["A", "B", "Red", "N"]),
            row(&["bad row"]),
            row(&["B", "C", "Red", "N"]),
            row(&["A", "B", "Red", "X"]),
        ];

        let records = validate_connections(&rows);
        assert_eq!(records.len(), 2);
        assert!(records.len() <= rows.len());
        assert_eq!(records[0].from, "A");
        assert_eq!(records[1].from, "B");
    }

    #[test]
    fn validate_stations_drops_bad_rows() {
        let rows = vec![
            row(&["A", "0.0"]),
            row(&["B", "not a number"]),
            row(&["C", "0.9"]),
        ];

        let records = validate_stations(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].station, "A");
        assert_eq!(records[1].probability, 0.9);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(validate_connections(&[]).is_empty());
        assert!(validate_stations(&[]).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9 ]{0,12}"
    }

    proptest! {
        /// Every validated connection satisfies the schema contract.
        #[test]
        fn validated_connections_satisfy_contract(
            from in field(),
            to in field(),
            line in field(),
            direction in "[NnSsEWx]",
        ) {
            let rows = vec![vec![from, to, line, direction.clone()]];
            let records = validate_connections(&rows);

            prop_assert!(records.len() <= rows.len());
            if let Some(record) = records.first() {
                prop_assert!(!record.from.is_empty());
                prop_assert!(!record.to.is_empty());
                prop_assert!(!record.line.is_empty());
                prop_assert!(Direction::parse(&direction).is_ok());
            }
        }

        /// Output length never exceeds input length for arbitrary rows.
        #[test]
        fn output_never_longer_than_input(
            rows in proptest::collection::vec(
                proptest::collection::vec("[A-Za-z0-9.]{0,8}", 0..6),
                0..10,
            )
        ) {
            prop_assert!(validate_connections(&rows).len() <= rows.len());
            prop_assert!(validate_stations(&rows).len() <= rows.len());
        }

        /// A numeric second field always parses into the record.
        #[test]
        fn numeric_delay_always_kept(name in field(), p in -10.0f64..10.0) {
            let rows = vec![vec![name.clone(), p.to_string()]];
            let records = validate_stations(&rows);
            prop_assert_eq!(records.len(), 1);
            prop_assert_eq!(records[0].station.clone(), name);
        }
    }
}
