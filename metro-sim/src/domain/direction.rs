//! Travel direction tokens.

use std::fmt;

/// Error returned when parsing an invalid direction token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction token: {reason}")]
pub struct InvalidDirection {
    reason: &'static str,
}

/// A travel direction along a line.
///
/// Connection rows carry the token as `"N"` or `"S"`, matched
/// case-insensitively. Any `Direction` value is valid by construction.
///
/// # Examples
///
/// ```
/// use metro_sim::domain::Direction;
///
/// let north = Direction::parse("N").unwrap();
/// assert_eq!(north.as_str(), "N");
///
/// // Lowercase is accepted
/// assert_eq!(Direction::parse("s").unwrap(), Direction::South);
///
/// // Anything else is rejected
/// assert!(Direction::parse("E").is_err());
/// assert!(Direction::parse("").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
}

impl Direction {
    /// Parse a direction token from a string.
    ///
    /// The input must be exactly `"n"` or `"s"` in either case; surrounding
    /// whitespace is not accepted.
    pub fn parse(s: &str) -> Result<Self, InvalidDirection> {
        match s {
            "N" | "n" => Ok(Direction::North),
            "S" | "s" => Ok(Direction::South),
            _ => Err(InvalidDirection {
                reason: "must be N or S",
            }),
        }
    }

    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }

    /// Returns the canonical single-letter token.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
