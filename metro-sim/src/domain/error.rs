//! Domain error types.
//!
//! These errors represent datasets that cannot produce a usable network.
//! Individually malformed rows are not errors (the validators drop them
//! silently), so by the time the graph builder runs, the only failure
//! mode left is an empty result.

/// Errors from building a network out of validated records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Validation yielded no usable lines
    #[error("no usable lines after validation")]
    NoLines,

    /// Validation yielded no usable stations
    #[error("no usable stations after validation")]
    NoStations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            GraphError::NoLines.to_string(),
            "no usable lines after validation"
        );
        assert_eq!(
            GraphError::NoStations.to_string(),
            "no usable stations after validation"
        );
    }
}
