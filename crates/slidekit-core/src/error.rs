//! Configuration errors for slidekit-core.

use thiserror::Error;

/// Errors raised while validating a slider configuration.
///
/// These are caller contract violations: an engine is never built from an
/// invalid configuration. Runtime input anomalies (pointer outside the track,
/// absent values) are recovered locally and never show up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `min` must be strictly below `max`.
    #[error("invalid domain: min ({min}) must be less than max ({max})")]
    InvalidDomain {
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },

    /// A domain bound is NaN or infinite.
    #[error("domain bound `{bound}` is not finite")]
    NonFiniteBound {
        /// Which bound ("min" or "max")
        bound: &'static str,
    },

    /// Step must be a positive, finite number.
    #[error("invalid step {0}: must be positive and finite")]
    InvalidStep(f64),

    /// A mark key lies outside the domain.
    #[error("mark {value} lies outside the domain [{min}, {max}]")]
    MarkOutOfDomain {
        /// Mark key
        value: f64,
        /// Domain minimum
        min: f64,
        /// Domain maximum
        max: f64,
    },

    /// A mark key is NaN or infinite.
    #[error("mark key is not finite")]
    NonFiniteMark,

    /// The number of initial values does not fit the slider mode.
    #[error("expected {expected} initial value(s), found {found}")]
    HandleCount {
        /// What the mode accepts
        expected: &'static str,
        /// What was configured
        found: usize,
    },

    /// Push distance must be non-negative and finite.
    #[error("invalid push distance {0}: must be non-negative and finite")]
    InvalidPushDistance(f64),

    /// The handles cannot keep the push distance inside the domain.
    #[error("{handles} handles cannot stay {distance} apart within a span of {span}")]
    PushDistanceTooLarge {
        /// Push distance
        distance: f64,
        /// Number of handles
        handles: usize,
        /// Domain span
        span: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidDomain {
            min: 10.0,
            max: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid domain: min (10) must be less than max (0)"
        );

        let err = ConfigError::MarkOutOfDomain {
            value: 120.0,
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "mark 120 lies outside the domain [0, 100]");

        let err = ConfigError::HandleCount {
            expected: "exactly 1",
            found: 2,
        };
        assert_eq!(err.to_string(), "expected exactly 1 initial value(s), found 2");
    }

    #[test]
    fn test_config_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ConfigError::InvalidStep(-1.0));
        assert_error(&ConfigError::NonFiniteMark);
    }
}
