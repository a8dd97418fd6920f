use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while validating a pinch analysis problem.
///
/// Every variant names the offending input so the caller can fix it. A
/// failed validation aborts the whole analysis; silently dropping a stream
/// would change the thermodynamic problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinchError {
    /// A stream's supply and target temperatures are equal, leaving its
    /// hot/cold classification undefined.
    #[error("stream `{name}`: supply and target temperatures are equal")]
    IsothermalStream {
        /// Name of the offending stream.
        name: String,
    },

    /// A stream temperature is NaN.
    #[error("stream `{name}`: temperatures are not comparable")]
    IncomparableTemperatures {
        /// Name of the offending stream.
        name: String,
    },

    /// A stream's heat-capacity flow rate is not strictly positive.
    #[error("stream `{name}`: invalid heat-capacity flow rate")]
    CapacitanceRate {
        /// Name of the offending stream.
        name: String,

        /// Underlying constraint violation.
        #[source]
        source: ConstraintError,
    },

    /// The minimum approach temperature is negative or NaN.
    #[error("invalid minimum approach temperature")]
    MinApproach(#[source] ConstraintError),
}
