//! Error taxonomy shared by all solvers and aggregators.

use crate::models::Location;
use thiserror::Error;

/// Errors reported by tour solvers, the route selector, and the coverage
/// aggregator.
///
/// Every failure is surfaced to the caller; unreachable pairs are never
/// silently skipped or defaulted to zero distance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The caller supplied unusable input (empty stop list, a `first`
    /// location that does not match exactly one stop, zero total
    /// population, mismatched sample slices).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The distance table lacks an entry for a required ordered pair.
    ///
    /// Populating every ordered pair of distinct input locations is a
    /// caller precondition; this error identifies the missing pair.
    #[error("no distance recorded for pair {from} -> {to}")]
    MissingDistance {
        /// Origin of the missing pair.
        from: Location,
        /// Destination of the missing pair.
        to: Location,
    },

    /// The network has no route between two locations, or every candidate
    /// tour contained such a pair.
    #[error("no network route from {from} to {to}")]
    NoRouteFound {
        /// Origin of the unroutable pair.
        from: Location,
        /// Destination of the unroutable pair.
        to: Location,
    },
}
