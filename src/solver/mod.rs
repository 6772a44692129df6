//! Tour-ordering solvers.
//!
//! - [`solve_exact`] — Brute-force permutation search, optimal, O(n!)
//! - [`solve_greedy`] — Nearest-neighbor construction, heuristic, O(n²)

mod exact;
mod greedy;

pub use exact::solve_exact;
pub use greedy::solve_greedy;

use crate::error::RouteError;
use crate::models::{Location, Stop};

/// Resolves the requested start location to a stop index.
///
/// `first` must match exactly one stop's location; no match or a
/// duplicate match is an [`RouteError::InvalidInput`].
fn resolve_first(stops: &[Stop], first: Option<Location>) -> Result<Option<usize>, RouteError> {
    let Some(first) = first else {
        return Ok(None);
    };
    let mut matches = stops
        .iter()
        .enumerate()
        .filter(|(_, s)| s.location() == first)
        .map(|(i, _)| i);
    match (matches.next(), matches.next()) {
        (Some(idx), None) => Ok(Some(idx)),
        (Some(_), Some(_)) => Err(RouteError::InvalidInput(format!(
            "start location {first} matches more than one stop"
        ))),
        (None, _) => Err(RouteError::InvalidInput(format!(
            "start location {first} is not among the stops"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: f64, y: f64) -> Location {
        Location::new(x, y).expect("valid")
    }

    #[test]
    fn test_resolve_first_none() {
        let stops = vec![Stop::new(loc(0.0, 0.0), "A")];
        assert_eq!(resolve_first(&stops, None).expect("ok"), None);
    }

    #[test]
    fn test_resolve_first_match() {
        let stops = vec![Stop::new(loc(0.0, 0.0), "A"), Stop::new(loc(1.0, 0.0), "B")];
        let idx = resolve_first(&stops, Some(loc(1.0, 0.0))).expect("ok");
        assert_eq!(idx, Some(1));
    }

    #[test]
    fn test_resolve_first_no_match() {
        let stops = vec![Stop::new(loc(0.0, 0.0), "A")];
        let err = resolve_first(&stops, Some(loc(5.0, 5.0))).unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)));
    }

    #[test]
    fn test_resolve_first_ambiguous() {
        let dup = loc(2.0, 2.0);
        let stops = vec![Stop::new(dup, "X"), Stop::new(dup, "Y")];
        let err = resolve_first(&stops, Some(dup)).unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)));
    }
}
