//! Greedy nearest-neighbor solver.
//!
//! Builds a route by repeatedly visiting the nearest unvisited stop.
//! O(n²), fast, and not guaranteed optimal. Serves as the fallback and
//! comparison candidate for the exact solver.

use super::resolve_first;
use crate::distance::DistanceTable;
use crate::error::RouteError;
use crate::models::{Location, Stop, Tour};

/// Builds a visiting order by always moving to the nearest unvisited
/// stop.
///
/// Starts from `first` if given, otherwise from the first stop in input
/// order. Distance ties are broken by input order (first encountered
/// wins), so the result is deterministic. The returned total is always
/// the open-path sum of the chosen consecutive edges; cyclic callers add
/// the closing edge themselves.
///
/// The result is a valid permutation visiting every stop exactly once,
/// with no optimality guarantee.
///
/// # Errors
///
/// - [`RouteError::InvalidInput`] if `stops` is empty or `first` does not
///   match exactly one stop's location.
/// - [`RouteError::MissingDistance`] if the table lacks a required
///   ordered pair.
///
/// # Examples
///
/// ```
/// use u_tours::distance::DistanceTable;
/// use u_tours::models::{Location, Stop};
/// use u_tours::solver::solve_greedy;
///
/// let stops = vec![
///     Stop::new(Location::new(0.0, 0.0).unwrap(), "A"),
///     Stop::new(Location::new(0.0, 3.0).unwrap(), "B"),
///     Stop::new(Location::new(4.0, 0.0).unwrap(), "C"),
/// ];
/// let table = DistanceTable::from_stops(&stops);
///
/// let (tour, total) = solve_greedy(&stops, &table, None).unwrap();
/// // From A the nearest is B (3), then C (5): open-path total 8.
/// assert_eq!(tour.labels(), vec!["A", "B", "C"]);
/// assert!((total - 8.0).abs() < 1e-10);
/// ```
pub fn solve_greedy(
    stops: &[Stop],
    distances: &DistanceTable,
    first: Option<Location>,
) -> Result<(Tour, f64), RouteError> {
    if stops.is_empty() {
        return Err(RouteError::InvalidInput("stop list is empty".into()));
    }
    let start = resolve_first(stops, first)?.unwrap_or(0);

    let n = stops.len();
    let mut visited = vec![false; n];
    visited[start] = true;

    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;
    let mut total = 0.0;

    while order.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for (i, stop) in stops.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = distances.get(stops[current].location(), stop.location())?;
            let closer = match best {
                Some((_, best_d)) => d < best_d,
                None => true,
            };
            if closer {
                best = Some((i, d));
            }
        }
        // At least one stop is unvisited, so the scan found a candidate.
        let (next, d) = best.ok_or_else(|| {
            RouteError::InvalidInput("nearest-neighbor scan found no candidate".into())
        })?;
        visited[next] = true;
        order.push(next);
        total += d;
        current = next;
    }

    let tour = Tour::new(order.iter().map(|&i| stops[i].clone()).collect());
    Ok((tour, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: f64, y: f64) -> Location {
        Location::new(x, y).expect("valid")
    }

    fn triangle() -> (Vec<Stop>, DistanceTable) {
        let stops = vec![
            Stop::new(loc(0.0, 0.0), "A"),
            Stop::new(loc(0.0, 3.0), "B"),
            Stop::new(loc(4.0, 0.0), "C"),
        ];
        let table = DistanceTable::from_stops(&stops);
        (stops, table)
    }

    #[test]
    fn test_greedy_triangle() {
        let (stops, table) = triangle();
        let (tour, total) =
            solve_greedy(&stops, &table, Some(stops[0].location())).expect("solvable");
        // From A: B is at 3, C at 4 -> pick B; then B->C = 5. Total 8.
        assert_eq!(tour.labels(), vec!["A", "B", "C"]);
        assert!((total - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_greedy_default_start_is_input_order() {
        let (stops, table) = triangle();
        let (tour, _) = solve_greedy(&stops, &table, None).expect("solvable");
        assert_eq!(tour.stops()[0].label(), "A");
    }

    #[test]
    fn test_greedy_visits_all_exactly_once() {
        let (stops, table) = triangle();
        let (tour, _) = solve_greedy(&stops, &table, Some(stops[2].location())).expect("solvable");
        let mut labels = tour.labels();
        labels.sort_unstable();
        assert_eq!(labels, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_greedy_tie_breaks_by_input_order() {
        // B and C are equidistant from A; the first encountered wins.
        let stops = vec![
            Stop::new(loc(0.0, 0.0), "A"),
            Stop::new(loc(0.0, 5.0), "B"),
            Stop::new(loc(5.0, 0.0), "C"),
        ];
        let table = DistanceTable::from_stops(&stops);
        let (tour, _) = solve_greedy(&stops, &table, Some(stops[0].location())).expect("solvable");
        assert_eq!(tour.stops()[1].label(), "B");
    }

    #[test]
    fn test_greedy_deterministic() {
        let (stops, table) = triangle();
        let a = solve_greedy(&stops, &table, None).expect("solvable");
        let b = solve_greedy(&stops, &table, None).expect("solvable");
        assert_eq!(a.0, b.0);
        assert_eq!(a.1, b.1);
    }

    #[test]
    fn test_greedy_single_stop() {
        let stops = vec![Stop::new(loc(1.0, 1.0), "only")];
        let table = DistanceTable::new();
        let (tour, total) = solve_greedy(&stops, &table, None).expect("solvable");
        assert_eq!(tour.len(), 1);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_greedy_empty_stops() {
        let table = DistanceTable::new();
        let err = solve_greedy(&[], &table, None).unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)));
    }

    #[test]
    fn test_greedy_unknown_first() {
        let (stops, table) = triangle();
        let err = solve_greedy(&stops, &table, Some(loc(9.0, 9.0))).unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)));
    }

    #[test]
    fn test_greedy_missing_distance() {
        let stops = vec![Stop::new(loc(0.0, 0.0), "A"), Stop::new(loc(1.0, 0.0), "B")];
        let table = DistanceTable::new();
        let err = solve_greedy(&stops, &table, None).unwrap_err();
        assert!(matches!(err, RouteError::MissingDistance { .. }));
    }

    #[test]
    fn test_greedy_can_be_suboptimal() {
        // Classic trap: greedy from A grabs the nearby stop and pays a
        // long edge later.
        let stops = vec![
            Stop::new(loc(0.0, 0.0), "A"),
            Stop::new(loc(1.0, 0.0), "near"),
            Stop::new(loc(-2.0, 0.0), "left"),
            Stop::new(loc(4.0, 0.0), "right"),
        ];
        let table = DistanceTable::from_stops(&stops);
        let (_, greedy_total) =
            solve_greedy(&stops, &table, Some(stops[0].location())).expect("solvable");
        let (_, exact_total) = crate::solver::solve_exact(
            &stops,
            &table,
            Some(stops[0].location()),
            crate::models::TourMode::Open,
        )
        .expect("solvable");
        assert!(exact_total <= greedy_total);
    }
}
