//! Exact-versus-greedy route selection over real network paths.

use super::{NetworkPath, PathOracle};
use crate::distance::DistanceTable;
use crate::error::RouteError;
use crate::models::{Location, Stop, Tour, TourMode};
use crate::solver::{solve_exact, solve_greedy};
use log::debug;
use serde::{Deserialize, Serialize};

/// One resolved leg of a selected route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Stop this leg departs from.
    pub from: Stop,
    /// Stop this leg arrives at.
    pub to: Stop,
    /// Waypoints of the real shortest path for this leg.
    pub waypoints: Vec<Location>,
    /// Network length of this leg.
    pub length: f64,
}

/// The winning visiting order with its real network legs.
///
/// Ready for the rendering layer: ordered markers from the tour, and one
/// polyline per leg from the waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedRoute {
    /// Visiting order.
    pub tour: Tour,
    /// Real sub-path for each consecutive pair, in tour order.
    pub legs: Vec<RouteLeg>,
    /// Sum of the legs' network lengths.
    pub total_length: f64,
}

/// Picks whichever candidate order is shorter along the *real* network.
///
/// The solvers score candidates against the caller's precomputed
/// distance table, but the table and a live shortest-path query can
/// disagree (different weighting, or the table was built before the
/// network last changed). So both candidate orders are re-scored by
/// resolving every leg through the oracle, and the smaller real summed
/// length wins. On a tie the exact-derived order (the first computed)
/// is returned.
///
/// A candidate with any unroutable leg is disqualified; the other
/// candidate then wins outright.
///
/// # Errors
///
/// [`RouteError::NoRouteFound`] if both candidates are disqualified
/// (reporting the exact candidate's failing pair).
///
/// # Examples
///
/// ```
/// use u_tours::distance::DistanceTable;
/// use u_tours::models::{Location, Stop, TourMode};
/// use u_tours::selection::{select_best_route, StraightLineOracle};
/// use u_tours::solver::{solve_exact, solve_greedy};
///
/// let stops = vec![
///     Stop::new(Location::new(0.0, 0.0).unwrap(), "A"),
///     Stop::new(Location::new(0.0, 3.0).unwrap(), "B"),
///     Stop::new(Location::new(4.0, 0.0).unwrap(), "C"),
/// ];
/// let table = DistanceTable::from_stops(&stops);
/// let first = Some(stops[0].location());
///
/// let (exact, _) = solve_exact(&stops, &table, first, TourMode::Cyclic).unwrap();
/// let (greedy, _) = solve_greedy(&stops, &table, first).unwrap();
/// let oracle = StraightLineOracle::new(&table);
///
/// let best = select_best_route(&exact, &greedy, &oracle, TourMode::Cyclic).unwrap();
/// assert_eq!(best.legs.len(), 3);
/// assert!((best.total_length - 12.0).abs() < 1e-10);
/// ```
pub fn select_best_route<O: PathOracle>(
    exact: &Tour,
    greedy: &Tour,
    oracle: &O,
    mode: TourMode,
) -> Result<SelectedRoute, RouteError> {
    let exact_candidate = resolve_tour(exact, oracle, mode);
    let greedy_candidate = resolve_tour(greedy, oracle, mode);

    match (exact_candidate, greedy_candidate) {
        (Ok(e), Ok(g)) => {
            debug!(
                "candidate totals: exact {} vs greedy {}",
                e.total_length, g.total_length
            );
            if e.total_length <= g.total_length {
                Ok(e)
            } else {
                Ok(g)
            }
        }
        (Ok(e), Err(err)) => {
            debug!("greedy candidate disqualified: {err}");
            Ok(e)
        }
        (Err(err), Ok(g)) => {
            debug!("exact candidate disqualified: {err}");
            Ok(g)
        }
        (Err(err), Err(_)) => Err(err),
    }
}

/// Resolves every leg of a tour to a real network path.
///
/// # Errors
///
/// The first leg's [`RouteError::NoRouteFound`] disqualifies the whole
/// tour.
fn resolve_tour<O: PathOracle>(
    tour: &Tour,
    oracle: &O,
    mode: TourMode,
) -> Result<SelectedRoute, RouteError> {
    let mut legs = Vec::new();
    let mut total_length = 0.0;
    for (from, to) in tour.legs(mode) {
        let NetworkPath { waypoints, length } =
            oracle.shortest_path(from.location(), to.location())?;
        total_length += length;
        legs.push(RouteLeg {
            from: from.clone(),
            to: to.clone(),
            waypoints,
            length,
        });
    }
    Ok(SelectedRoute {
        tour: tour.clone(),
        legs,
        total_length,
    })
}

/// Runs the exact solver, the greedy solver, and the selector in one
/// call.
///
/// Single-stop inputs degenerate gracefully to a one-stop route with no
/// legs and total length zero.
///
/// # Errors
///
/// Any error from [`solve_exact`], [`solve_greedy`], or
/// [`select_best_route`].
pub fn plan_route<O: PathOracle>(
    stops: &[Stop],
    distances: &DistanceTable,
    first: Option<Location>,
    mode: TourMode,
    oracle: &O,
) -> Result<SelectedRoute, RouteError> {
    let (exact, _) = solve_exact(stops, distances, first, mode)?;
    let (greedy, _) = solve_greedy(stops, distances, first)?;
    select_best_route(&exact, &greedy, oracle, mode)
}
