//! Exact permutation solver.
//!
//! Brute-force search over every visiting order. Optimal and
//! deterministic, at factorial cost: this is only tractable for a handful
//! of stops, and there is no internal timeout. Callers wanting a cutoff
//! must bound the stop count themselves.

use super::resolve_first;
use crate::distance::DistanceTable;
use crate::error::RouteError;
use crate::models::{Location, Stop, Tour, TourMode};
use log::debug;

/// Finds the minimum-distance visiting order by enumerating every
/// permutation of the stops.
///
/// If `first` is given, that stop is fixed at position 0 and only the
/// remainder is permuted, cutting the search space by a factor of the
/// stop count. Permutations are enumerated in lexicographic order over
/// the input order and only a strictly smaller total replaces the
/// incumbent, so ties keep the first-found ordering and repeated calls on
/// identical input return identical tours.
///
/// The returned total is the true minimum over all permutations honoring
/// `first`: consecutive-pair distances, plus the closing edge when `mode`
/// is [`TourMode::Cyclic`].
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
/// use u_tours::models::{Location, Stop, TourMode};
/// use u_tours::solver::solve_exact;
///
/// let stops = vec![
///     Stop::new(Location::new(0.0, 0.0).unwrap(), "A"),
///     Stop::new(Location::new(0.0, 3.0).unwrap(), "B"),
///     Stop::new(Location::new(4.0, 0.0).unwrap(), "C"),
/// ];
/// let table = DistanceTable::from_stops(&stops);
/// let first = Some(stops[0].location());
///
/// let (tour, total) = solve_exact(&stops, &table, first, TourMode::Cyclic).unwrap();
/// assert_eq!(tour.stops()[0].label(), "A");
/// assert!((total - 12.0).abs() < 1e-10);
/// ```
pub fn solve_exact(
    stops: &[Stop],
    distances: &DistanceTable,
    first: Option<Location>,
    mode: TourMode,
) -> Result<(Tour, f64), RouteError> {
    if stops.is_empty() {
        return Err(RouteError::InvalidInput("stop list is empty".into()));
    }
    let fixed = resolve_first(stops, first)?;

    let mut prefix = Vec::with_capacity(stops.len());
    let mut remaining: Vec<usize> = (0..stops.len()).collect();
    if let Some(idx) = fixed {
        remaining.retain(|&i| i != idx);
        prefix.push(idx);
    }

    let mut best: Option<(Vec<usize>, f64)> = None;
    let mut searched: u64 = 0;
    search(
        stops,
        distances,
        mode,
        &mut prefix,
        &mut remaining,
        &mut best,
        &mut searched,
    )?;
    debug!(
        "exact solver searched {} permutations of {} stops",
        searched,
        stops.len()
    );

    // `stops` is non-empty, so at least one permutation was scored.
    let (order, total) = best.ok_or_else(|| {
        RouteError::InvalidInput("permutation search produced no ordering".into())
    })?;
    let tour = Tour::new(order.iter().map(|&i| stops[i].clone()).collect());
    Ok((tour, total))
}

/// Enumerates completions of `prefix` in lexicographic order over the
/// input indices, scoring each complete permutation.
fn search(
    stops: &[Stop],
    distances: &DistanceTable,
    mode: TourMode,
    prefix: &mut Vec<usize>,
    remaining: &mut Vec<usize>,
    best: &mut Option<(Vec<usize>, f64)>,
    searched: &mut u64,
) -> Result<(), RouteError> {
    if remaining.is_empty() {
        *searched += 1;
        let total = order_total(stops, distances, prefix, mode)?;
        let improved = match best {
            Some((_, incumbent)) => total < *incumbent,
            None => true,
        };
        if improved {
            *best = Some((prefix.clone(), total));
        }
        return Ok(());
    }

    for i in 0..remaining.len() {
        let idx = remaining.remove(i);
        prefix.push(idx);
        search(stops, distances, mode, prefix, remaining, best, searched)?;
        prefix.pop();
        remaining.insert(i, idx);
    }
    Ok(())
}

/// Total distance of an index ordering: consecutive pairs, plus the
/// closing edge when cyclic.
fn order_total(
    stops: &[Stop],
    distances: &DistanceTable,
    order: &[usize],
    mode: TourMode,
) -> Result<f64, RouteError> {
    let mut total = 0.0;
    for w in order.windows(2) {
        total += distances.get(stops[w[0]].location(), stops[w[1]].location())?;
    }
    if mode == TourMode::Cyclic && order.len() > 1 {
        let last = stops[order[order.len() - 1]].location();
        let first = stops[order[0]].location();
        total += distances.get(last, first)?;
    }
    Ok(total)
}
