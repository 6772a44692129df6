//! Tour type and cyclic/open mode.

use super::Stop;
use crate::distance::DistanceTable;
use crate::error::RouteError;
use serde::{Deserialize, Serialize};

/// Whether a tour's total includes the edge returning to the first stop.
///
/// Callers differ on this convention (a round trip versus a one-way
/// multi-stop visit), so it is an explicit flag rather than an assumption
/// baked into the solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourMode {
    /// Total includes the closing edge from the last stop back to the first.
    Cyclic,
    /// Total is the sum of consecutive edges only.
    Open,
}

/// An ordered visiting sequence of stops.
///
/// Produced by the solvers; always a permutation of the input stops.
///
/// # Examples
///
/// ```
/// use u_tours::models::{Location, Stop, Tour, TourMode};
///
/// let tour = Tour::new(vec![
///     Stop::new(Location::new(0.0, 0.0).unwrap(), "A"),
///     Stop::new(Location::new(0.0, 3.0).unwrap(), "B"),
///     Stop::new(Location::new(4.0, 0.0).unwrap(), "C"),
/// ]);
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.labels(), vec!["A", "B", "C"]);
/// assert_eq!(tour.legs(TourMode::Open).len(), 2);
/// assert_eq!(tour.legs(TourMode::Cyclic).len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    stops: Vec<Stop>,
}

impl Tour {
    /// Creates a tour from an ordered stop sequence.
    pub fn new(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    /// The stops in visiting order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The stop labels in visiting order.
    pub fn labels(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.label()).collect()
    }

    /// The consecutive stop pairs of this tour.
    ///
    /// Includes the closing pair (last, first) when `mode` is
    /// [`TourMode::Cyclic`] and the tour has at least two stops. Every
    /// consumer of a tour's edges goes through this, so cyclic and open
    /// callers stay consistent.
    pub fn legs(&self, mode: TourMode) -> Vec<(&Stop, &Stop)> {
        let mut legs: Vec<(&Stop, &Stop)> = self.stops.windows(2).map(|w| (&w[0], &w[1])).collect();
        if mode == TourMode::Cyclic && self.stops.len() > 1 {
            let last = &self.stops[self.stops.len() - 1];
            legs.push((last, &self.stops[0]));
        }
        legs
    }

    /// Total distance of this tour under the given table and mode.
    ///
    /// # Errors
    ///
    /// [`RouteError::MissingDistance`] if the table lacks any required
    /// ordered pair.
    pub fn total_distance(
        &self,
        distances: &DistanceTable,
        mode: TourMode,
    ) -> Result<f64, RouteError> {
        let mut total = 0.0;
        for (from, to) in self.legs(mode) {
            total += distances.get(from.location(), to.location())?;
        }
        Ok(total)
    }
}
