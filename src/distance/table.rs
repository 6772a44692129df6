//! Ordered-pair distance table.

use crate::error::RouteError;
use crate::models::{Location, Stop};
use std::collections::HashMap;

/// A mapping from ordered location pairs to non-negative distances.
///
/// The surrounding application populates the table from its precomputed
/// pairwise distances; symmetric entries must be inserted in both
/// directions, the solvers never assume symmetry. A lookup of an absent
/// pair is a caller precondition violation and fails loudly with
/// [`RouteError::MissingDistance`], never defaulting to zero.
///
/// # Examples
///
/// ```
/// use u_tours::distance::DistanceTable;
/// use u_tours::models::{Location, Stop};
///
/// let stops = vec![
///     Stop::new(Location::new(0.0, 0.0).unwrap(), "A"),
///     Stop::new(Location::new(3.0, 4.0).unwrap(), "B"),
/// ];
/// let table = DistanceTable::from_stops(&stops);
/// let d = table.get(stops[0].location(), stops[1].location()).unwrap();
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    entries: HashMap<(Location, Location), f64>,
}

impl DistanceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Computes a Euclidean table over every ordered pair of the given
    /// stops.
    ///
    /// Intended for tests and straight-line use; real callers populate
    /// the table from network shortest-path lengths instead.
    pub fn from_stops(stops: &[Stop]) -> Self {
        let mut table = Self::new();
        for a in stops {
            for b in stops {
                if a.location() != b.location() {
                    let d = a.location().distance_to(&b.location());
                    table.insert(a.location(), b.location(), d);
                }
            }
        }
        table
    }

    /// Inserts a distance for the ordered pair `from -> to`.
    pub fn insert(&mut self, from: Location, to: Location, distance: f64) {
        self.entries.insert((from, to), distance);
    }

    /// Inserts a distance for both directions of a pair.
    pub fn insert_symmetric(&mut self, a: Location, b: Location, distance: f64) {
        self.insert(a, b, distance);
        self.insert(b, a, distance);
    }

    /// Returns the distance for the ordered pair `from -> to`.
    ///
    /// A self pair with no explicit entry is zero (duplicate input
    /// locations degrade to zero-distance self lookups).
    ///
    /// # Errors
    ///
    /// [`RouteError::MissingDistance`] identifying the pair if no entry
    /// exists.
    pub fn get(&self, from: Location, to: Location) -> Result<f64, RouteError> {
        if let Some(&d) = self.entries.get(&(from, to)) {
            return Ok(d);
        }
        if from == to {
            return Ok(0.0);
        }
        Err(RouteError::MissingDistance { from, to })
    }

    /// Returns `true` if the table has an entry for the ordered pair.
    pub fn contains(&self, from: Location, to: Location) -> bool {
        self.entries.contains_key(&(from, to))
    }

    /// Number of ordered-pair entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if every entry's reverse pair exists and agrees
    /// within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.entries.iter().all(|(&(from, to), &d)| {
            matches!(self.entries.get(&(to, from)), Some(&rev) if (d - rev).abs() <= tol)
        })
    }
}
