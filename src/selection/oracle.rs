//! Path oracle interface to the external street network.

use crate::distance::DistanceTable;
use crate::error::RouteError;
use crate::models::Location;
use serde::{Deserialize, Serialize};

/// A real shortest path over the transportation network.
///
/// Carries the ordered waypoints for rendering as connected line
/// segments, plus the network length of the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkPath {
    /// Ordered route waypoints, including both endpoints.
    pub waypoints: Vec<Location>,
    /// Length of the path along the network.
    pub length: f64,
}

/// Interface to the street-network service that answers live
/// shortest-path queries.
///
/// Supplied by the surrounding application; queries may be slow or
/// blocking (they can hit a network graph service), and a pair with no
/// path fails with [`RouteError::NoRouteFound`]. Callers wanting
/// timeouts or retries wrap their implementation accordingly.
///
/// # Examples
///
/// ```
/// use u_tours::error::RouteError;
/// use u_tours::models::Location;
/// use u_tours::selection::{NetworkPath, PathOracle};
///
/// struct Flat;
///
/// impl PathOracle for Flat {
///     fn shortest_path(&self, from: Location, to: Location) -> Result<NetworkPath, RouteError> {
///         Ok(NetworkPath {
///             waypoints: vec![from, to],
///             length: from.distance_to(&to),
///         })
///     }
/// }
///
/// let a = Location::new(0.0, 0.0).unwrap();
/// let b = Location::new(3.0, 4.0).unwrap();
/// assert!((Flat.path_length(a, b).unwrap() - 5.0).abs() < 1e-10);
/// ```
pub trait PathOracle {
    /// Returns the real shortest path between two locations.
    ///
    /// # Errors
    ///
    /// [`RouteError::NoRouteFound`] if the network connects no path
    /// between the pair.
    fn shortest_path(&self, from: Location, to: Location) -> Result<NetworkPath, RouteError>;

    /// Returns just the length of the real shortest path.
    fn path_length(&self, from: Location, to: Location) -> Result<f64, RouteError> {
        Ok(self.shortest_path(from, to)?.length)
    }
}

/// A [`PathOracle`] backed by a [`DistanceTable`], producing two-point
/// straight-line paths.
///
/// For callers (and tests) without a live network: pairs absent from the
/// table are treated as unroutable.
///
/// # Examples
///
/// ```
/// use u_tours::distance::DistanceTable;
/// use u_tours::models::{Location, Stop};
/// use u_tours::selection::{PathOracle, StraightLineOracle};
///
/// let stops = vec![
///     Stop::new(Location::new(0.0, 0.0).unwrap(), "A"),
///     Stop::new(Location::new(3.0, 4.0).unwrap(), "B"),
/// ];
/// let table = DistanceTable::from_stops(&stops);
/// let oracle = StraightLineOracle::new(&table);
/// let path = oracle.shortest_path(stops[0].location(), stops[1].location()).unwrap();
/// assert_eq!(path.waypoints.len(), 2);
/// assert!((path.length - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct StraightLineOracle<'a> {
    table: &'a DistanceTable,
}

impl<'a> StraightLineOracle<'a> {
    /// Creates an oracle over the given table.
    pub fn new(table: &'a DistanceTable) -> Self {
        Self { table }
    }
}

impl PathOracle for StraightLineOracle<'_> {
    fn shortest_path(&self, from: Location, to: Location) -> Result<NetworkPath, RouteError> {
        let length = self
            .table
            .get(from, to)
            .map_err(|_| RouteError::NoRouteFound { from, to })?;
        Ok(NetworkPath {
            waypoints: vec![from, to],
            length,
        })
    }
}
