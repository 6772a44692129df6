//! Fan-in routes: one shortest route per facility to a chosen site.

use super::{NetworkPath, PathOracle};
use crate::error::RouteError;
use crate::models::{Location, Stop};
use log::debug;
use serde::{Deserialize, Serialize};

/// A facility together with its resolved route to the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRoute {
    /// The origin facility.
    pub facility: Stop,
    /// Its real shortest path to the site.
    pub path: NetworkPath,
}

/// Routes from every facility to a single site, with unreachable
/// facilities recorded rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanInReport {
    /// The common destination.
    pub site: Location,
    /// Facilities with a route, in input order.
    pub routes: Vec<FacilityRoute>,
    /// Facilities the network could not route to the site, in input order.
    pub unreached: Vec<Stop>,
}

/// Resolves the shortest route from each facility to the site.
///
/// Facilities with no network route are collected in
/// [`FanInReport::unreached`] instead of being silently skipped; the
/// caller decides whether partial coverage is acceptable.
///
/// # Errors
///
/// - [`RouteError::InvalidInput`] if `facilities` is empty.
/// - [`RouteError::NoRouteFound`] if *no* facility can be routed.
/// - Any non-routing oracle error propagates as-is.
///
/// # Examples
///
/// ```
/// use u_tours::distance::DistanceTable;
/// use u_tours::models::{Location, Stop};
/// use u_tours::selection::{fan_in_routes, StraightLineOracle};
///
/// let site = Location::new(0.0, 0.0).unwrap();
/// let facilities = vec![
///     Stop::new(Location::new(0.0, 3.0).unwrap(), "North clinic"),
///     Stop::new(Location::new(4.0, 0.0).unwrap(), "East clinic"),
/// ];
/// let mut all = facilities.clone();
/// all.push(Stop::new(site, "site"));
/// let table = DistanceTable::from_stops(&all);
/// let oracle = StraightLineOracle::new(&table);
///
/// let report = fan_in_routes(&facilities, site, &oracle).unwrap();
/// assert_eq!(report.routes.len(), 2);
/// assert!(report.unreached.is_empty());
/// ```
pub fn fan_in_routes<O: PathOracle>(
    facilities: &[Stop],
    site: Location,
    oracle: &O,
) -> Result<FanInReport, RouteError> {
    if facilities.is_empty() {
        return Err(RouteError::InvalidInput("facility list is empty".into()));
    }

    let mut routes = Vec::new();
    let mut unreached = Vec::new();
    for facility in facilities {
        match oracle.shortest_path(facility.location(), site) {
            Ok(path) => routes.push(FacilityRoute {
                facility: facility.clone(),
                path,
            }),
            Err(RouteError::NoRouteFound { .. }) => unreached.push(facility.clone()),
            Err(err) => return Err(err),
        }
    }

    if routes.is_empty() {
        return Err(RouteError::NoRouteFound {
            from: facilities[0].location(),
            to: site,
        });
    }
    if !unreached.is_empty() {
        debug!(
            "fan-in: {} of {} facilities unreachable",
            unreached.len(),
            facilities.len()
        );
    }

    Ok(FanInReport {
        site,
        routes,
        unreached,
    })
}
