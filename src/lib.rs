//! # u-tours
//!
//! Multi-stop visit ordering and site accessibility scoring: exact and
//! greedy tour construction over a caller-supplied distance table,
//! network-aware selection between the two candidate orders, and
//! population-weighted travel-time scoring for candidate sites.
//!
//! Street-network graphs, shortest-path search, geocoding, and map
//! rendering stay outside this crate: networks are consumed through the
//! [`selection::PathOracle`] trait and a caller-built
//! [`distance::DistanceTable`].
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Stop, Tour, TourMode)
//! - [`distance`] — Ordered-pair distance table
//! - [`solver`] — Exact permutation and greedy nearest-neighbor solvers
//! - [`selection`] — Path oracle, exact-vs-greedy route selection, fan-in routes
//! - [`coverage`] — Population-weighted site scoring and ranking
//! - [`error`] — Shared error taxonomy

pub mod coverage;
pub mod distance;
pub mod error;
pub mod models;
pub mod selection;
pub mod solver;
