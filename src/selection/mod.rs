//! Network-aware route selection.
//!
//! - [`PathOracle`] — Interface to the external street-network service
//! - [`select_best_route`] — Exact-vs-greedy comparison over real path lengths
//! - [`plan_route`] — One-call exact + greedy + selection pipeline
//! - [`fan_in_routes`] — One shortest route per facility to a chosen site

mod fan_in;
mod oracle;
mod select;

pub use fan_in::{fan_in_routes, FacilityRoute, FanInReport};
pub use oracle::{NetworkPath, PathOracle, StraightLineOracle};
pub use select::{plan_route, select_best_route, RouteLeg, SelectedRoute};
