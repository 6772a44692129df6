//! Pairwise distance lookups.
//!
//! Provides the ordered-pair distance table the solvers score against.

mod table;

pub use table::DistanceTable;
