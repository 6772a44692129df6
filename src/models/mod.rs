//! Domain model types for tour ordering.
//!
//! Provides the core abstractions: hashable locations, labelled stops,
//! and ordered tours with an explicit cyclic-versus-open mode.

mod stop;
mod tour;

pub use stop::{Location, Stop};
pub use tour::{Tour, TourMode};
