//! Site coverage scoring.
//!
//! Estimates how well a candidate site serves its catchment: a
//! population-weighted mean travel time over sampled network points,
//! plus ranking across multiple candidates.

mod score;

pub use score::{
    rank_sites, score_site, score_site_with_speed, weights_from_populations, SiteCandidate,
    SiteScore, WALKING_SPEED_KMH,
};
