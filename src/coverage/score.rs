//! Population-weighted travel-time scoring for candidate sites.

use crate::error::RouteError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Assumed walking speed used to convert path lengths to travel times.
pub const WALKING_SPEED_KMH: f64 = 4.5;

/// A candidate site with its catchment samples.
///
/// Each sample is one network point in the catchment: the shortest-path
/// length from the sample to the site in metres, and the population the
/// sample represents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteCandidate {
    /// Site name or address, for reporting.
    pub label: String,
    /// Shortest-path length in metres from each catchment sample.
    pub lengths_m: Vec<f64>,
    /// Population represented by each catchment sample.
    pub populations: Vec<f64>,
}

/// The score of one candidate site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteScore {
    /// Site name or address.
    pub label: String,
    /// Population-weighted mean travel time in minutes.
    pub average_minutes: f64,
    /// Total catchment population covered by the samples.
    pub population: f64,
}

/// Population-weighted mean travel time, in minutes, at the assumed
/// walking speed of [`WALKING_SPEED_KMH`].
///
/// Each length in metres becomes minutes at the assumed speed, is
/// multiplied by that sample's fractional share of the catchment
/// population, and the products are summed. Weights are fractions
/// (see [`weights_from_populations`]), so no further normalization is
/// applied.
///
/// # Errors
///
/// [`RouteError::InvalidInput`] for empty input, mismatched slice
/// lengths, a negative or non-finite length or weight, or weights
/// summing to zero.
///
/// # Examples
///
/// ```
/// use u_tours::coverage::score_site;
///
/// // 1 km and 2 km at 4.5 km/h, each carrying half the population:
/// // (13.33 * 0.5) + (26.67 * 0.5) = 20 minutes.
/// let minutes = score_site(&[1000.0, 2000.0], &[0.5, 0.5]).unwrap();
/// assert!((minutes - 20.0).abs() < 1e-9);
/// ```
pub fn score_site(lengths_m: &[f64], weights: &[f64]) -> Result<f64, RouteError> {
    score_site_with_speed(lengths_m, weights, WALKING_SPEED_KMH)
}

/// [`score_site`] at a caller-chosen speed in km/h.
///
/// # Errors
///
/// As [`score_site`], plus [`RouteError::InvalidInput`] for a
/// non-positive or non-finite speed.
pub fn score_site_with_speed(
    lengths_m: &[f64],
    weights: &[f64],
    speed_kmh: f64,
) -> Result<f64, RouteError> {
    if lengths_m.is_empty() {
        return Err(RouteError::InvalidInput("no catchment samples".into()));
    }
    if lengths_m.len() != weights.len() {
        return Err(RouteError::InvalidInput(format!(
            "{} lengths but {} weights",
            lengths_m.len(),
            weights.len()
        )));
    }
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return Err(RouteError::InvalidInput(format!(
            "speed must be positive, got {speed_kmh}"
        )));
    }
    for &l in lengths_m {
        if !l.is_finite() || l < 0.0 {
            return Err(RouteError::InvalidInput(format!(
                "path length must be non-negative, got {l}"
            )));
        }
    }
    let mut weight_total = 0.0;
    for &w in weights {
        if !w.is_finite() || w < 0.0 {
            return Err(RouteError::InvalidInput(format!(
                "population weight must be non-negative, got {w}"
            )));
        }
        weight_total += w;
    }
    if weight_total == 0.0 {
        return Err(RouteError::InvalidInput(
            "population weights sum to zero".into(),
        ));
    }

    let mut average = 0.0;
    for (&length_m, &weight) in lengths_m.iter().zip(weights) {
        let minutes = (length_m / 1000.0) / speed_kmh * 60.0;
        average += minutes * weight;
    }
    Ok(average)
}

/// Converts raw per-sample populations to fractional shares of the
/// catchment total.
///
/// The output sums to 1 (up to float error) and feeds [`score_site`].
///
/// # Errors
///
/// [`RouteError::InvalidInput`] for empty input, a negative or
/// non-finite population, or a zero total.
///
/// # Examples
///
/// ```
/// use u_tours::coverage::weights_from_populations;
///
/// let weights = weights_from_populations(&[300.0, 100.0]).unwrap();
/// assert!((weights[0] - 0.75).abs() < 1e-10);
/// assert!((weights[1] - 0.25).abs() < 1e-10);
/// ```
pub fn weights_from_populations(populations: &[f64]) -> Result<Vec<f64>, RouteError> {
    if populations.is_empty() {
        return Err(RouteError::InvalidInput("no population samples".into()));
    }
    let mut total = 0.0;
    for &p in populations {
        if !p.is_finite() || p < 0.0 {
            return Err(RouteError::InvalidInput(format!(
                "population must be non-negative, got {p}"
            )));
        }
        total += p;
    }
    if total == 0.0 {
        return Err(RouteError::InvalidInput(
            "total catchment population is zero".into(),
        ));
    }
    Ok(populations.iter().map(|&p| p / total).collect())
}

/// Scores every candidate site and orders them best first.
///
/// Best means the lowest population-weighted mean travel time; ties keep
/// input order (stable sort), so the ranking is deterministic. Each
/// score also reports the candidate's covered population.
///
/// # Errors
///
/// [`RouteError::InvalidInput`] for an empty candidate list; any
/// candidate's scoring error propagates.
///
/// # Examples
///
/// ```
/// use u_tours::coverage::{rank_sites, SiteCandidate};
///
/// let ranked = rank_sites(&[
///     SiteCandidate {
///         label: "Papworth Road".into(),
///         lengths_m: vec![2000.0, 2000.0],
///         populations: vec![500.0, 500.0],
///     },
///     SiteCandidate {
///         label: "Trumpington Road".into(),
///         lengths_m: vec![500.0, 1500.0],
///         populations: vec![500.0, 500.0],
///     },
/// ]).unwrap();
/// assert_eq!(ranked[0].label, "Trumpington Road");
/// ```
pub fn rank_sites(candidates: &[SiteCandidate]) -> Result<Vec<SiteScore>, RouteError> {
    if candidates.is_empty() {
        return Err(RouteError::InvalidInput("no candidate sites".into()));
    }

    let mut scores = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let weights = weights_from_populations(&candidate.populations)?;
        let average_minutes = score_site(&candidate.lengths_m, &weights)?;
        debug!(
            "site {}: average walk {:.2} min over {} samples",
            candidate.label,
            average_minutes,
            candidate.lengths_m.len()
        );
        scores.push(SiteScore {
            label: candidate.label.clone(),
            average_minutes,
            population: candidate.populations.iter().sum(),
        });
    }
    scores.sort_by(|a, b| a.average_minutes.total_cmp(&b.average_minutes));
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_site_spec_scenario() {
        // 1 km -> 13.33 min, 2 km -> 26.67 min at 4.5 km/h; half weight
        // each gives 20 minutes.
        let minutes = score_site(&[1000.0, 2000.0], &[0.5, 0.5]).expect("valid");
        assert!((minutes - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_site_sums_every_sample() {
        // Regression for the variant that returned after the first
        // sample: the second sample must contribute.
        let one = score_site(&[1000.0], &[1.0]).expect("valid");
        let two = score_site(&[1000.0, 1000.0], &[0.5, 0.5]).expect("valid");
        assert!((one - two).abs() < 1e-9);
        let skewed = score_site(&[1000.0, 3000.0], &[0.5, 0.5]).expect("valid");
        assert!(skewed > one);
    }

    #[test]
    fn test_score_site_with_speed() {
        // 3 km at 3 km/h is an hour.
        let minutes = score_site_with_speed(&[3000.0], &[1.0], 3.0).expect("valid");
        assert!((minutes - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_site_empty() {
        let err = score_site(&[], &[]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)));
    }

    #[test]
    fn test_score_site_mismatched_slices() {
        let err = score_site(&[1000.0, 2000.0], &[1.0]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)));
    }

    #[test]
    fn test_score_site_zero_weights() {
        let err = score_site(&[1000.0], &[0.0]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)));
    }

    #[test]
    fn test_score_site_rejects_bad_values() {
        assert!(score_site(&[-1.0], &[1.0]).is_err());
        assert!(score_site(&[f64::NAN], &[1.0]).is_err());
        assert!(score_site(&[1000.0], &[-0.5]).is_err());
        assert!(score_site_with_speed(&[1000.0], &[1.0], 0.0).is_err());
        assert!(score_site_with_speed(&[1000.0], &[1.0], -4.5).is_err());
    }

    #[test]
    fn test_weights_from_populations() {
        let weights = weights_from_populations(&[100.0, 300.0, 600.0]).expect("valid");
        assert!((weights[0] - 0.1).abs() < 1e-10);
        assert!((weights[1] - 0.3).abs() < 1e-10);
        assert!((weights[2] - 0.6).abs() < 1e-10);
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_weights_zero_total() {
        let err = weights_from_populations(&[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)));
    }

    #[test]
    fn test_weights_empty() {
        assert!(weights_from_populations(&[]).is_err());
    }

    #[test]
    fn test_rank_sites_orders_by_average() {
        let ranked = rank_sites(&[
            SiteCandidate {
                label: "far".into(),
                lengths_m: vec![3000.0],
                populations: vec![100.0],
            },
            SiteCandidate {
                label: "close".into(),
                lengths_m: vec![500.0],
                populations: vec![100.0],
            },
        ])
        .expect("valid");
        assert_eq!(ranked[0].label, "close");
        assert_eq!(ranked[1].label, "far");
        assert_eq!(ranked[0].population, 100.0);
    }

    #[test]
    fn test_rank_sites_tie_keeps_input_order() {
        let ranked = rank_sites(&[
            SiteCandidate {
                label: "first".into(),
                lengths_m: vec![1000.0],
                populations: vec![50.0],
            },
            SiteCandidate {
                label: "second".into(),
                lengths_m: vec![1000.0],
                populations: vec![500.0],
            },
        ])
        .expect("valid");
        assert_eq!(ranked[0].label, "first");
        assert_eq!(ranked[1].label, "second");
    }

    #[test]
    fn test_rank_sites_empty() {
        let err = rank_sites(&[]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)));
    }

    #[test]
    fn test_rank_sites_propagates_bad_candidate() {
        let err = rank_sites(&[SiteCandidate {
            label: "broken".into(),
            lengths_m: vec![1000.0],
            populations: vec![0.0],
        }])
        .unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)));
    }
}
