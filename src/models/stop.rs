//! Location and stop types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A coordinate pair identifying a point to visit.
///
/// Locations are opaque to the solvers: they are only ever used as keys
/// into distance lookups and carried through for reporting. Equality and
/// hashing are bitwise over the coordinates so a `Location` can key a
/// `HashMap`.
///
/// # Examples
///
/// ```
/// use u_tours::models::Location;
///
/// let a = Location::new(52.2053, 0.1218).unwrap();
/// let b = Location::new(52.2053, 0.1218).unwrap();
/// assert_eq!(a, b);
/// assert!(Location::new(f64::NAN, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Location {
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a new location.
    ///
    /// Returns `None` if either coordinate is non-finite.
    pub fn new(x: f64, y: f64) -> Option<Self> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Self { x, y })
    }

    /// X-coordinate (longitude, easting, or abstract axis).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate (latitude, northing, or abstract axis).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A location paired with a human-readable label.
///
/// The label (an address or site name) is carried through for reporting
/// only and never participates in distance computation.
///
/// # Examples
///
/// ```
/// use u_tours::models::{Location, Stop};
///
/// let loc = Location::new(0.0, 3.0).unwrap();
/// let stop = Stop::new(loc, "Mill Road Surgery");
/// assert_eq!(stop.label(), "Mill Road Surgery");
/// assert_eq!(stop.location(), loc);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    location: Location,
    label: String,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(location: Location, label: impl Into<String>) -> Self {
        Self {
            location,
            label: label.into(),
        }
    }

    /// The stop's location.
    pub fn location(&self) -> Location {
        self.location
    }

    /// The stop's label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_location_valid() {
        let loc = Location::new(1.5, -2.5).expect("valid");
        assert_eq!(loc.x(), 1.5);
        assert_eq!(loc.y(), -2.5);
    }

    #[test]
    fn test_location_non_finite() {
        assert!(Location::new(f64::NAN, 0.0).is_none());
        assert!(Location::new(0.0, f64::INFINITY).is_none());
        assert!(Location::new(f64::NEG_INFINITY, 0.0).is_none());
    }

    #[test]
    fn test_location_distance() {
        let a = Location::new(0.0, 0.0).expect("valid");
        let b = Location::new(3.0, 4.0).expect("valid");
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_location_as_map_key() {
        let a = Location::new(1.0, 2.0).expect("valid");
        let b = Location::new(1.0, 2.0).expect("valid");
        let mut map = HashMap::new();
        map.insert(a, 42);
        assert_eq!(map.get(&b), Some(&42));
    }

    #[test]
    fn test_location_display() {
        let loc = Location::new(4.0, 0.0).expect("valid");
        assert_eq!(loc.to_string(), "(4, 0)");
    }

    #[test]
    fn test_stop() {
        let loc = Location::new(0.0, 0.0).expect("valid");
        let stop = Stop::new(loc, "Depot");
        assert_eq!(stop.label(), "Depot");
        assert_eq!(stop.location(), loc);
    }
}
