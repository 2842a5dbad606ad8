//! Routes between cities and the legs of an itinerary.

use serde::Serialize;

use crate::types::error::{MetroError, MetroResult};

/// An undirected flight route between two distinct cities.
///
/// Endpoint order carries no meaning for traversal but is kept as stored, and
/// identity is the full `(a, b, distance)` tuple: parallel routes with different
/// distances are distinct, identical tuples collapse to one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Route {
    pub a: String,
    pub b: String,
    pub distance: u64,
}

impl Route {
    pub fn new(a: impl Into<String>, b: impl Into<String>, distance: u64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            distance,
        }
    }

    /// Whether `code` is one of the two endpoints.
    pub fn touches(&self, code: &str) -> bool {
        self.a == code || self.b == code
    }

    /// Whether the route joins exactly `x` and `y`, in either order.
    pub fn connects(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// The endpoint across from `code`, if `code` is an endpoint.
    pub fn other(&self, code: &str) -> Option<&str> {
        if self.a == code {
            Some(&self.b)
        } else if self.b == code {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} ({})", self.a, self.b, self.distance)
    }
}

/// One hop of an itinerary, from `origin` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Leg {
    pub origin: String,
    pub destination: String,
}

impl Leg {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Turn a stop sequence `[A, B, C]` into legs `[A->B, B->C]`.
    pub fn chain<S: AsRef<str>>(codes: &[S]) -> MetroResult<Vec<Leg>> {
        if codes.len() < 2 {
            return Err(MetroError::InvalidItinerary(
                "an itinerary needs at least two stops".to_string(),
            ));
        }
        Ok(codes
            .windows(2)
            .map(|pair| Leg::new(pair[0].as_ref(), pair[1].as_ref()))
            .collect())
    }
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connects_ignores_orientation() {
        let route = Route::new("LON", "MAD", 1786);
        assert!(route.connects("MAD", "LON"));
        assert!(route.connects("LON", "MAD"));
        assert!(!route.connects("LON", "JFK"));
        assert_eq!(route.other("MAD"), Some("LON"));
        assert_eq!(route.other("JFK"), None);
    }

    #[test]
    fn chain_builds_consecutive_legs() {
        let legs = Leg::chain(&["JFK", "LON", "MAD"]).unwrap();
        assert_eq!(legs, vec![Leg::new("JFK", "LON"), Leg::new("LON", "MAD")]);
        assert!(Leg::chain(&["JFK"]).is_err());
    }
}
