//! Itinerary pricing, timing and shortest-path planning.

use serde::Serialize;

use crate::graph::{dijkstra, RouteGraph};
use crate::types::{
    Leg, MetroError, MetroResult, BASE_RATE, CLIMB_DISTANCE, CRUISE_SPEED,
    LAYOVER_RELIEF_PER_ROUTE, MAX_LAYOVER_HOURS, RATE_STEP,
};

/// Parameters of the cruise, layover and fare model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightModel {
    /// Distance spent climbing, and again descending, at half cruise speed.
    pub climb_distance: f64,
    /// Cruise speed in distance units per hour.
    pub cruise_speed: f64,
    /// Fare per distance unit on the first leg.
    pub base_rate: f64,
    /// Fare discount applied after each leg.
    pub rate_step: f64,
    /// Layover at a city with a single outbound route.
    pub max_layover_hours: f64,
    /// Layover hours saved per additional outbound route.
    pub layover_relief_per_route: f64,
}

impl Default for FlightModel {
    fn default() -> Self {
        Self {
            climb_distance: CLIMB_DISTANCE,
            cruise_speed: CRUISE_SPEED,
            base_rate: BASE_RATE,
            rate_step: RATE_STEP,
            max_layover_hours: MAX_LAYOVER_HOURS,
            layover_relief_per_route: LAYOVER_RELIEF_PER_ROUTE,
        }
    }
}

impl FlightModel {
    /// Airborne hours for a flight of `distance`.
    ///
    /// Flights shorter than a full climb and descent never reach cruise and fly
    /// the whole way at half speed.
    pub fn flight_hours(&self, distance: f64) -> f64 {
        let ramp = 2.0 * self.climb_distance;
        if distance < ramp {
            2.0 * distance / self.cruise_speed
        } else {
            4.0 * self.climb_distance / self.cruise_speed + (distance - ramp) / self.cruise_speed
        }
    }

    /// Hours spent connecting at a city with `out_degree` distinct neighbors.
    pub fn layover_hours(&self, out_degree: usize) -> f64 {
        let relief = (out_degree as f64 - 1.0) * self.layover_relief_per_route;
        (self.max_layover_hours - relief).max(0.0)
    }

    /// Fare rate for the leg at `index` (0-based) of an itinerary.
    pub fn leg_rate(&self, index: usize) -> f64 {
        (self.base_rate - self.rate_step * index as f64).max(0.0)
    }
}

/// Distance, time and cost of a checked itinerary.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryReport {
    pub legs: Vec<Leg>,
    pub distance: u64,
    pub hours: f64,
    pub cost: f64,
}

/// The shortest path between two cities, with its time and cost.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPath {
    /// Legs in travel order. Empty when source and destination coincide.
    pub legs: Vec<Leg>,
    pub distance: u64,
    pub hours: f64,
    pub cost: f64,
}

impl ShortestPath {
    /// The visited codes, source first.
    pub fn stops(&self) -> Vec<&str> {
        let mut stops: Vec<&str> = self.legs.iter().map(|l| l.origin.as_str()).collect();
        if let Some(last) = self.legs.last() {
            stops.push(&last.destination);
        }
        stops
    }
}

impl std::fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stops().join(" -> "))
    }
}

/// Computes time, cost and shortest paths over a route graph. Holds no graph state.
pub struct ItineraryEngine {
    model: FlightModel,
}

impl ItineraryEngine {
    /// Create an engine with the default flight model.
    pub fn new() -> Self {
        Self::with_model(FlightModel::default())
    }

    /// Create an engine with a custom flight model.
    pub fn with_model(model: FlightModel) -> Self {
        Self { model }
    }

    /// The flight model in use.
    pub fn model(&self) -> &FlightModel {
        &self.model
    }

    /// Hours for one leg, including the connection at its origin if `layover`.
    pub fn leg_time(&self, graph: &RouteGraph, leg: &Leg, layover: bool) -> MetroResult<f64> {
        let route = graph.find_route(&leg.origin, &leg.destination)?;
        let mut hours = self.model.flight_hours(route.distance as f64);
        if layover {
            hours += self.model.layover_hours(graph.degree(&leg.origin));
        }
        Ok(hours)
    }

    /// Total hours; every leg but the first carries a layover.
    pub fn itinerary_time(&self, graph: &RouteGraph, legs: &[Leg]) -> MetroResult<f64> {
        legs.iter()
            .enumerate()
            .map(|(i, leg)| self.leg_time(graph, leg, i > 0))
            .sum()
    }

    /// Total fare, with the per-distance rate falling after each leg.
    pub fn itinerary_cost(&self, graph: &RouteGraph, legs: &[Leg]) -> MetroResult<f64> {
        legs.iter()
            .enumerate()
            .map(|(i, leg)| {
                graph
                    .find_route(&leg.origin, &leg.destination)
                    .map(|route| route.distance as f64 * self.model.leg_rate(i))
            })
            .sum()
    }

    /// Total distance flown.
    pub fn itinerary_distance(&self, graph: &RouteGraph, legs: &[Leg]) -> MetroResult<u64> {
        legs.iter().try_fold(0u64, |total, leg| {
            let route = graph.find_route(&leg.origin, &leg.destination)?;
            total.checked_add(route.distance).ok_or_else(|| {
                MetroError::InvalidItinerary(format!(
                    "total distance overflows at {}",
                    leg
                ))
            })
        })
    }

    /// Fail with the first leg that has no connecting route.
    pub fn check_path(&self, graph: &RouteGraph, legs: &[Leg]) -> MetroResult<()> {
        for leg in legs {
            if graph.find_route(&leg.origin, &leg.destination).is_err() {
                return Err(MetroError::NoRoute {
                    from: leg.origin.clone(),
                    to: leg.destination.clone(),
                });
            }
        }
        Ok(())
    }

    /// Check a manual itinerary, then report its distance, time and cost.
    pub fn plan(&self, graph: &RouteGraph, legs: Vec<Leg>) -> MetroResult<ItineraryReport> {
        self.check_path(graph, &legs)?;
        Ok(ItineraryReport {
            distance: self.itinerary_distance(graph, &legs)?,
            hours: self.itinerary_time(graph, &legs)?,
            cost: self.itinerary_cost(graph, &legs)?,
            legs,
        })
    }

    /// The minimum-distance path from `source` to `destination`.
    ///
    /// The search is seeded at `destination` and follows next-hop links back
    /// from `source`. Unreachable pairs fail with `PathNotFound`.
    pub fn shortest_path(
        &self,
        graph: &RouteGraph,
        source: &str,
        destination: &str,
    ) -> MetroResult<ShortestPath> {
        for code in [source, destination] {
            if !graph.contains_city(code) {
                return Err(MetroError::CityNotFound(code.to_string()));
            }
        }

        let paths = dijkstra(graph, destination);
        let unreachable = || MetroError::PathNotFound {
            from: source.to_string(),
            to: destination.to_string(),
        };
        let distance = paths.distance(source).ok_or_else(unreachable)?;
        let legs = paths.legs_from(source).ok_or_else(unreachable)?;

        Ok(ShortestPath {
            distance,
            hours: self.itinerary_time(graph, &legs)?,
            cost: self.itinerary_cost(graph, &legs)?,
            legs,
        })
    }
}

impl Default for ItineraryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_hours_below_and_above_climb_threshold() {
        let model = FlightModel::default();
        assert!((model.flight_hours(100.0) - 200.0 / 750.0).abs() < 1e-9);
        assert!((model.flight_hours(5000.0) - 7.2).abs() < 1e-9);
        assert!((model.flight_hours(400.0) - 800.0 / 750.0).abs() < 1e-9);
    }

    #[test]
    fn layover_shrinks_with_connectivity() {
        let model = FlightModel::default();
        assert!((model.layover_hours(1) - 2.0).abs() < 1e-9);
        assert!((model.layover_hours(4) - 1.5).abs() < 1e-9);
        assert!(model.layover_hours(13).abs() < 1e-9);
        assert_eq!(model.layover_hours(40), 0.0);
    }

    #[test]
    fn leg_rate_floors_at_zero() {
        let model = FlightModel::default();
        assert!((model.leg_rate(0) - 0.35).abs() < 1e-9);
        assert!((model.leg_rate(2) - 0.25).abs() < 1e-9);
        assert_eq!(model.leg_rate(8), 0.0);
        assert_eq!(model.leg_rate(20), 0.0);
    }
}
