//! Fluent API for building RouteGraph instances.

use crate::types::{City, CityBuilder, Latitude, Longitude, MetroResult, Route};

use super::RouteGraph;

/// Fluent builder for constructing a RouteGraph.
pub struct GraphBuilder {
    cities: Vec<City>,
    routes: Vec<Route>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            cities: Vec::new(),
            routes: Vec::new(),
        }
    }

    /// Add a fully specified city.
    pub fn add(&mut self, city: City) -> &mut Self {
        self.cities.push(city);
        self
    }

    /// Add a city with the attributes most queries care about.
    pub fn add_city(
        &mut self,
        code: &str,
        name: &str,
        continent: &str,
        population: u64,
    ) -> &mut Self {
        let city = CityBuilder::new(code, name)
            .continent(continent)
            .coordinates(Latitude::North(0), Longitude::East(0))
            .population(population)
            .build();
        self.add(city)
    }

    /// Add a route between two cities.
    pub fn link(&mut self, a: &str, b: &str, distance: u64) -> &mut Self {
        self.routes.push(Route::new(a, b, distance));
        self
    }

    /// Build the final RouteGraph.
    pub fn build(&self) -> MetroResult<RouteGraph> {
        RouteGraph::from_parts(self.cities.clone(), self.routes.clone(), Vec::new())
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
