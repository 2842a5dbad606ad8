//! Core graph structure: cities + routes with an adjacency index.

use std::collections::{BTreeSet, HashMap};

use serde_json::Value;

use crate::types::{City, MetroError, MetroResult, Route};

/// The in-memory route graph: every city by code and every route between them.
///
/// Invariants held after every successful mutation:
/// - each map key equals its city's `code`;
/// - both endpoints of every route are stored cities, and never the same city;
/// - no two stored routes are the same `(a, b, distance)` tuple.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// All cities, keyed by code.
    cities: HashMap<String, City>,
    /// All routes, sorted by `(a, b, distance)` and deduplicated.
    routes: Vec<Route>,
    /// Adjacency index: code -> positions in `routes` touching that code.
    adjacency: HashMap<String, Vec<usize>>,
    /// Opaque provenance records, carried through load and save untouched.
    sources: Vec<Value>,
}

impl RouteGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from pre-existing records (used by the dataset reader).
    pub fn from_parts(cities: Vec<City>, routes: Vec<Route>, sources: Vec<Value>) -> MetroResult<Self> {
        let mut graph = Self {
            sources,
            ..Self::default()
        };

        for city in cities {
            city.validate()?;
            if graph.cities.contains_key(&city.code) {
                return Err(MetroError::CityExists(city.code));
            }
            graph.cities.insert(city.code.clone(), city);
        }

        for route in &routes {
            graph.check_endpoints(&route.a, &route.b)?;
        }
        graph.routes = routes;
        graph.rebuild_adjacency();

        Ok(graph)
    }

    /// Number of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Get a city by code.
    pub fn get_city(&self, code: &str) -> Option<&City> {
        self.cities.get(code)
    }

    /// Whether a city is stored under `code`.
    pub fn contains_city(&self, code: &str) -> bool {
        self.cities.contains_key(code)
    }

    /// All cities, in no particular order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    /// All routes, sorted by `(a, b, distance)`.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The opaque data source records.
    pub fn sources(&self) -> &[Value] {
        &self.sources
    }

    /// Distinct codes joined to `code` by at least one route.
    ///
    /// Empty when `code` has no routes, including when it is not a stored city.
    pub fn adjacent(&self, code: &str) -> BTreeSet<&str> {
        self.route_indices(code)
            .iter()
            .filter_map(|&i| self.routes[i].other(code))
            .collect()
    }

    /// Number of distinct neighbors of `code`.
    pub fn degree(&self, code: &str) -> usize {
        self.adjacent(code).len()
    }

    /// All routes with `code` as either endpoint.
    pub fn routes_with(&self, code: &str) -> Vec<&Route> {
        self.route_indices(code)
            .iter()
            .map(|&i| &self.routes[i])
            .collect()
    }

    /// The route joining `x` and `y`, in either orientation.
    ///
    /// Among parallel routes the shortest wins; equal distances fall back to the
    /// stored `(a, b)` order. A self-loop is never a route.
    pub fn find_route(&self, x: &str, y: &str) -> MetroResult<&Route> {
        self.find_route_index(x, y).map(|i| &self.routes[i])
    }

    /// All cities whose name matches exactly, ordered by code.
    pub fn cities_named(&self, name: &str) -> Vec<&City> {
        let mut matches: Vec<&City> = self.cities.values().filter(|c| c.name == name).collect();
        matches.sort_by(|a, b| a.code.cmp(&b.code));
        matches
    }

    /// Insert a city whose code is not yet stored.
    pub fn add_city(&mut self, city: City) -> MetroResult<()> {
        city.validate()?;
        if self.cities.contains_key(&city.code) {
            return Err(MetroError::CityExists(city.code));
        }
        self.cities.insert(city.code.clone(), city);
        Ok(())
    }

    /// Remove a city and every route touching it.
    pub fn remove_city(&mut self, code: &str) -> MetroResult<City> {
        let removed = self
            .cities
            .remove(code)
            .ok_or_else(|| MetroError::CityNotFound(code.to_string()))?;

        self.routes.retain(|r| !r.touches(code));
        self.rebuild_adjacency();

        Ok(removed)
    }

    /// Insert a route between two stored cities.
    ///
    /// Returns `false` when an identical `(a, b, distance)` route is already stored.
    pub fn add_route(&mut self, route: Route) -> MetroResult<bool> {
        self.check_endpoints(&route.a, &route.b)?;

        if self.routes_with(&route.a).contains(&&route) {
            return Ok(false);
        }

        self.routes.push(route);
        self.rebuild_adjacency();

        Ok(true)
    }

    /// Remove and return the route [`find_route`](Self::find_route) would pick.
    pub fn remove_route(&mut self, x: &str, y: &str) -> MetroResult<Route> {
        if x == y {
            return Err(MetroError::SameEndpoints(x.to_string()));
        }
        let index = self.find_route_index(x, y)?;
        let removed = self.routes.remove(index);
        self.rebuild_adjacency();
        Ok(removed)
    }

    /// Replace the record stored under `code` with `city`.
    ///
    /// When `city.code` differs from `code` this is a rename: every route endpoint
    /// equal to the old code is rewritten to the new one, keeping the distance and
    /// the other endpoint, and the old key disappears. Every check runs before the
    /// first change, so a failed call leaves the graph untouched.
    pub fn replace_city(&mut self, code: &str, city: City) -> MetroResult<()> {
        if !self.cities.contains_key(code) {
            return Err(MetroError::CityNotFound(code.to_string()));
        }
        city.validate()?;

        if city.code != code {
            if self.cities.contains_key(&city.code) {
                return Err(MetroError::CityExists(city.code));
            }
            for route in &mut self.routes {
                if route.a == code {
                    route.a = city.code.clone();
                }
                if route.b == code {
                    route.b = city.code.clone();
                }
            }
            self.cities.remove(code);
            self.rebuild_adjacency();
        }

        self.cities.insert(city.code.clone(), city);
        Ok(())
    }

    /// Change a city's code, cascading into its routes.
    pub fn rename_city(&mut self, old_code: &str, new_code: &str) -> MetroResult<()> {
        let mut city = self
            .get_city(old_code)
            .cloned()
            .ok_or_else(|| MetroError::CityNotFound(old_code.to_string()))?;
        city.code = new_code.to_string();
        self.replace_city(old_code, city)
    }

    fn check_endpoints(&self, a: &str, b: &str) -> MetroResult<()> {
        if a == b {
            return Err(MetroError::SameEndpoints(a.to_string()));
        }
        for code in [a, b] {
            if !self.cities.contains_key(code) {
                return Err(MetroError::CityNotFound(code.to_string()));
            }
        }
        Ok(())
    }

    fn route_indices(&self, code: &str) -> &[usize] {
        self.adjacency.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    fn find_route_index(&self, x: &str, y: &str) -> MetroResult<usize> {
        let not_found = || MetroError::RouteNotFound {
            from: x.to_string(),
            to: y.to_string(),
        };
        if x == y {
            return Err(not_found());
        }
        // Indices follow the sorted route order, so the first minimum is also the
        // lowest (a, b) among equal distances.
        self.route_indices(x)
            .iter()
            .copied()
            .filter(|&i| self.routes[i].connects(x, y))
            .min_by_key(|&i| (self.routes[i].distance, i))
            .ok_or_else(not_found)
    }

    /// Rebuild the adjacency index from the current route list.
    fn rebuild_adjacency(&mut self) {
        self.adjacency.clear();

        self.routes.sort();
        self.routes.dedup();

        for (i, route) in self.routes.iter().enumerate() {
            self.adjacency.entry(route.a.clone()).or_default().push(i);
            self.adjacency.entry(route.b.clone()).or_default().push(i);
        }
    }
}
