//! Mutation pipeline: the write engine.

use crate::graph::RouteGraph;
use crate::types::{City, CityField, MetroError, MetroResult, Route};

/// How [`WriteEngine::edit_city`] changes a stored city.
#[derive(Debug, Clone)]
pub enum CityEdit {
    /// Swap in a whole new record; a different code renames the city.
    Replace(City),
    /// Overwrite one attribute; a new code renames the city.
    Field(CityField),
}

/// The write engine applies every mutation to a route graph.
///
/// Each operation either completes or returns an error with the graph unchanged.
pub struct WriteEngine;

impl WriteEngine {
    /// Create a new write engine.
    pub fn new() -> Self {
        Self
    }

    /// Add a city whose code is not yet stored.
    pub fn add_city(&self, graph: &mut RouteGraph, city: City) -> MetroResult<()> {
        graph.add_city(city)
    }

    /// Delete every city called `name` along with all of their routes.
    ///
    /// Returns the removed codes, sorted.
    pub fn delete_city(&self, graph: &mut RouteGraph, name: &str) -> MetroResult<Vec<String>> {
        let codes: Vec<String> = graph
            .cities_named(name)
            .into_iter()
            .map(|c| c.code.clone())
            .collect();
        if codes.is_empty() {
            return Err(MetroError::NameNotFound(name.to_string()));
        }

        for code in &codes {
            graph.remove_city(code)?;
        }
        Ok(codes)
    }

    /// Add a route between two stored cities.
    ///
    /// Returns `false` if the identical route was already present.
    pub fn add_route(
        &self,
        graph: &mut RouteGraph,
        a: &str,
        b: &str,
        distance: u64,
    ) -> MetroResult<bool> {
        graph.add_route(Route::new(a, b, distance))
    }

    /// Delete the route connecting `a` and `b` and return it.
    pub fn delete_route(&self, graph: &mut RouteGraph, a: &str, b: &str) -> MetroResult<Route> {
        graph.remove_route(a, b)
    }

    /// Edit the city stored under `code`, renaming it if the code changes.
    pub fn edit_city(&self, graph: &mut RouteGraph, code: &str, edit: CityEdit) -> MetroResult<()> {
        match edit {
            CityEdit::Replace(city) => graph.replace_city(code, city),
            CityEdit::Field(CityField::Code(new_code)) => graph.rename_city(code, &new_code),
            CityEdit::Field(field) => {
                let mut city = graph
                    .get_city(code)
                    .cloned()
                    .ok_or_else(|| MetroError::CityNotFound(code.to_string()))?;
                city.apply(field);
                graph.replace_city(code, city)
            }
        }
    }
}

impl Default for WriteEngine {
    fn default() -> Self {
        Self::new()
    }
}
