//! Query executor: listings, lookups and aggregate statistics.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::graph::RouteGraph;
use crate::types::{City, MetroError, MetroResult, Route, GCMAP_URL};

/// A city's display name with its code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct CityLabel {
    pub name: String,
    pub code: String,
}

impl CityLabel {
    fn of(city: &City) -> Self {
        Self {
            name: city.name.clone(),
            code: city.code.clone(),
        }
    }
}

impl std::fmt::Display for CityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Result of a lookup by name.
#[derive(Debug, Serialize)]
pub struct CityDetail {
    /// Every city carrying the name, ordered by code. Empty when the name is unknown.
    pub matches: Vec<City>,
    /// Neighbors of each match, keyed by the match's code.
    pub neighbors: BTreeMap<String, Vec<CityLabel>>,
}

/// The best-connected cities.
#[derive(Debug, Serialize)]
pub struct Hubs {
    /// Every city tied at the maximum degree, ordered by code.
    pub cities: Vec<CityLabel>,
    /// The maximum number of distinct neighbors.
    pub degree: usize,
}

/// Headline counts for a graph.
#[derive(Debug, Serialize)]
pub struct GraphSummary {
    pub cities: usize,
    pub routes: usize,
    pub continents: usize,
    pub data_sources: usize,
}

/// The query engine supports all read-only operations.
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Every city as `(name, code)`, ordered by code.
    pub fn list_cities(&self, graph: &RouteGraph) -> Vec<CityLabel> {
        let mut labels: Vec<CityLabel> = graph.cities().map(CityLabel::of).collect();
        labels.sort_by(|a, b| a.code.cmp(&b.code));
        labels
    }

    /// All cities called `name` and, for each, its neighbors.
    pub fn city_detail(&self, graph: &RouteGraph, name: &str) -> CityDetail {
        let matches: Vec<City> = graph.cities_named(name).into_iter().cloned().collect();

        let neighbors = matches
            .iter()
            .map(|city| {
                let labels = graph
                    .adjacent(&city.code)
                    .into_iter()
                    .filter_map(|code| graph.get_city(code))
                    .map(CityLabel::of)
                    .collect();
                (city.code.clone(), labels)
            })
            .collect();

        CityDetail { matches, neighbors }
    }

    /// Cities grouped by continent, each group ordered by code.
    pub fn continents(&self, graph: &RouteGraph) -> BTreeMap<String, Vec<CityLabel>> {
        let mut groups: BTreeMap<String, Vec<CityLabel>> = BTreeMap::new();
        for label in self.list_cities(graph) {
            let continent = graph
                .get_city(&label.code)
                .map(|c| c.continent.clone())
                .unwrap_or_default();
            groups.entry(continent).or_default().push(label);
        }
        groups
    }

    /// The longest route. Ties go to the lowest `(a, b)`.
    pub fn longest_route<'g>(&self, graph: &'g RouteGraph) -> MetroResult<&'g Route> {
        // Routes are stored sorted by (a, b), so the first maximum wins the tie.
        graph
            .routes()
            .iter()
            .rev()
            .max_by_key(|r| r.distance)
            .ok_or(MetroError::Empty("routes"))
    }

    /// The shortest route. Ties go to the lowest `(a, b)`.
    pub fn shortest_route<'g>(&self, graph: &'g RouteGraph) -> MetroResult<&'g Route> {
        graph
            .routes()
            .iter()
            .min_by_key(|r| r.distance)
            .ok_or(MetroError::Empty("routes"))
    }

    /// Mean route distance.
    pub fn average_distance(&self, graph: &RouteGraph) -> MetroResult<f64> {
        let routes = graph.routes();
        if routes.is_empty() {
            return Err(MetroError::Empty("routes"));
        }
        let total: f64 = routes.iter().map(|r| r.distance as f64).sum();
        Ok(total / routes.len() as f64)
    }

    /// The most populous city. Ties go to the lowest code.
    pub fn largest_city<'g>(&self, graph: &'g RouteGraph) -> MetroResult<&'g City> {
        graph
            .cities()
            .max_by(|a, b| {
                a.population
                    .cmp(&b.population)
                    .then_with(|| b.code.cmp(&a.code))
            })
            .ok_or(MetroError::Empty("cities"))
    }

    /// The least populous city. Ties go to the lowest code.
    pub fn smallest_city<'g>(&self, graph: &'g RouteGraph) -> MetroResult<&'g City> {
        graph
            .cities()
            .min_by(|a, b| {
                a.population
                    .cmp(&b.population)
                    .then_with(|| a.code.cmp(&b.code))
            })
            .ok_or(MetroError::Empty("cities"))
    }

    /// Mean city population.
    pub fn average_population(&self, graph: &RouteGraph) -> MetroResult<f64> {
        if graph.city_count() == 0 {
            return Err(MetroError::Empty("cities"));
        }
        let total: f64 = graph.cities().map(|c| c.population as f64).sum();
        Ok(total / graph.city_count() as f64)
    }

    /// Every city tied for the most distinct neighbors.
    pub fn hubs(&self, graph: &RouteGraph) -> MetroResult<Hubs> {
        let degrees: Vec<(&City, usize)> = graph
            .cities()
            .map(|c| (c, graph.degree(&c.code)))
            .collect();

        let degree = degrees
            .iter()
            .map(|&(_, d)| d)
            .max()
            .ok_or(MetroError::Empty("cities"))?;

        let mut cities: Vec<CityLabel> = degrees
            .into_iter()
            .filter(|&(_, d)| d == degree)
            .map(|(c, _)| CityLabel::of(c))
            .collect();
        cities.sort_by(|a, b| a.code.cmp(&b.code));

        Ok(Hubs { cities, degree })
    }

    /// A Great Circle Mapper URL drawing every route.
    pub fn map_url(&self, graph: &RouteGraph) -> String {
        let pairs: Vec<String> = graph
            .routes()
            .iter()
            .map(|r| format!("{}-{}", r.a, r.b))
            .collect();
        format!("{}{}", GCMAP_URL, pairs.join(",+"))
    }

    /// Headline counts.
    pub fn summary(&self, graph: &RouteGraph) -> GraphSummary {
        let continents: BTreeSet<&str> = graph.cities().map(|c| c.continent.as_str()).collect();
        GraphSummary {
            cities: graph.city_count(),
            routes: graph.route_count(),
            continents: continents.len(),
            data_sources: graph.sources().len(),
        }
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn extreme_route_ties_pick_lowest_endpoints() {
        let graph = GraphBuilder::new()
            .add_city("AAA", "A", "X", 1)
            .add_city("BBB", "B", "X", 1)
            .add_city("CCC", "C", "X", 1)
            .link("BBB", "CCC", 500)
            .link("AAA", "BBB", 500)
            .link("AAA", "CCC", 500)
            .build()
            .unwrap();
        let engine = QueryEngine::new();

        let longest = engine.longest_route(&graph).unwrap();
        let shortest = engine.shortest_route(&graph).unwrap();
        assert_eq!((longest.a.as_str(), longest.b.as_str()), ("AAA", "BBB"));
        assert_eq!((shortest.a.as_str(), shortest.b.as_str()), ("AAA", "BBB"));
    }

    #[test]
    fn extreme_city_ties_pick_lowest_code() {
        let graph = GraphBuilder::new()
            .add_city("ZZZ", "Z", "X", 10)
            .add_city("MMM", "M", "X", 10)
            .build()
            .unwrap();
        let engine = QueryEngine::new();

        assert_eq!(engine.largest_city(&graph).unwrap().code, "MMM");
        assert_eq!(engine.smallest_city(&graph).unwrap().code, "MMM");
    }

    #[test]
    fn aggregates_over_empty_graph_fail() {
        let graph = RouteGraph::new();
        let engine = QueryEngine::new();

        assert!(matches!(engine.average_distance(&graph), Err(MetroError::Empty(_))));
        assert!(matches!(engine.longest_route(&graph), Err(MetroError::Empty(_))));
        assert!(matches!(engine.average_population(&graph), Err(MetroError::Empty(_))));
        assert!(matches!(engine.hubs(&graph), Err(MetroError::Empty(_))));
    }

    #[test]
    fn averages_survive_totals_past_u64() {
        let graph = GraphBuilder::new()
            .add_city("AAA", "A", "X", u64::MAX)
            .add_city("BBB", "B", "X", u64::MAX)
            .add_city("CCC", "C", "X", 1)
            .link("AAA", "BBB", u64::MAX)
            .link("BBB", "CCC", 1)
            .build()
            .unwrap();
        let engine = QueryEngine::new();

        let avg = engine.average_distance(&graph).unwrap();
        assert!((avg - u64::MAX as f64 / 2.0).abs() / avg < 1e-9);
        let avg = engine.average_population(&graph).unwrap();
        assert!((avg - 2.0 * u64::MAX as f64 / 3.0).abs() / avg < 1e-9);
    }

    #[test]
    fn map_url_joins_route_pairs() {
        let graph = GraphBuilder::new()
            .add_city("LON", "London", "Europe", 1)
            .add_city("MAD", "Madrid", "Europe", 1)
            .add_city("PAR", "Paris", "Europe", 1)
            .link("LON", "MAD", 1786)
            .link("MAD", "PAR", 1000)
            .build()
            .unwrap();
        assert_eq!(
            QueryEngine::new().map_url(&graph),
            "http://www.gcmap.com/mapui?P=LON-MAD,+MAD-PAR"
        );
    }
}
