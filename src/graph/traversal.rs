//! Graph traversal algorithms (Dijkstra).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::types::Leg;

use super::RouteGraph;

/// Settled distances and next-hop links towards a single seed city.
#[derive(Debug)]
pub struct ShortestPaths<'g> {
    seed: &'g str,
    /// Total distance from each reached code to the seed.
    distances: HashMap<&'g str, u64>,
    /// Next hop from each reached code on its way to the seed.
    next: HashMap<&'g str, &'g str>,
}

impl<'g> ShortestPaths<'g> {
    /// Distance from `code` to the seed, or `None` when unreachable.
    pub fn distance(&self, code: &str) -> Option<u64> {
        self.distances.get(code).copied()
    }

    /// Number of cities the search reached, the seed included.
    pub fn reached(&self) -> usize {
        self.distances.len()
    }

    /// Legs from `from` to the seed, or `None` when unreachable.
    ///
    /// `from == seed` yields an empty leg list.
    pub fn legs_from(&self, from: &str) -> Option<Vec<Leg>> {
        self.distances.get(from)?;

        let mut legs = Vec::new();
        let mut current = from;
        while current != self.seed {
            let hop = *self.next.get(current)?;
            legs.push(Leg::new(current, hop));
            current = hop;
        }
        Some(legs)
    }
}

/// Single-source shortest distances from `seed` to every reachable city.
///
/// A min-heap keyed by accumulated distance settles nodes in order; stale heap
/// entries are skipped. Parallel routes are all relaxed, so the shortest wins.
pub fn dijkstra<'g>(graph: &'g RouteGraph, seed: &'g str) -> ShortestPaths<'g> {
    let mut distances: HashMap<&'g str, u64> = HashMap::new();
    let mut next: HashMap<&'g str, &'g str> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<(u64, &'g str)>> = BinaryHeap::new();

    distances.insert(seed, 0);
    heap.push(Reverse((0, seed)));

    while let Some(Reverse((dist, node))) = heap.pop() {
        if distances.get(node).is_some_and(|&best| dist > best) {
            continue;
        }

        for route in graph.routes_with(node) {
            let Some(neighbor) = route.other(node) else {
                continue;
            };
            // A total past u64::MAX is never an improvement.
            let Some(candidate) = dist.checked_add(route.distance) else {
                continue;
            };
            let improved = distances
                .get(neighbor)
                .map_or(true, |&best| candidate < best);
            if improved {
                distances.insert(neighbor, candidate);
                next.insert(neighbor, node);
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    ShortestPaths {
        seed,
        distances,
        next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn prefers_cheaper_two_hop_path() {
        let graph = GraphBuilder::new()
            .add_city("AAA", "A", "X", 1)
            .add_city("BBB", "B", "X", 1)
            .add_city("CCC", "C", "X", 1)
            .link("AAA", "CCC", 100)
            .link("AAA", "BBB", 30)
            .link("BBB", "CCC", 40)
            .build()
            .unwrap();

        let paths = dijkstra(&graph, "CCC");
        assert_eq!(paths.distance("AAA"), Some(70));
        assert_eq!(
            paths.legs_from("AAA").unwrap(),
            vec![Leg::new("AAA", "BBB"), Leg::new("BBB", "CCC")]
        );
        assert_eq!(paths.legs_from("CCC").unwrap(), Vec::<Leg>::new());
    }

    #[test]
    fn unreachable_city_has_no_path() {
        let graph = GraphBuilder::new()
            .add_city("AAA", "A", "X", 1)
            .add_city("BBB", "B", "X", 1)
            .add_city("CCC", "C", "X", 1)
            .link("AAA", "BBB", 30)
            .build()
            .unwrap();

        let paths = dijkstra(&graph, "AAA");
        assert_eq!(paths.reached(), 2);
        assert_eq!(paths.distance("CCC"), None);
        assert!(paths.legs_from("CCC").is_none());
    }

    #[test]
    fn overflowing_total_counts_as_unreachable() {
        let graph = GraphBuilder::new()
            .add_city("AAA", "A", "X", 1)
            .add_city("BBB", "B", "X", 1)
            .add_city("CCC", "C", "X", 1)
            .link("AAA", "BBB", u64::MAX)
            .link("BBB", "CCC", 1)
            .build()
            .unwrap();

        let paths = dijkstra(&graph, "CCC");
        assert_eq!(paths.distance("BBB"), Some(1));
        assert_eq!(paths.distance("AAA"), None);

        let paths = dijkstra(&graph, "BBB");
        assert_eq!(paths.distance("AAA"), Some(u64::MAX));
    }
}
