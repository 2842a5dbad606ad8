//! CLI command implementations.

use std::path::Path;

use serde::Serialize;

use crate::engine::{CityEdit, FlightModel, ItineraryEngine, QueryEngine, WriteEngine};
use crate::format::{DatasetReader, DatasetWriter};
use crate::graph::RouteGraph;
use crate::types::{City, CityField, Leg, MetroResult};

/// Statistics the `stat` command can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Longest,
    Shortest,
    Average,
    Biggest,
    Smallest,
    AveragePopulation,
    Hubs,
}

impl Statistic {
    /// Parse a statistic from its command name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "longest" => Some(Self::Longest),
            "shortest" => Some(Self::Shortest),
            "average" | "avgdistance" => Some(Self::Average),
            "biggest" | "largest" => Some(Self::Biggest),
            "smallest" => Some(Self::Smallest),
            "avgpop" | "average_population" => Some(Self::AveragePopulation),
            "hubs" => Some(Self::Hubs),
            _ => None,
        }
    }
}

fn print_json(value: &impl Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn save(graph: &RouteGraph, path: &Path) -> MetroResult<()> {
    DatasetWriter::new().write_to_file(graph, path)
}

/// List every city and airport code.
pub fn cmd_list(path: &Path, json: bool) -> MetroResult<()> {
    let graph = DatasetReader::read_from_file(path)?;
    let cities = QueryEngine::new().list_cities(&graph);

    if json {
        print_json(&cities);
    } else {
        for city in cities {
            println!("{}", city);
        }
    }
    Ok(())
}

/// Show every airport in a city and where it flies.
pub fn cmd_info(path: &Path, name: &str, json: bool) -> MetroResult<()> {
    let graph = DatasetReader::read_from_file(path)?;
    let detail = QueryEngine::new().city_detail(&graph, name);

    if json {
        print_json(&detail);
        return Ok(());
    }
    if detail.matches.is_empty() {
        println!("No city named {}. Use \"list\" to see exact names.", name);
        return Ok(());
    }
    for city in &detail.matches {
        println!("{} ({})", city.name, city.code);
        println!("  Country: {}", city.country);
        println!("  Continent: {}", city.continent);
        println!("  Timezone: {}", city.timezone);
        println!("  Coordinates: {}", describe_coordinates(city));
        println!("  Population: {}", city.population);
        println!("  Region: {}", city.region);
        println!("  Flights to:");
        for neighbor in detail.neighbors.get(&city.code).into_iter().flatten() {
            println!("    {}", neighbor);
        }
    }
    Ok(())
}

fn describe_coordinates(city: &City) -> String {
    use crate::types::{Latitude, Longitude};

    let lat = match city.coordinates.latitude {
        Latitude::North(n) => format!("{}N", n),
        Latitude::South(s) => format!("{}S", s),
    };
    let lon = match city.coordinates.longitude {
        Longitude::East(e) => format!("{}E", e),
        Longitude::West(w) => format!("{}W", w),
    };
    format!("{} {}", lat, lon)
}

/// List cities grouped by continent.
pub fn cmd_continents(path: &Path, json: bool) -> MetroResult<()> {
    let graph = DatasetReader::read_from_file(path)?;
    let continents = QueryEngine::new().continents(&graph);

    if json {
        print_json(&continents);
    } else {
        for (continent, cities) in continents {
            println!("{}:", continent);
            for city in cities {
                println!("  {}", city);
            }
        }
    }
    Ok(())
}

/// Print a Great Circle Mapper URL for every route.
pub fn cmd_map(path: &Path) -> MetroResult<()> {
    let graph = DatasetReader::read_from_file(path)?;
    println!("{}", QueryEngine::new().map_url(&graph));
    Ok(())
}

/// Headline counts for a dataset.
pub fn cmd_summary(path: &Path, json: bool) -> MetroResult<()> {
    let graph = DatasetReader::read_from_file(path)?;
    let summary = QueryEngine::new().summary(&graph);

    if json {
        print_json(&summary);
    } else {
        println!("File: {}", path.display());
        println!("Cities: {}", summary.cities);
        println!("Routes: {}", summary.routes);
        println!("Continents: {}", summary.continents);
        println!("Data sources: {}", summary.data_sources);
    }
    Ok(())
}

/// Report one aggregate statistic.
pub fn cmd_stat(path: &Path, stat: Statistic, json: bool) -> MetroResult<()> {
    let graph = DatasetReader::read_from_file(path)?;
    let engine = QueryEngine::new();

    match stat {
        Statistic::Longest | Statistic::Shortest => {
            let route = if stat == Statistic::Longest {
                engine.longest_route(&graph)?
            } else {
                engine.shortest_route(&graph)?
            };
            if json {
                print_json(route);
            } else {
                println!("{} to {}: {}", route.a, route.b, route.distance);
            }
        }
        Statistic::Average => {
            let avg = engine.average_distance(&graph)?;
            if json {
                print_json(&serde_json::json!({ "average_distance": avg }));
            } else {
                println!("Average distance: {:.2}", avg);
            }
        }
        Statistic::Biggest | Statistic::Smallest => {
            let city = if stat == Statistic::Biggest {
                engine.largest_city(&graph)?
            } else {
                engine.smallest_city(&graph)?
            };
            if json {
                print_json(city);
            } else {
                println!("{} ({}): {}", city.name, city.code, city.population);
            }
        }
        Statistic::AveragePopulation => {
            let avg = engine.average_population(&graph)?;
            if json {
                print_json(&serde_json::json!({ "average_population": avg }));
            } else {
                println!("Average population: {:.0}", avg);
            }
        }
        Statistic::Hubs => {
            let hubs = engine.hubs(&graph)?;
            if json {
                print_json(&hubs);
            } else {
                println!("Hubs with {} connections:", hubs.degree);
                for city in &hubs.cities {
                    println!("  {}", city);
                }
            }
        }
    }
    Ok(())
}

/// Add a city and save.
pub fn cmd_new_city(path: &Path, city: City, json: bool) -> MetroResult<()> {
    let mut graph = DatasetReader::read_from_file(path)?;
    let code = city.code.clone();
    WriteEngine::new().add_city(&mut graph, city)?;
    save(&graph, path)?;

    if json {
        print_json(&serde_json::json!({ "added": code }));
    } else {
        println!("Added {} to {}", code, path.display());
    }
    Ok(())
}

/// Delete every airport in a city and save.
pub fn cmd_del_city(path: &Path, name: &str, json: bool) -> MetroResult<()> {
    let mut graph = DatasetReader::read_from_file(path)?;
    let codes = WriteEngine::new().delete_city(&mut graph, name)?;
    save(&graph, path)?;

    if json {
        print_json(&serde_json::json!({ "removed": codes }));
    } else {
        println!("Removed {}", codes.join(", "));
    }
    Ok(())
}

/// Add a route and save.
pub fn cmd_new_route(path: &Path, a: &str, b: &str, distance: u64, json: bool) -> MetroResult<()> {
    let mut graph = DatasetReader::read_from_file(path)?;
    let added = WriteEngine::new().add_route(&mut graph, a, b, distance)?;
    if added {
        save(&graph, path)?;
    }

    if json {
        print_json(&serde_json::json!({ "added": added }));
    } else if added {
        println!("Added route {}-{} ({})", a, b, distance);
    } else {
        println!("Route {}-{} ({}) already exists", a, b, distance);
    }
    Ok(())
}

/// Delete a route and save.
pub fn cmd_del_route(path: &Path, a: &str, b: &str, json: bool) -> MetroResult<()> {
    let mut graph = DatasetReader::read_from_file(path)?;
    let route = WriteEngine::new().delete_route(&mut graph, a, b)?;
    save(&graph, path)?;

    if json {
        print_json(&route);
    } else {
        println!("Removed route {}", route);
    }
    Ok(())
}

/// Overwrite one field of a city and save.
pub fn cmd_edit(path: &Path, code: &str, field: CityField, json: bool) -> MetroResult<()> {
    let mut graph = DatasetReader::read_from_file(path)?;
    let field_name = field.name();
    WriteEngine::new().edit_city(&mut graph, code, CityEdit::Field(field))?;
    save(&graph, path)?;

    if json {
        print_json(&serde_json::json!({ "edited": code, "field": field_name }));
    } else {
        println!("Updated {} of {}", field_name, code);
    }
    Ok(())
}

/// Replace a whole city record (given as JSON) and save.
pub fn cmd_replace(path: &Path, code: &str, record: &str, json: bool) -> MetroResult<()> {
    let city: City = serde_json::from_str(record)?;
    let new_code = city.code.clone();

    let mut graph = DatasetReader::read_from_file(path)?;
    WriteEngine::new().edit_city(&mut graph, code, CityEdit::Replace(city))?;
    save(&graph, path)?;

    if json {
        print_json(&serde_json::json!({ "replaced": code, "code": new_code }));
    } else {
        println!("Replaced {} with {}", code, new_code);
    }
    Ok(())
}

/// Distance, time and cost of a manual itinerary.
pub fn cmd_route(path: &Path, codes: &[String], model: FlightModel, json: bool) -> MetroResult<()> {
    let graph = DatasetReader::read_from_file(path)?;
    let legs = Leg::chain(codes)?;
    let engine = ItineraryEngine::with_model(model);
    log::debug!("Flight model: {:?}", engine.model());
    let report = engine.plan(&graph, legs)?;

    if json {
        print_json(&report);
    } else {
        println!("Route: {}", codes.join(" -> "));
        println!("Distance: {}", report.distance);
        println!("Time: {:.2} hours", report.hours);
        println!("Cost: ${:.2}", report.cost);
    }
    Ok(())
}

/// The shortest path between two cities.
pub fn cmd_shortest(
    path: &Path,
    from: &str,
    to: &str,
    model: FlightModel,
    json: bool,
) -> MetroResult<()> {
    let graph = DatasetReader::read_from_file(path)?;
    let engine = ItineraryEngine::with_model(model);
    log::debug!("Flight model: {:?}", engine.model());
    let shortest = engine.shortest_path(&graph, from, to)?;

    if json {
        print_json(&shortest);
    } else {
        println!("Route: {}", shortest);
        println!("Distance: {}", shortest.distance);
        println!("Time: {:.2} hours", shortest.hours);
        println!("Cost: ${:.2}", shortest.cost);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistic_names() {
        assert_eq!(Statistic::from_name("HUBS"), Some(Statistic::Hubs));
        assert_eq!(Statistic::from_name("avgpop"), Some(Statistic::AveragePopulation));
        assert_eq!(Statistic::from_name("median"), None);
    }
}
