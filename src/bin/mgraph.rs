//! CLI entry point for the `mgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use metro_graph::cli::{commands, Statistic};
use metro_graph::engine::FlightModel;
use metro_graph::types::{CityBuilder, CityField, Latitude, Longitude};
use metro_graph::ErrorKind;

#[derive(Parser)]
#[command(
    name = "mgraph",
    about = "Query and edit an airline route graph stored as a JSON dataset"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Cruise speed used for flight times
    #[arg(long)]
    cruise_speed: Option<f64>,

    /// Climb (and descent) distance used for flight times
    #[arg(long)]
    climb_distance: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every city and airport code
    List {
        /// Path to the dataset file
        file: PathBuf,
    },
    /// Show all airports in a city and their connections
    Info {
        /// Path to the dataset file
        file: PathBuf,
        /// Exact, case-sensitive city name
        name: String,
    },
    /// List cities grouped by continent
    Continents {
        /// Path to the dataset file
        file: PathBuf,
    },
    /// Print a Great Circle Mapper URL of every route
    Map {
        /// Path to the dataset file
        file: PathBuf,
    },
    /// Headline counts for the dataset
    Summary {
        /// Path to the dataset file
        file: PathBuf,
    },
    /// Report a statistic
    Stat {
        /// Path to the dataset file
        file: PathBuf,
        /// longest, shortest, average, biggest, smallest, avgpop, hubs
        statistic: String,
    },
    /// Add a city
    NewCity {
        /// Path to the dataset file
        file: PathBuf,
        /// Three-character airport code
        code: String,
        /// City name
        name: String,
        #[arg(long, default_value = "")]
        country: String,
        #[arg(long, default_value = "")]
        continent: String,
        /// UTC offset in [-12, 14]
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        timezone: i32,
        /// Latitude, positive north and negative south
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        latitude: i64,
        /// Longitude, positive east and negative west
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        longitude: i64,
        #[arg(long, default_value = "0")]
        population: u64,
        #[arg(long, default_value = "0")]
        region: u32,
    },
    /// Delete every airport in a city and its routes
    DelCity {
        /// Path to the dataset file
        file: PathBuf,
        /// Exact, case-sensitive city name
        name: String,
    },
    /// Add a route between two airports
    NewRoute {
        /// Path to the dataset file
        file: PathBuf,
        a: String,
        b: String,
        distance: u64,
    },
    /// Delete the route between two airports
    DelRoute {
        /// Path to the dataset file
        file: PathBuf,
        a: String,
        b: String,
    },
    /// Overwrite one field of a city; editing "code" renames it everywhere
    Edit {
        /// Path to the dataset file
        file: PathBuf,
        /// Airport code of the city to edit
        code: String,
        /// code, name, country, continent, timezone, coordinates, population, region
        field: String,
        /// New value; coordinates as JSON, e.g. {"N": 41, "W": 74}
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Replace a whole city with a JSON record
    Replace {
        /// Path to the dataset file
        file: PathBuf,
        /// Airport code of the city to replace
        code: String,
        /// The new city record as JSON
        record: String,
    },
    /// Distance, time and cost of flying through the given airports in order
    Route {
        /// Path to the dataset file
        file: PathBuf,
        /// Airport codes, at least two
        #[arg(required = true, num_args = 2..)]
        codes: Vec<String>,
    },
    /// Shortest path between two airports
    Shortest {
        /// Path to the dataset file
        file: PathBuf,
        from: String,
        to: String,
    },
}

fn latitude(value: i64) -> Latitude {
    let magnitude = value.unsigned_abs().min(u32::MAX as u64) as u32;
    if value < 0 {
        Latitude::South(magnitude)
    } else {
        Latitude::North(magnitude)
    }
}

fn longitude(value: i64) -> Longitude {
    let magnitude = value.unsigned_abs().min(u32::MAX as u64) as u32;
    if value < 0 {
        Longitude::West(magnitude)
    } else {
        Longitude::East(magnitude)
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let mut model = FlightModel::default();
    if let Some(speed) = cli.cruise_speed {
        model.cruise_speed = speed;
    }
    if let Some(distance) = cli.climb_distance {
        model.climb_distance = distance;
    }

    let result = match cli.command {
        Commands::List { file } => commands::cmd_list(&file, json),
        Commands::Info { file, name } => commands::cmd_info(&file, &name, json),
        Commands::Continents { file } => commands::cmd_continents(&file, json),
        Commands::Map { file } => commands::cmd_map(&file),
        Commands::Summary { file } => commands::cmd_summary(&file, json),
        Commands::Stat { file, statistic } => {
            let stat = match Statistic::from_name(&statistic) {
                Some(stat) => stat,
                None => {
                    eprintln!("Invalid statistic: {}", statistic);
                    process::exit(3);
                }
            };
            commands::cmd_stat(&file, stat, json)
        }
        Commands::NewCity {
            file,
            code,
            name,
            country,
            continent,
            timezone,
            latitude: lat,
            longitude: lon,
            population,
            region,
        } => {
            let city = CityBuilder::new(code, name)
                .country(country)
                .continent(continent)
                .timezone(timezone)
                .coordinates(latitude(lat), longitude(lon))
                .population(population)
                .region(region)
                .build();
            commands::cmd_new_city(&file, city, json)
        }
        Commands::DelCity { file, name } => commands::cmd_del_city(&file, &name, json),
        Commands::NewRoute { file, a, b, distance } => {
            commands::cmd_new_route(&file, &a, &b, distance, json)
        }
        Commands::DelRoute { file, a, b } => commands::cmd_del_route(&file, &a, &b, json),
        Commands::Edit {
            file,
            code,
            field,
            value,
        } => CityField::parse(&field, &value)
            .and_then(|field| commands::cmd_edit(&file, &code, field, json)),
        Commands::Replace { file, code, record } => {
            commands::cmd_replace(&file, &code, &record, json)
        }
        Commands::Route { file, codes } => commands::cmd_route(&file, &codes, model, json),
        Commands::Shortest { file, from, to } => {
            commands::cmd_shortest(&file, &from, &to, model, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match e.kind() {
            ErrorKind::Storage => 1,
            ErrorKind::InvalidArgument => 3,
            ErrorKind::NotFound => 4,
            ErrorKind::AlreadyExists => 5,
            ErrorKind::NoRoute => 6,
            ErrorKind::Empty => 7,
        };
        process::exit(code);
    }
}
