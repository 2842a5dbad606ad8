//! City records, their coordinates, and single-field edits.

use serde::{Deserialize, Serialize};

use super::{CODE_LEN, MAX_TIMEZONE, MIN_TIMEZONE};
use crate::types::error::{MetroError, MetroResult};

/// North/south position, in whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Latitude {
    North(u32),
    South(u32),
}

/// East/west position, in whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Longitude {
    East(u32),
    West(u32),
}

/// Position of an airport: exactly one latitude key and one longitude key.
///
/// On the wire this is an object with two of the keys `N`, `S`, `E`, `W`;
/// the other two are absent rather than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CoordinateRecord", into = "CoordinateRecord")]
pub struct Coordinates {
    pub latitude: Latitude,
    pub longitude: Longitude,
}

impl Coordinates {
    pub fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::new(Latitude::North(0), Longitude::East(0))
    }
}

#[derive(Serialize, Deserialize)]
struct CoordinateRecord {
    #[serde(rename = "N", default, skip_serializing_if = "Option::is_none")]
    north: Option<u32>,
    #[serde(rename = "S", default, skip_serializing_if = "Option::is_none")]
    south: Option<u32>,
    #[serde(rename = "E", default, skip_serializing_if = "Option::is_none")]
    east: Option<u32>,
    #[serde(rename = "W", default, skip_serializing_if = "Option::is_none")]
    west: Option<u32>,
}

impl TryFrom<CoordinateRecord> for Coordinates {
    type Error = MetroError;

    fn try_from(record: CoordinateRecord) -> MetroResult<Self> {
        let latitude = match (record.north, record.south) {
            (Some(n), None) => Latitude::North(n),
            (None, Some(s)) => Latitude::South(s),
            _ => {
                return Err(MetroError::InvalidCity(
                    "coordinates need exactly one of N or S".to_string(),
                ))
            }
        };
        let longitude = match (record.east, record.west) {
            (Some(e), None) => Longitude::East(e),
            (None, Some(w)) => Longitude::West(w),
            _ => {
                return Err(MetroError::InvalidCity(
                    "coordinates need exactly one of E or W".to_string(),
                ))
            }
        };
        Ok(Self::new(latitude, longitude))
    }
}

impl From<Coordinates> for CoordinateRecord {
    fn from(coords: Coordinates) -> Self {
        let (north, south) = match coords.latitude {
            Latitude::North(n) => (Some(n), None),
            Latitude::South(s) => (None, Some(s)),
        };
        let (east, west) = match coords.longitude {
            Longitude::East(e) => (Some(e), None),
            Longitude::West(w) => (None, Some(w)),
        };
        Self {
            north,
            south,
            east,
            west,
        }
    }
}

/// One airport. The code is the primary key; names may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub code: String,
    pub name: String,
    pub country: String,
    pub continent: String,
    pub timezone: i32,
    pub coordinates: Coordinates,
    pub population: u64,
    pub region: u32,
}

impl City {
    /// Validate the constraints the types cannot express.
    pub fn validate(&self) -> MetroResult<()> {
        if self.code.chars().count() != CODE_LEN {
            return Err(MetroError::InvalidCity(format!(
                "code \"{}\" must be exactly {} characters",
                self.code, CODE_LEN
            )));
        }
        if !(MIN_TIMEZONE..=MAX_TIMEZONE).contains(&self.timezone) {
            return Err(MetroError::InvalidCity(format!(
                "timezone {} is outside [{}, {}]",
                self.timezone, MIN_TIMEZONE, MAX_TIMEZONE
            )));
        }
        Ok(())
    }

    /// Overwrite a single attribute. Does not validate.
    pub fn apply(&mut self, field: CityField) {
        match field {
            CityField::Code(v) => self.code = v,
            CityField::Name(v) => self.name = v,
            CityField::Country(v) => self.country = v,
            CityField::Continent(v) => self.continent = v,
            CityField::Timezone(v) => self.timezone = v,
            CityField::Coordinates(v) => self.coordinates = v,
            CityField::Population(v) => self.population = v,
            CityField::Region(v) => self.region = v,
        }
    }
}

/// A new value for exactly one city attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityField {
    Code(String),
    Name(String),
    Country(String),
    Continent(String),
    Timezone(i32),
    Coordinates(Coordinates),
    Population(u64),
    Region(u32),
}

impl CityField {
    /// Parse a textual `(field, value)` pair.
    ///
    /// Coordinates are given as a JSON object, e.g. `{"N": 41, "W": 74}`.
    pub fn parse(field: &str, value: &str) -> MetroResult<Self> {
        let malformed = |what: &str| {
            MetroError::InvalidField(format!("{} is not a valid {}", value, what))
        };
        match field.to_lowercase().as_str() {
            "code" => Ok(Self::Code(value.to_string())),
            "name" => Ok(Self::Name(value.to_string())),
            "country" => Ok(Self::Country(value.to_string())),
            "continent" => Ok(Self::Continent(value.to_string())),
            "timezone" => value
                .trim()
                .parse()
                .map(Self::Timezone)
                .map_err(|_| malformed("timezone")),
            "coordinates" => serde_json::from_str(value)
                .map(Self::Coordinates)
                .map_err(|_| malformed("coordinate object")),
            "population" => value
                .trim()
                .parse()
                .map(Self::Population)
                .map_err(|_| malformed("population")),
            "region" => value
                .trim()
                .parse()
                .map(Self::Region)
                .map_err(|_| malformed("region")),
            other => Err(MetroError::InvalidField(format!(
                "unknown field \"{}\"",
                other
            ))),
        }
    }

    /// Return the field's name as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Code(_) => "code",
            Self::Name(_) => "name",
            Self::Country(_) => "country",
            Self::Continent(_) => "continent",
            Self::Timezone(_) => "timezone",
            Self::Coordinates(_) => "coordinates",
            Self::Population(_) => "population",
            Self::Region(_) => "region",
        }
    }
}

/// Builder for constructing City instances ergonomically.
pub struct CityBuilder {
    city: City,
}

impl CityBuilder {
    /// Create a new builder with the required fields.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            city: City {
                code: code.into(),
                name: name.into(),
                country: String::new(),
                continent: String::new(),
                timezone: 0,
                coordinates: Coordinates::default(),
                population: 0,
                region: 0,
            },
        }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.city.country = country.into();
        self
    }

    pub fn continent(mut self, continent: impl Into<String>) -> Self {
        self.city.continent = continent.into();
        self
    }

    pub fn timezone(mut self, timezone: i32) -> Self {
        self.city.timezone = timezone;
        self
    }

    pub fn coordinates(mut self, latitude: Latitude, longitude: Longitude) -> Self {
        self.city.coordinates = Coordinates::new(latitude, longitude);
        self
    }

    pub fn population(mut self, population: u64) -> Self {
        self.city.population = population;
        self
    }

    pub fn region(mut self, region: u32) -> Self {
        self.city.region = region;
        self
    }

    /// Build the City. Validation happens when it enters a graph.
    pub fn build(self) -> City {
        self.city
    }
}
