//! Error types for the metro route graph.

use thiserror::Error;

/// All errors that can occur in the metro route graph.
#[derive(Error, Debug)]
pub enum MetroError {
    /// No city is stored under this code.
    #[error("\"{0}\" is not an airport code in the database")]
    CityNotFound(String),

    /// No city carries this name.
    #[error("No city named {0}")]
    NameNotFound(String),

    /// No route connects the two codes.
    #[error("A route from {from} to {to} was not found in the database")]
    RouteNotFound { from: String, to: String },

    /// The destination cannot be reached from the source.
    #[error("No path connects {from} to {to}")]
    PathNotFound { from: String, to: String },

    /// A city with this code is already stored.
    #[error("{0} is already in the database")]
    CityExists(String),

    /// Both endpoints of a route are the same code.
    #[error("Both endpoints cannot be {0}")]
    SameEndpoints(String),

    /// A city record violates a field constraint.
    #[error("Invalid city: {0}")]
    InvalidCity(String),

    /// A single-field edit names an unknown field or carries a malformed value.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// An itinerary is malformed before any route is consulted.
    #[error("Invalid itinerary: {0}")]
    InvalidItinerary(String),

    /// A leg of a requested itinerary has no connecting route.
    #[error("There is no route from {from} to {to}")]
    NoRoute { from: String, to: String },

    /// An aggregate was requested over an empty collection.
    #[error("No {0} in the database")]
    Empty(&'static str),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed dataset JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Semantic category of a [`MetroError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidArgument,
    NoRoute,
    Empty,
    /// Failure reading or writing a dataset file.
    Storage,
}

impl MetroError {
    /// The semantic category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CityNotFound(_)
            | Self::NameNotFound(_)
            | Self::RouteNotFound { .. }
            | Self::PathNotFound { .. } => ErrorKind::NotFound,
            Self::CityExists(_) => ErrorKind::AlreadyExists,
            Self::SameEndpoints(_)
            | Self::InvalidCity(_)
            | Self::InvalidField(_)
            | Self::InvalidItinerary(_) => ErrorKind::InvalidArgument,
            Self::NoRoute { .. } => ErrorKind::NoRoute,
            Self::Empty(_) => ErrorKind::Empty,
            Self::Io(_) | Self::Json(_) => ErrorKind::Storage,
        }
    }
}

/// Convenience result type for metro graph operations.
pub type MetroResult<T> = Result<T, MetroError>;
