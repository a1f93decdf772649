//! Resolve place names into coordinates.
//!
//! Geocoding is an external collaborator: the scoring core only ever sees
//! resolved [`Coordinate`] values. The boundary layer calls a [`Geocoder`]
//! first and hands the result to the engine. [`Gazetteer`] is a small
//! in-memory implementation backed by a fixed name → coordinate table.

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

use crate::{Coordinate, InvalidCoordinate};

/// Errors from [`Geocoder::geocode`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodeError {
    /// The query did not match any known place.
    #[error("no location found for '{query}'")]
    NotFound {
        /// Query as supplied by the caller.
        query: String,
    },
    /// The lookup did not complete within the allotted time.
    #[error("geocoding '{query}' timed out after {timeout:?}")]
    Timeout {
        /// Query as supplied by the caller.
        query: String,
        /// Time budget that was exceeded.
        timeout: Duration,
    },
    /// The backend answered with an out-of-range coordinate.
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),
}

/// Resolve a free-form place name to a [`Coordinate`].
///
/// Implementations must be thread-safe so one geocoder can serve
/// concurrent requests, and must give up with [`GeocodeError::Timeout`]
/// rather than block past `timeout`.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use safepath_core::{Coordinate, GeocodeError, Geocoder};
///
/// struct Origin;
///
/// impl Geocoder for Origin {
///     fn geocode(&self, query: &str, _timeout: Duration) -> Result<Coordinate, GeocodeError> {
///         if query == "null island" {
///             Ok(Coordinate::new(0.0, 0.0)?)
///         } else {
///             Err(GeocodeError::NotFound { query: query.to_owned() })
///         }
///     }
/// }
///
/// let found = Origin.geocode("null island", Duration::from_secs(1));
/// assert_eq!(found.map(|c| c.latitude()), Ok(0.0));
/// ```
pub trait Geocoder: Send + Sync {
    /// Resolve `query`, giving up after `timeout`.
    fn geocode(&self, query: &str, timeout: Duration) -> Result<Coordinate, GeocodeError>;
}

/// In-memory [`Geocoder`] over a fixed table of named places.
///
/// Lookups ignore case and surrounding whitespace. Resolution is a map
/// lookup, so the timeout is never reached.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "GazetteerFile"))]
pub struct Gazetteer {
    places: HashMap<String, Coordinate>,
}

impl Gazetteer {
    /// Create an empty gazetteer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` at `coordinate`, replacing any previous entry.
    pub fn insert(&mut self, name: &str, coordinate: Coordinate) {
        self.places.insert(normalise(name), coordinate);
    }

    /// Add a place while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_place(mut self, name: &str, coordinate: Coordinate) -> Self {
        self.insert(name, coordinate);
        self
    }

    /// Number of known places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Report whether no places are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl Geocoder for Gazetteer {
    fn geocode(&self, query: &str, _timeout: Duration) -> Result<Coordinate, GeocodeError> {
        self.places
            .get(&normalise(query))
            .copied()
            .ok_or_else(|| GeocodeError::NotFound {
                query: query.to_owned(),
            })
    }
}

fn normalise(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GazetteerFile {
    places: HashMap<String, Coordinate>,
}

#[cfg(feature = "serde")]
impl From<GazetteerFile> for Gazetteer {
    fn from(file: GazetteerFile) -> Self {
        file.places
            .into_iter()
            .fold(Self::new(), |gazetteer, (name, coordinate)| {
                gazetteer.with_place(&name, coordinate)
            })
    }
}

/// Load a gazetteer from a JSON file of the form
/// `{"places": {"name": {"latitude": .., "longitude": ..}}}`.
///
/// # Errors
/// Returns [`DatasetError::Open`](crate::DatasetError::Open) when the file
/// cannot be opened and [`DatasetError::Parse`](crate::DatasetError::Parse)
/// for malformed JSON or out-of-range coordinates.
#[cfg(feature = "store-json")]
pub fn load_gazetteer(path: &camino::Utf8Path) -> Result<Gazetteer, crate::DatasetError> {
    let file = crate::store::open_dataset(path)?;
    let gazetteer: Gazetteer = crate::store::read_json(std::io::BufReader::new(file))?;
    log::info!("loaded {} places from {path}", gazetteer.len());
    Ok(gazetteer)
}
