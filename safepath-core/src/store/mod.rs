//! Read-only access to the hazard dataset.
//!
//! The [`HazardStore`] trait is the single seam between the scoring maths and
//! wherever hazards come from. [`MemoryHazardStore`] keeps a fixed set of
//! hazards in memory; with the `store-json` feature, [`load_hazards`] builds
//! one from a JSON file.

use std::sync::Arc;

use crate::HazardPoint;

#[cfg(feature = "store-json")]
mod json;
mod sample;

#[cfg(feature = "store-json")]
pub(crate) use json::{open_dataset, read_json};
#[cfg(feature = "store-json")]
pub use json::{DatasetError, load_hazards, parse_hazards};
pub use sample::sample_hazards;

/// Read-only access to a static hazard dataset.
///
/// Implementations must be `Send + Sync`; the dataset is shared by every
/// concurrent scoring request and must not change underneath them. A store
/// that wants to reload data should swap in a whole new snapshot rather than
/// mutating one in place.
///
/// # Examples
///
/// ```rust
/// use safepath_core::{Coordinate, HazardPoint, HazardStore, Severity};
///
/// struct SingleHazard(HazardPoint);
///
/// impl HazardStore for SingleHazard {
///     fn all_hazards(&self) -> Box<dyn Iterator<Item = &HazardPoint> + Send + '_> {
///         Box::new(std::iter::once(&self.0))
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let hazard = HazardPoint::new(Coordinate::new(0.0, 0.0)?, Severity::Low, 0.3, "vandalism")?;
/// let store = SingleHazard(hazard);
/// assert_eq!(store.all_hazards().count(), 1);
/// # Ok(())
/// # }
/// ```
pub trait HazardStore: Send + Sync {
    /// Return every hazard in the dataset.
    fn all_hazards(&self) -> Box<dyn Iterator<Item = &HazardPoint> + Send + '_>;

    /// Number of hazards in the dataset.
    fn len(&self) -> usize {
        self.all_hazards().count()
    }

    /// Report whether the dataset holds no hazards.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: HazardStore + ?Sized> HazardStore for Arc<S> {
    fn all_hazards(&self) -> Box<dyn Iterator<Item = &HazardPoint> + Send + '_> {
        (**self).all_hazards()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<S: HazardStore + ?Sized> HazardStore for &S {
    fn all_hazards(&self) -> Box<dyn Iterator<Item = &HazardPoint> + Send + '_> {
        (**self).all_hazards()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory [`HazardStore`] holding a fixed set of hazards.
///
/// The store performs a linear scan, which is adequate for the small,
/// city-scale datasets it is meant for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryHazardStore {
    hazards: Vec<HazardPoint>,
}

impl MemoryHazardStore {
    /// Create a store containing a single hazard.
    #[must_use]
    pub fn with_hazard(hazard: HazardPoint) -> Self {
        Self::with_hazards(std::iter::once(hazard))
    }

    /// Create a store from a collection of hazards.
    pub fn with_hazards<I>(hazards: I) -> Self
    where
        I: IntoIterator<Item = HazardPoint>,
    {
        Self {
            hazards: hazards.into_iter().collect(),
        }
    }

    /// Create a store seeded with [`sample_hazards`].
    #[must_use]
    pub fn sample() -> Self {
        Self::with_hazards(sample_hazards())
    }
}

impl HazardStore for MemoryHazardStore {
    fn all_hazards(&self) -> Box<dyn Iterator<Item = &HazardPoint> + Send + '_> {
        Box::new(self.hazards.iter())
    }

    fn len(&self) -> usize {
        self.hazards.len()
    }
}

impl FromIterator<HazardPoint> for MemoryHazardStore {
    fn from_iter<I: IntoIterator<Item = HazardPoint>>(iter: I) -> Self {
        Self::with_hazards(iter)
    }
}
