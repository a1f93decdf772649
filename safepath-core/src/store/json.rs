//! JSON-backed hazard datasets.
//!
//! The on-disk format is a single object with a `hazards` array:
//!
//! ```json
//! { "hazards": [ { "latitude": 28.6139, "longitude": 77.209,
//!                  "severity": "high", "severity_score": 0.8,
//!                  "category": "theft" } ] }
//! ```

use std::io::{BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::info;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{Coordinate, HazardPoint, HazardPointError, InvalidCoordinate, Severity};

use super::MemoryHazardStore;

/// Errors raised while reading a JSON dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Opening the dataset file failed.
    #[error("failed to open dataset at {path}: {source}")]
    Open {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The payload was not valid JSON for the expected shape.
    #[error("failed to parse dataset: {source}")]
    Parse {
        /// Decoder error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A hazard entry had an out-of-range location.
    #[error("hazard #{index} has an invalid location: {source}")]
    InvalidLocation {
        /// Zero-based position of the entry in the `hazards` array.
        index: usize,
        /// Validation failure.
        #[source]
        source: InvalidCoordinate,
    },
    /// A hazard entry failed validation.
    #[error("hazard #{index} is invalid: {source}")]
    InvalidHazard {
        /// Zero-based position of the entry in the `hazards` array.
        index: usize,
        /// Validation failure.
        #[source]
        source: HazardPointError,
    },
}

#[derive(Debug, Deserialize)]
struct HazardFile {
    hazards: Vec<HazardRecord>,
}

#[derive(Debug, Deserialize)]
struct HazardRecord {
    latitude: f64,
    longitude: f64,
    severity: Severity,
    severity_score: f64,
    category: String,
}

impl HazardRecord {
    fn into_hazard(self, index: usize) -> Result<HazardPoint, DatasetError> {
        let location = Coordinate::new(self.latitude, self.longitude)
            .map_err(|source| DatasetError::InvalidLocation { index, source })?;
        HazardPoint::new(location, self.severity, self.severity_score, self.category)
            .map_err(|source| DatasetError::InvalidHazard { index, source })
    }
}

/// Parse a hazard dataset from any reader.
///
/// # Errors
/// Returns [`DatasetError::Parse`] for malformed JSON and
/// [`DatasetError::InvalidLocation`] / [`DatasetError::InvalidHazard`] for
/// entries that fail validation. One bad entry rejects the whole dataset.
///
/// # Examples
/// ```
/// use safepath_core::{HazardStore, parse_hazards};
///
/// let json = r#"{"hazards":[{"latitude":1.0,"longitude":2.0,
///     "severity":"low","severity_score":0.3,"category":"vandalism"}]}"#;
/// let store = parse_hazards(json.as_bytes()).expect("valid dataset");
/// assert_eq!(store.len(), 1);
/// ```
pub fn parse_hazards<R: Read>(reader: R) -> Result<MemoryHazardStore, DatasetError> {
    let file: HazardFile = read_json(reader)?;
    file.hazards
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_hazard(index))
        .collect()
}

/// Load a hazard dataset from a JSON file.
///
/// # Errors
/// Returns [`DatasetError::Open`] when the file cannot be opened, otherwise
/// the errors documented on [`parse_hazards`].
pub fn load_hazards(path: &Utf8Path) -> Result<MemoryHazardStore, DatasetError> {
    let file = open_dataset(path)?;
    let store = parse_hazards(BufReader::new(file))?;
    info!("loaded {} hazards from {path}", store.hazards.len());
    Ok(store)
}

pub(crate) fn open_dataset(path: &Utf8Path) -> Result<fs_utf8::File, DatasetError> {
    fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn read_json<T, R>(reader: R) -> Result<T, DatasetError>
where
    T: DeserializeOwned,
    R: Read,
{
    serde_json::from_reader(reader).map_err(|source| DatasetError::Parse { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HazardStore;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    const VALID: &str = r#"{"hazards":[
        {"latitude":28.6139,"longitude":77.209,"severity":"high","severity_score":0.8,"category":"theft"},
        {"latitude":28.6129,"longitude":77.229,"severity":"medium","severity_score":0.5,"category":"harassment"}
    ]}"#;

    #[rstest]
    fn parses_valid_dataset() {
        let store = parse_hazards(VALID.as_bytes()).expect("valid dataset");
        let categories: Vec<_> = store.all_hazards().map(HazardPoint::category).collect();
        assert_eq!(categories, vec!["theft", "harassment"]);
    }

    #[rstest]
    #[case(
        r#"{"hazards":[{"latitude":128.0,"longitude":0.0,"severity":"low","severity_score":0.3,"category":"x"}]}"#,
        "invalid location"
    )]
    #[case(
        r#"{"hazards":[{"latitude":1.0,"longitude":0.0,"severity":"low","severity_score":1.3,"category":"x"}]}"#,
        "is invalid"
    )]
    #[case(r#"{"hazards":[{"latitude":1.0}]}"#, "failed to parse")]
    #[case(r#"{"hazards":[{"latitude":1.0,"longitude":0.0,"severity":"extreme","severity_score":0.3,"category":"x"}]}"#, "failed to parse")]
    fn rejects_bad_entries(#[case] json: &str, #[case] expected: &str) {
        let err = parse_hazards(json.as_bytes()).expect_err("dataset should be rejected");
        assert!(
            err.to_string().contains(expected),
            "expected '{expected}' in '{err}'"
        );
    }

    #[rstest]
    fn loads_from_disk() {
        let dir = TempDir::new().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("hazards.json")).expect("utf8 path");
        fs::write(path.as_std_path(), VALID).expect("write dataset");
        let store = load_hazards(&path).expect("load dataset");
        assert_eq!(store.len(), 2);
    }

    #[rstest]
    fn reports_missing_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json")).expect("utf8 path");
        let err = load_hazards(&path).expect_err("missing file should fail");
        assert!(matches!(err, DatasetError::Open { .. }));
    }
}
