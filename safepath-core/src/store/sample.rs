//! Built-in sample hazards around central New Delhi.

use log::warn;

use crate::{Coordinate, HazardPoint, Severity};

const SAMPLE: [(f64, f64, Severity, f64, &str); 4] = [
    (28.6139, 77.2090, Severity::High, 0.8, "theft"),
    (28.6129, 77.2290, Severity::Medium, 0.5, "harassment"),
    (28.6339, 77.2190, Severity::High, 0.9, "assault"),
    (28.7041, 77.1025, Severity::Low, 0.3, "vandalism"),
];

/// Return the sample hazard dataset used when no dataset is configured.
///
/// # Examples
/// ```
/// use safepath_core::{Severity, sample_hazards};
///
/// let hazards = sample_hazards();
/// assert_eq!(hazards.len(), 4);
/// assert!(hazards.iter().any(|h| h.severity() == Severity::High));
/// ```
#[must_use]
pub fn sample_hazards() -> Vec<HazardPoint> {
    SAMPLE
        .iter()
        .filter_map(|&(lat, lng, severity, score, category)| {
            let built = Coordinate::new(lat, lng)
                .map_err(|err| err.to_string())
                .and_then(|location| {
                    HazardPoint::new(location, severity, score, category)
                        .map_err(|err| err.to_string())
                });
            match built {
                Ok(hazard) => Some(hazard),
                Err(reason) => {
                    warn!("skipping sample hazard '{category}': {reason}");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_entry_is_valid() {
        assert_eq!(sample_hazards().len(), SAMPLE.len());
    }

    #[test]
    fn assault_hotspot_is_most_severe() {
        let worst = sample_hazards()
            .into_iter()
            .max_by(|a, b| a.severity_score().total_cmp(&b.severity_score()))
            .expect("sample is not empty");
        assert_eq!(worst.category(), "assault");
    }
}
