//! Crime risk from proximity to known hazards.
//!
//! Each hazard contributes a risk that decays with great-circle distance:
//! full weight inside the hazard zone, exponential falloff out to the
//! falloff limit, and a small residual beyond it. The risk at a coordinate is
//! the largest single contribution, so one severe nearby hazard dominates and
//! many distant minor ones do not pile up.

use safepath_core::{Coordinate, HazardPoint, HazardStore, IncidentSummary};

/// Radius in kilometres within which a hazard applies its full severity.
pub const HAZARD_ZONE_KM: f64 = 0.5;
/// Distance in kilometres beyond which only the residual risk remains.
pub const FALLOFF_LIMIT_KM: f64 = 2.0;
/// Length scale in kilometres of the exponential falloff.
pub const DECAY_SCALE_KM: f64 = 2.0;
/// Fraction of the severity retained beyond [`FALLOFF_LIMIT_KM`].
pub const RESIDUAL_WEIGHT: f64 = 0.1;
/// Risk reported when the dataset holds no hazards.
pub const EMPTY_DATASET_RISK: f64 = 0.3;
/// Hazards strictly closer than this are reported as nearby incidents.
pub const NEARBY_RADIUS_KM: f64 = 1.0;
/// Maximum number of nearby incidents reported.
pub const MAX_NEARBY_INCIDENTS: usize = 5;

/// Risk contributed by a hazard of `severity_score` at `distance_km`.
///
/// # Examples
/// ```
/// use safepath_scorer::proximity::contribution;
///
/// assert_eq!(contribution(0.9, 0.0), 0.9);
/// assert!((contribution(0.9, 5.0) - 0.09).abs() < 1e-12);
/// assert!((contribution(1.0, 1.0) - (-0.5_f64).exp()).abs() < 1e-12);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "distance decay is floating-point by nature"
)]
#[must_use]
pub fn contribution(severity_score: f64, distance_km: f64) -> f64 {
    if distance_km < HAZARD_ZONE_KM {
        severity_score
    } else if distance_km < FALLOFF_LIMIT_KM {
        severity_score * (-distance_km / DECAY_SCALE_KM).exp()
    } else {
        severity_score * RESIDUAL_WEIGHT
    }
}

/// Computes crime risk for arbitrary coordinates from a [`HazardStore`].
#[derive(Debug, Clone)]
pub struct ProximityRiskModel<S> {
    store: S,
}

impl<S: HazardStore> ProximityRiskModel<S> {
    /// Wrap a hazard store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Crime risk at `coordinate`, in `[0, 1]`.
    ///
    /// Returns [`EMPTY_DATASET_RISK`] when the store is empty.
    #[must_use]
    pub fn risk(&self, coordinate: &Coordinate) -> f64 {
        self.store
            .all_hazards()
            .map(|hazard| contribution(hazard.severity_score(), hazard.distance_km(coordinate)))
            .reduce(f64::max)
            .unwrap_or(EMPTY_DATASET_RISK)
            .clamp(0.0, 1.0)
    }

    /// Hazards strictly closer than [`NEARBY_RADIUS_KM`], closest first,
    /// truncated to [`MAX_NEARBY_INCIDENTS`].
    #[must_use]
    pub fn nearby_incidents(&self, coordinate: &Coordinate) -> Vec<IncidentSummary> {
        self.ranked_by_distance(coordinate, |distance| distance < NEARBY_RADIUS_KM)
            .into_iter()
            .take(MAX_NEARBY_INCIDENTS)
            .map(|(hazard, distance_km)| IncidentSummary {
                category: hazard.category().to_owned(),
                severity: hazard.severity(),
                distance_km,
            })
            .collect()
    }

    /// Every hazard no farther than `radius_km` from `center`, closest first.
    #[must_use]
    pub fn hazards_within(&self, center: &Coordinate, radius_km: f64) -> Vec<HazardPoint> {
        self.ranked_by_distance(center, |distance| distance <= radius_km)
            .into_iter()
            .map(|(hazard, _)| hazard.clone())
            .collect()
    }

    fn ranked_by_distance<F>(&self, coordinate: &Coordinate, keep: F) -> Vec<(&HazardPoint, f64)>
    where
        F: Fn(f64) -> bool,
    {
        let mut ranked: Vec<_> = self
            .store
            .all_hazards()
            .map(|hazard| (hazard, hazard.distance_km(coordinate)))
            .filter(|&(_, distance)| keep(distance))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use safepath_core::MemoryHazardStore;
    use safepath_core::test_support::hazard_at;

    /// Roughly 0.009 degrees of latitude per kilometre.
    const DEG_PER_KM: f64 = 1.0 / 111.195;

    #[fixture]
    fn origin() -> Coordinate {
        Coordinate::new(0.0, 0.0).expect("valid origin")
    }

    #[rstest]
    fn empty_store_reports_default_risk(origin: Coordinate) {
        let model = ProximityRiskModel::new(MemoryHazardStore::default());
        assert_eq!(model.risk(&origin), EMPTY_DATASET_RISK);
    }

    #[rstest]
    #[case(0.0, 0.9)]
    #[case(0.499, 0.9)]
    #[case(0.5, 0.9 * (-0.25_f64).exp())]
    #[case(1.999, 0.9 * (-0.9995_f64).exp())]
    #[case(2.0, 0.09)]
    #[case(50.0, 0.09)]
    fn piecewise_decay(#[case] distance_km: f64, #[case] expected: f64) {
        assert!((contribution(0.9, distance_km) - expected).abs() < 1e-12);
    }

    #[rstest]
    fn takes_maximum_not_sum(origin: Coordinate) {
        let far = 3.0 * DEG_PER_KM;
        let store = MemoryHazardStore::with_hazards([
            hazard_at(far, 0.0, 0.5),
            hazard_at(-far, 0.0, 0.5),
            hazard_at(0.0, far, 0.4),
        ]);
        let model = ProximityRiskModel::new(store);
        assert!((model.risk(&origin) - 0.05).abs() < 1e-12);
    }

    #[rstest]
    fn nearby_incidents_are_sorted_and_capped(origin: Coordinate) {
        let store: MemoryHazardStore = [0.9, 0.1, 0.5, 0.3, 0.7, 0.2, 0.6]
            .iter()
            .map(|&km| hazard_at(km * DEG_PER_KM, 0.0, 0.5))
            .chain(std::iter::once(hazard_at(1.5 * DEG_PER_KM, 0.0, 0.9)))
            .collect();
        let model = ProximityRiskModel::new(store);
        let incidents = model.nearby_incidents(&origin);
        assert_eq!(incidents.len(), MAX_NEARBY_INCIDENTS);
        assert!(
            incidents
                .windows(2)
                .all(|pair| matches!(pair, [a, b] if a.distance_km <= b.distance_km))
        );
        assert!(incidents.iter().all(|i| i.distance_km < NEARBY_RADIUS_KM));
    }

    #[rstest]
    fn hazards_within_includes_boundary(origin: Coordinate) {
        let inside = hazard_at(1.0 * DEG_PER_KM, 0.0, 0.5);
        let outside = hazard_at(3.0 * DEG_PER_KM, 0.0, 0.5);
        let model = ProximityRiskModel::new(MemoryHazardStore::with_hazards([
            outside,
            inside.clone(),
        ]));
        let radius = inside.distance_km(&origin);
        assert_eq!(model.hazards_within(&origin, radius), vec![inside]);
    }
}
