//! Time-of-day risk multipliers.
//!
//! The clock is split into three buckets that partition the 24 hours with
//! no gaps or overlaps:
//!
//! | Bucket  | Hours           | Default factor |
//! |---------|-----------------|----------------|
//! | night   | 21–23 and 0–5   | 1.5            |
//! | evening | 18–20           | 1.2            |
//! | day     | 6–17            | 0.8            |

use chrono::{Local, NaiveDateTime, Timelike};
use log::warn;
use safepath_core::SafetyError;

/// Hour-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    /// 21:00 to 05:59.
    Night,
    /// 18:00 to 20:59.
    Evening,
    /// 06:00 to 17:59.
    Day,
}

impl TimeBucket {
    /// Bucket containing `hour` (0–23). Hours past 23 fall in the night bucket.
    ///
    /// # Examples
    /// ```
    /// use safepath_scorer::TimeBucket;
    ///
    /// assert_eq!(TimeBucket::from_hour(5), TimeBucket::Night);
    /// assert_eq!(TimeBucket::from_hour(6), TimeBucket::Day);
    /// assert_eq!(TimeBucket::from_hour(18), TimeBucket::Evening);
    /// assert_eq!(TimeBucket::from_hour(21), TimeBucket::Night);
    /// ```
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            6..=17 => Self::Day,
            18..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Return the bucket as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Night => "night",
            Self::Evening => "evening",
            Self::Day => "day",
        }
    }
}

impl std::fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multipliers applied per [`TimeBucket`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRiskTable {
    /// Factor for [`TimeBucket::Night`].
    pub night: f64,
    /// Factor for [`TimeBucket::Evening`].
    pub evening: f64,
    /// Factor for [`TimeBucket::Day`].
    pub day: f64,
}

impl Default for TimeRiskTable {
    fn default() -> Self {
        Self {
            night: 1.5,
            evening: 1.2,
            day: 0.8,
        }
    }
}

impl TimeRiskTable {
    /// Factor configured for `bucket`.
    #[must_use]
    pub const fn factor(&self, bucket: TimeBucket) -> f64 {
        match bucket {
            TimeBucket::Night => self.night,
            TimeBucket::Evening => self.evening,
            TimeBucket::Day => self.day,
        }
    }

    /// Check that every factor is positive and finite.
    ///
    /// # Errors
    /// Returns [`SafetyError::Configuration`] naming the first bad bucket.
    pub fn validate(self) -> Result<Self, SafetyError> {
        for bucket in [TimeBucket::Night, TimeBucket::Evening, TimeBucket::Day] {
            let factor = self.factor(bucket);
            if !(factor.is_finite() && factor > 0.0) {
                warn!("rejecting time-risk factor {factor} for {bucket}");
                return Err(SafetyError::Configuration {
                    bucket: bucket.as_str(),
                    factor,
                });
            }
        }
        Ok(self)
    }
}

/// Maps timestamps to risk multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemporalRiskModel {
    table: TimeRiskTable,
}

impl TemporalRiskModel {
    /// Build a model from a validated table.
    ///
    /// # Errors
    /// Returns [`SafetyError::Configuration`] when any factor is zero,
    /// negative, or not finite.
    pub fn new(table: TimeRiskTable) -> Result<Self, SafetyError> {
        Ok(Self {
            table: table.validate()?,
        })
    }

    /// The configured table.
    #[must_use]
    pub const fn table(&self) -> TimeRiskTable {
        self.table
    }

    /// Factor for a wall-clock hour (0–23).
    #[must_use]
    pub const fn factor_for_hour(&self, hour: u32) -> f64 {
        self.table.factor(TimeBucket::from_hour(hour))
    }

    /// Factor for a local timestamp.
    #[must_use]
    pub fn factor(&self, at: &NaiveDateTime) -> f64 {
        self.factor_for_hour(at.hour())
    }

    /// Factor for the current local time.
    #[must_use]
    pub fn factor_now(&self) -> f64 {
        self.factor(&now())
    }
}

/// Current local wall-clock time.
#[must_use]
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn at_hour(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .and_then(|date| date.and_hms_opt(hour, 30, 0))
            .expect("valid timestamp")
    }

    #[rstest]
    fn buckets_partition_the_clock() {
        let night: Vec<u32> = (0..24)
            .filter(|&h| TimeBucket::from_hour(h) == TimeBucket::Night)
            .collect();
        let evening: Vec<u32> = (0..24)
            .filter(|&h| TimeBucket::from_hour(h) == TimeBucket::Evening)
            .collect();
        let day: Vec<u32> = (0..24)
            .filter(|&h| TimeBucket::from_hour(h) == TimeBucket::Day)
            .collect();
        assert_eq!(night, vec![0, 1, 2, 3, 4, 5, 21, 22, 23]);
        assert_eq!(evening, vec![18, 19, 20]);
        assert_eq!(day, (6..18).collect::<Vec<_>>());
    }

    #[rstest]
    #[case(24)]
    #[case(30)]
    #[case(u32::MAX)]
    fn hours_past_midnight_are_night(#[case] hour: u32) {
        assert_eq!(TimeBucket::from_hour(hour), TimeBucket::Night);
    }

    #[rstest]
    #[case(3, 1.5)]
    #[case(12, 0.8)]
    #[case(19, 1.2)]
    #[case(23, 1.5)]
    fn default_factors(#[case] hour: u32, #[case] expected: f64) {
        let model = TemporalRiskModel::default();
        assert_eq!(model.factor(&at_hour(hour)), expected);
    }

    #[rstest]
    #[case(TimeRiskTable { night: 0.0, ..TimeRiskTable::default() }, "night")]
    #[case(TimeRiskTable { evening: -1.2, ..TimeRiskTable::default() }, "evening")]
    #[case(TimeRiskTable { day: f64::NAN, ..TimeRiskTable::default() }, "day")]
    #[case(TimeRiskTable { day: f64::INFINITY, ..TimeRiskTable::default() }, "day")]
    fn rejects_non_positive_factors(#[case] table: TimeRiskTable, #[case] bucket: &str) {
        let err = TemporalRiskModel::new(table).expect_err("table should be rejected");
        match err {
            SafetyError::Configuration { bucket: found, .. } => assert_eq!(found, bucket),
            other => panic!("expected Configuration, found {other:?}"),
        }
    }

    #[rstest]
    fn factor_now_uses_configured_table() {
        let table = TimeRiskTable {
            night: 2.0,
            evening: 2.0,
            day: 2.0,
        };
        let model = TemporalRiskModel::new(table).expect("valid table");
        assert_eq!(model.factor_now(), 2.0);
    }
}
