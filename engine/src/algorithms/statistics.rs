//! Cycle length statistics over historical heat-start dates.

use chrono::NaiveDate;

/// Minimum number of historical heat starts required before an average is
/// reported. Below this, insufficient data is a first-class outcome (`None`),
/// not an error.
pub const MIN_CYCLE_SAMPLES: usize = 3;

/// Default number of most-recent inter-cycle deltas averaged.
pub const DEFAULT_DELTA_WINDOW: usize = 3;

/// Computes the average cycle length in whole days over the most recent
/// `window` inter-event deltas.
///
/// The caller is responsible for sorting `heat_starts` ascending and
/// deduplicating. Returns `None` with fewer than [`MIN_CYCLE_SAMPLES`]
/// samples; callers treat that as "use the species default".
///
/// # Arguments
///
/// * `heat_starts` - Ascending historical cycle-start dates
/// * `window` - Number of most recent deltas to average (clamped to >= 1)
///
/// # Examples
///
/// ```
/// use breedcal_engine::algorithms::statistics::{average_cycle_length, DEFAULT_DELTA_WINDOW};
/// use chrono::NaiveDate;
///
/// let d = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let starts = vec![d("2024-01-01"), d("2024-06-29"), d("2024-12-26")];
///
/// assert_eq!(average_cycle_length(&starts, DEFAULT_DELTA_WINDOW), Some(180));
/// assert_eq!(average_cycle_length(&starts[..2], DEFAULT_DELTA_WINDOW), None);
/// ```
pub fn average_cycle_length(heat_starts: &[NaiveDate], window: usize) -> Option<i64> {
    if heat_starts.len() < MIN_CYCLE_SAMPLES {
        return None;
    }

    let deltas: Vec<i64> = heat_starts
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .collect();

    let window = window.max(1).min(deltas.len());
    let recent = &deltas[deltas.len() - window..];
    let sum: i64 = recent.iter().sum();

    // Round to nearest whole day
    Some((sum as f64 / recent.len() as f64).round() as i64)
}
