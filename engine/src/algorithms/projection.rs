//! Forward projection of future cycle-start dates.

use chrono::{Duration, NaiveDate};

use crate::algorithms::statistics::{average_cycle_length, DEFAULT_DELTA_WINDOW};
use crate::core::species::CycleDefaults;
use crate::error::{EngineError, Result};

/// Projects `count` future cycle-start dates by uniform stepping.
///
/// The effective step length is the historical average when enough samples
/// exist, otherwise the species default cycle length. The seed is the last
/// known cycle start when provided, otherwise `today` plus the species start
/// buffer. "Today" is an explicit parameter so the function stays pure and
/// testable; there is no hidden clock.
///
/// The output is strictly increasing with constant spacing. No seasonal or
/// irregular-cycle modeling is attempted.
///
/// # Arguments
///
/// * `defaults` - Effective species constants
/// * `last_known_start` - Most recent observed cycle start, if any
/// * `all_known_starts` - Full ascending history used for the average
/// * `today` - Current date, injected by the caller
/// * `count` - Number of future dates to produce; negative counts are a
///   contract violation and fail loudly
///
/// # Examples
///
/// ```
/// use breedcal_engine::algorithms::projection::project_upcoming_cycles;
/// use breedcal_engine::core::species::Species;
/// use chrono::NaiveDate;
///
/// let d = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let defaults = Species::Horse.defaults();
///
/// // No history: seed is today + buffer, step is the species default
/// let dates = project_upcoming_cycles(&defaults, None, &[], d("2025-06-01"), 2).unwrap();
/// assert_eq!(dates, vec![d("2025-06-29"), d("2025-07-20")]);
/// ```
pub fn project_upcoming_cycles(
    defaults: &CycleDefaults,
    last_known_start: Option<NaiveDate>,
    all_known_starts: &[NaiveDate],
    today: NaiveDate,
    count: i64,
) -> Result<Vec<NaiveDate>> {
    if count < 0 {
        return Err(EngineError::InvalidArgument(format!(
            "projection count must be non-negative, got {}",
            count
        )));
    }

    let step = average_cycle_length(all_known_starts, DEFAULT_DELTA_WINDOW)
        .unwrap_or(defaults.cycle_length_days);

    let seed = last_known_start.unwrap_or(today + Duration::days(defaults.start_buffer_days));

    let mut dates = Vec::with_capacity(count as usize);
    let mut current = seed;
    for _ in 0..count {
        current += Duration::days(step);
        dates.push(current);
    }

    Ok(dates)
}
