//! Per-female cycle forecast.
//!
//! Composition layer for the plan-creation UI: from a female's event
//! history it computes her effective cycle length, projects her upcoming
//! cycle starts, and derives the stage windows for the first projected
//! cycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::algorithms::projection::project_upcoming_cycles;
use crate::algorithms::stages::derive_windows;
use crate::algorithms::statistics::{average_cycle_length, DEFAULT_DELTA_WINDOW};
use crate::core::domain::{EventKind, ExpectedWindows, ReproEvent};
use crate::core::species::{BiologyTable, Species};
use crate::error::Result;

/// Forecast output for one female.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FemaleForecast {
    /// Observed average cycle length, when enough history exists
    pub average_cycle_length: Option<i64>,
    /// Projected future cycle-start dates, strictly increasing
    pub projected_cycle_starts: Vec<NaiveDate>,
    /// Stage windows for the first projected cycle, when one exists
    pub next_cycle_windows: Option<ExpectedWindows>,
}

/// Computes a cycle forecast from a female's event history.
///
/// Only heat-start events feed the statistics; they are sorted and deduped
/// here so callers can pass history as recorded. `today` is injected
/// explicitly to keep the computation pure.
///
/// # Examples
///
/// ```
/// use breedcal_engine::core::domain::{EventKind, ReproEvent};
/// use breedcal_engine::core::species::{BiologyTable, Species};
/// use breedcal_engine::services::forecast::female_forecast;
/// use chrono::NaiveDate;
///
/// let d = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let forecast = female_forecast(
///     BiologyTable::builtin(),
///     Species::Horse,
///     &[ReproEvent::new(EventKind::HeatStart, d("2025-03-01"))],
///     d("2025-03-10"),
///     3,
/// )
/// .unwrap();
///
/// // One sample is not enough for an average; the species default steps in
/// assert_eq!(forecast.average_cycle_length, None);
/// assert_eq!(forecast.projected_cycle_starts.len(), 3);
/// ```
pub fn female_forecast(
    table: &BiologyTable,
    species: Species,
    events: &[ReproEvent],
    today: NaiveDate,
    count: i64,
) -> Result<FemaleForecast> {
    let defaults = table.defaults_for(species);

    let mut heat_starts: Vec<NaiveDate> = events
        .iter()
        .filter(|e| e.kind == EventKind::HeatStart)
        .map(|e| e.date)
        .collect();
    heat_starts.sort();
    heat_starts.dedup();

    let average = average_cycle_length(&heat_starts, DEFAULT_DELTA_WINDOW);
    let last_known = heat_starts.last().copied();

    let projected = project_upcoming_cycles(&defaults, last_known, &heat_starts, today, count)?;
    let next_cycle_windows = projected.first().map(|d| derive_windows(&defaults, *d));

    Ok(FemaleForecast {
        average_cycle_length: average,
        projected_cycle_starts: projected,
        next_cycle_windows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn heat(date: NaiveDate) -> ReproEvent {
        ReproEvent::new(EventKind::HeatStart, date)
    }

    #[test]
    fn empty_history_falls_back_to_species_default() {
        let forecast = female_forecast(
            BiologyTable::builtin(),
            Species::Horse,
            &[],
            d(2025, 6, 1),
            2,
        )
        .unwrap();

        assert_eq!(forecast.average_cycle_length, None);
        // Seed = today + 7-day buffer, step = 21-day default
        assert_eq!(
            forecast.projected_cycle_starts,
            vec![d(2025, 6, 29), d(2025, 7, 20)]
        );
    }

    #[test]
    fn history_drives_average_and_seed() {
        let events = vec![
            heat(d(2024, 1, 1)),
            // Recorded out of order and duplicated; forecast sorts and dedups
            heat(d(2024, 12, 26)),
            heat(d(2024, 6, 29)),
            heat(d(2024, 6, 29)),
            ReproEvent::new(EventKind::Birth, d(2024, 9, 10)),
        ];

        let forecast = female_forecast(
            BiologyTable::builtin(),
            Species::Dog,
            &events,
            d(2025, 1, 15),
            1,
        )
        .unwrap();

        assert_eq!(forecast.average_cycle_length, Some(180));
        assert_eq!(forecast.projected_cycle_starts, vec![d(2025, 6, 24)]);
    }

    #[test]
    fn windows_derived_for_first_projected_cycle() {
        let forecast = female_forecast(
            BiologyTable::builtin(),
            Species::Dog,
            &[],
            d(2025, 1, 1),
            2,
        )
        .unwrap();

        let windows = forecast.next_cycle_windows.unwrap();
        let first = forecast.projected_cycle_starts[0];
        assert_eq!(windows.breeding.full.start, first + chrono::Duration::days(12));
    }

    #[test]
    fn zero_count_yields_no_windows() {
        let forecast = female_forecast(
            BiologyTable::builtin(),
            Species::Cat,
            &[],
            d(2025, 1, 1),
            0,
        )
        .unwrap();

        assert!(forecast.projected_cycle_starts.is_empty());
        assert!(forecast.next_cycle_windows.is_none());
    }
}
