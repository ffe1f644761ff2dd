//! Travel-availability band derivation.
//!
//! Bands are mechanically derived from stage window boundaries; they are
//! never independently specified and always recomputable. "Risky" marks the
//! spans where travel would jeopardize the breeding itself (testing through
//! breeding, whelping through extended placement); "unlikely" marks the
//! softer caution tails around them.

use chrono::{Duration, NaiveDate};

use crate::core::domain::{BandKind, DateRange, ExpectedWindows, TravelBand};

/// Derives the caution bands for one plan's stage windows.
///
/// # Examples
///
/// ```
/// use breedcal_engine::algorithms::{availability::compute_bands, stages::derive_windows};
/// use breedcal_engine::core::domain::BandKind;
/// use breedcal_engine::core::species::Species;
/// use chrono::NaiveDate;
///
/// let cycle_start = "2025-01-01".parse::<NaiveDate>().unwrap();
/// let windows = derive_windows(&Species::Dog.defaults(), cycle_start);
/// let bands = compute_bands(&windows);
///
/// assert_eq!(bands.len(), 4);
/// assert_eq!(bands.iter().filter(|b| b.kind == BandKind::Risky).count(), 2);
/// ```
pub fn compute_bands(windows: &ExpectedWindows) -> Vec<TravelBand> {
    vec![
        TravelBand {
            kind: BandKind::Risky,
            range: DateRange::new(
                windows.hormone_testing.full.start,
                windows.breeding.full.end,
            ),
            label: "Testing & breeding".to_string(),
        },
        TravelBand {
            kind: BandKind::Risky,
            range: DateRange::new(
                windows.whelping.full.start,
                windows.placement_extended.full.end,
            ),
            label: "Whelping & placement".to_string(),
        },
        TravelBand {
            kind: BandKind::Unlikely,
            range: DateRange::new(
                windows.pre_breeding.full.start,
                windows.hormone_testing.full.start,
            ),
            label: "Heat preparation".to_string(),
        },
        TravelBand {
            kind: BandKind::Unlikely,
            range: DateRange::new(
                windows.puppy_care.full.start,
                windows.placement_normal.full.end,
            ),
            label: "Litter rearing & placement".to_string(),
        },
    ]
}

/// Fallback marker when a female has no active plan windows: a single 1-day
/// soft-caution band at the projected next cycle start.
pub fn fallback_band(next_cycle_start: NaiveDate) -> TravelBand {
    TravelBand {
        kind: BandKind::Unlikely,
        range: DateRange::new(next_cycle_start, next_cycle_start + Duration::days(1)),
        label: "Projected next heat".to_string(),
    }
}
