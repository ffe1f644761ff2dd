//! Stage window derivation.
//!
//! Every stage window hangs off a single biological anchor: the ovulation
//! date, itself a fixed offset from the cycle start. Windows come in two
//! confidence tiers ("full" is the conservative outer bound, "likely" the
//! narrower central estimate), and the likely tier is clamped into the full
//! tier so containment holds for any species constants, including
//! configuration overrides.

use chrono::{Duration, NaiveDate};

use crate::core::domain::{DateRange, ExpectedWindows, WindowPair};
use crate::core::species::CycleDefaults;

/// Days from whelping to normal puppy placement (8 weeks).
pub const REARING_DAYS: i64 = 56;

/// Length of the extended placement tail following normal placement.
pub const EXTENDED_PLACEMENT_DAYS: i64 = 21;

/// Likely pre-breeding preparation lead, capped by the species buffer.
const PRE_BREEDING_LIKELY_LEAD: i64 = 7;

/// Hormone testing start offsets from cycle start, per tier.
const TESTING_START_FULL: i64 = 2;
const TESTING_START_LIKELY: i64 = 4;
/// Hormone testing runs until shortly past ovulation confirmation.
const TESTING_END_PAST_OVULATION: i64 = 1;

/// Breeding window extent past ovulation, per tier.
const BREEDING_END_FULL: i64 = 4;
const BREEDING_START_LIKELY: i64 = 1;
const BREEDING_END_LIKELY: i64 = 3;

/// Whelping slack around the due date, per tier.
const WHELPING_SLACK_FULL: i64 = 2;
const WHELPING_SLACK_LIKELY: i64 = 1;

/// Derives the full set of stage windows for one concrete cycle start.
///
/// The anchor chain is `cycle_start -> ovulation -> due date`; all other
/// boundaries are fixed day offsets from those. The caller resolves which
/// cycle start to use (locked, back-computed, or projected); given one, this
/// function always produces a complete window set.
///
/// # Examples
///
/// ```
/// use breedcal_engine::algorithms::stages::derive_windows;
/// use breedcal_engine::core::species::Species;
/// use chrono::NaiveDate;
///
/// let d = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let windows = derive_windows(&Species::Dog.defaults(), d("2025-01-01"));
///
/// // Ovulation 2025-01-13, due 63 days later
/// assert_eq!(windows.whelping.full.start, d("2025-03-15"));
/// assert_eq!(windows.whelping.full.end, d("2025-03-19"));
/// ```
pub fn derive_windows(defaults: &CycleDefaults, cycle_start: NaiveDate) -> ExpectedWindows {
    let day = Duration::days;
    let ovulation = cycle_start + day(defaults.ovulation_offset_days);
    let due = ovulation + day(defaults.gestation_days);

    let pre_breeding = WindowPair::containing(
        DateRange::new(cycle_start - day(defaults.start_buffer_days), cycle_start),
        DateRange::new(
            cycle_start - day(defaults.start_buffer_days.min(PRE_BREEDING_LIKELY_LEAD)),
            cycle_start,
        ),
    );

    // Short ovulation offsets (cats, horses) can invert the raw testing
    // bounds; ordered_range keeps start <= end before clamping.
    let hormone_testing = WindowPair::containing(
        ordered_range(
            cycle_start + day(TESTING_START_FULL),
            ovulation + day(TESTING_END_PAST_OVULATION),
        ),
        ordered_range(cycle_start + day(TESTING_START_LIKELY), ovulation),
    );

    let breeding = WindowPair::containing(
        DateRange::new(ovulation, ovulation + day(BREEDING_END_FULL)),
        DateRange::new(
            ovulation + day(BREEDING_START_LIKELY),
            ovulation + day(BREEDING_END_LIKELY),
        ),
    );

    let whelping = WindowPair::containing(
        DateRange::new(due - day(WHELPING_SLACK_FULL), due + day(WHELPING_SLACK_FULL)),
        DateRange::new(
            due - day(WHELPING_SLACK_LIKELY),
            due + day(WHELPING_SLACK_LIKELY),
        ),
    );

    // Puppy care runs from whelping until the litter is placement-ready.
    let puppy_care = WindowPair::containing(
        DateRange::new(whelping.full.start, whelping.full.end + day(REARING_DAYS)),
        DateRange::new(whelping.likely.start, whelping.likely.end + day(REARING_DAYS)),
    );

    // Placement mirrors the puppy-care window shifted one rearing period out.
    let placement_normal = WindowPair::containing(
        puppy_care.full.shift(REARING_DAYS),
        puppy_care.likely.shift(REARING_DAYS),
    );

    let placement_extended = WindowPair::containing(
        DateRange::new(
            placement_normal.full.end,
            placement_normal.full.end + day(EXTENDED_PLACEMENT_DAYS),
        ),
        DateRange::new(
            placement_normal.likely.end,
            placement_normal.likely.end + day(EXTENDED_PLACEMENT_DAYS),
        ),
    );

    ExpectedWindows {
        pre_breeding,
        hormone_testing,
        breeding,
        whelping,
        puppy_care,
        placement_normal,
        placement_extended,
    }
}

fn ordered_range(a: NaiveDate, b: NaiveDate) -> DateRange {
    DateRange::new(a.min(b), a.max(b))
}
