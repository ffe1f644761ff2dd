//! Display-horizon tightening.

use chrono::{Months, NaiveDate};

use crate::core::domain::{AvailabilityBand, Horizon, StageRow, Tagged};

/// Narrows a base display horizon around the plotted data.
///
/// Computes the earliest start and latest end across all supplied windows
/// and bands, then moves the horizon start forward to at most `lead_months`
/// before the earliest data point (never earlier than the base start) and
/// extends the end to cover the latest data point (never contracting below
/// the base end). With no data at all, the base horizon is returned
/// unchanged. This keeps the calendar from rendering months of dead space
/// without ever hiding data.
///
/// # Examples
///
/// ```
/// use breedcal_engine::core::domain::Horizon;
/// use breedcal_engine::services::horizon::tighten;
/// use chrono::NaiveDate;
///
/// let d = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let base = Horizon::new(d("2024-01-01"), d("2025-01-01"));
///
/// let unchanged = tighten(&base, &[], &[], 1);
/// assert_eq!(unchanged, base);
/// ```
pub fn tighten(
    base: &Horizon,
    windows: &[Tagged<StageRow>],
    bands: &[Tagged<AvailabilityBand>],
    lead_months: u32,
) -> Horizon {
    let mut earliest: Option<NaiveDate> = None;
    let mut latest: Option<NaiveDate> = None;

    let mut scan = |start: NaiveDate, end: NaiveDate| {
        earliest = Some(earliest.map_or(start, |e| e.min(start)));
        latest = Some(latest.map_or(end, |l| l.max(end)));
    };

    for row in windows {
        scan(row.data.range.start, row.data.range.end);
    }
    for band in bands {
        scan(band.data.range.start, band.data.range.end);
    }

    let (earliest, latest) = match (earliest, latest) {
        (Some(e), Some(l)) => (e, l),
        _ => return *base,
    };

    let lead_start = earliest
        .checked_sub_months(Months::new(lead_months))
        .unwrap_or(earliest);

    Horizon {
        start: base.start.max(lead_start),
        end: base.end.max(latest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{BandKind, DateRange, Stage, TravelBand, Tier};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn row(start: NaiveDate, end: NaiveDate) -> Tagged<StageRow> {
        Tagged::new(
            StageRow {
                stage: Stage::Whelping,
                tier: Tier::Full,
                range: DateRange::new(start, end),
            },
            "plan-1",
            "hsl(0, 65%, 45%)",
        )
    }

    fn band(start: NaiveDate, end: NaiveDate) -> Tagged<AvailabilityBand> {
        Tagged::new(
            TravelBand {
                kind: BandKind::Risky,
                range: DateRange::new(start, end),
                label: "test".to_string(),
            },
            "plan-1",
            "hsl(0, 65%, 45%)",
        )
    }

    #[test]
    fn no_data_returns_base_unchanged() {
        let base = Horizon::new(d(2024, 1, 1), d(2025, 1, 1));
        assert_eq!(tighten(&base, &[], &[], 1), base);
    }

    #[test]
    fn start_moves_forward_to_lead_before_data() {
        let base = Horizon::new(d(2024, 1, 1), d(2026, 1, 1));
        let rows = vec![row(d(2025, 6, 1), d(2025, 7, 1))];

        let tightened = tighten(&base, &rows, &[], 1);
        assert_eq!(tightened.start, d(2025, 5, 1));
        assert_eq!(tightened.end, d(2026, 1, 1));
    }

    #[test]
    fn start_never_moves_before_base_start() {
        let base = Horizon::new(d(2025, 6, 1), d(2026, 1, 1));
        let rows = vec![row(d(2025, 6, 10), d(2025, 7, 1))];

        let tightened = tighten(&base, &rows, &[], 3);
        assert_eq!(tightened.start, base.start);
    }

    #[test]
    fn end_extends_but_never_contracts() {
        let base = Horizon::new(d(2025, 1, 1), d(2025, 6, 1));
        let bands = vec![band(d(2025, 3, 1), d(2025, 12, 15))];

        let tightened = tighten(&base, &[], &bands, 1);
        assert_eq!(tightened.end, d(2025, 12, 15));

        let inside = vec![band(d(2025, 3, 1), d(2025, 4, 1))];
        let tightened = tighten(&base, &[], &inside, 1);
        assert_eq!(tightened.end, base.end);
    }

    #[test]
    fn scans_both_windows_and_bands() {
        let base = Horizon::new(d(2024, 1, 1), d(2025, 1, 1));
        let rows = vec![row(d(2025, 2, 1), d(2025, 3, 1))];
        let bands = vec![band(d(2024, 10, 1), d(2026, 4, 1))];

        let tightened = tighten(&base, &rows, &bands, 1);
        assert_eq!(tightened.start, d(2024, 9, 1));
        assert_eq!(tightened.end, d(2026, 4, 1));
    }
}
