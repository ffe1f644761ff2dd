//! Domain models for reproductive cycles, stage windows, and availability bands.
//!
//! This module provides the core data structures shared by the projection
//! algorithms and the plan aggregation services: calendar date ranges, the
//! append-only reproductive event history, the externally-owned breeding plan
//! row, and the derived (always recomputable) window and band outputs.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::species::Species;

/// A contiguous range of calendar dates with inclusive start and end.
///
/// `DateRange` is the building block for every derived structure in the
/// engine: stage windows, travel bands, and display horizons. Callers must
/// uphold `start <= end`; every range the engine derives satisfies it by
/// construction.
///
/// # Examples
///
/// ```
/// use breedcal_engine::core::domain::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 11).unwrap(),
/// );
/// assert_eq!(range.days(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range. Caller contract: `start <= end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "DateRange start must not exceed end");
        Self { start, end }
    }

    /// Number of whole days spanned (end minus start).
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Returns `true` if `other` lies fully inside this range (inclusive).
    pub fn contains(&self, other: &DateRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the given date lies inside this range (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns this range shifted forward by the given number of days
    /// (negative shifts move it backwards).
    pub fn shift(&self, days: i64) -> Self {
        Self {
            start: self.start + Duration::days(days),
            end: self.end + Duration::days(days),
        }
    }

    /// Intersects this range with another, returning `None` when they do
    /// not overlap.
    pub fn intersect(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start <= end {
            Some(DateRange { start, end })
        } else {
            None
        }
    }
}

/// The date range actually rendered by the scheduling UI.
///
/// A horizon is display-only and never authoritative over data; see
/// [`crate::services::horizon::tighten`] for how it is narrowed around the
/// plotted windows and bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Horizon {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "Horizon start must not exceed end");
        Self { start, end }
    }
}

/// Kind of recorded reproductive event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    HeatStart,
    Ovulation,
    Insemination,
    Birth,
}

/// One observed reproductive event in a female's append-only history.
///
/// Events are created by external recording workflows and are read-only
/// inputs here; the engine never mutates or persists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReproEvent {
    pub kind: EventKind,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: Option<String>,
}

impl ReproEvent {
    pub fn new(kind: EventKind, date: NaiveDate) -> Self {
        Self {
            kind,
            date,
            note: None,
        }
    }
}

/// User-confirmed dates on a breeding plan. Authoritative: wherever a locked
/// value exists it takes precedence over any computed counterpart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedDates {
    #[serde(default)]
    pub cycle_start: Option<NaiveDate>,
    #[serde(default)]
    pub ovulation: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub placement_start: Option<NaiveDate>,
}

/// Computed, advisory dates on a breeding plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedDates {
    #[serde(default)]
    pub cycle_start: Option<NaiveDate>,
    #[serde(default)]
    pub next_cycle_start: Option<NaiveDate>,
}

/// A breeding plan as supplied by the external plan store.
///
/// Read-only to this engine. Locked dates are user-confirmed and always win
/// over expected (computed) dates when resolving the cycle anchor.
///
/// # Examples
///
/// ```
/// use breedcal_engine::core::domain::PlanRow;
/// use breedcal_engine::core::species::Species;
///
/// let plan = PlanRow::new("plan-7", "Luna x Ridge", Species::Dog);
/// assert!(plan.locked.cycle_start.is_none());
/// assert!(plan.expected.next_cycle_start.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRow {
    pub id: String,
    pub name: String,
    pub species: Species,
    #[serde(default)]
    pub locked: LockedDates,
    #[serde(default)]
    pub expected: ExpectedDates,
}

impl PlanRow {
    pub fn new(id: impl Into<String>, name: impl Into<String>, species: Species) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species,
            locked: LockedDates::default(),
            expected: ExpectedDates::default(),
        }
    }
}

/// Named phase of the breeding process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    PreBreeding,
    HormoneTesting,
    Breeding,
    Whelping,
    PuppyCare,
    PlacementNormal,
    PlacementExtended,
}

impl Stage {
    /// All stages in chronological display order.
    pub const ALL: [Stage; 7] = [
        Stage::PreBreeding,
        Stage::HormoneTesting,
        Stage::Breeding,
        Stage::Whelping,
        Stage::PuppyCare,
        Stage::PlacementNormal,
        Stage::PlacementExtended,
    ];

    /// Human-readable stage label for the Gantt row.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::PreBreeding => "Pre-breeding",
            Stage::HormoneTesting => "Hormone testing",
            Stage::Breeding => "Breeding",
            Stage::Whelping => "Whelping",
            Stage::PuppyCare => "Puppy care",
            Stage::PlacementNormal => "Placement",
            Stage::PlacementExtended => "Extended placement",
        }
    }
}

/// Confidence tier of a stage window.
///
/// `Full` is the conservative outer bound; `Likely` is the narrower central
/// estimate and is always contained within the full window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Full,
    Likely,
}

/// The two confidence tiers of one stage window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPair {
    pub full: DateRange,
    pub likely: DateRange,
}

impl WindowPair {
    /// Builds a pair from a full window and a likely candidate, clamping the
    /// candidate into the full window so the containment invariant holds for
    /// any species constants. A candidate that misses the full window
    /// entirely degrades to the full window itself.
    pub fn containing(full: DateRange, likely_candidate: DateRange) -> Self {
        let likely = full.intersect(&likely_candidate).unwrap_or(full);
        Self { full, likely }
    }

    /// Returns the window for the given tier.
    pub fn tier(&self, tier: Tier) -> DateRange {
        match tier {
            Tier::Full => self.full,
            Tier::Likely => self.likely,
        }
    }

    fn shift(&self, days: i64) -> Self {
        Self {
            full: self.full.shift(days),
            likely: self.likely.shift(days),
        }
    }
}

/// The full set of stage windows derived from one cycle-start anchor.
///
/// All windows hang off a single ovulation date; see
/// [`crate::algorithms::stages::derive_windows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedWindows {
    pub pre_breeding: WindowPair,
    pub hormone_testing: WindowPair,
    pub breeding: WindowPair,
    pub whelping: WindowPair,
    pub puppy_care: WindowPair,
    pub placement_normal: WindowPair,
    pub placement_extended: WindowPair,
}

impl ExpectedWindows {
    /// Returns the window pair for the given stage.
    pub fn stage(&self, stage: Stage) -> WindowPair {
        match stage {
            Stage::PreBreeding => self.pre_breeding,
            Stage::HormoneTesting => self.hormone_testing,
            Stage::Breeding => self.breeding,
            Stage::Whelping => self.whelping,
            Stage::PuppyCare => self.puppy_care,
            Stage::PlacementNormal => self.placement_normal,
            Stage::PlacementExtended => self.placement_extended,
        }
    }

    /// Flattens all stages into display rows, one per (stage, tier).
    pub fn rows(&self) -> Vec<StageRow> {
        let mut rows = Vec::with_capacity(Stage::ALL.len() * 2);
        for stage in Stage::ALL {
            let pair = self.stage(stage);
            rows.push(StageRow {
                stage,
                tier: Tier::Full,
                range: pair.full,
            });
            rows.push(StageRow {
                stage,
                tier: Tier::Likely,
                range: pair.likely,
            });
        }
        rows
    }

    /// Shifts the placement windows (normal and extended, both tiers) so
    /// that the normal placement full window starts on the given date.
    ///
    /// Used when a plan carries a locked, user-confirmed placement start
    /// that overrides the computed schedule.
    pub fn with_placement_start(&self, placement_start: NaiveDate) -> Self {
        let delta = (placement_start - self.placement_normal.full.start).num_days();
        Self {
            placement_normal: self.placement_normal.shift(delta),
            placement_extended: self.placement_extended.shift(delta),
            ..*self
        }
    }
}

/// One renderable Gantt row: a stage window at a specific confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRow {
    pub stage: Stage,
    pub tier: Tier,
    pub range: DateRange,
}

/// Severity of a derived availability band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BandKind {
    /// Travel strongly discouraged (active breeding work or whelping)
    Risky,
    /// Softer caution (preparation or rearing tail)
    Unlikely,
}

/// A derived travel-availability caution range.
///
/// Bands are mechanically derived from stage window boundaries (or from a
/// single projected next-cycle marker) and are always recomputable; they are
/// never hand-edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelBand {
    pub kind: BandKind,
    pub range: DateRange,
    pub label: String,
}

/// A travel band as exposed to the calendar layer. Alias kept distinct from
/// [`TravelBand`] in name only: every instance that leaves the engine is
/// wrapped in [`Tagged`] with its owning plan's identity.
pub type AvailabilityBand = TravelBand;

/// Derived output stamped with the identity of the plan that produced it.
///
/// Every row and band leaving the aggregator carries its `owner_plan_id` and
/// a deterministic per-plan display color, so outputs from different plans
/// can be merged into one visualization without cross-contamination. The
/// wrapper is the type-level enforcement of that isolation invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tagged<T> {
    pub data: T,
    pub owner_plan_id: String,
    pub color_tag: String,
}

impl<T> Tagged<T> {
    pub fn new(data: T, owner_plan_id: impl Into<String>, color_tag: impl Into<String>) -> Self {
        Self {
            data,
            owner_plan_id: owner_plan_id.into(),
            color_tag: color_tag.into(),
        }
    }
}
