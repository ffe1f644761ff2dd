//! Per-plan window aggregation and ownership tagging.
//!
//! `PlanWindowAggregator` is the single required entry point for producing
//! renderable output: every stage row and availability band leaving the
//! engine passes through it and is stamped with the owning plan's id and
//! display color. Callers never invoke the derivation algorithms directly,
//! which is what guarantees outputs from different plans can be merged into
//! one calendar without cross-contamination.

use chrono::{Duration, NaiveDate};

use crate::algorithms::availability::{compute_bands, fallback_band};
use crate::algorithms::stages::derive_windows;
use crate::core::domain::{
    AvailabilityBand, DateRange, ExpectedWindows, Horizon, PlanRow, StageRow, Tagged,
};
use crate::core::species::BiologyTable;
use crate::error::{EngineError, Result};
use crate::services::color::{plan_color, plan_fingerprint};

/// Aggregates stage windows and availability bands across breeding plans.
///
/// Idempotent and side-effect-free: calling any method twice with the same
/// plan produces structurally identical output.
///
/// # Examples
///
/// ```
/// use breedcal_engine::core::domain::PlanRow;
/// use breedcal_engine::core::species::Species;
/// use breedcal_engine::services::aggregator::PlanWindowAggregator;
/// use chrono::NaiveDate;
///
/// let mut plan = PlanRow::new("plan-1", "Luna x Ridge", Species::Dog);
/// plan.locked.cycle_start = "2025-01-01".parse::<NaiveDate>().ok();
///
/// let aggregator = PlanWindowAggregator::new();
/// let rows = aggregator.stage_rows_for_plan(&plan);
/// assert!(rows.iter().all(|r| r.owner_plan_id == "plan-1"));
/// ```
#[derive(Debug, Clone)]
pub struct PlanWindowAggregator {
    table: BiologyTable,
}

impl Default for PlanWindowAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanWindowAggregator {
    /// Aggregator over the built-in species biology table.
    pub fn new() -> Self {
        Self {
            table: BiologyTable::builtin().clone(),
        }
    }

    /// Aggregator over a table with configuration overrides applied.
    pub fn with_table(table: BiologyTable) -> Self {
        Self { table }
    }

    /// Derives and tags the stage window rows for one plan.
    ///
    /// Returns an empty vector when no cycle anchor can be resolved from the
    /// plan (degenerate case: nothing is guessed).
    pub fn stage_rows_for_plan(&self, plan: &PlanRow) -> Vec<Tagged<StageRow>> {
        let windows = match self.windows_for_plan(plan) {
            Some(w) => w,
            None => return Vec::new(),
        };

        let color = plan_color(&plan.id);
        windows
            .rows()
            .into_iter()
            .map(|row| Tagged::new(row, plan.id.clone(), color.clone()))
            .collect()
    }

    /// Derives and tags the availability bands for one plan.
    ///
    /// When the plan has stage windows, the bands are derived from their
    /// boundaries. When `rows` is empty, the sole fallback path emits a
    /// single 1-day marker at the plan's expected next cycle start, provided
    /// it falls inside the display horizon.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PlanComputation`] when the supplied rows carry
    /// a different plan's ownership tag, or when rows exist but the plan no
    /// longer yields a cycle anchor. Portfolio callers log and skip.
    pub fn availability_for_plan(
        &self,
        plan: &PlanRow,
        rows: &[Tagged<StageRow>],
        horizon: &Horizon,
    ) -> Result<Vec<Tagged<AvailabilityBand>>> {
        if let Some(foreign) = rows.iter().find(|r| r.owner_plan_id != plan.id) {
            return Err(EngineError::plan_fault(
                &plan.id,
                format!(
                    "stage rows owned by plan {} passed for plan {}",
                    foreign.owner_plan_id, plan.id
                ),
            ));
        }

        let color = plan_color(&plan.id);

        if rows.is_empty() {
            let visible = DateRange::new(horizon.start, horizon.end);
            let marker = plan
                .expected
                .next_cycle_start
                .filter(|d| visible.contains_date(*d))
                .map(|d| Tagged::new(fallback_band(d), plan.id.clone(), color));
            return Ok(marker.into_iter().collect());
        }

        let windows = self.windows_for_plan(plan).ok_or_else(|| {
            EngineError::plan_fault(
                &plan.id,
                "stage rows supplied but plan resolves to no cycle anchor",
            )
        })?;

        Ok(compute_bands(&windows)
            .into_iter()
            .map(|band| Tagged::new(band, plan.id.clone(), color.clone()))
            .collect())
    }

    /// Aggregates availability bands across a whole plan portfolio.
    ///
    /// A fault in one plan's computation is logged and that plan's bands are
    /// omitted; the remaining plans are unaffected.
    pub fn availability_for_plans(
        &self,
        plans: &[PlanRow],
        horizon: &Horizon,
    ) -> Vec<Tagged<AvailabilityBand>> {
        let mut bands = Vec::new();
        for plan in plans {
            let rows = self.stage_rows_for_plan(plan);
            match self.availability_for_plan(plan, &rows, horizon) {
                Ok(plan_bands) => bands.extend(plan_bands),
                Err(e) => {
                    log::warn!(
                        "Skipping availability bands for plan {} ({}): {}",
                        plan.id,
                        plan_fingerprint(&plan.id),
                        e
                    );
                }
            }
        }
        bands
    }

    /// Resolves the cycle-start anchor for a plan.
    ///
    /// Locked data always wins over computed data. Precedence: locked cycle
    /// start, then locked ovulation (back-computed through the ovulation
    /// offset), then locked due date (back-computed through gestation and
    /// the ovulation offset), then the expected cycle start.
    fn resolve_cycle_start(&self, plan: &PlanRow) -> Option<NaiveDate> {
        let defaults = self.table.defaults_for(plan.species);

        if let Some(cycle_start) = plan.locked.cycle_start {
            return Some(cycle_start);
        }
        if let Some(ovulation) = plan.locked.ovulation {
            return Some(ovulation - Duration::days(defaults.ovulation_offset_days));
        }
        if let Some(due) = plan.locked.due_date {
            return Some(
                due - Duration::days(defaults.gestation_days + defaults.ovulation_offset_days),
            );
        }
        plan.expected.cycle_start
    }

    fn windows_for_plan(&self, plan: &PlanRow) -> Option<ExpectedWindows> {
        let cycle_start = self.resolve_cycle_start(plan)?;
        let defaults = self.table.defaults_for(plan.species);
        let windows = derive_windows(&defaults, cycle_start);

        // Locked placement dates override the computed placement schedule
        Some(match plan.locked.placement_start {
            Some(placement_start) => windows.with_placement_start(placement_start),
            None => windows,
        })
    }
}
