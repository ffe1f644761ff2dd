//! Plan validation with detailed error and warning reporting.
//!
//! This module validates breeding plan data for completeness and
//! consistency before it reaches the projection engine: duplicate plan ids,
//! locked dates that contradict the species' biological ordering, and plans
//! that cannot anchor any computation.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::core::domain::PlanRow;
use crate::core::species::BiologyTable;

/// Comprehensive validation result with categorized issues and statistics.
///
/// Errors make `is_valid` false, while warnings are informational but don't
/// fail validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary statistics computed during validation.
///
/// # Fields
///
/// * `total_plans` - Total number of plans validated
/// * `with_locked_anchor` - Plans carrying at least one locked anchor date
/// * `expected_only` - Plans relying solely on computed expected dates
/// * `without_anchor` - Plans with no usable anchor at all
/// * `duplicate_ids` - Number of duplicate plan identifiers found
/// * `invalid_date_order` - Locked date pairs violating biological ordering
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_plans: usize,
    pub with_locked_anchor: usize,
    pub expected_only: usize,
    pub without_anchor: usize,
    pub duplicate_ids: usize,
    pub invalid_date_order: usize,
}

impl ValidationResult {
    /// Creates a new validation result with valid status and empty
    /// error/warning lists.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Adds a critical error and marks the result as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a non-critical warning without invalidating the result.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for breeding plan data.
///
/// # Examples
///
/// ```
/// use breedcal_engine::core::domain::PlanRow;
/// use breedcal_engine::core::species::{BiologyTable, Species};
/// use breedcal_engine::preprocessing::validator::PlanValidator;
///
/// let plans = vec![PlanRow::new("plan-1", "Luna", Species::Dog)];
/// let result = PlanValidator::validate_plans(&plans, BiologyTable::builtin());
/// assert!(result.is_valid);
/// assert_eq!(result.stats.total_plans, 1);
/// ```
pub struct PlanValidator;

impl PlanValidator {
    /// Validates a collection of breeding plans.
    ///
    /// Performs:
    /// - Duplicate and empty id detection
    /// - Locked-date ordering checks (ovulation after cycle start, due date
    ///   after ovulation, by roughly the species offsets)
    /// - Anchor coverage statistics
    pub fn validate_plans(plans: &[PlanRow], table: &BiologyTable) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.total_plans = plans.len();

        result.stats.duplicate_ids = Self::check_duplicates(plans, &mut result);

        for plan in plans {
            Self::validate_plan(plan, table, &mut result);
        }

        result
    }

    fn validate_plan(plan: &PlanRow, table: &BiologyTable, result: &mut ValidationResult) {
        if plan.id.trim().is_empty() {
            result.add_error(format!("Plan '{}' has an empty id", plan.name));
        }

        let has_locked = plan.locked.cycle_start.is_some()
            || plan.locked.ovulation.is_some()
            || plan.locked.due_date.is_some();
        let has_expected = plan.expected.cycle_start.is_some();

        if has_locked {
            result.stats.with_locked_anchor += 1;
        } else if has_expected {
            result.stats.expected_only += 1;
        } else {
            result.stats.without_anchor += 1;
            result.add_warning(format!(
                "Plan {} has no anchor date; no windows will be derived",
                plan.id
            ));
        }

        let defaults = table.defaults_for(plan.species);

        if let (Some(cycle_start), Some(ovulation)) =
            (plan.locked.cycle_start, plan.locked.ovulation)
        {
            if ovulation < cycle_start {
                result.stats.invalid_date_order += 1;
                result.add_error(format!(
                    "Plan {}: locked ovulation {} precedes locked cycle start {}",
                    plan.id, ovulation, cycle_start
                ));
            } else if ovulation - cycle_start
                > Duration::days(2 * defaults.ovulation_offset_days.max(7))
            {
                result.add_warning(format!(
                    "Plan {}: locked ovulation is {} days after cycle start (expected ~{})",
                    plan.id,
                    (ovulation - cycle_start).num_days(),
                    defaults.ovulation_offset_days
                ));
            }
        }

        if let (Some(ovulation), Some(due)) = (plan.locked.ovulation, plan.locked.due_date) {
            if due <= ovulation {
                result.stats.invalid_date_order += 1;
                result.add_error(format!(
                    "Plan {}: locked due date {} is not after locked ovulation {}",
                    plan.id, due, ovulation
                ));
            }
        }

        if let (Some(cycle_start), Some(placement)) =
            (plan.locked.cycle_start, plan.locked.placement_start)
        {
            if placement < cycle_start {
                result.stats.invalid_date_order += 1;
                result.add_error(format!(
                    "Plan {}: locked placement start {} precedes cycle start {}",
                    plan.id, placement, cycle_start
                ));
            }
        }
    }

    fn check_duplicates(plans: &[PlanRow], result: &mut ValidationResult) -> usize {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        let mut duplicates = 0;

        for plan in plans {
            if !seen.insert(&plan.id) {
                duplicates += 1;
                result.add_error(format!("Duplicate plan id: {}", plan.id));
            }
        }

        duplicates
    }
}
