//! Error types for the breeding timeline engine.

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur when using the engine.
///
/// Data-quality gaps (too few cycle samples, no usable anchor date) are
/// *not* errors; they are represented as `None` or empty collections so
/// the UI simply renders less. Only caller contract violations and
/// per-plan computation faults surface here.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Caller contract violation (e.g. negative projection count)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure while computing derived output for one specific plan.
    ///
    /// Portfolio-level callers log this and skip the plan; it must never
    /// abort computation for the remaining plans.
    #[error("Plan {plan_id}: {message}")]
    PlanComputation { plan_id: String, message: String },

    /// Unreadable or unparseable biology override configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl EngineError {
    /// Create a per-plan computation fault.
    pub fn plan_fault(plan_id: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::PlanComputation {
            plan_id: plan_id.into(),
            message: message.into(),
        }
    }
}
