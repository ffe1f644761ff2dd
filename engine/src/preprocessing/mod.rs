//! Input validation ahead of projection.

pub mod validator;

pub use validator::{PlanValidator, ValidationResult, ValidationStats};
