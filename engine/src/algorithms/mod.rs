//! Cycle projection and window derivation algorithms.
//!
//! This module provides the pure temporal computations of the engine:
//! cycle-length statistics, forward cycle projection, ovulation-anchored
//! stage window derivation, and travel-availability band derivation.
//!
//! # Components
//!
//! - [`statistics`]: Average cycle length with a minimum-sample guard
//! - [`projection`]: Uniform-step projection of future cycle starts
//! - [`stages`]: Two-tier stage windows anchored on ovulation
//! - [`availability`]: Risky/unlikely travel bands derived from windows

pub mod availability;
pub mod projection;
pub mod stages;
pub mod statistics;

pub use availability::{compute_bands, fallback_band};
pub use projection::project_upcoming_cycles;
pub use stages::derive_windows;
pub use statistics::{average_cycle_length, DEFAULT_DELTA_WINDOW, MIN_CYCLE_SAMPLES};
