//! # breedcal-engine
//!
//! Reproductive-cycle and breeding-stage timeline projection engine.
//!
//! Given a female's historical cycle events and species-specific biology,
//! this crate estimates her effective cycle length, projects future cycle
//! starts, derives the overlapping stage windows of a breeding plan
//! (pre-breeding through extended placement, all anchored on a single
//! ovulation date, in two confidence tiers), derives travel-availability
//! caution bands from those windows, and aggregates everything across many
//! concurrent plans for calendar-style visualization.
//!
//! The engine is pure, synchronous computation: no I/O besides the optional
//! JSON/TOML loaders, no shared mutable state, no hidden clock. Every output
//! that leaves the aggregator carries its owning plan's identity, so
//! outputs from different plans can be merged into one view without
//! cross-contamination.
//!
//! ## Example
//!
//! ```
//! use breedcal_engine::core::domain::{Horizon, PlanRow};
//! use breedcal_engine::core::species::Species;
//! use breedcal_engine::services::{aggregator::PlanWindowAggregator, horizon};
//! use chrono::NaiveDate;
//!
//! let d = |s: &str| s.parse::<NaiveDate>().unwrap();
//!
//! let mut plan = PlanRow::new("plan-1", "Luna x Ridge", Species::Dog);
//! plan.locked.cycle_start = Some(d("2025-01-01"));
//!
//! let aggregator = PlanWindowAggregator::new();
//! let base = Horizon::new(d("2024-06-01"), d("2025-06-01"));
//!
//! let rows = aggregator.stage_rows_for_plan(&plan);
//! let bands = aggregator.availability_for_plan(&plan, &rows, &base).unwrap();
//! let view = horizon::tighten(&base, &rows, &bands, 1);
//!
//! assert!(rows.iter().all(|r| r.owner_plan_id == "plan-1"));
//! assert!(view.end >= base.end);
//! ```

pub mod algorithms;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod preprocessing;
pub mod services;

pub use config::BiologyConfig;
pub use core::domain::{
    AvailabilityBand, BandKind, DateRange, EventKind, ExpectedWindows, Horizon, PlanRow,
    ReproEvent, Stage, StageRow, Tagged, Tier, TravelBand, WindowPair,
};
pub use core::species::{BiologyTable, CycleDefaults, Species};
pub use error::{EngineError, Result};
pub use services::aggregator::PlanWindowAggregator;
