//! JSON loading for externally-owned inputs.

pub mod loaders;

pub use loaders::{EventLoader, PlanLoader};
