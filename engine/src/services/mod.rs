//! Plan-level services: aggregation, horizon tightening, forecasting.

pub mod aggregator;
pub mod color;
pub mod forecast;
pub mod horizon;

pub use aggregator::PlanWindowAggregator;
pub use color::plan_color;
pub use forecast::{female_forecast, FemaleForecast};
pub use horizon::tighten;
