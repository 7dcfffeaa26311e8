//! Calculation modules
//!
//! Each operation is a pure, stateless function over the model records.
//! Yields and economics live in separate modules but share the same
//! environmental-adjustment algorithm from `utils::environment`.

pub mod economics;
pub mod yields;

// Re-export the calculation functions
pub use economics::{cost_for_planting, profit_for_planting, revenue_for_planting, total_profit};
pub use yields::{total_yield, yield_for_plant, yield_for_planting};
