//! Crop Calculator Rust Implementation
//!
//! Pure yield and economics calculations for planted crops, optionally
//! adjusted for sun and wind conditions:
//! - `model`: immutable input records (plants, plantings, environments)
//! - `utils/`: the shared environmental-adjustment algorithm and rounding
//! - `calc/`: the yield, cost, revenue, and profit operations
//!
//! Every operation is a stateless pure function returning
//! `Result<f64, CalcError>`; nothing is persisted, read, or mutated, so the
//! functions are safe to call from any number of threads.

pub mod calc;
pub mod error;
pub mod model;
pub mod utils;

// Re-export commonly used types
pub use calc::{
    cost_for_planting, profit_for_planting, revenue_for_planting, total_profit, total_yield,
    yield_for_plant, yield_for_planting,
};
pub use error::CalcError;
pub use model::{EnvironmentFactors, FactorKind, FactorTable, FactorTables, Level, Plant, Planting};
pub use utils::RoundingPolicy;
