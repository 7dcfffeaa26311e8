//! Utility modules shared across the calculations
//!
//! Contains functionality used by more than one calculation:
//! - Environment: the shared sun/wind adjustment algorithm
//! - Rounding: opt-in presentation rounding for computed figures

pub mod environment;
pub mod rounding;

// Re-export commonly used items
pub use environment::growth_multiplier;
pub use rounding::RoundingPolicy;
