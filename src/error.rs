//! Typed failures for the calculation functions
//!
//! Every error is raised at the offending lookup or computation and returned
//! to the caller immediately. There are no retries, no partial results, and
//! no silent numeric defaults: a bad lookup never propagates as NaN through
//! subsequent arithmetic.

use thiserror::Error;

use crate::model::{FactorKind, Level};

/// Failures surfaced by the yield and economics calculations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The supplied level has no entry in the plant's factor table
    #[error("plant '{plant}' has no {factor} factor for level '{level}'")]
    InvalidLevel {
        plant: String,
        factor: FactorKind,
        level: Level,
    },

    /// An environment field was supplied but the plant defines no table for it
    #[error("plant '{plant}' defines no {factor} factor table")]
    MissingFactorTable { plant: String, factor: FactorKind },

    /// Structurally invalid input (missing or non-finite required field)
    #[error("invalid input for plant '{plant}': {reason}")]
    InvalidInput { plant: String, reason: String },
}
