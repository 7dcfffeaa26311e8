//! Presentation rounding
//!
//! The calculations themselves never round; every figure comes back exactly
//! as computed. Callers that want two-decimal monetary output apply a policy
//! to the result instead.

/// How to round a computed figure for presentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundingPolicy {
    /// Leave the figure exactly as computed
    #[default]
    Exact,
    /// Round to two decimal places
    TwoDecimals,
}

impl RoundingPolicy {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingPolicy::Exact => value,
            RoundingPolicy::TwoDecimals => (value * 100.0).round() / 100.0,
        }
    }
}
