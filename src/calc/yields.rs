//! Yield calculations
//!
//! Yield for one plant, one planting, and a whole collection. Environmental
//! adjustment goes through `growth_multiplier`; the base yield must be a
//! finite number or the calculation refuses to proceed.

use crate::error::CalcError;
use crate::model::{EnvironmentFactors, Plant, Planting};
use crate::utils::growth_multiplier;

/// Yield of a single plant, adjusted for the supplied environment
pub fn yield_for_plant(plant: &Plant, env: Option<EnvironmentFactors>) -> Result<f64, CalcError> {
    let base = plant.require("yield", Some(plant.base_yield))?;
    Ok(base * growth_multiplier(plant, env)?)
}

/// Yield of one planting: the per-unit plant yield times the unit count
pub fn yield_for_planting(
    planting: &Planting,
    env: Option<EnvironmentFactors>,
) -> Result<f64, CalcError> {
    Ok(yield_for_plant(&planting.crop, env)? * f64::from(planting.num_crops))
}

/// Total yield across a collection of plantings
///
/// Each planting's own factor tables adjust its own share of the total. The
/// upstream calculator applied the first planting's tables to the whole sum;
/// that was a per-collection aggregate reading one member's data and is
/// deliberately not reproduced here.
pub fn total_yield(
    plantings: &[Planting],
    env: Option<EnvironmentFactors>,
) -> Result<f64, CalcError> {
    plantings.iter().map(|p| yield_for_planting(p, env)).sum()
}
