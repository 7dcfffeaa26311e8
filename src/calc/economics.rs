//! Cost, revenue, and profit calculations
//!
//! Costs are environment-independent; revenue (and therefore profit) rides
//! on the adjusted plant yield. Required monetary fields are optional on the
//! record, so each calculation pulls them through `Plant::require` and fails
//! with `InvalidInput` when one is missing rather than defaulting it.

use crate::calc::yields::yield_for_plant;
use crate::error::CalcError;
use crate::model::{EnvironmentFactors, Plant, Planting};

/// Cost of raising one crop unit of the plant
pub fn cost_for_planting(plant: &Plant) -> Result<f64, CalcError> {
    let costs = plant.require("costs_per_plant", plant.costs_per_plant)?;
    let plants_per_crop = plant.require("num_of_plants_per_crop", plant.num_of_plants_per_crop)?;
    Ok(costs * plants_per_crop)
}

/// Revenue from one crop unit: sale price times the adjusted yield
pub fn revenue_for_planting(
    plant: &Plant,
    env: Option<EnvironmentFactors>,
) -> Result<f64, CalcError> {
    let price = plant.require("sale_price", plant.sale_price)?;
    Ok(price * yield_for_plant(plant, env)?)
}

/// Profit from one crop unit: revenue minus cost
pub fn profit_for_planting(
    plant: &Plant,
    env: Option<EnvironmentFactors>,
) -> Result<f64, CalcError> {
    Ok(revenue_for_planting(plant, env)? - cost_for_planting(plant)?)
}

/// Total profit across a collection: per-unit profit times unit count, summed
pub fn total_profit(
    plantings: &[Planting],
    env: Option<EnvironmentFactors>,
) -> Result<f64, CalcError> {
    plantings
        .iter()
        .map(|p| Ok(profit_for_planting(&p.crop, env)? * f64::from(p.num_crops)))
        .sum()
}
