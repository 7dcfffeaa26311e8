//! Environmental adjustment
//!
//! Every environment-aware calculation funnels through one algorithm:
//! resolve the supplied sun/wind levels against the plant's factor tables,
//! convert each signed percentage delta into a multiplier (`pct / 100 + 1`),
//! and multiply the multipliers together.
//!
//! The four possible shapes of a supplied environment are an explicit,
//! exhaustive enum. A descriptor that is present but carries neither field
//! is its own deliberate branch and behaves exactly like an absent one.

use crate::error::CalcError;
use crate::model::{EnvironmentFactors, FactorKind, Level, Plant};

/// The adjustment a supplied environment calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Adjustment {
    Unadjusted,
    SunOnly(Level),
    WindOnly(Level),
    Both { sun: Level, wind: Level },
}

impl Adjustment {
    fn from_env(env: Option<EnvironmentFactors>) -> Self {
        let Some(e) = env else {
            return Adjustment::Unadjusted;
        };
        match (e.sun, e.wind) {
            // Present-but-empty descriptor means no adjustment, same as absent
            (None, None) => Adjustment::Unadjusted,
            (Some(sun), None) => Adjustment::SunOnly(sun),
            (None, Some(wind)) => Adjustment::WindOnly(wind),
            (Some(sun), Some(wind)) => Adjustment::Both { sun, wind },
        }
    }
}

/// Multiplier for a single factor: `pct / 100 + 1`
///
/// Fails loudly when the plant defines no table for the factor or the table
/// has no entry for the level.
fn factor_multiplier(plant: &Plant, kind: FactorKind, level: Level) -> Result<f64, CalcError> {
    let missing_table = || CalcError::MissingFactorTable {
        plant: plant.name.clone(),
        factor: kind,
    };

    let tables = plant.factors.as_ref().ok_or_else(missing_table)?;
    let table = match kind {
        FactorKind::Sun => tables.sun.as_ref(),
        FactorKind::Wind => tables.wind.as_ref(),
    }
    .ok_or_else(missing_table)?;

    let pct = table.get(&level).copied().ok_or_else(|| CalcError::InvalidLevel {
        plant: plant.name.clone(),
        factor: kind,
        level,
    })?;

    Ok(f64::from(pct) / 100.0 + 1.0)
}

/// Combined growth multiplier for a plant under the supplied conditions
///
/// Returns `1.0` when there is nothing to adjust, the sun or wind multiplier
/// when one factor is supplied, and their product when both are.
pub fn growth_multiplier(
    plant: &Plant,
    env: Option<EnvironmentFactors>,
) -> Result<f64, CalcError> {
    match Adjustment::from_env(env) {
        Adjustment::Unadjusted => Ok(1.0),
        Adjustment::SunOnly(level) => factor_multiplier(plant, FactorKind::Sun, level),
        Adjustment::WindOnly(level) => factor_multiplier(plant, FactorKind::Wind, level),
        Adjustment::Both { sun, wind } => Ok(factor_multiplier(plant, FactorKind::Sun, sun)?
            * factor_multiplier(plant, FactorKind::Wind, wind)?),
    }
}
