//! Input records for the calculator
//!
//! All calculations operate over these immutable records. Callers build them
//! up front (from static configuration, JSON fixtures, etc.) and pass them
//! by reference; nothing here is mutated and no state survives a call.
//!
//! Wire names follow the reference fixtures: camelCase fields, with the base
//! yield serialized as `yield` (a reserved word in Rust, hence `base_yield`).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CalcError;

/// Intensity level of an environmental factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "low"),
            Level::Medium => write!(f, "medium"),
            Level::High => write!(f, "high"),
        }
    }
}

/// Which factor table a lookup went through (for error reporting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorKind {
    Sun,
    Wind,
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorKind::Sun => write!(f, "sun"),
            FactorKind::Wind => write!(f, "wind"),
        }
    }
}

/// Signed percentage deltas keyed by level
///
/// `-50` means a 50% reduction, `50` a 50% increase; each delta becomes a
/// multiplier via `pct / 100 + 1`.
pub type FactorTable = FxHashMap<Level, i32>;

/// Environmental sensitivity of a plant, one table per factor
///
/// Either table may be absent; looking up a factor the plant does not define
/// is an error, not a silent no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactorTables {
    #[serde(default)]
    pub sun: Option<FactorTable>,
    #[serde(default)]
    pub wind: Option<FactorTable>,
}

/// Static definition of a crop species
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub name: String,
    /// Base yield per crop unit, before environmental adjustment
    #[serde(rename = "yield")]
    pub base_yield: f64,
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub costs_per_plant: Option<f64>,
    #[serde(default)]
    pub num_of_plants_per_crop: Option<f64>,
    #[serde(default)]
    pub factors: Option<FactorTables>,
}

impl Plant {
    /// Pull a required numeric field, rejecting absent or non-finite values
    pub(crate) fn require(&self, field: &str, value: Option<f64>) -> Result<f64, CalcError> {
        match value {
            Some(v) if v.is_finite() => Ok(v),
            Some(_) => Err(CalcError::InvalidInput {
                plant: self.name.clone(),
                reason: format!("{field} is not a finite number"),
            }),
            None => Err(CalcError::InvalidInput {
                plant: self.name.clone(),
                reason: format!("{field} is missing"),
            }),
        }
    }
}

/// A quantity of a given plant actually planted
///
/// The count is unsigned, so negative plantings are unrepresentable; a count
/// of zero is valid and contributes zero to every aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planting {
    pub crop: Plant,
    pub num_crops: u32,
}

/// Sun/wind conditions for a growing season
///
/// Passed as `Option<EnvironmentFactors>`; `None` means no adjustment at
/// all. A present descriptor with both fields empty is treated identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentFactors {
    #[serde(default)]
    pub sun: Option<Level>,
    #[serde(default)]
    pub wind: Option<Level>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_deserializes_from_fixture_json() {
        let json = r#"{
            "name": "corn",
            "yield": 3,
            "salePrice": 10,
            "costsPerPlant": 2,
            "numOfPlantsPerCrop": 10,
            "factors": {
                "sun": { "low": -50, "medium": 0, "high": 50 }
            }
        }"#;

        let plant: Plant = serde_json::from_str(json).unwrap();
        assert_eq!(plant.name, "corn");
        assert_eq!(plant.base_yield, 3.0);
        assert_eq!(plant.sale_price, Some(10.0));
        assert_eq!(plant.costs_per_plant, Some(2.0));
        assert_eq!(plant.num_of_plants_per_crop, Some(10.0));

        let factors = plant.factors.unwrap();
        let sun = factors.sun.unwrap();
        assert_eq!(sun.get(&Level::Low), Some(&-50));
        assert_eq!(sun.get(&Level::High), Some(&50));
        assert!(factors.wind.is_none());
    }

    #[test]
    fn test_require_rejects_missing_and_non_finite() {
        let plant = Plant {
            name: "corn".to_string(),
            base_yield: 3.0,
            ..Default::default()
        };

        assert!(plant.require("sale_price", None).is_err());
        assert!(plant.require("sale_price", Some(f64::NAN)).is_err());
        assert_eq!(plant.require("sale_price", Some(10.0)).unwrap(), 10.0);
    }
}
