//! Crop and growth-phase models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Growth phase of a crop within the season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPhase {
    Initial,
    Mid,
    Late,
}

impl GrowthPhase {
    /// All phases, in season order
    pub const ALL: [GrowthPhase; 3] = [GrowthPhase::Initial, GrowthPhase::Mid, GrowthPhase::Late];

    /// Ordinal position into a crop's coefficient triple
    pub fn index(&self) -> usize {
        match self {
            GrowthPhase::Initial => 0,
            GrowthPhase::Mid => 1,
            GrowthPhase::Late => 2,
        }
    }
}

impl fmt::Display for GrowthPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthPhase::Initial => write!(f, "Initial"),
            GrowthPhase::Mid => write!(f, "Mid"),
            GrowthPhase::Late => write!(f, "Late"),
        }
    }
}

/// Irrigated crops with published phase coefficients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Crop {
    Wheat,
    Maize,
    Cotton,
    Rice,
    Potato,
    Tomato,
    Cucumber,
    Watermelon,
    Melon,
    Soybean,
    Alfalfa,
    Onion,
    Sunflower,
    SugarBeet,
    Grape,
}

impl Crop {
    /// All crops, in catalog order
    pub const ALL: [Crop; 15] = [
        Crop::Wheat,
        Crop::Maize,
        Crop::Cotton,
        Crop::Rice,
        Crop::Potato,
        Crop::Tomato,
        Crop::Cucumber,
        Crop::Watermelon,
        Crop::Melon,
        Crop::Soybean,
        Crop::Alfalfa,
        Crop::Onion,
        Crop::Sunflower,
        Crop::SugarBeet,
        Crop::Grape,
    ];

    /// Phase coefficients as (initial, mid, late)
    pub fn kc_profile(&self) -> [f64; 3] {
        match self {
            Crop::Wheat => [0.30, 1.15, 0.35],
            Crop::Maize => [0.40, 1.20, 0.60],
            Crop::Cotton => [0.40, 1.25, 0.60],
            Crop::Rice => [1.10, 1.20, 0.90],
            Crop::Potato => [0.50, 1.15, 0.80],
            Crop::Tomato => [0.60, 1.15, 0.80],
            Crop::Cucumber => [0.60, 1.05, 0.80],
            Crop::Watermelon => [0.50, 0.85, 0.65],
            Crop::Melon => [0.40, 0.85, 0.65],
            Crop::Soybean => [0.40, 1.15, 0.50],
            Crop::Alfalfa => [0.40, 1.10, 0.90],
            Crop::Onion => [0.70, 1.10, 0.85],
            Crop::Sunflower => [0.30, 1.15, 0.45],
            Crop::SugarBeet => [0.40, 1.20, 0.80],
            Crop::Grape => [0.30, 0.80, 0.50],
        }
    }

    /// Crop coefficient for a growth phase
    pub fn kc(&self, phase: GrowthPhase) -> f64 {
        self.kc_profile()[phase.index()]
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crop::Wheat => write!(f, "Wheat"),
            Crop::Maize => write!(f, "Maize"),
            Crop::Cotton => write!(f, "Cotton"),
            Crop::Rice => write!(f, "Rice"),
            Crop::Potato => write!(f, "Potato"),
            Crop::Tomato => write!(f, "Tomato"),
            Crop::Cucumber => write!(f, "Cucumber"),
            Crop::Watermelon => write!(f, "Watermelon"),
            Crop::Melon => write!(f, "Melon"),
            Crop::Soybean => write!(f, "Soybean"),
            Crop::Alfalfa => write!(f, "Alfalfa"),
            Crop::Onion => write!(f, "Onion"),
            Crop::Sunflower => write!(f, "Sunflower"),
            Crop::SugarBeet => write!(f, "Sugar Beet"),
            Crop::Grape => write!(f, "Grape"),
        }
    }
}

/// Failure to resolve a crop by name
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown crop: {0}")]
pub struct UnknownCropName(pub String);

impl FromStr for Crop {
    type Err = UnknownCropName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Wheat" => Ok(Crop::Wheat),
            "Maize" => Ok(Crop::Maize),
            "Cotton" => Ok(Crop::Cotton),
            "Rice" => Ok(Crop::Rice),
            "Potato" => Ok(Crop::Potato),
            "Tomato" => Ok(Crop::Tomato),
            "Cucumber" => Ok(Crop::Cucumber),
            "Watermelon" => Ok(Crop::Watermelon),
            "Melon" => Ok(Crop::Melon),
            "Soybean" => Ok(Crop::Soybean),
            "Alfalfa" => Ok(Crop::Alfalfa),
            "Onion" => Ok(Crop::Onion),
            "Sunflower" => Ok(Crop::Sunflower),
            "Sugar Beet" => Ok(Crop::SugarBeet),
            "Grape" => Ok(Crop::Grape),
            other => Err(UnknownCropName(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheat_coefficients() {
        assert_eq!(Crop::Wheat.kc(GrowthPhase::Initial), 0.30);
        assert_eq!(Crop::Wheat.kc(GrowthPhase::Mid), 1.15);
        assert_eq!(Crop::Wheat.kc(GrowthPhase::Late), 0.35);
    }

    #[test]
    fn every_crop_parses_from_its_display_name() {
        for crop in Crop::ALL {
            let parsed: Crop = crop.to_string().parse().unwrap();
            assert_eq!(parsed, crop);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "Durian".parse::<Crop>().unwrap_err();
        assert_eq!(err, UnknownCropName("Durian".to_string()));
    }

    #[test]
    fn crops_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&Crop::SugarBeet).unwrap(),
            "\"sugar_beet\""
        );
        assert_eq!(
            serde_json::to_string(&GrowthPhase::Initial).unwrap(),
            "\"initial\""
        );
    }
}
