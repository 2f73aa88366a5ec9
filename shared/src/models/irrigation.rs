//! Irrigation method models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported irrigation methods
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationMethod {
    Surface,
    Sprinkler,
    Drip,
}

impl IrrigationMethod {
    /// All methods, in catalog order
    pub const ALL: [IrrigationMethod; 3] = [
        IrrigationMethod::Surface,
        IrrigationMethod::Sprinkler,
        IrrigationMethod::Drip,
    ];

    /// Fraction of applied water that reaches the crop root zone
    pub fn efficiency(&self) -> f64 {
        match self {
            IrrigationMethod::Surface => 0.60,
            IrrigationMethod::Sprinkler => 0.80,
            IrrigationMethod::Drip => 0.95,
        }
    }
}

impl fmt::Display for IrrigationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrrigationMethod::Surface => write!(f, "Surface"),
            IrrigationMethod::Sprinkler => write!(f, "Sprinkler"),
            IrrigationMethod::Drip => write!(f, "Drip"),
        }
    }
}

/// Failure to resolve an irrigation method by name
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown irrigation method: {0}")]
pub struct UnknownMethodName(pub String);

impl FromStr for IrrigationMethod {
    type Err = UnknownMethodName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Surface" => Ok(IrrigationMethod::Surface),
            "Sprinkler" => Ok(IrrigationMethod::Sprinkler),
            "Drip" => Ok(IrrigationMethod::Drip),
            other => Err(UnknownMethodName(other.to_string())),
        }
    }
}
