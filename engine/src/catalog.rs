//! Static crop and irrigation-method catalogs
//!
//! The tables themselves live in the closed enums of the `shared` crate, so
//! unknown keys are unrepresentable for typed callers. The catalogs add a
//! defensive string lookup for name-based input and verify the coefficient
//! invariants once, at construction, before any computation can run.

use shared::models::{Crop, GrowthPhase, IrrigationMethod};

use crate::error::{EngineError, EngineResult};

/// Catalog of crops and their phase coefficients
#[derive(Debug, Clone)]
pub struct CropCatalog {
    crops: &'static [Crop],
}

impl CropCatalog {
    /// Create the catalog, verifying every coefficient is positive
    pub fn new() -> EngineResult<Self> {
        for crop in Crop::ALL {
            for phase in GrowthPhase::ALL {
                let kc = crop.kc(phase);
                if kc <= 0.0 {
                    return Err(EngineError::CatalogInvariant(format!(
                        "Kc for {} ({} phase) must be positive, got {}",
                        crop, phase, kc
                    )));
                }
            }
        }
        Ok(Self { crops: &Crop::ALL })
    }

    /// All crops in catalog order
    pub fn crops(&self) -> &'static [Crop] {
        self.crops
    }

    /// Resolve a crop by display name
    pub fn lookup(&self, name: &str) -> EngineResult<Crop> {
        name.parse::<Crop>()
            .map_err(|e| EngineError::UnknownCrop(e.0))
    }
}

/// Catalog of irrigation methods and their application efficiencies
#[derive(Debug, Clone)]
pub struct IrrigationCatalog {
    methods: &'static [IrrigationMethod],
}

impl IrrigationCatalog {
    /// Create the catalog, verifying every efficiency is in (0, 1]
    pub fn new() -> EngineResult<Self> {
        for method in IrrigationMethod::ALL {
            let efficiency = method.efficiency();
            if efficiency <= 0.0 || efficiency > 1.0 {
                return Err(EngineError::CatalogInvariant(format!(
                    "Efficiency for {} must be in (0, 1], got {}",
                    method, efficiency
                )));
            }
        }
        Ok(Self {
            methods: &IrrigationMethod::ALL,
        })
    }

    /// All methods in catalog order
    pub fn methods(&self) -> &'static [IrrigationMethod] {
        self.methods
    }

    /// Resolve a method by display name
    pub fn lookup(&self, name: &str) -> EngineResult<IrrigationMethod> {
        name.parse::<IrrigationMethod>()
            .map_err(|e| EngineError::UnknownMethod(e.0))
    }
}
