//! Shared types and models for the Hydromodule Irrigation Planner
//!
//! This crate contains the domain model shared between the calculation
//! engine and any presentation shell (forms, charts, exports) built on
//! top of it.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
