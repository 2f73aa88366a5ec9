//! Domain models for the Hydromodule Irrigation Planner

mod crop;
mod forecast;
mod history;
mod irrigation;

pub use crop::*;
pub use forecast::*;
pub use history::*;
pub use irrigation::*;
