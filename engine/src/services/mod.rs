//! Calculation services for the Hydromodule Irrigation Planner

pub mod et0;
pub mod export;
pub mod forecast;
pub mod history;
pub mod water;

pub use forecast::ForecastService;
pub use history::HistoryLog;
