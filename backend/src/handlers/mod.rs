//! HTTP handlers for the FauxSnow Forecast API

pub mod forecasts;
pub mod health;
pub mod resorts;
pub mod stats;

pub use forecasts::*;
pub use health::*;
pub use resorts::*;
pub use stats::*;
