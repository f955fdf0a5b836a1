//! Business logic services for the FauxSnow Forecast backend

pub mod forecasts;
pub mod resorts;

pub use forecasts::ForecastService;
pub use resorts::ResortService;
