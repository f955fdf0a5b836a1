//! Domain models for the FauxSnow Forecast app

mod forecast;
mod resort;

pub use forecast::*;
pub use resort::*;
