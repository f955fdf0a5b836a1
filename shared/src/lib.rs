//! Shared types and domain logic for the FauxSnow Forecast app
//!
//! This crate contains the resort and forecast models plus the pure
//! snow-conditions logic shared between the server and the CLI. It
//! performs no I/O.

pub mod assembly;
pub mod conditions;
pub mod models;

pub use assembly::*;
pub use conditions::*;
pub use models::*;
