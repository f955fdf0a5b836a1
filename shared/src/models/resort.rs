//! Ski resort models

use serde::{Deserialize, Serialize};

/// A ski resort as stored in the static resorts file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resort {
    /// Stable text identifier, e.g. `"snowshoe"`
    #[serde(rename = "text_id")]
    pub resort_id: String,
    pub name: String,
    /// Filename of the resort logo image
    pub logo: String,
    pub location: Location,
    pub links: ResortLinks,
    pub stats: ResortStats,
}

/// Where the resort is
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub state: String,
    pub state_short: String,
    pub address: String,
    pub lat: f64,
    #[serde(rename = "long")]
    pub lon: f64,
}

/// Outbound links for a resort
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResortLinks {
    pub main_url: String,
    pub conditions_url: String,
    pub map_url: String,
}

/// Trail statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResortStats {
    /// Skiable terrain in acres
    pub acres: u32,
    pub trails: u32,
    pub lifts: u32,
    /// Vertical drop in feet
    pub vertical: u32,
}
