//! Snow-conditions classification
//!
//! Determines whether a forecast period is favorable for natural snow,
//! machine-made ("faux") snow, or neither. The snowmaking check encodes a
//! temperature/relative-humidity threshold table that approximates a
//! wet-bulb temperature limit of roughly 20 °F without computing the
//! wet-bulb formula itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Weather codes that indicate frozen precipitation:
/// Blowing Snow, Snow, Snow Showers, Wintry Mix.
const SNOW_CODES: [&str; 4] = ["BS", "S", "SW", "WM"];

/// Weather codes compatible with snowmaking: the sky codes
/// (Clear, Fair Weather, Scattered Clouds, Broken Clouds, Overcast)
/// plus the snow codes. Anything else (rain, ice, fog, ...) would ruin
/// a freshly blown base.
const FAUX_CODES: [&str; 9] = ["CL", "FW", "SC", "BK", "OV", "BS", "S", "SW", "WM"];

/// Snow accumulation (inches) above which a period counts as real snow.
const SNOW_ACCUMULATION_MIN_IN: f64 = 0.25;

/// Computed label for a forecast period
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Conditions {
    /// Natural snowfall expected
    Snow,
    /// Cold and dry enough to run the snow guns
    Faux,
    /// Neither; rendered as an empty string
    #[default]
    #[serde(rename = "")]
    None,
}

impl Conditions {
    /// Display label; `None` is the empty string, matching the
    /// historical snapshot files.
    pub fn label(&self) -> &'static str {
        match self {
            Conditions::Snow => "Snow",
            Conditions::Faux => "Faux",
            Conditions::None => "",
        }
    }
}

impl fmt::Display for Conditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the temperature and relative humidity are favorable for
/// snowmaking.
///
/// Rows are evaluated top to bottom with inclusive temperature bounds:
/// at or below 20 °F snowmaking works at any humidity, then each extra
/// degree tolerates less moisture, up to 29 °F at no more than 10%
/// relative humidity. Warmer than 29 °F is never favorable.
pub fn is_favorable_for_snowmaking(min_temp_f: i32, humidity_pct: i32) -> bool {
    if min_temp_f <= 20 {
        true
    } else if min_temp_f <= 21 && humidity_pct <= 94 {
        true
    } else if min_temp_f <= 22 && humidity_pct <= 85 {
        true
    } else if min_temp_f <= 23 && humidity_pct <= 76 {
        true
    } else if min_temp_f <= 24 && humidity_pct <= 66 {
        true
    } else if min_temp_f <= 25 && humidity_pct <= 54 {
        true
    } else if min_temp_f <= 26 && humidity_pct <= 39 {
        true
    } else if min_temp_f <= 27 && humidity_pct <= 25 {
        true
    } else if min_temp_f <= 28 && humidity_pct <= 15 {
        true
    } else {
        min_temp_f <= 29 && humidity_pct <= 10
    }
}

/// Classify one forecast period.
///
/// A snow-coded period with more than a quarter inch of accumulation is
/// `Snow` regardless of temperature; a day with real snowfall must never
/// be labeled as needing the guns. Otherwise, a faux-eligible code with
/// favorable temperature and humidity is `Faux` (light snow-coded days
/// with trace accumulation still qualify). Everything else, including a
/// malformed coded string, is `None`.
pub fn classify(weather_coded: &str, snow_in: f64, min_temp_f: i32, humidity_pct: i32) -> Conditions {
    let Some(code) = extract_code(weather_coded) else {
        return Conditions::None;
    };

    if SNOW_CODES.contains(&code) && snow_in > SNOW_ACCUMULATION_MIN_IN {
        Conditions::Snow
    } else if is_favorable_for_snowmaking(min_temp_f, humidity_pct) && FAUX_CODES.contains(&code) {
        Conditions::Faux
    } else {
        Conditions::None
    }
}

/// Extract the trailing condition code from a coded weather string.
///
/// The code is the suffix matching `:[A-Z]+$` — a colon followed by one
/// or more uppercase ASCII letters at the very end, e.g. `"D::SW"` -> `SW`.
/// Returns `None` when no such suffix exists.
fn extract_code(weather_coded: &str) -> Option<&str> {
    let (_, tail) = weather_coded.rsplit_once(':')?;
    if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_uppercase()) {
        Some(tail)
    } else {
        None
    }
}
