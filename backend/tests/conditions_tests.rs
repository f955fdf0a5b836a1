//! Conditions classifier tests
//!
//! Tests for the snow-conditions rules:
//! - snowmaking favorability step table boundaries
//! - Snow-before-Faux classification priority
//! - weather code suffix extraction

use proptest::prelude::*;
use shared::conditions::{classify, is_favorable_for_snowmaking, Conditions};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// At or below 20 F the guns run at any humidity
    #[test]
    fn test_cold_floor_ignores_humidity() {
        for humidity in 0..=100 {
            assert!(is_favorable_for_snowmaking(20, humidity));
            assert!(is_favorable_for_snowmaking(0, humidity));
            assert!(is_favorable_for_snowmaking(-10, humidity));
        }
    }

    /// Each step-table row is inclusive on both bounds
    #[test]
    fn test_step_table_boundaries() {
        let rows = [
            (21, 94),
            (22, 85),
            (23, 76),
            (24, 66),
            (25, 54),
            (26, 39),
            (27, 25),
            (28, 15),
            (29, 10),
        ];

        for (temp, max_humidity) in rows {
            assert!(
                is_favorable_for_snowmaking(temp, max_humidity),
                "expected favorable at {}F / {}%",
                temp,
                max_humidity
            );
            assert!(
                !is_favorable_for_snowmaking(temp, max_humidity + 1),
                "expected unfavorable at {}F / {}%",
                temp,
                max_humidity + 1
            );
        }
    }

    /// Warmer than the last table row is never favorable
    #[test]
    fn test_above_table_is_unfavorable() {
        for humidity in 0..=100 {
            assert!(!is_favorable_for_snowmaking(30, humidity));
            assert!(!is_favorable_for_snowmaking(45, humidity));
        }
    }

    /// Snow code with light accumulation on a warm day is nothing
    #[test]
    fn test_light_snow_warm_day() {
        assert_eq!(classify("::S", 0.2, 32, 80), Conditions::None);
    }

    /// Snow code with light accumulation but snowmaking weather is Faux
    #[test]
    fn test_light_snow_cold_dry_day() {
        assert_eq!(classify("::S", 0.2, 28, 10), Conditions::Faux);
    }

    /// Heavy accumulation wins no matter the temperature
    #[test]
    fn test_heavy_snow_overrides_warmth() {
        assert_eq!(classify("::S", 3.2, 32, 80), Conditions::Snow);
    }

    /// Rain codes are never eligible, even with perfect snowmaking weather
    #[test]
    fn test_rain_code_is_ineligible() {
        assert_eq!(classify("::RW", 0.0, 15, 5), Conditions::None);
    }

    /// All four snow-family codes trigger Snow above the threshold
    #[test]
    fn test_snow_family_codes() {
        for code in ["BS", "S", "SW", "WM"] {
            let coded = format!("D::{}", code);
            assert_eq!(classify(&coded, 1.0, 40, 90), Conditions::Snow);
        }
    }

    /// All sky codes become Faux under snowmaking weather
    #[test]
    fn test_sky_codes_make_faux() {
        for code in ["CL", "FW", "SC", "BK", "OV"] {
            let coded = format!("N::{}", code);
            assert_eq!(classify(&coded, 0.0, 18, 50), Conditions::Faux);
        }
    }

    /// Missing or malformed code suffix classifies as None, not an error
    #[test]
    fn test_malformed_coded_strings() {
        for coded in ["", "S", "D::", "D::s", "D::9S", ":S:", "D:S extra"] {
            assert_eq!(classify(coded, 5.0, 10, 5), Conditions::None, "{:?}", coded);
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for plausible winter temperatures (F)
    fn temp_strategy() -> impl Strategy<Value = i32> {
        -20i32..=60i32
    }

    /// Strategy for relative humidity percentages
    fn humidity_strategy() -> impl Strategy<Value = i32> {
        0i32..=100i32
    }

    proptest! {
        /// Favorability is monotonic: colder or drier never flips it off
        #[test]
        fn favorability_is_monotonic(temp in temp_strategy(), humidity in humidity_strategy()) {
            if is_favorable_for_snowmaking(temp, humidity) {
                prop_assert!(is_favorable_for_snowmaking(temp - 1, humidity));
                if humidity > 0 {
                    prop_assert!(is_favorable_for_snowmaking(temp, humidity - 1));
                }
            }
        }

        /// The classifier is a pure function: same inputs, same label
        #[test]
        fn classify_is_deterministic(
            temp in temp_strategy(),
            humidity in humidity_strategy(),
            snow_in in 0.0f64..10.0,
            code in "[A-Z]{1,2}",
        ) {
            let coded = format!("D::{}", code);
            let first = classify(&coded, snow_in, temp, humidity);
            let second = classify(&coded, snow_in, temp, humidity);
            prop_assert_eq!(first, second);
        }

        /// Snow requires both a snow-family code and real accumulation
        #[test]
        fn snow_label_requires_accumulation(
            temp in temp_strategy(),
            humidity in humidity_strategy(),
            snow_in in 0.0f64..=0.25,
        ) {
            for code in ["BS", "S", "SW", "WM"] {
                let coded = format!("D::{}", code);
                prop_assert_ne!(classify(&coded, snow_in, temp, humidity), Conditions::Snow);
            }
        }

        /// Faux is only ever produced under favorable snowmaking weather
        #[test]
        fn faux_label_implies_favorable(
            temp in temp_strategy(),
            humidity in humidity_strategy(),
            snow_in in 0.0f64..10.0,
            code in "[A-Z]{1,2}",
        ) {
            let coded = format!("D::{}", code);
            if classify(&coded, snow_in, temp, humidity) == Conditions::Faux {
                prop_assert!(is_favorable_for_snowmaking(temp, humidity));
            }
        }
    }
}
