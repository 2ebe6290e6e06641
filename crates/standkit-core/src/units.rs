//! Unit conversion utilities
//!
//! All core data is stored in meters and kilograms. This module handles
//! display conversion between Metric (m) and Imperial (ft) systems and
//! parsing of user-entered lengths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meters per foot
const METERS_PER_FOOT: f64 = 0.3048;

/// Kilograms per pound
const KG_PER_POUND: f64 = 0.453_592_37;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (meters)
    Metric,
    /// Imperial system (feet)
    Imperial,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Metric
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "m" => Ok(Self::Metric),
            "imperial" | "ft" | "feet" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format length value for display
///
/// * `value_m` - Value in meters
/// * `system` - Target measurement system
pub fn format_length(value_m: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.2} m", value_m),
        MeasurementSystem::Imperial => {
            let feet = value_m / METERS_PER_FOOT;
            format!("{:.2} ft", feet)
        }
    }
}

/// Format area value for display
///
/// * `value_m2` - Value in square meters
/// * `system` - Target measurement system
pub fn format_area(value_m2: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.2} m\u{b2}", value_m2),
        MeasurementSystem::Imperial => {
            let sq_feet = value_m2 / (METERS_PER_FOOT * METERS_PER_FOOT);
            format!("{:.2} ft\u{b2}", sq_feet)
        }
    }
}

/// Format weight value for display
///
/// * `value_kg` - Value in kilograms
/// * `system` - Target measurement system
pub fn format_weight(value_kg: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1} kg", value_kg),
        MeasurementSystem::Imperial => {
            let pounds = value_kg / KG_PER_POUND;
            format!("{:.1} lb", pounds)
        }
    }
}

/// Parse length string to meters
///
/// * `input` - String to parse, optionally suffixed with "m" or "ft"
/// * `system` - Assumed measurement system when no suffix is present
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let (number, assume_imperial) = if let Some(stripped) = input.strip_suffix("ft") {
        (stripped.trim(), true)
    } else if let Some(stripped) = input.strip_suffix('m') {
        (stripped.trim(), false)
    } else {
        (input, system == MeasurementSystem::Imperial)
    };

    let value: f64 = number
        .parse()
        .map_err(|_| format!("Cannot parse length: {}", input))?;

    if assume_imperial {
        Ok(value * METERS_PER_FOOT)
    } else {
        Ok(value)
    }
}
