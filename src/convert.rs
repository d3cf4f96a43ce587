//! Stateless cooking unit conversion.
//!
//! Volume units convert through a milliliter base, weight units through a
//! gram base, and celsius/fahrenheit through the affine temperature
//! formulas. Families never mix: cups-to-grams needs a density and is
//! rejected with [`ConvertError::IncompatibleUnits`].

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Which conversion family handled a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionKind {
    Volume,
    Weight,
    Temperature,
}

/// A completed conversion, with the inputs echoed back for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    pub amount: f64,
    pub from_unit: String,
    pub to_unit: String,
    /// Rounded to 2 decimals for volume/weight, to a whole number for
    /// temperature.
    pub result: f64,
    pub kind: ConversionKind,
}

/// Accepted volume unit spellings and their milliliter factors.
pub const VOLUME_UNITS: &[(&str, f64)] = &[
    ("ml", 1.0),
    ("l", 1000.0),
    ("liter", 1000.0),
    ("cup", 236.588),
    ("cups", 236.588),
    ("tbsp", 14.787),
    ("tablespoon", 14.787),
    ("tsp", 4.929),
    ("teaspoon", 4.929),
    ("fl_oz", 29.574),
    ("fluid_ounce", 29.574),
    ("pint", 473.176),
    ("quart", 946.353),
    ("gallon", 3785.41),
];

/// Accepted weight unit spellings and their gram factors.
pub const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("g", 1.0),
    ("gram", 1.0),
    ("grams", 1.0),
    ("kg", 1000.0),
    ("kilogram", 1000.0),
    ("oz", 28.3495),
    ("ounce", 28.3495),
    ("lb", 453.592),
    ("pound", 453.592),
];

fn normalize_unit(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

fn volume_factor(unit: &str) -> Option<f64> {
    VOLUME_UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
}

fn weight_factor(unit: &str) -> Option<f64> {
    WEIGHT_UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
}

/// The token "c" means celsius only when it is the whole unit; "celsius"
/// matches as a substring so "degrees_celsius" works too.
fn is_celsius(unit: &str) -> bool {
    unit == "c" || unit.contains("celsius")
}

fn is_fahrenheit(unit: &str) -> bool {
    unit == "f" || unit.contains("fahrenheit")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert `amount` from one unit to another.
///
/// Unit spellings are case-insensitive and spaces fold to underscores
/// ("fl oz" → "fl_oz"). Returns [`ConvertError::IncompatibleUnits`] when the
/// two units do not share a family, including entirely unknown units.
pub fn convert(amount: f64, from_unit: &str, to_unit: &str) -> Result<Conversion, ConvertError> {
    let from = normalize_unit(from_unit);
    let to = normalize_unit(to_unit);

    if let (Some(from_ml), Some(to_ml)) = (volume_factor(&from), volume_factor(&to)) {
        return Ok(Conversion {
            amount,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result: round2(amount * from_ml / to_ml),
            kind: ConversionKind::Volume,
        });
    }

    if let (Some(from_g), Some(to_g)) = (weight_factor(&from), weight_factor(&to)) {
        return Ok(Conversion {
            amount,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result: round2(amount * from_g / to_g),
            kind: ConversionKind::Weight,
        });
    }

    if is_celsius(&from) && is_fahrenheit(&to) {
        return Ok(Conversion {
            amount,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result: (amount * 9.0 / 5.0 + 32.0).round(),
            kind: ConversionKind::Temperature,
        });
    }

    if is_fahrenheit(&from) && is_celsius(&to) {
        return Ok(Conversion {
            amount,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result: ((amount - 32.0) * 5.0 / 9.0).round(),
            kind: ConversionKind::Temperature,
        });
    }

    Err(ConvertError::IncompatibleUnits {
        from: from_unit.to_string(),
        to: to_unit.to_string(),
    })
}

/// Canonical volume unit names, for reference listings.
pub fn volume_unit_names() -> Vec<&'static str> {
    VOLUME_UNITS.iter().map(|(name, _)| *name).collect()
}

/// Canonical weight unit names, for reference listings.
pub fn weight_unit_names() -> Vec<&'static str> {
    WEIGHT_UNITS.iter().map(|(name, _)| *name).collect()
}
