//! Conversion resolution for the chat path.
//!
//! When the utterance contains a concrete request like "convert 2 cups to
//! ml" the resolver performs it; anything else gets the static reference
//! charts. A parseable request naming incompatible units still falls back to
//! the charts rather than erroring: chat never fails on unit families, only
//! the direct API does.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::convert::{self, Conversion};

/// One reference chart row.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceRow {
    pub measurement: String,
    pub equivalent: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionAnswer {
    Converted { conversion: Conversion },
    Reference {
        volume: Vec<ReferenceRow>,
        weight: Vec<ReferenceRow>,
        temperature: Vec<ReferenceRow>,
    },
}

fn row(measurement: &str, equivalent: &str) -> ReferenceRow {
    ReferenceRow {
        measurement: measurement.to_string(),
        equivalent: equivalent.to_string(),
    }
}

/// The static reference charts served when no concrete request parses.
pub fn reference_charts() -> ConversionAnswer {
    ConversionAnswer::Reference {
        volume: vec![
            row("1 cup", "240 ml / 16 tbsp"),
            row("1 tablespoon (tbsp)", "15 ml / 3 tsp"),
            row("1 teaspoon (tsp)", "5 ml"),
            row("1 fluid ounce", "30 ml / 2 tbsp"),
        ],
        weight: vec![
            row("1 ounce (oz)", "28 grams"),
            row("1 pound (lb)", "454 grams"),
            row("1 kilogram", "2.2 pounds"),
        ],
        temperature: vec![
            row("325°F", "165°C (low oven)"),
            row("350°F", "175°C (moderate oven)"),
            row("375°F", "190°C (moderate-high)"),
            row("400°F", "200°C (hot oven)"),
            row("425°F", "220°C (very hot)"),
        ],
    }
}

fn request_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // "<amount> <unit> to|in|into <unit>", unit spellings as letters
        // with optional internal underscore or space ("fl oz")
        Regex::new(
            r"(?i)(\d+(?:\.\d+)?)\s*°?\s*([a-z]+(?:[ _][a-z]+)?)\s+(?:to|into|in)\s+°?\s*([a-z]+(?:[ _][a-z]+)?)",
        )
        .expect("conversion request pattern is valid")
    })
}

/// Resolve a conversion-intent utterance.
pub fn resolve(utterance: &str) -> ConversionAnswer {
    if let Some(caps) = request_pattern().captures(utterance) {
        let amount: f64 = caps[1].parse().unwrap_or(0.0);
        let from_unit = caps[2].trim();
        let to_unit = caps[3].trim();
        match convert::convert(amount, from_unit, to_unit) {
            Ok(conversion) => return ConversionAnswer::Converted { conversion },
            Err(err) => {
                debug!(%err, "chat conversion request fell back to reference charts");
            }
        }
    }
    reference_charts()
}
