//! Rich diagnostic error types for the sous-chef engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so callers know exactly which value was
//! rejected and what the accepted values are.
//!
//! Absence of results is never an error: resolvers report "no match" as a
//! structured summary payload. The only true failures are unknown enum values
//! supplied to a catalog filter, malformed or cross-family conversion units,
//! and a non-positive serving multiplier.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the sous-chef engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the caller.
#[derive(Debug, Error, Diagnostic)]
pub enum ChefError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Nutrition(#[from] NutritionError),
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("unknown cuisine: {value}")]
    #[diagnostic(
        code(chef::catalog::unknown_cuisine),
        help(
            "Accepted cuisines are: korean, japanese, chinese, italian, mexican, \
             american, french, thai, indian, mediterranean."
        )
    )]
    UnknownCuisine { value: String },

    #[error("unknown difficulty: {value}")]
    #[diagnostic(
        code(chef::catalog::unknown_difficulty),
        help("Accepted difficulties are: easy, medium, hard.")
    )]
    UnknownDifficulty { value: String },

    #[error("unknown dietary tag: {value}")]
    #[diagnostic(
        code(chef::catalog::unknown_dietary_tag),
        help(
            "Accepted dietary tags are: vegetarian, vegan, gluten_free, dairy_free, \
             low_carb, high_protein, keto, paleo."
        )
    )]
    UnknownDietaryTag { value: String },
}

// ---------------------------------------------------------------------------
// Conversion errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    #[error("cannot convert from {from} to {to}")]
    #[diagnostic(
        code(chef::convert::incompatible_units),
        help(
            "Both units must belong to the same family. Volume units convert to \
             volume units, weight units to weight units, and temperatures \
             (celsius/fahrenheit) to each other. Mixed requests such as \
             cups-to-grams need a density and are not supported."
        )
    )]
    IncompatibleUnits { from: String, to: String },
}

// ---------------------------------------------------------------------------
// Nutrition errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum NutritionError {
    #[error("serving count out of range: {servings}")]
    #[diagnostic(
        code(chef::nutrition::invalid_servings),
        help(
            "Nutrition scaling multiplies per-serving values; request between 1 and \
             1,000,000 servings."
        )
    )]
    InvalidServings { servings: i64 },
}

/// Convenience alias for functions returning sous-chef results.
pub type ChefResult<T> = std::result::Result<T, ChefError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_converts_to_chef_error() {
        let err = CatalogError::UnknownCuisine {
            value: "klingon".into(),
        };
        let chef: ChefError = err.into();
        assert!(matches!(
            chef,
            ChefError::Catalog(CatalogError::UnknownCuisine { .. })
        ));
    }

    #[test]
    fn convert_error_converts_to_chef_error() {
        let err = ConvertError::IncompatibleUnits {
            from: "cup".into(),
            to: "g".into(),
        };
        let chef: ChefError = err.into();
        assert!(matches!(chef, ChefError::Convert(_)));
    }

    #[test]
    fn error_display_messages_are_descriptive() {
        let err = ConvertError::IncompatibleUnits {
            from: "cup".into(),
            to: "g".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("cup"));
        assert!(msg.contains("g"));

        let err = NutritionError::InvalidServings { servings: -2 };
        assert!(format!("{err}").contains("-2"));
    }
}
