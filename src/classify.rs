//! Keyword-based intent classification.
//!
//! The classifier is an ordered rule ladder: each rule pairs a keyword list
//! with an intent, a rule fires when any keyword appears (case-insensitive
//! substring) in the utterance, and the FIRST firing rule wins. Rule order is
//! therefore part of the contract — "how do I make pasta in no time" mentions
//! both "make" and "time", and must classify as a recipe query because the
//! recipe rule outranks the timing rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the user is asking for. One resolver exists per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    RecipeQuery,
    Substitution,
    Technique,
    Conversion,
    MealPlan,
    Nutrition,
    Timing,
    Dietary,
    /// Fallback when no rule fires; answered with capability guidance.
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RecipeQuery => "recipe_query",
            Self::Substitution => "substitution",
            Self::Technique => "technique",
            Self::Conversion => "conversion",
            Self::MealPlan => "meal_plan",
            Self::Nutrition => "nutrition",
            Self::Timing => "timing",
            Self::Dietary => "dietary",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority-ordered rule table. Earlier rows shadow later ones.
const RULES: &[(&[&str], Intent)] = &[
    (
        &["recipe", "cook", "make", "prepare", "dish"],
        Intent::RecipeQuery,
    ),
    (
        &["substitute", "replace", "instead of", "alternative"],
        Intent::Substitution,
    ),
    (
        &[
            "how to", "technique", "method", "sauté", "braise", "roast", "grill",
        ],
        Intent::Technique,
    ),
    (
        &[
            "convert", "cups to", "grams to", "tablespoon", "teaspoon", "ml", "ounce",
        ],
        Intent::Conversion,
    ),
    (
        &["meal plan", "weekly", "plan meals", "what to cook"],
        Intent::MealPlan,
    ),
    (
        &["calories", "nutrition", "protein", "carbs", "healthy"],
        Intent::Nutrition,
    ),
    (
        &["how long", "time", "minutes", "temperature", "done"],
        Intent::Timing,
    ),
    (
        &["vegetarian", "vegan", "gluten", "dairy", "keto", "low carb"],
        Intent::Dietary,
    ),
];

/// Classify an utterance into an [`Intent`]. Never fails; unmatched input is
/// [`Intent::General`].
pub fn classify(utterance: &str) -> Intent {
    let lower = utterance.to_lowercase();
    for (keywords, intent) in RULES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *intent;
        }
    }
    Intent::General
}
