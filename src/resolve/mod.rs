//! Intent resolvers.
//!
//! One module per intent category. Every resolver returns structured data, a
//! [`Reply`] variant, never prose; rendering to text is a separate concern.
//! "Nothing matched" is always expressed as a structured summary or fallback
//! payload, not as an error.

pub mod convert;
pub mod dietary;
pub mod meal_plan;
pub mod nutrition;
pub mod recipes;
pub mod substitute;
pub mod technique;
pub mod timing;

use serde::Serialize;

use crate::catalog::Recipe;

pub use convert::ConversionAnswer;
pub use dietary::DietaryAnswer;
pub use meal_plan::{MealPlan, PlannedDay};
pub use nutrition::{NutritionAnswer, ScaledNutrition};
pub use recipes::{RecipeAnswer, RecipeList, RecipeSummary};
pub use substitute::{SubstituteLookup, SubstitutionAnswer};
pub use technique::TechniqueAnswer;
pub use timing::TimingAnswer;

/// Structured answer to one utterance. The variant mirrors the classified
/// intent; `General` is the capability overview for unmatched input.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    /// Full detail for a single recipe.
    RecipeDetail { recipe: Recipe },
    /// A titled list of recipe summaries.
    RecipeList(RecipeList),
    Substitutions(SubstitutionAnswer),
    Technique(TechniqueAnswer),
    Conversion(ConversionAnswer),
    MealPlan(MealPlan),
    Nutrition(NutritionAnswer),
    Timing(TimingAnswer),
    Dietary(DietaryAnswer),
    /// Capability overview, with example prompts.
    General { capabilities: Vec<String>, examples: Vec<String> },
}

/// The capability overview served for unclassifiable utterances.
pub fn general_reply() -> Reply {
    Reply::General {
        capabilities: vec![
            "Search recipes by cuisine, ingredient, or dietary needs".to_string(),
            "Show step-by-step cooking instructions".to_string(),
            "Suggest ingredient substitutions".to_string(),
            "Convert cooking measurements".to_string(),
            "Look up cooking times and temperatures".to_string(),
            "Report calories and macros for recipes".to_string(),
            "Build weekly meal plans".to_string(),
        ],
        examples: vec![
            "Show me Italian recipes".to_string(),
            "How do I make kimchi fried rice?".to_string(),
            "What can I substitute for eggs?".to_string(),
            "How long should I bake chicken?".to_string(),
        ],
    }
}
