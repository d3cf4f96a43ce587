//! Nutrition resolution and serving scaling.
//!
//! The chat path answers for a recipe named in the utterance and otherwise
//! summarizes every recipe that carries nutrition data. Scaling multiplies
//! per-serving values: calories and sodium as integers, macros rounded to
//! one decimal.

use serde::Serialize;

use crate::catalog::{Catalog, NutritionInfo, Recipe};
use crate::error::NutritionError;

/// Largest serving count `scale` accepts. Keeps the integer fields well
/// inside `u64` for any per-serving figure a recipe can carry.
pub const MAX_SERVINGS: i64 = 1_000_000;

/// Per-serving nutrition multiplied out for a serving count.
#[derive(Debug, Clone, Serialize)]
pub struct ScaledNutrition {
    pub recipe_name: String,
    pub servings: u64,
    pub calories: u64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub sodium_mg: u64,
}

/// One row of the all-recipes nutrition overview.
#[derive(Debug, Clone, Serialize)]
pub struct NutritionOverviewRow {
    pub recipe_name: String,
    pub servings: u32,
    pub per_serving: NutritionInfo,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NutritionAnswer {
    /// Per-serving figures for one recipe.
    Recipe {
        recipe_name: String,
        per_serving: NutritionInfo,
    },
    /// The named recipe exists but carries no nutrition data.
    Unavailable { recipe_name: String },
    /// Per-serving figures for every recipe that has them.
    Overview { rows: Vec<NutritionOverviewRow> },
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scale a recipe's per-serving nutrition to `servings` servings.
///
/// `servings` must be between 1 and [`MAX_SERVINGS`]. Returns `Ok(None)`
/// when the recipe has no nutrition data; absence is not an error.
pub fn scale(recipe: &Recipe, servings: i64) -> Result<Option<ScaledNutrition>, NutritionError> {
    if !(1..=MAX_SERVINGS).contains(&servings) {
        return Err(NutritionError::InvalidServings { servings });
    }
    let Some(n) = recipe.nutrition else {
        return Ok(None);
    };
    let mult = servings as u64;
    Ok(Some(ScaledNutrition {
        recipe_name: recipe.name.clone(),
        servings: mult,
        calories: u64::from(n.calories) * mult,
        protein_g: round1(n.protein_g * servings as f64),
        carbs_g: round1(n.carbs_g * servings as f64),
        fat_g: round1(n.fat_g * servings as f64),
        fiber_g: round1(n.fiber_g * servings as f64),
        sodium_mg: u64::from(n.sodium_mg) * mult,
    }))
}

/// Resolve a nutrition-intent utterance: per-serving figures for a recipe
/// named in the utterance, otherwise the all-recipes overview.
pub fn resolve(catalog: &Catalog, utterance: &str) -> NutritionAnswer {
    let lower = utterance.to_lowercase();

    let mentioned = catalog.recipes().find(|recipe| {
        lower.contains(&recipe.id.replace('_', " ")) || lower.contains(&recipe.name.to_lowercase())
    });

    if let Some(recipe) = mentioned {
        return match recipe.nutrition {
            Some(per_serving) => NutritionAnswer::Recipe {
                recipe_name: recipe.name.clone(),
                per_serving,
            },
            None => NutritionAnswer::Unavailable {
                recipe_name: recipe.name.clone(),
            },
        };
    }

    NutritionAnswer::Overview {
        rows: catalog
            .recipes()
            .filter_map(|recipe| {
                recipe.nutrition.map(|per_serving| NutritionOverviewRow {
                    recipe_name: recipe.name.clone(),
                    servings: recipe.servings,
                    per_serving,
                })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_recipe_reports_per_serving_figures() {
        let catalog = Catalog::builtin();
        match resolve(&catalog, "calories in miso soup?") {
            NutritionAnswer::Recipe { recipe_name, per_serving } => {
                assert_eq!(recipe_name, "Miso Soup");
                assert_eq!(per_serving.calories, 85);
            }
            other => panic!("expected recipe figures, got {other:?}"),
        }
    }

    #[test]
    fn unnamed_questions_yield_the_overview() {
        let catalog = Catalog::builtin();
        match resolve(&catalog, "which dishes are healthy?") {
            NutritionAnswer::Overview { rows } => assert_eq!(rows.len(), 10),
            other => panic!("expected overview, got {other:?}"),
        }
    }

    #[test]
    fn scaling_multiplies_per_serving_values() {
        let catalog = Catalog::builtin();
        let recipe = catalog.recipe("kimchi_fried_rice").unwrap();
        let scaled = scale(recipe, 2).unwrap().unwrap();
        assert_eq!(scaled.calories, 1040); // 520 * 2
        assert_eq!(scaled.protein_g, 36.0);
        assert_eq!(scaled.sodium_mg, 1960);
    }

    #[test]
    fn scaling_by_one_is_identity() {
        let catalog = Catalog::builtin();
        let recipe = catalog.recipe("miso_soup").unwrap();
        let scaled = scale(recipe, 1).unwrap().unwrap();
        assert_eq!(scaled.calories, 85);
        assert_eq!(scaled.fat_g, 3.0);
    }

    #[test]
    fn non_positive_servings_are_rejected() {
        let catalog = Catalog::builtin();
        let recipe = catalog.recipe("miso_soup").unwrap();
        assert!(matches!(
            scale(recipe, 0),
            Err(NutritionError::InvalidServings { servings: 0 })
        ));
        assert!(scale(recipe, -3).is_err());
    }

    #[test]
    fn large_serving_counts_scale_without_truncation() {
        let catalog = Catalog::builtin();
        let recipe = catalog.recipe("kimchi_fried_rice").unwrap();
        let scaled = scale(recipe, MAX_SERVINGS).unwrap().unwrap();
        assert_eq!(scaled.servings, 1_000_000);
        assert_eq!(scaled.calories, 520_000_000);
        assert_eq!(scaled.sodium_mg, 980_000_000);
    }

    #[test]
    fn serving_counts_past_the_bound_are_rejected() {
        let catalog = Catalog::builtin();
        let recipe = catalog.recipe("miso_soup").unwrap();
        assert!(matches!(
            scale(recipe, MAX_SERVINGS + 1),
            Err(NutritionError::InvalidServings { .. })
        ));
        assert!(scale(recipe, 10_000_000).is_err());
        assert!(scale(recipe, (1_i64 << 32) + 2).is_err());
    }

    #[test]
    fn macros_round_to_one_decimal() {
        let catalog = Catalog::builtin();
        let recipe = catalog.recipe("pad_thai").unwrap();
        let scaled = scale(recipe, 3).unwrap().unwrap();
        assert_eq!(scaled.protein_g, 66.0);
        assert_eq!(scaled.carbs_g, 144.0);
    }
}
