//! Deterministic meal plan generation.
//!
//! Selection is a pure function of the catalog order and the inputs: no
//! randomness, so the same request always yields the same plan. Dietary
//! preferences filter the candidate pool (a recipe qualifies if it carries
//! ANY requested tag); an empty filtered pool falls back to the full
//! catalog rather than producing an empty plan. Cuisine variety prefers
//! cuisines not yet used, resetting the used set when it exhausts the pool.

use serde::Serialize;

use crate::catalog::{Catalog, Cuisine, DietaryTag, Difficulty, Recipe};

/// Plans never exceed one week.
pub const MAX_PLAN_DAYS: u32 = 7;

#[derive(Debug, Clone, Serialize)]
pub struct PlannedDay {
    /// 1-based day number.
    pub day: u32,
    pub recipe_id: String,
    pub recipe_name: String,
    pub cuisine: Cuisine,
    pub difficulty: Difficulty,
    pub total_time_min: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MealPlan {
    pub days: Vec<PlannedDay>,
}

/// Generate a meal plan of up to [`MAX_PLAN_DAYS`] days.
pub fn plan(
    catalog: &Catalog,
    days: u32,
    preferences: &[DietaryTag],
    cuisine_variety: bool,
) -> MealPlan {
    let all: Vec<&Recipe> = catalog.recipes().collect();

    let pool: Vec<&Recipe> = if preferences.is_empty() {
        all.clone()
    } else {
        let filtered: Vec<&Recipe> = all
            .iter()
            .copied()
            .filter(|r| preferences.iter().any(|tag| r.has_tag(*tag)))
            .collect();
        if filtered.is_empty() { all.clone() } else { filtered }
    };

    let mut cuisines_used: Vec<Cuisine> = Vec::new();
    let mut planned = Vec::new();

    for day in 1..=days.min(MAX_PLAN_DAYS) {
        let mut available: Vec<&Recipe> = pool.clone();

        if cuisine_variety && cuisines_used.len() < pool.len() {
            available = pool
                .iter()
                .copied()
                .filter(|r| !cuisines_used.contains(&r.cuisine))
                .collect();
            if available.is_empty() {
                available = pool.clone();
                cuisines_used.clear();
            }
        }

        if available.is_empty() {
            break;
        }

        let recipe = available[day as usize % available.len()];
        if !cuisines_used.contains(&recipe.cuisine) {
            cuisines_used.push(recipe.cuisine);
        }

        planned.push(PlannedDay {
            day,
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            cuisine: recipe.cuisine,
            difficulty: recipe.difficulty,
            total_time_min: recipe.total_time_min(),
        });
    }

    MealPlan { days: planned }
}

/// Resolve a meal-plan utterance for the chat path: a full week, filtered by
/// the session's stored dietary preferences.
pub fn resolve(catalog: &Catalog, preferences: &[DietaryTag]) -> MealPlan {
    plan(catalog, MAX_PLAN_DAYS, preferences, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_is_deterministic() {
        let catalog = Catalog::builtin();
        let a = plan(&catalog, 7, &[], true);
        let b = plan(&catalog, 7, &[], true);
        let ids_a: Vec<&str> = a.days.iter().map(|d| d.recipe_id.as_str()).collect();
        let ids_b: Vec<&str> = b.days.iter().map(|d| d.recipe_id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(a.days.len(), 7);
    }

    #[test]
    fn days_are_one_based_and_capped() {
        let catalog = Catalog::builtin();
        let p = plan(&catalog, 30, &[], true);
        assert_eq!(p.days.len(), MAX_PLAN_DAYS as usize);
        assert_eq!(p.days.first().unwrap().day, 1);
        assert_eq!(p.days.last().unwrap().day, 7);
    }

    #[test]
    fn preferences_filter_the_pool() {
        let catalog = Catalog::builtin();
        let p = plan(&catalog, 7, &[DietaryTag::Vegan], true);
        for day in &p.days {
            let recipe = catalog.recipe(&day.recipe_id).unwrap();
            assert!(recipe.has_tag(DietaryTag::Vegan), "{} is not vegan", day.recipe_id);
        }
    }

    #[test]
    fn unsatisfiable_preferences_fall_back_to_full_catalog() {
        let catalog = Catalog::builtin();
        // no builtin recipe is paleo
        let p = plan(&catalog, 7, &[DietaryTag::Paleo], true);
        assert_eq!(p.days.len(), 7);
    }

    #[test]
    fn cuisine_variety_avoids_repeats_while_pool_allows() {
        let catalog = Catalog::builtin();
        let p = plan(&catalog, 7, &[], true);
        let mut seen = Vec::new();
        for day in &p.days {
            assert!(!seen.contains(&day.cuisine), "cuisine repeated on day {}", day.day);
            seen.push(day.cuisine);
        }
    }

    #[test]
    fn zero_days_yields_empty_plan() {
        let catalog = Catalog::builtin();
        assert!(plan(&catalog, 0, &[], true).days.is_empty());
    }
}
