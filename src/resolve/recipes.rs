//! Recipe query resolution.
//!
//! A recipe query walks a fixed precedence chain: exact recipe mention,
//! cuisine keyword, common ingredient keyword, difficulty keyword, then a
//! full catalog listing. The first stage that produces anything wins.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, Cuisine, Difficulty, Recipe, SearchFilter};
use crate::session::SessionContext;

/// Cuisine keywords checked in a fixed order; when an utterance names more
/// than one cuisine the earlier entry wins.
const CUISINE_SCAN_ORDER: [Cuisine; 10] = [
    Cuisine::Korean,
    Cuisine::Japanese,
    Cuisine::Italian,
    Cuisine::Mexican,
    Cuisine::Thai,
    Cuisine::Indian,
    Cuisine::French,
    Cuisine::Chinese,
    Cuisine::American,
    Cuisine::Mediterranean,
];

/// Ingredient keywords checked, in order, when no recipe or cuisine matched.
const COMMON_INGREDIENTS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "tofu",
    "rice",
    "pasta",
    "noodle",
    "vegetable",
    "egg",
];

/// One row of a recipe listing.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cuisine: Cuisine,
    pub difficulty: Difficulty,
    pub total_time_min: u32,
    pub servings: u32,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            cuisine: recipe.cuisine,
            difficulty: recipe.difficulty,
            total_time_min: recipe.total_time_min(),
            servings: recipe.servings,
        }
    }
}

/// A titled, capped recipe listing. `total` is the pre-cap match count so
/// callers can say "showing 10 of 14". An empty `recipes` list is a valid
/// answer, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeList {
    pub title: String,
    pub recipes: Vec<RecipeSummary>,
    pub total: usize,
}

impl RecipeList {
    pub fn new(title: impl Into<String>, matches: &[&Recipe], limit: usize) -> Self {
        Self {
            title: title.into(),
            recipes: matches.iter().take(limit).map(|r| (*r).into()).collect(),
            total: matches.len(),
        }
    }
}

/// Outcome of a recipe query.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecipeAnswer {
    Detail { recipe: Recipe },
    List(RecipeList),
}

/// Resolve a recipe-intent utterance against the catalog.
///
/// Side effects on the session: a detail answer sets `current_recipe`; list
/// answers record the surfaced ids in the search history.
pub fn resolve(
    catalog: &Catalog,
    ctx: &mut SessionContext,
    utterance: &str,
    limit: usize,
) -> RecipeAnswer {
    let lower = utterance.to_lowercase();

    // Stage 1: a specific recipe named by id (underscores read as spaces) or
    // by display name.
    for recipe in catalog.recipes() {
        let id_as_words = recipe.id.replace('_', " ");
        if lower.contains(&id_as_words) || lower.contains(&recipe.name.to_lowercase()) {
            debug!(recipe_id = %recipe.id, "recipe query resolved to detail");
            ctx.current_recipe = Some(recipe.id.clone());
            return RecipeAnswer::Detail {
                recipe: recipe.clone(),
            };
        }
    }

    // Stage 2: cuisine keyword.
    for cuisine in CUISINE_SCAN_ORDER {
        if lower.contains(cuisine.as_str()) {
            let matches = catalog.search(&SearchFilter {
                cuisine: Some(cuisine),
                ..SearchFilter::default()
            });
            return listed(
                ctx,
                RecipeList::new(format!("{} Recipes", title_case(cuisine.as_str())), &matches, limit),
            );
        }
    }

    // Stage 3: common ingredient keyword; a keyword only wins if it actually
    // matches recipes, otherwise the chain continues.
    for ingredient in COMMON_INGREDIENTS {
        if lower.contains(ingredient) {
            let matches = catalog.recipes_with_ingredient(ingredient);
            if !matches.is_empty() {
                return listed(
                    ctx,
                    RecipeList::new(
                        format!("Recipes with {}", title_case(ingredient)),
                        &matches,
                        limit,
                    ),
                );
            }
        }
    }

    // Stage 4: difficulty keyword.
    if lower.contains("easy") || lower.contains("simple") || lower.contains("quick") {
        let matches = catalog.search(&SearchFilter {
            difficulty: Some(Difficulty::Easy),
            ..SearchFilter::default()
        });
        return listed(ctx, RecipeList::new("Easy Recipes", &matches, limit));
    }

    // Stage 5: everything.
    let all: Vec<&Recipe> = catalog.recipes().collect();
    listed(ctx, RecipeList::new("Available Recipes", &all, limit))
}

fn listed(ctx: &mut SessionContext, list: RecipeList) -> RecipeAnswer {
    for summary in &list.recipes {
        ctx.record_searched(&summary.id);
    }
    RecipeAnswer::List(list)
}

/// Uppercase the first letter of each word, e.g. "korean" → "Korean".
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
