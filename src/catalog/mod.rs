//! Static recipe catalog: recipes, pantry ingredients, and techniques.
//!
//! The catalog is built once and never mutated; every resolver borrows it
//! read-only, which is what makes the whole engine safe to share across
//! sessions without locks. Storage is insertion-ordered so list output and
//! meal-plan selection are reproducible run to run.

mod builtin;
pub mod types;

use indexmap::IndexMap;

pub use types::{
    Cuisine, DietaryTag, Difficulty, Ingredient, IngredientInfo, NutritionInfo, Recipe, Technique,
};

/// Search criteria for [`Catalog::search`]. All fields are optional and
/// conjunctive: a recipe must pass every populated filter.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Free-text query matched (case-insensitive substring) against recipe
    /// name, description, and ingredient names.
    pub query: Option<String>,
    pub cuisine: Option<Cuisine>,
    pub difficulty: Option<Difficulty>,
    /// A recipe must carry ALL of these tags, not any.
    pub dietary_tags: Vec<DietaryTag>,
    /// Maximum prep + cook time, in minutes.
    pub max_time_min: Option<u32>,
}

impl SearchFilter {
    fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(query) = &self.query {
            let q = query.to_lowercase();
            if !q.is_empty() {
                let hit = recipe.name.to_lowercase().contains(&q)
                    || recipe.description.to_lowercase().contains(&q)
                    || recipe
                        .ingredients
                        .iter()
                        .any(|ing| ing.name.to_lowercase().contains(&q));
                if !hit {
                    return false;
                }
            }
        }
        if let Some(cuisine) = self.cuisine
            && recipe.cuisine != cuisine
        {
            return false;
        }
        if let Some(difficulty) = self.difficulty
            && recipe.difficulty != difficulty
        {
            return false;
        }
        if !self.dietary_tags.iter().all(|tag| recipe.has_tag(*tag)) {
            return false;
        }
        if let Some(max) = self.max_time_min
            && recipe.total_time_min() > max
        {
            return false;
        }
        true
    }
}

/// Immutable, insertion-ordered store of recipes, pantry ingredient records,
/// and cooking techniques.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: IndexMap<String, Recipe>,
    ingredient_infos: IndexMap<String, IngredientInfo>,
    techniques: IndexMap<String, Technique>,
}

/// Lowercase a lookup key and fold spaces and hyphens to underscores, so
/// "stir fry", "stir-fry", and "stir_fry" all reach the same record.
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace([' ', '-'], "_")
}

impl Catalog {
    /// The bundled catalog: ten recipes, eight pantry ingredients, five
    /// techniques.
    pub fn builtin() -> Self {
        Self::from_parts(
            builtin::recipes(),
            builtin::ingredient_infos(),
            builtin::techniques(),
        )
    }

    /// Build a catalog from explicit record lists. Later duplicates of an id
    /// replace earlier ones; ids are stored as-is (they are already
    /// normalized keys).
    pub fn from_parts(
        recipes: Vec<Recipe>,
        ingredient_infos: Vec<IngredientInfo>,
        techniques: Vec<Technique>,
    ) -> Self {
        Self {
            recipes: recipes.into_iter().map(|r| (r.id.clone(), r)).collect(),
            ingredient_infos: ingredient_infos
                .into_iter()
                .map(|i| (i.id.clone(), i))
                .collect(),
            techniques: techniques.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    // ── Lookups ──────────────────────────────────────────────────────────

    /// Exact recipe lookup after key normalization.
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.get(&normalize_key(id))
    }

    /// Pantry ingredient lookup after key normalization.
    pub fn ingredient_info(&self, name: &str) -> Option<&IngredientInfo> {
        self.ingredient_infos.get(&normalize_key(name))
    }

    /// Technique lookup after key normalization.
    pub fn technique(&self, name: &str) -> Option<&Technique> {
        self.techniques.get(&normalize_key(name))
    }

    // ── Searches ─────────────────────────────────────────────────────────

    /// Conjunctive multi-criteria search, in catalog order.
    pub fn search(&self, filter: &SearchFilter) -> Vec<&Recipe> {
        self.recipes
            .values()
            .filter(|recipe| filter.matches(recipe))
            .collect()
    }

    /// Recipes whose ingredient list mentions `ingredient` (case-insensitive
    /// substring against ingredient names), in catalog order.
    pub fn recipes_with_ingredient(&self, ingredient: &str) -> Vec<&Recipe> {
        let needle = ingredient.to_lowercase();
        self.recipes
            .values()
            .filter(|recipe| {
                recipe
                    .ingredients
                    .iter()
                    .any(|ing| ing.name.to_lowercase().contains(&needle))
            })
            .collect()
    }

    // ── Enumeration ──────────────────────────────────────────────────────

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    pub fn techniques(&self) -> impl Iterator<Item = &Technique> {
        self.techniques.values()
    }

    pub fn ingredient_infos(&self) -> impl Iterator<Item = &IngredientInfo> {
        self.ingredient_infos.values()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    /// All cuisine names, in enum declaration order.
    pub fn cuisines(&self) -> Vec<&'static str> {
        Cuisine::ALL.iter().map(Cuisine::as_str).collect()
    }

    /// All dietary tag names, in enum declaration order.
    pub fn dietary_tags(&self) -> Vec<&'static str> {
        DietaryTag::ALL.iter().map(DietaryTag::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_expected_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.recipe_count(), 10);
        assert_eq!(catalog.techniques().count(), 5);
        assert_eq!(catalog.ingredient_infos().count(), 8);
    }

    #[test]
    fn recipe_lookup_normalizes_keys() {
        let catalog = Catalog::builtin();
        assert!(catalog.recipe("kimchi_fried_rice").is_some());
        assert!(catalog.recipe("Kimchi Fried Rice").is_some());
        assert!(catalog.recipe("kimchi-fried-rice").is_some());
        assert!(catalog.recipe("beef wellington").is_none());
    }

    #[test]
    fn technique_lookup_folds_hyphens() {
        let catalog = Catalog::builtin();
        assert!(catalog.technique("stir-fry").is_some());
        assert!(catalog.technique("Stir Fry").is_some());
        assert!(catalog.technique("sous vide").is_none());
    }

    #[test]
    fn search_filters_are_conjunctive() {
        let catalog = Catalog::builtin();
        let filter = SearchFilter {
            cuisine: Some(Cuisine::Italian),
            difficulty: Some(Difficulty::Easy),
            ..SearchFilter::default()
        };
        let hits = catalog.search(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "pasta_aglio_olio");
    }

    #[test]
    fn dietary_tag_filter_requires_all_tags() {
        let catalog = Catalog::builtin();
        let vegan = catalog.search(&SearchFilter {
            dietary_tags: vec![DietaryTag::Vegan],
            ..SearchFilter::default()
        });
        let ids: Vec<&str> = vegan.iter().map(|r| r.id.as_str()).collect();
        assert!(ids.contains(&"vegetable_curry"));
        assert!(ids.contains(&"miso_soup"));
        assert!(!ids.contains(&"kimchi_fried_rice"));

        // vegan + gluten_free narrows to the curry only
        let both = catalog.search(&SearchFilter {
            dietary_tags: vec![DietaryTag::Vegan, DietaryTag::GlutenFree],
            ..SearchFilter::default()
        });
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].id, "vegetable_curry");
    }

    #[test]
    fn query_matches_ingredient_names() {
        let catalog = Catalog::builtin();
        let hits = catalog.search(&SearchFilter {
            query: Some("tamarind".into()),
            ..SearchFilter::default()
        });
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "pad_thai");
    }

    #[test]
    fn max_time_filter_uses_total_time() {
        let catalog = Catalog::builtin();
        let quick = catalog.search(&SearchFilter {
            max_time_min: Some(20),
            ..SearchFilter::default()
        });
        // pasta aglio e olio (20), miso soup (20), omelette (10), greek salad (15)
        assert_eq!(quick.len(), 4);
    }

    #[test]
    fn ingredient_search_is_substring_based() {
        let catalog = Catalog::builtin();
        let with_chicken = catalog.recipes_with_ingredient("chicken");
        let ids: Vec<&str> = with_chicken.iter().map(|r| r.id.as_str()).collect();
        assert!(ids.contains(&"chicken_stir_fry"));
        // pad thai lists "Shrimp or chicken"
        assert!(ids.contains(&"pad_thai"));
    }

    #[test]
    fn search_results_preserve_catalog_order() {
        let catalog = Catalog::builtin();
        let all = catalog.search(&SearchFilter::default());
        assert_eq!(all.len(), 10);
        assert_eq!(all[0].id, "kimchi_fried_rice");
        assert_eq!(all[9].id, "greek_salad");
    }
}
