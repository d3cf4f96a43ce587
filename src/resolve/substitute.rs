//! Ingredient substitution resolution.
//!
//! Two surfaces share this module. The chat path scans the utterance against
//! a fixed table of common ingredients and returns every match. The direct
//! lookup path (API) walks a precedence chain: pantry ingredient record,
//! then recipe ingredient substitutes, then the common table, then a
//! structured not-found suggestion.

use serde::Serialize;

use crate::catalog::Catalog;

/// Common ingredient substitution table, in presentation order. The chat
/// fallback summary shows the first [`DEFAULT_GUIDE_LEN`] rows.
const COMMON_SUBS: &[(&str, &[&str])] = &[
    (
        "egg",
        &[
            "Flax egg (1 tbsp ground flax + 3 tbsp water)",
            "Chia egg",
            "Mashed banana",
            "Applesauce",
        ],
    ),
    ("butter", &["Coconut oil", "Olive oil", "Margarine", "Avocado"]),
    ("milk", &["Oat milk", "Almond milk", "Soy milk", "Coconut milk"]),
    ("cream", &["Coconut cream", "Cashew cream", "Silken tofu blended"]),
    (
        "flour",
        &["Almond flour", "Oat flour", "Rice flour", "Coconut flour (use less)"],
    ),
    ("sugar", &["Honey", "Maple syrup", "Coconut sugar", "Stevia"]),
    (
        "soy sauce",
        &["Tamari (gluten-free)", "Coconut aminos", "Worcestershire sauce"],
    ),
    (
        "garlic",
        &["Garlic powder (1/4 tsp per clove)", "Shallots", "Garlic-infused oil"],
    ),
];

/// Smaller table used only by the direct lookup path as its last resort.
const LOOKUP_FALLBACK_SUBS: &[(&str, &[&str])] = &[
    ("milk", &["Oat milk", "Almond milk", "Soy milk", "Coconut milk"]),
    ("cream", &["Coconut cream", "Cashew cream", "Evaporated milk"]),
    ("flour", &["Almond flour", "Oat flour", "Coconut flour (use less)"]),
    ("sugar", &["Honey", "Maple syrup", "Stevia", "Coconut sugar"]),
    ("lemon", &["Lime", "White wine vinegar", "Citric acid"]),
    ("wine", &["Broth + splash of vinegar", "Grape juice", "Apple juice"]),
];

const DEFAULT_GUIDE_LEN: usize = 5;

/// Substitutes for one ingredient.
#[derive(Debug, Clone, Serialize)]
pub struct SubstituteSection {
    pub ingredient: String,
    pub substitutes: Vec<String>,
}

/// Chat-path outcome: matched sections, or the default guide when nothing
/// in the utterance is covered by the table.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubstitutionAnswer {
    Matches { sections: Vec<SubstituteSection> },
    /// Leading table rows trimmed to two suggestions each.
    DefaultGuide { sections: Vec<SubstituteSection> },
}

/// Direct lookup outcome, in chain order.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SubstituteLookup {
    /// Matched a pantry ingredient record.
    Pantry {
        ingredient: String,
        substitutes: Vec<String>,
        storage: String,
    },
    /// Matched a recipe ingredient that carries substitutes.
    Recipe {
        ingredient: String,
        substitutes: Vec<String>,
        from_recipe: String,
    },
    /// Matched the common fallback table.
    Common {
        ingredient: String,
        substitutes: Vec<String>,
    },
    /// Nothing matched anywhere.
    NotFound { ingredient: String, suggestion: String },
}

/// Resolve a chat substitution utterance. Every table key mentioned in the
/// utterance contributes a section.
pub fn resolve(utterance: &str) -> SubstitutionAnswer {
    let lower = utterance.to_lowercase();
    let sections: Vec<SubstituteSection> = COMMON_SUBS
        .iter()
        .filter(|(ingredient, _)| lower.contains(ingredient))
        .map(|(ingredient, subs)| SubstituteSection {
            ingredient: ingredient.to_string(),
            substitutes: subs.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    if sections.is_empty() {
        SubstitutionAnswer::DefaultGuide {
            sections: COMMON_SUBS
                .iter()
                .take(DEFAULT_GUIDE_LEN)
                .map(|(ingredient, subs)| SubstituteSection {
                    ingredient: ingredient.to_string(),
                    substitutes: subs.iter().take(2).map(|s| s.to_string()).collect(),
                })
                .collect(),
        }
    } else {
        SubstitutionAnswer::Matches { sections }
    }
}

/// Direct substitute lookup for a single named ingredient.
pub fn lookup(catalog: &Catalog, ingredient: &str) -> SubstituteLookup {
    if let Some(info) = catalog.ingredient_info(ingredient) {
        return SubstituteLookup::Pantry {
            ingredient: info.name.clone(),
            substitutes: info.substitutes.clone(),
            storage: info.storage.clone(),
        };
    }

    let lower = ingredient.to_lowercase();
    for recipe in catalog.recipes() {
        for ing in &recipe.ingredients {
            if ing.name.to_lowercase().contains(&lower) && !ing.substitutes.is_empty() {
                return SubstituteLookup::Recipe {
                    ingredient: ing.name.clone(),
                    substitutes: ing.substitutes.clone(),
                    from_recipe: recipe.name.clone(),
                };
            }
        }
    }

    for (key, subs) in LOOKUP_FALLBACK_SUBS {
        if lower.contains(key) {
            return SubstituteLookup::Common {
                ingredient: ingredient.to_string(),
                substitutes: subs.iter().map(|s| s.to_string()).collect(),
            };
        }
    }

    SubstituteLookup::NotFound {
        ingredient: ingredient.to_string(),
        suggestion: "Try searching for the base ingredient or consult a substitution guide"
            .to_string(),
    }
}
