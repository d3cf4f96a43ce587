//! Dietary preference resolution.
//!
//! The first dietary keyword found in the utterance selects a tag; matching
//! recipes come back as a list and the tag is remembered on the session so
//! later meal plans honor it. With no keyword the resolver describes the
//! dietary options it can filter by.

use serde::Serialize;

use crate::catalog::{Catalog, DietaryTag, SearchFilter};
use crate::resolve::recipes::{title_case, RecipeList};
use crate::session::SessionContext;

/// Keyword → tag map, in priority order. "gluten" and "dairy" are loose on
/// purpose so "gluten-free" and "no dairy" both hit.
const DIETARY_KEYWORDS: &[(&str, DietaryTag)] = &[
    ("vegetarian", DietaryTag::Vegetarian),
    ("vegan", DietaryTag::Vegan),
    ("gluten", DietaryTag::GlutenFree),
    ("dairy", DietaryTag::DairyFree),
    ("keto", DietaryTag::Keto),
    ("low carb", DietaryTag::LowCarb),
];

/// One row of the dietary options overview.
#[derive(Debug, Clone, Serialize)]
pub struct DietaryOption {
    pub tag: DietaryTag,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DietaryAnswer {
    /// Recipes carrying the matched tag.
    List { tag: DietaryTag, list: RecipeList },
    /// No keyword matched; the filterable options.
    Options { options: Vec<DietaryOption> },
}

fn option(tag: DietaryTag, description: &str) -> DietaryOption {
    DietaryOption {
        tag,
        description: description.to_string(),
    }
}

/// Resolve a dietary-intent utterance.
pub fn resolve(
    catalog: &Catalog,
    ctx: &mut SessionContext,
    utterance: &str,
    limit: usize,
) -> DietaryAnswer {
    let lower = utterance.to_lowercase();

    for (keyword, tag) in DIETARY_KEYWORDS {
        if lower.contains(keyword) {
            ctx.add_dietary_preference(*tag);
            let matches = catalog.search(&SearchFilter {
                dietary_tags: vec![*tag],
                ..SearchFilter::default()
            });
            let title = format!("{} Recipes", title_case(&tag.as_str().replace('_', " ")));
            let list = RecipeList::new(title, &matches, limit);
            for summary in &list.recipes {
                ctx.record_searched(&summary.id);
            }
            return DietaryAnswer::List { tag: *tag, list };
        }
    }

    DietaryAnswer::Options {
        options: vec![
            option(DietaryTag::Vegetarian, "No meat"),
            option(DietaryTag::Vegan, "No animal products"),
            option(DietaryTag::GlutenFree, "No wheat/gluten"),
            option(DietaryTag::DairyFree, "No dairy products"),
            option(DietaryTag::Keto, "Low carb, high fat"),
            option(DietaryTag::HighProtein, "Protein-rich dishes"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vegan_keyword_lists_vegan_recipes() {
        let catalog = Catalog::builtin();
        let mut ctx = SessionContext::default();
        match resolve(&catalog, &mut ctx, "show me vegan options", 10) {
            DietaryAnswer::List { tag, list } => {
                assert_eq!(tag, DietaryTag::Vegan);
                assert_eq!(list.title, "Vegan Recipes");
                let ids: Vec<&str> = list.recipes.iter().map(|r| r.id.as_str()).collect();
                assert!(ids.contains(&"vegetable_curry"));
                assert!(ids.contains(&"miso_soup"));
            }
            other => panic!("expected list, got {other:?}"),
        }
        assert_eq!(ctx.dietary_preferences, vec![DietaryTag::Vegan]);
    }

    #[test]
    fn loose_gluten_keyword_matches_gluten_free() {
        let catalog = Catalog::builtin();
        let mut ctx = SessionContext::default();
        match resolve(&catalog, &mut ctx, "I can't eat gluten", 10) {
            DietaryAnswer::List { tag, .. } => assert_eq!(tag, DietaryTag::GlutenFree),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn vegetarian_outranks_vegan_in_keyword_order() {
        let catalog = Catalog::builtin();
        let mut ctx = SessionContext::default();
        // "vegetarian" contains no "vegan"; but an utterance naming both
        // resolves to the first keyword in the table
        match resolve(&catalog, &mut ctx, "vegan or vegetarian, either works", 10) {
            DietaryAnswer::List { tag, .. } => assert_eq!(tag, DietaryTag::Vegetarian),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn no_keyword_returns_options() {
        let catalog = Catalog::builtin();
        let mut ctx = SessionContext::default();
        match resolve(&catalog, &mut ctx, "what diets do you know about?", 10) {
            DietaryAnswer::Options { options } => assert_eq!(options.len(), 6),
            other => panic!("expected options, got {other:?}"),
        }
        assert!(ctx.dietary_preferences.is_empty());
    }
}
