//! The assistant facade: classification, session state, and dispatch.
//!
//! [`Assistant`] owns the catalog and the session store and is the single
//! entry point for both the CLI and the server. `answer` runs the full
//! pipeline for one utterance: classify, load the session, run the matching
//! resolver, return a structured [`Reply`].

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::classify::{self, Intent};
use crate::error::ChefResult;
use crate::resolve::{self, Reply};
use crate::session::{SessionContext, SessionStore};

/// Tunables for answer shaping.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Maximum recipes shown in any list answer.
    pub list_limit: usize,
    /// Days in a chat-requested meal plan.
    pub plan_days: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            list_limit: 10,
            plan_days: 7,
        }
    }
}

/// The cooking assistant engine.
#[derive(Debug)]
pub struct Assistant {
    catalog: Catalog,
    sessions: SessionStore,
    config: AssistantConfig,
}

impl Assistant {
    /// Assistant over the bundled catalog with default configuration.
    pub fn new() -> Self {
        Self::with_config(Catalog::builtin(), AssistantConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: AssistantConfig) -> Self {
        info!(
            recipes = catalog.recipe_count(),
            list_limit = config.list_limit,
            "assistant initialized"
        );
        Self {
            catalog,
            sessions: SessionStore::new(),
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Snapshot a session's context, if it exists.
    pub fn session(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.get(session_id)
    }

    /// Drop a session's state. Returns whether the session existed.
    pub fn reset_session(&self, session_id: &str) -> bool {
        self.sessions.reset(session_id)
    }

    /// Answer one utterance within a session.
    ///
    /// The session is created lazily on first use. Classification never
    /// fails; resolvers report absence structurally, so the only errors that
    /// can surface here are validation failures from resolver internals.
    pub fn answer(&self, session_id: &str, utterance: &str) -> ChefResult<Reply> {
        let intent = classify::classify(utterance);
        debug!(session_id, %intent, "classified utterance");

        let reply = self.sessions.with_session(session_id, |ctx| match intent {
            Intent::RecipeQuery => {
                match resolve::recipes::resolve(&self.catalog, ctx, utterance, self.config.list_limit)
                {
                    resolve::RecipeAnswer::Detail { recipe } => Reply::RecipeDetail { recipe },
                    resolve::RecipeAnswer::List(list) => Reply::RecipeList(list),
                }
            }
            Intent::Substitution => Reply::Substitutions(resolve::substitute::resolve(utterance)),
            Intent::Technique => Reply::Technique(resolve::technique::resolve(&self.catalog, utterance)),
            Intent::Conversion => Reply::Conversion(resolve::convert::resolve(utterance)),
            Intent::MealPlan => Reply::MealPlan(resolve::meal_plan::plan(
                &self.catalog,
                self.config.plan_days,
                &ctx.dietary_preferences,
                true,
            )),
            Intent::Nutrition => {
                Reply::Nutrition(resolve::nutrition::resolve(&self.catalog, utterance))
            }
            Intent::Timing => Reply::Timing(resolve::timing::resolve(utterance)),
            Intent::Dietary => Reply::Dietary(resolve::dietary::resolve(
                &self.catalog,
                ctx,
                utterance,
                self.config.list_limit,
            )),
            Intent::General => resolve::general_reply(),
        });

        Ok(reply)
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_routes_by_intent() {
        let assistant = Assistant::new();
        assert!(matches!(
            assistant.answer("s", "show me a pasta recipe").unwrap(),
            Reply::RecipeDetail { .. } | Reply::RecipeList(_)
        ));
        assert!(matches!(
            assistant.answer("s", "substitute for butter?").unwrap(),
            Reply::Substitutions(_)
        ));
        assert!(matches!(
            assistant.answer("s", "convert 1 cup to ml").unwrap(),
            Reply::Conversion(_)
        ));
        assert!(matches!(
            assistant.answer("s", "hello!").unwrap(),
            Reply::General { .. }
        ));
    }

    #[test]
    fn recipe_detail_sets_session_state() {
        let assistant = Assistant::new();
        assistant.answer("s1", "how do I make miso soup?").unwrap();
        let ctx = assistant.session("s1").unwrap();
        assert_eq!(ctx.current_recipe.as_deref(), Some("miso_soup"));
    }

    #[test]
    fn sessions_do_not_leak_between_ids() {
        let assistant = Assistant::new();
        assistant.answer("a", "recipe for pad thai").unwrap();
        assistant.answer("b", "any vegan dishes?").unwrap();
        assert_eq!(assistant.session("a").unwrap().current_recipe.as_deref(), Some("pad_thai"));
        assert!(assistant.session("b").unwrap().current_recipe.is_none());
    }

    #[test]
    fn dietary_preference_feeds_meal_plans() {
        let assistant = Assistant::new();
        assistant.answer("s", "I'm vegan").unwrap();
        let reply = assistant.answer("s", "give me a meal plan please").unwrap();
        match reply {
            Reply::MealPlan(plan) => {
                for day in &plan.days {
                    let recipe = assistant.catalog().recipe(&day.recipe_id).unwrap();
                    assert!(recipe.has_tag(crate::catalog::DietaryTag::Vegan));
                }
            }
            other => panic!("expected meal plan, got {other:?}"),
        }
    }

    #[test]
    fn reset_clears_session() {
        let assistant = Assistant::new();
        assistant.answer("s", "recipe for greek salad").unwrap();
        assert!(assistant.reset_session("s"));
        assert!(assistant.session("s").is_none());
        assert!(!assistant.reset_session("s"));
    }
}
