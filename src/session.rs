//! Per-session conversational state.
//!
//! Each session id owns a [`SessionContext`] holding the sticky bits of a
//! conversation: the recipe most recently shown, declared preferences, and a
//! bounded trail of recipe ids surfaced so far. Sessions are created lazily
//! on first touch and live until an explicit reset.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::DietaryTag;

/// Most recent searched-recipe ids kept per session.
const SEARCH_HISTORY_LIMIT: usize = 20;

/// Mutable state of one conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// Recipe id of the last recipe shown in full; nutrition and
    /// substitution questions fall back to it.
    pub current_recipe: Option<String>,
    pub dietary_preferences: Vec<DietaryTag>,
    pub favorite_cuisines: Vec<String>,
    pub cooking_skill: String,
    /// Recipe ids surfaced by list results, most recent last.
    pub searched_recipes: Vec<String>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            current_recipe: None,
            dietary_preferences: Vec::new(),
            favorite_cuisines: Vec::new(),
            cooking_skill: "intermediate".to_string(),
            searched_recipes: Vec::new(),
        }
    }
}

impl SessionContext {
    /// Record a recipe id surfaced by a list result, trimming the oldest
    /// entries past the history limit.
    pub fn record_searched(&mut self, recipe_id: &str) {
        self.searched_recipes.push(recipe_id.to_string());
        if self.searched_recipes.len() > SEARCH_HISTORY_LIMIT {
            let excess = self.searched_recipes.len() - SEARCH_HISTORY_LIMIT;
            self.searched_recipes.drain(..excess);
        }
    }

    /// Remember a dietary preference the user expressed, once.
    pub fn add_dietary_preference(&mut self, tag: DietaryTag) {
        if !self.dietary_preferences.contains(&tag) {
            self.dietary_preferences.push(tag);
        }
    }
}

/// Concurrent map of session id to context. Cheap to clone handles are not
/// needed; the store is owned by the assistant and shared by reference.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, SessionContext>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to the session's context, creating the
    /// session on first touch.
    pub fn with_session<T>(&self, session_id: &str, f: impl FnOnce(&mut SessionContext) -> T) -> T {
        let mut entry = self.sessions.entry(session_id.to_string()).or_default();
        f(entry.value_mut())
    }

    /// Snapshot a session's context, if the session exists.
    pub fn get(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.get(session_id).map(|e| e.value().clone())
    }

    /// Drop a session's state entirely. Returns whether a session existed.
    /// The next utterance under the same id starts from a fresh context.
    pub fn reset(&self, session_id: &str) -> bool {
        let existed = self.sessions.remove(session_id).is_some();
        debug!(session_id, existed, "session reset");
        existed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_are_created_lazily() {
        let store = SessionStore::new();
        assert!(store.get("a").is_none());
        store.with_session("a", |ctx| {
            ctx.current_recipe = Some("pad_thai".into());
        });
        assert_eq!(
            store.get("a").unwrap().current_recipe.as_deref(),
            Some("pad_thai")
        );
    }

    #[test]
    fn sessions_are_isolated() {
        let store = SessionStore::new();
        store.with_session("a", |ctx| ctx.current_recipe = Some("miso_soup".into()));
        store.with_session("b", |ctx| {
            assert!(ctx.current_recipe.is_none());
        });
    }

    #[test]
    fn reset_clears_state() {
        let store = SessionStore::new();
        store.with_session("a", |ctx| ctx.record_searched("greek_salad"));
        assert!(store.reset("a"));
        assert!(store.get("a").is_none());
        assert!(!store.reset("a"));
        store.with_session("a", |ctx| {
            assert!(ctx.searched_recipes.is_empty());
        });
    }

    #[test]
    fn search_history_is_bounded() {
        let mut ctx = SessionContext::default();
        for i in 0..30 {
            ctx.record_searched(&format!("recipe_{i}"));
        }
        assert_eq!(ctx.searched_recipes.len(), SEARCH_HISTORY_LIMIT);
        assert_eq!(ctx.searched_recipes.first().unwrap(), "recipe_10");
        assert_eq!(ctx.searched_recipes.last().unwrap(), "recipe_29");
    }

    #[test]
    fn dietary_preferences_deduplicate() {
        let mut ctx = SessionContext::default();
        ctx.add_dietary_preference(DietaryTag::Vegan);
        ctx.add_dietary_preference(DietaryTag::Vegan);
        assert_eq!(ctx.dietary_preferences.len(), 1);
    }
}
