//! Cooking technique resolution.
//!
//! The chat path scans the utterance for a known technique (by id or display
//! name) and returns its full record; with no match it returns an overview
//! of every technique. The direct lookup path reports the available
//! technique names when the requested one is unknown.

use serde::Serialize;

use crate::catalog::{Catalog, Technique};

/// Short form for the all-techniques overview.
#[derive(Debug, Clone, Serialize)]
pub struct TechniqueSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TechniqueAnswer {
    Detail { technique: Technique },
    Overview { techniques: Vec<TechniqueSummary> },
    /// Direct lookup miss, with the names that would have worked.
    Unknown { requested: String, available: Vec<String> },
}

/// Resolve a technique-intent utterance. First technique whose id (with
/// underscores read as spaces or hyphens) or name appears in the utterance
/// wins; otherwise every technique is summarized.
pub fn resolve(catalog: &Catalog, utterance: &str) -> TechniqueAnswer {
    let lower = utterance.to_lowercase();

    for technique in catalog.techniques() {
        let id_spaced = technique.id.replace('_', " ");
        let id_hyphenated = technique.id.replace('_', "-");
        if lower.contains(&technique.id)
            || lower.contains(&id_spaced)
            || lower.contains(&id_hyphenated)
            || lower.contains(&technique.name.to_lowercase())
        {
            return TechniqueAnswer::Detail {
                technique: technique.clone(),
            };
        }
    }

    TechniqueAnswer::Overview {
        techniques: catalog
            .techniques()
            .map(|t| TechniqueSummary {
                id: t.id.clone(),
                name: t.name.clone(),
                description: t.description.clone(),
            })
            .collect(),
    }
}

/// Direct lookup of a single technique by name.
pub fn lookup(catalog: &Catalog, name: &str) -> TechniqueAnswer {
    match catalog.technique(name) {
        Some(technique) => TechniqueAnswer::Detail {
            technique: technique.clone(),
        },
        None => TechniqueAnswer::Unknown {
            requested: name.to_string(),
            available: catalog.techniques().map(|t| t.id.clone()).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_technique_returns_detail() {
        let catalog = Catalog::builtin();
        match resolve(&catalog, "how to braise short ribs") {
            TechniqueAnswer::Detail { technique } => assert_eq!(technique.id, "braise"),
            other => panic!("expected detail, got {other:?}"),
        }
    }

    #[test]
    fn hyphenated_id_matches() {
        let catalog = Catalog::builtin();
        match resolve(&catalog, "what is the stir-fry method?") {
            TechniqueAnswer::Detail { technique } => assert_eq!(technique.id, "stir_fry"),
            other => panic!("expected detail, got {other:?}"),
        }
    }

    #[test]
    fn unmatched_utterance_gets_overview() {
        let catalog = Catalog::builtin();
        match resolve(&catalog, "how to get better at cooking techniques") {
            TechniqueAnswer::Overview { techniques } => assert_eq!(techniques.len(), 5),
            other => panic!("expected overview, got {other:?}"),
        }
    }

    #[test]
    fn lookup_miss_lists_available() {
        let catalog = Catalog::builtin();
        match lookup(&catalog, "sous vide") {
            TechniqueAnswer::Unknown { available, .. } => {
                assert_eq!(available.len(), 5);
                assert!(available.contains(&"saute".to_string()));
            }
            other => panic!("expected unknown, got {other:?}"),
        }
    }

    #[test]
    fn lookup_accepts_display_spellings() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            lookup(&catalog, "Stir Fry"),
            TechniqueAnswer::Detail { .. }
        ));
    }
}
