//! sous-chef: a cooking assistant engine.
//!
//! The pipeline for one chat turn is classify → resolve → reply:
//! an utterance is classified into one of nine intents by an ordered
//! keyword ladder, the matching resolver answers it from a static recipe
//! catalog, and the structured [`resolve::Reply`] is rendered to markdown
//! (CLI) or serialized to JSON (server).
//!
//! ```
//! use sous_chef::Assistant;
//!
//! let assistant = Assistant::new();
//! let reply = assistant.answer("demo", "how do I make miso soup?").unwrap();
//! let text = sous_chef::render::render(&reply);
//! assert!(text.contains("Miso Soup"));
//! ```

pub mod assistant;
pub mod catalog;
pub mod classify;
pub mod convert;
pub mod error;
pub mod render;
pub mod resolve;
pub mod session;

pub use assistant::{Assistant, AssistantConfig};
pub use catalog::Catalog;
pub use classify::Intent;
pub use error::{ChefError, ChefResult};
pub use resolve::Reply;
