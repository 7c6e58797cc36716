//! Article persistence
//!
//! The repository owns the authoritative in-memory collection and hands a
//! full [`StoreSnapshot`] to an [`ArticleStore`] after every mutation.
//! Backends decide the storage format:
//!
//! - [`JsonFileStore`]: `articles.json` plus a separate `images.json`
//! - [`MemoryStore`]: keeps the last snapshot, for tests and embedding

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, ARTICLES_FILE, IMAGES_FILE};
pub use memory::MemoryStore;

use crate::models::Article;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// First id handed out by an empty repository
pub const DEFAULT_FIRST_ID: u64 = 100;

/// Everything a backend needs to persist: the ordered records and the id allocator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub articles: Vec<Article>,
    #[serde(rename = "nextId")]
    pub next_id: u64,
}

impl StoreSnapshot {
    pub fn empty(first_id: u64) -> Self {
        Self {
            articles: Vec::new(),
            next_id: first_id,
        }
    }
}

/// Persistence backend
///
/// `load_all` returns `Ok(None)` when nothing has been stored yet.
pub trait ArticleStore: Send + Sync {
    /// Name of this backend (for logging)
    fn name(&self) -> &str;

    fn load_all(&self) -> Result<Option<StoreSnapshot>>;

    fn save_all(&self, snapshot: &StoreSnapshot) -> Result<()>;
}
