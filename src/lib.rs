//! seo-gate - SEO quality scoring and editorial workflow
//!
//! Scores article drafts against a fixed 15-criterion rubric, gates
//! submission on that score, and freezes SEO fields once an article is
//! certified for publication.

pub mod clock;
pub mod config;
pub mod models;
pub mod repository;
pub mod scoring;
pub mod store;
pub mod text;
pub mod workflow;

pub use clock::{Clock, FixedClock, SystemClock};
pub use models::{Article, ArticlePatch, Assessment, CriteriaMap};
pub use repository::{ArticleRepository, RepositoryError, RepositoryResult};
pub use scoring::{ContentScorer, CriterionId, ScoreReport};
pub use store::{ArticleStore, JsonFileStore, MemoryStore, StoreSnapshot};
pub use workflow::{Action, ArticleStatus, Role, SubmissionGate};
