//! Article repository
//!
//! Owns the in-memory article collection and the id allocator, applies the
//! SEO freeze on edits, and runs workflow transitions. Every mutation is
//! followed by a full save through the configured [`ArticleStore`].
//!
//! Mutating operations take `&mut self`, so a shared repository must sit
//! behind a lock (e.g. `Mutex<ArticleRepository>`); that keeps score and
//! criteria updates and the freeze check atomic per call.
//!
//! # Example
//!
//! ```rust,ignore
//! use seo_gate::{ArticlePatch, ArticleRepository, MemoryStore, SystemClock};
//!
//! let mut repo = ArticleRepository::open(MemoryStore::new(), SystemClock)?;
//! let article = repo.create(ArticlePatch::new().title("Compost urbain"))?;
//! repo.rescore(article.id)?;
//! repo.submit(article.id)?;
//! ```

use crate::clock::Clock;
use crate::models::{Article, ArticlePatch, Assessment, CriteriaMap};
use crate::scoring::{ContentScorer, ScoreReport};
use crate::store::{ArticleStore, StoreSnapshot, DEFAULT_FIRST_ID};
use crate::workflow::{transition, Action, ArticleStatus, SubmissionGate, TransitionDenied};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Article {id} not found")]
    NotFound { id: u64 },

    #[error("Article {id} scores {score}, below the submission threshold of {threshold}")]
    GateNotMet { id: u64, score: u8, threshold: u8 },

    #[error("No article id left to allocate")]
    IdsExhausted,

    #[error("Cannot {action} article {id} while it is {from}")]
    InvalidTransition {
        id: u64,
        from: ArticleStatus,
        action: Action,
    },

    /// The store failed. In-memory state is kept as is.
    #[error("Article store failed: {source:#}")]
    Persistence {
        #[source]
        source: anyhow::Error,
    },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// In-memory article collection backed by an [`ArticleStore`]
pub struct ArticleRepository {
    articles: Vec<Article>,
    next_id: u64,
    store: Box<dyn ArticleStore>,
    clock: Box<dyn Clock>,
    gate: SubmissionGate,
    scorer: ContentScorer,
}

impl ArticleRepository {
    /// Empty repository. Call [`init`](Self::init) to load from the store.
    pub fn new(store: impl ArticleStore + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            articles: Vec::new(),
            next_id: DEFAULT_FIRST_ID,
            store: Box::new(store),
            clock: Box::new(clock),
            gate: SubmissionGate::default(),
            scorer: ContentScorer::new(),
        }
    }

    /// New repository initialised from the store with default settings
    pub fn open(
        store: impl ArticleStore + 'static,
        clock: impl Clock + 'static,
    ) -> RepositoryResult<Self> {
        Self::new(store, clock).init()
    }

    pub fn with_gate(mut self, gate: SubmissionGate) -> Self {
        self.gate = gate;
        self
    }

    /// First id to hand out when the store turns out to be empty
    pub fn with_first_id(mut self, first_id: u64) -> Self {
        if self.articles.is_empty() {
            self.next_id = first_id;
        }
        self
    }

    /// Load from the store unless the collection is already populated
    pub fn init(mut self) -> RepositoryResult<Self> {
        if !self.articles.is_empty() {
            return Ok(self);
        }

        let loaded = self.store.load_all().map_err(|source| {
            warn!("Failed to load articles from {} store: {:#}", self.store.name(), source);
            RepositoryError::Persistence { source }
        })?;

        match loaded {
            Some(StoreSnapshot { articles, next_id }) => {
                // Never hand out an id that is already taken
                let min_next = articles.iter().map(|a| a.id.saturating_add(1)).max().unwrap_or(0);
                self.next_id = next_id.max(min_next);
                self.articles = articles;
                info!(
                    "Loaded {} articles from {} store (next id {})",
                    self.articles.len(),
                    self.store.name(),
                    self.next_id
                );
            }
            None => debug!("{} store is empty", self.store.name()),
        }

        Ok(self)
    }

    pub fn gate(&self) -> SubmissionGate {
        self.gate
    }

    /// Id the next `create` will assign
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// All articles, in creation order
    pub fn list(&self) -> &[Article] {
        &self.articles
    }

    pub fn list_by_status(&self, status: ArticleStatus) -> impl Iterator<Item = &Article> + '_ {
        self.articles.iter().filter(move |a| a.status == status)
    }

    /// Published articles, in creation order
    pub fn list_certified(&self) -> impl Iterator<Item = &Article> + '_ {
        self.list_by_status(ArticleStatus::Certified)
    }

    /// Articles awaiting review, in creation order
    pub fn list_submitted(&self) -> impl Iterator<Item = &Article> + '_ {
        self.list_by_status(ArticleStatus::Submitted)
    }

    pub fn get_by_id(&self, id: u64) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Current collection and allocator, as handed to the store
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            articles: self.articles.clone(),
            next_id: self.next_id,
        }
    }

    /// Create a draft from `patch`, with a fresh id and today's creation date.
    ///
    /// `u64::MAX` is never handed out; reaching it fails with `IdsExhausted`.
    pub fn create(&mut self, patch: ArticlePatch) -> RepositoryResult<Article> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(RepositoryError::IdsExhausted)?;

        let mut article = Article {
            id,
            created_on: self.clock.today(),
            status: ArticleStatus::Draft,
            ..Default::default()
        };
        article.apply(patch);
        self.articles.push(article.clone());

        info!("Created article {}", id);
        self.persist()?;
        Ok(article)
    }

    /// Generic edit.
    ///
    /// On a frozen article only `title` and `content` are applied; every
    /// other field in `patch` is dropped without error.
    pub fn update(&mut self, id: u64, patch: ArticlePatch) -> RepositoryResult<Article> {
        let index = self.index_of(id)?;
        let current = &mut self.articles[index];

        if current.seo_frozen {
            let dropped = patch.frozen_dropped_fields();
            if !dropped.is_empty() {
                debug!("Article {} is frozen, ignoring {}", id, dropped.join(", "));
            }
            current.apply(patch.restricted_to_frozen());
        } else {
            current.apply(patch);
        }

        let updated = current.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Score the article as it stands and store `{score, criteria}` through
    /// the edit path (a no-op on frozen articles)
    pub fn rescore(&mut self, id: u64) -> RepositoryResult<(Article, ScoreReport)> {
        let report = self.score(id)?;
        let article = self.update(id, ArticlePatch::new().assessment(report.assessment()))?;
        Ok((article, report))
    }

    /// Score the stored article without changing it
    pub fn score(&self, id: u64) -> RepositoryResult<ScoreReport> {
        let article = self.get_by_id(id).ok_or(RepositoryError::NotFound { id })?;
        Ok(self.scorer.score(article))
    }

    /// Move to `submitted` if the stored score passes the gate.
    /// A frozen article is returned unchanged.
    pub fn submit(&mut self, id: u64) -> RepositoryResult<Article> {
        self.apply_transition(id, Action::Submit, |_| {})
    }

    /// Move a submitted article to `rejected`. A frozen article is returned
    /// unchanged.
    pub fn reject(&mut self, id: u64) -> RepositoryResult<Article> {
        self.apply_transition(id, Action::Reject, |_| {})
    }

    /// Publish: set the final score and criteria, stamp the publication
    /// date and freeze SEO fields. Allowed from any state.
    pub fn certify(
        &mut self,
        id: u64,
        final_score: u8,
        criteria: CriteriaMap,
    ) -> RepositoryResult<Article> {
        let today = self.clock.today();
        let assessment = Assessment::new(final_score.min(100), criteria);
        self.apply_transition(id, Action::Certify, move |article| {
            article.assessment = assessment;
            article.published_on = Some(today);
            article.seo_frozen = true;
        })
    }

    /// Certify with a fresh score of the article as it stands
    pub fn certify_with_current_score(&mut self, id: u64) -> RepositoryResult<Article> {
        let report = self.score(id)?;
        self.certify(id, report.score, report.criteria)
    }

    fn apply_transition(
        &mut self,
        id: u64,
        action: Action,
        effect: impl FnOnce(&mut Article),
    ) -> RepositoryResult<Article> {
        let index = self.index_of(id)?;
        let article = &mut self.articles[index];
        let from = article.status;

        // Status is a frozen field: only certification may touch it again
        if article.seo_frozen && action != Action::Certify {
            debug!("Article {} is frozen, ignoring {}", id, action);
            return Ok(article.clone());
        }

        let to = transition(from, action, article.score(), &self.gate).map_err(|denied| {
            match denied {
                TransitionDenied::Gate { score, threshold } => RepositoryError::GateNotMet {
                    id,
                    score,
                    threshold,
                },
                TransitionDenied::State => RepositoryError::InvalidTransition { id, from, action },
            }
        })?;

        article.status = to;
        effect(article);
        let updated = article.clone();

        info!("Article {}: {} -> {} ({})", id, from, to, action);
        self.persist()?;
        Ok(updated)
    }

    fn index_of(&self, id: u64) -> RepositoryResult<usize> {
        self.articles
            .iter()
            .position(|a| a.id == id)
            .ok_or(RepositoryError::NotFound { id })
    }

    fn persist(&self) -> RepositoryResult<()> {
        self.store.save_all(&self.snapshot()).map_err(|source| {
            warn!("Failed to save articles to {} store: {:#}", self.store.name(), source);
            RepositoryError::Persistence { source }
        })
    }
}
