//! SEO Scoring
//!
//! Scores an article against a fixed rubric of fifteen boolean criteria.
//!
//! # Scoring Formula
//!
//! ```text
//! Score = round(passing_criteria × 100 / 15), capped at 100
//! ```
//!
//! No partial credit: each criterion passes or fails outright.
//!
//! # Criteria
//!
//! - **Structure**: SEO title, meta description, single H1, ≥ 800 words, readability
//! - **Semantique**: keyword present, secondary lexical fields, keyword density,
//!   coherence, clear subject
//! - **Technique**: ≥ 3 internal links, image alt text, clean slug, body size,
//!   ≥ 300 words
//!
//! # Example
//!
//! A well-formed article failing only its slug passes 14 criteria:
//! `round(14 × 6.667) = 93`.

mod engine;
mod metrics;
mod rubric;

pub use engine::{aggregate, evaluate, ContentScorer, CriterionResult, ScoreReport};
pub use metrics::{is_clean_slug, strip_tags, TextMetrics};
pub use rubric::{
    Category, Criterion, CriterionId, CRITERIA, CRITERION_COUNT, POINTS_PER_CRITERION,
};
