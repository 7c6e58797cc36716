//! Rubric evaluation and aggregation
//!
//! Each criterion is a boolean rule over [`TextMetrics`]. The score is the
//! number of passing criteria times `100 / 15`, rounded, capped at 100.

use super::metrics::{is_clean_slug, TextMetrics};
use super::rubric::{Category, CriterionId, CRITERIA, POINTS_PER_CRITERION};
use crate::models::{Article, Assessment, CriteriaMap};
use serde::Serialize;
use tracing::debug;

/// SEO title upper bound, in characters
const MAX_SEO_TITLE_LEN: usize = 60;
/// Meta description bounds, in characters
const META_DESCRIPTION_RANGE: std::ops::RangeInclusive<usize> = 120..=160;
const MIN_WORDS: usize = 800;
const MIN_SENTENCES: usize = 3;
const MAX_WORDS_PER_SENTENCE: f64 = 25.0;
/// Keyword density bounds, in percent
const DENSITY_RANGE: std::ops::RangeInclusive<f64> = 0.5..=3.0;
const MIN_INTERNAL_LINKS: usize = 3;
const MIN_SLUG_LEN: usize = 5;
const MAX_RAW_CONTENT_LEN: usize = 50_000;
const MIN_UNIQUE_WORDS: usize = 300;

/// Outcome of one criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionResult {
    pub id: CriterionId,
    pub ok: bool,
    pub label: &'static str,
}

/// Result of scoring one article
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    /// Aggregate score, 0-100
    pub score: u8,
    /// Pass/fail keyed by criterion id
    #[serde(rename = "criteres")]
    pub criteria: CriteriaMap,
    /// Per-criterion outcome, in rubric order
    pub details: Vec<CriterionResult>,
    /// Metrics the rules were evaluated against
    pub metrics: TextMetrics,
}

impl ScoreReport {
    /// Score and criteria as one unit, ready to store on an article
    pub fn assessment(&self) -> Assessment {
        Assessment::new(self.score, self.criteria.clone())
    }

    pub fn passed_count(&self) -> usize {
        self.details.iter().filter(|d| d.ok).count()
    }

    pub fn is_passing(&self, id: CriterionId) -> bool {
        self.criteria.get(&id).copied().unwrap_or(false)
    }
}

/// Convert a count of passing criteria into a 0-100 score
pub fn aggregate(passed: usize) -> u8 {
    let score = (passed as f64 * POINTS_PER_CRITERION).round();
    score.clamp(0.0, 100.0) as u8
}

/// Evaluate a single criterion against precomputed metrics
pub fn evaluate(id: CriterionId, m: &TextMetrics) -> bool {
    match id {
        CriterionId::SeoTitle => {
            m.seo_title_len > 0 && m.seo_title_len <= MAX_SEO_TITLE_LEN && m.seo_title_has_keyword
        }
        CriterionId::MetaDescription => META_DESCRIPTION_RANGE.contains(&m.meta_description_len),
        CriterionId::SingleH1 => m.h1_count == 1,
        CriterionId::MinWords => m.word_count >= MIN_WORDS,
        CriterionId::Readability => {
            m.sentence_count >= MIN_SENTENCES && m.words_per_sentence() <= MAX_WORDS_PER_SENTENCE
        }
        CriterionId::PrimaryKeyword => m.keyword_present,
        CriterionId::LexicalFields => m.title_words_in_body >= 2 || m.title_word_count < 2,
        CriterionId::Density => !m.has_keyword() || DENSITY_RANGE.contains(&m.keyword_density),
        CriterionId::Coherence => m.seo_title_len > 10 && m.meta_description_len > 20,
        CriterionId::ClearSubject => m.h1_count == 1 && m.seo_title_len >= 10,
        CriterionId::InternalLinks => m.internal_link_count >= MIN_INTERNAL_LINKS,
        CriterionId::ImagesAlt => m.image_count == 0 || m.image_with_alt_count >= m.image_count,
        CriterionId::SeoUrl => is_clean_slug(&m.slug) && m.slug.chars().count() >= MIN_SLUG_LEN,
        CriterionId::LoadTime => m.raw_content_len <= MAX_RAW_CONTENT_LEN,
        CriterionId::UniqueContent => m.word_count >= MIN_UNIQUE_WORDS,
    }
}

/// Scores articles against the fixed rubric. Pure and deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentScorer;

impl ContentScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score an article
    pub fn score(&self, article: &Article) -> ScoreReport {
        let metrics = TextMetrics::from_article(article);

        let details: Vec<CriterionResult> = CRITERIA
            .iter()
            .map(|c| CriterionResult {
                id: c.id,
                ok: evaluate(c.id, &metrics),
                label: c.label,
            })
            .collect();
        let criteria: CriteriaMap = details.iter().map(|d| (d.id, d.ok)).collect();
        let passed = details.iter().filter(|d| d.ok).count();
        let score = aggregate(passed);

        debug!(
            "Scored article {}: {} ({}/{} criteria, {} words, {} links, density {:.2}%)",
            article.id,
            score,
            passed,
            details.len(),
            metrics.word_count,
            metrics.internal_link_count,
            metrics.keyword_density
        );

        ScoreReport {
            score,
            criteria,
            details,
            metrics,
        }
    }

    /// Human-readable breakdown, grouped by category in rubric order
    pub fn explain(&self, report: &ScoreReport) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "# SEO score: {} ({}/{} criteria)\n",
            report.score,
            report.passed_count(),
            report.details.len()
        ));

        for category in [Category::Structure, Category::Semantique, Category::Technique] {
            lines.push(format!("## {}\n", category));
            for detail in report
                .details
                .iter()
                .filter(|d| d.id.criterion().category == category)
            {
                let mark = if detail.ok { "[x]" } else { "[ ]" };
                lines.push(format!("- {} {}", mark, detail.label));
            }
            lines.push(String::new());
        }

        let m = &report.metrics;
        lines.push("## Metrics\n".to_string());
        lines.push(format!("- Words: {} in {} sentences", m.word_count, m.sentence_count));
        lines.push(format!("- SEO title: {} chars", m.seo_title_len));
        lines.push(format!("- Meta description: {} chars", m.meta_description_len));
        lines.push(format!(
            "- H1: {}, links: {}, images: {} ({} with alt)",
            m.h1_count, m.internal_link_count, m.image_count, m.image_with_alt_count
        ));
        if m.has_keyword() {
            lines.push(format!(
                "- Keyword \"{}\": {} occurrences, density {:.2}%",
                m.keyword, m.keyword_occurrences, m.keyword_density
            ));
        }

        lines.join("\n")
    }
}
