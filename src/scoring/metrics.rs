//! Text metrics extracted from an article
//!
//! Lightweight pattern matching over the HTML-like body. Nothing here
//! validates markup; it only counts the constructs the rubric asks about.
//! Lengths are counted in characters.

use crate::models::Article;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
static H1_PATTERN: OnceLock<Regex> = OnceLock::new();
static LINK_PATTERN: OnceLock<Regex> = OnceLock::new();
static IMG_PATTERN: OnceLock<Regex> = OnceLock::new();
static IMG_ALT_PATTERN: OnceLock<Regex> = OnceLock::new();
static SENTENCE_BREAK_PATTERN: OnceLock<Regex> = OnceLock::new();
static SLUG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag pattern"))
}

fn h1_pattern() -> &'static Regex {
    H1_PATTERN.get_or_init(|| Regex::new(r"(?i)<h1[^>]*>").expect("h1 pattern"))
}

fn link_pattern() -> &'static Regex {
    LINK_PATTERN.get_or_init(|| Regex::new(r#"(?i)<a\s+href=["'][^"']*["']"#).expect("link pattern"))
}

fn img_pattern() -> &'static Regex {
    IMG_PATTERN.get_or_init(|| Regex::new(r"(?i)<img").expect("img pattern"))
}

fn img_alt_pattern() -> &'static Regex {
    IMG_ALT_PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)<img[^>]*alt\s*=\s*["'][^"']+["']"#).expect("img alt pattern")
    })
}

fn sentence_break_pattern() -> &'static Regex {
    SENTENCE_BREAK_PATTERN.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence pattern"))
}

fn slug_pattern() -> &'static Regex {
    SLUG_PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern"))
}

/// Replace every tag with a single space.
///
/// Tags become spaces rather than disappearing so that `a<br>b` still
/// counts as two words.
pub fn strip_tags(html: &str) -> String {
    tag_pattern().replace_all(html, " ").into_owned()
}

/// Whether `slug` is lowercase alphanumerics joined by single hyphens
pub fn is_clean_slug(slug: &str) -> bool {
    slug_pattern().is_match(slug)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Named metrics the rubric rules are written against
#[derive(Debug, Clone, Default, Serialize)]
pub struct TextMetrics {
    /// Trimmed SEO title length
    pub seo_title_len: usize,
    /// SEO title contains the keyword (true when no keyword is set)
    pub seo_title_has_keyword: bool,
    /// Trimmed meta description length
    pub meta_description_len: usize,
    /// Lower-cased, trimmed target keyword
    pub keyword: String,
    /// Whitespace-separated words in the tag-stripped body
    pub word_count: usize,
    /// Non-empty fragments between `.`, `!` and `?` runs
    pub sentence_count: usize,
    /// `<h1 ...>` openings in the raw body
    pub h1_count: usize,
    /// `<a href=...>` anchors in the raw body
    pub internal_link_count: usize,
    /// `<img` openings in the raw body
    pub image_count: usize,
    /// `<img ... alt="...">` with a non-empty alt
    pub image_with_alt_count: usize,
    /// Raw body length, markup included
    pub raw_content_len: usize,
    /// Trimmed slug
    pub slug: String,
    /// Title words longer than two characters
    pub title_word_count: usize,
    /// Title words (other than the keyword) that also appear in the body
    pub title_words_in_body: usize,
    /// Keyword occurrences in the combined text
    pub keyword_occurrences: usize,
    /// Characters in the combined text (body + SEO title + meta description)
    pub combined_len: usize,
    /// Keyword coverage of the combined text, in percent
    pub keyword_density: f64,
    /// The combined text contains the keyword (true when no keyword is set)
    pub keyword_present: bool,
}

impl TextMetrics {
    /// Extract metrics from an article. Missing text is treated as empty.
    pub fn from_article(article: &Article) -> Self {
        let raw = article.content.as_str();
        let seo_title = article.seo_title.trim();
        let meta = article.meta_description.trim();
        let keyword = article.primary_keyword.trim().to_lowercase();
        let slug = article.slug.trim();

        let plain = strip_tags(raw);
        let plain_lower = plain.to_lowercase();
        let combined = format!("{} {} {}", plain, seo_title, meta);
        let combined = combined.trim();
        let combined_lower = combined.to_lowercase();

        let word_count = plain.split_whitespace().count();
        let sentence_count = sentence_break_pattern()
            .split(&plain)
            .filter(|s| !s.is_empty())
            .count();

        // Working title first, SEO title when the working title is empty
        let title_source = if article.title.is_empty() {
            seo_title
        } else {
            article.title.as_str()
        };
        let title_words: Vec<String> = title_source
            .to_lowercase()
            .split_whitespace()
            .filter(|w| char_len(w) > 2)
            .map(String::from)
            .collect();
        let title_words_in_body = title_words
            .iter()
            .filter(|w| **w != keyword && plain_lower.contains(w.as_str()))
            .count();

        let keyword_occurrences = if keyword.is_empty() {
            0
        } else {
            combined_lower.matches(keyword.as_str()).count()
        };
        let combined_len = char_len(combined);
        let keyword_density = if keyword.is_empty() || word_count == 0 || combined_len == 0 {
            0.0
        } else {
            (keyword_occurrences * char_len(&keyword)) as f64 / combined_len as f64 * 100.0
        };

        Self {
            seo_title_len: char_len(seo_title),
            seo_title_has_keyword: keyword.is_empty()
                || seo_title.to_lowercase().contains(keyword.as_str()),
            meta_description_len: char_len(meta),
            keyword_present: keyword.is_empty() || combined_lower.contains(keyword.as_str()),
            keyword,
            word_count,
            sentence_count,
            h1_count: h1_pattern().find_iter(raw).count(),
            internal_link_count: link_pattern().find_iter(raw).count(),
            image_count: img_pattern().find_iter(raw).count(),
            image_with_alt_count: img_alt_pattern().find_iter(raw).count(),
            raw_content_len: char_len(raw),
            slug: slug.to_string(),
            title_word_count: title_words.len(),
            title_words_in_body,
            keyword_occurrences,
            combined_len,
            keyword_density,
        }
    }

    /// Average words per sentence, 0 when there are no sentences
    pub fn words_per_sentence(&self) -> f64 {
        if self.sentence_count == 0 {
            0.0
        } else {
            self.word_count as f64 / self.sentence_count as f64
        }
    }

    pub fn has_keyword(&self) -> bool {
        !self.keyword.is_empty()
    }
}
