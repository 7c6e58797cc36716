//! Core data models for seo-gate
//!
//! These models are shared by the scorer, the workflow and the repository.
//! The serialized shape keeps the field names of the persisted CMS records
//! (`titreSeo`, `motClePrincipal`, ...) so existing stores load unchanged.

use crate::scoring::CriterionId;
use crate::workflow::ArticleStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pass/fail per criterion, keyed by criterion id
pub type CriteriaMap = BTreeMap<CriterionId, bool>;

/// Score and per-criterion results from one scoring run.
///
/// The two halves only ever travel together: the repository never accepts
/// one without the other.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default)]
    pub score: u8,
    #[serde(default, rename = "criteres")]
    pub criteria: CriteriaMap,
}

impl Assessment {
    pub fn new(score: u8, criteria: CriteriaMap) -> Self {
        Self { score, criteria }
    }
}

/// An editorial article
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    /// Working title
    #[serde(default, rename = "titre")]
    pub title: String,
    /// Title shown in search results
    #[serde(default, rename = "titreSeo")]
    pub seo_title: String,
    /// HTML-like body
    #[serde(default, rename = "contenu")]
    pub content: String,
    #[serde(default, rename = "metaDescription")]
    pub meta_description: String,
    #[serde(default, rename = "motClePrincipal")]
    pub primary_keyword: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, rename = "statut")]
    pub status: ArticleStatus,
    #[serde(flatten)]
    pub assessment: Assessment,
    #[serde(default, rename = "datePublication", skip_serializing_if = "Option::is_none")]
    pub published_on: Option<NaiveDate>,
    #[serde(default, rename = "dateCreation")]
    pub created_on: NaiveDate,
    #[serde(default, rename = "seoFrozen")]
    pub seo_frozen: bool,
    /// Opaque image payload (usually a data URL). Persisted on a separate channel.
    #[serde(default, rename = "imageData", skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

impl Article {
    pub fn score(&self) -> u8 {
        self.assessment.score
    }

    pub fn criteria(&self) -> &CriteriaMap {
        &self.assessment.criteria
    }

    /// Overlay every field present in `patch`.
    ///
    /// Callers decide what the patch may contain; see
    /// [`ArticlePatch::restricted_to_frozen`].
    pub fn apply(&mut self, patch: ArticlePatch) {
        let ArticlePatch {
            title,
            seo_title,
            content,
            meta_description,
            primary_keyword,
            slug,
            image_data,
            assessment,
        } = patch;

        if let Some(v) = title {
            self.title = v;
        }
        if let Some(v) = seo_title {
            self.seo_title = v;
        }
        if let Some(v) = content {
            self.content = v;
        }
        if let Some(v) = meta_description {
            self.meta_description = v;
        }
        if let Some(v) = primary_keyword {
            self.primary_keyword = v;
        }
        if let Some(v) = slug {
            self.slug = v;
        }
        if let Some(v) = image_data {
            self.image_data = Some(v);
        }
        if let Some(v) = assessment {
            self.assessment = v;
        }
    }
}

/// Partial update for the generic edit path.
///
/// Identity, lifecycle and dates are deliberately absent: `id` and
/// `created_on` are set once by the repository, while `status`,
/// `published_on` and `seo_frozen` only move through workflow operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArticlePatch {
    #[serde(default, rename = "titre", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "titreSeo", skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, rename = "contenu", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, rename = "metaDescription", skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, rename = "motClePrincipal", skip_serializing_if = "Option::is_none")]
    pub primary_keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, rename = "imageData", skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
}

impl ArticlePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.title = Some(v.into());
        self
    }

    pub fn seo_title(mut self, v: impl Into<String>) -> Self {
        self.seo_title = Some(v.into());
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.content = Some(v.into());
        self
    }

    pub fn meta_description(mut self, v: impl Into<String>) -> Self {
        self.meta_description = Some(v.into());
        self
    }

    pub fn primary_keyword(mut self, v: impl Into<String>) -> Self {
        self.primary_keyword = Some(v.into());
        self
    }

    pub fn slug(mut self, v: impl Into<String>) -> Self {
        self.slug = Some(v.into());
        self
    }

    pub fn image_data(mut self, v: impl Into<String>) -> Self {
        self.image_data = Some(v.into());
        self
    }

    pub fn assessment(mut self, v: Assessment) -> Self {
        self.assessment = Some(v);
        self
    }

    /// The subset of this patch a frozen article accepts: `title` and `content`.
    pub fn restricted_to_frozen(&self) -> ArticlePatch {
        ArticlePatch {
            title: self.title.clone(),
            content: self.content.clone(),
            ..ArticlePatch::default()
        }
    }

    /// Names of the fields a frozen article would drop from this patch
    pub fn frozen_dropped_fields(&self) -> Vec<&'static str> {
        let mut dropped = Vec::new();
        if self.seo_title.is_some() {
            dropped.push("titreSeo");
        }
        if self.meta_description.is_some() {
            dropped.push("metaDescription");
        }
        if self.primary_keyword.is_some() {
            dropped.push("motClePrincipal");
        }
        if self.slug.is_some() {
            dropped.push("slug");
        }
        if self.image_data.is_some() {
            dropped.push("imageData");
        }
        if self.assessment.is_some() {
            dropped.push("score");
            dropped.push("criteres");
        }
        dropped
    }

    pub fn is_empty(&self) -> bool {
        *self == ArticlePatch::default()
    }
}
