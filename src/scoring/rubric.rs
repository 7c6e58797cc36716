//! The fixed SEO rubric
//!
//! Fifteen boolean criteria, each worth the same share of 100 points.
//! `CRITERIA` order is evaluation and display order.

use serde::{Deserialize, Serialize};

/// Number of rubric criteria
pub const CRITERION_COUNT: usize = 15;

/// Points awarded per passing criterion (100 / 15)
pub const POINTS_PER_CRITERION: f64 = 100.0 / CRITERION_COUNT as f64;

/// Rubric category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Structure,
    Semantique,
    Technique,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Structure => write!(f, "structure"),
            Category::Semantique => write!(f, "semantique"),
            Category::Technique => write!(f, "technique"),
        }
    }
}

/// Criterion identifier. Serializes to the persisted record key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CriterionId {
    #[serde(rename = "titreSeo")]
    SeoTitle,
    #[serde(rename = "metaDescription")]
    MetaDescription,
    #[serde(rename = "unSeulH1")]
    SingleH1,
    #[serde(rename = "minMots")]
    MinWords,
    #[serde(rename = "lisibilite")]
    Readability,
    #[serde(rename = "motClePrincipal")]
    PrimaryKeyword,
    #[serde(rename = "champsLexicaux")]
    LexicalFields,
    #[serde(rename = "densite")]
    Density,
    #[serde(rename = "coherence")]
    Coherence,
    #[serde(rename = "sujetClair")]
    ClearSubject,
    #[serde(rename = "liensInternes")]
    InternalLinks,
    #[serde(rename = "imagesAlt")]
    ImagesAlt,
    #[serde(rename = "urlSeo")]
    SeoUrl,
    #[serde(rename = "tempsChargement")]
    LoadTime,
    #[serde(rename = "contenuUnique")]
    UniqueContent,
}

impl CriterionId {
    /// Record key, e.g. `"titreSeo"`
    pub fn key(&self) -> &'static str {
        match self {
            CriterionId::SeoTitle => "titreSeo",
            CriterionId::MetaDescription => "metaDescription",
            CriterionId::SingleH1 => "unSeulH1",
            CriterionId::MinWords => "minMots",
            CriterionId::Readability => "lisibilite",
            CriterionId::PrimaryKeyword => "motClePrincipal",
            CriterionId::LexicalFields => "champsLexicaux",
            CriterionId::Density => "densite",
            CriterionId::Coherence => "coherence",
            CriterionId::ClearSubject => "sujetClair",
            CriterionId::InternalLinks => "liensInternes",
            CriterionId::ImagesAlt => "imagesAlt",
            CriterionId::SeoUrl => "urlSeo",
            CriterionId::LoadTime => "tempsChargement",
            CriterionId::UniqueContent => "contenuUnique",
        }
    }

    /// Rubric entry for this id
    pub fn criterion(&self) -> &'static Criterion {
        // Every id has exactly one entry; covered by test_every_id_has_an_entry.
        CRITERIA
            .iter()
            .find(|c| c.id == *self)
            .unwrap_or(&CRITERIA[0])
    }
}

impl std::fmt::Display for CriterionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One rubric entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub id: CriterionId,
    pub label: &'static str,
    pub category: Category,
}

const fn criterion(id: CriterionId, label: &'static str, category: Category) -> Criterion {
    Criterion {
        id,
        label,
        category,
    }
}

/// The rubric, in evaluation order
pub static CRITERIA: [Criterion; CRITERION_COUNT] = [
    // Structure
    criterion(CriterionId::SeoTitle, "Titre SEO (≤ 60 car. + mot-clé)", Category::Structure),
    criterion(CriterionId::MetaDescription, "Méta-description (120–160 car.)", Category::Structure),
    criterion(CriterionId::SingleH1, "Un seul H1", Category::Structure),
    criterion(CriterionId::MinWords, "≥ 800 mots", Category::Structure),
    criterion(CriterionId::Readability, "Lisibilité correcte", Category::Structure),
    // Semantique
    criterion(CriterionId::PrimaryKeyword, "Mot-clé principal présent", Category::Semantique),
    criterion(CriterionId::LexicalFields, "Champs lexicaux secondaires", Category::Semantique),
    criterion(CriterionId::Density, "Densité contrôlée", Category::Semantique),
    criterion(CriterionId::Coherence, "Cohérence globale", Category::Semantique),
    criterion(CriterionId::ClearSubject, "Sujet clair", Category::Semantique),
    // Technique
    criterion(CriterionId::InternalLinks, "≥ 3 liens internes", Category::Technique),
    criterion(CriterionId::ImagesAlt, "Images avec ALT", Category::Technique),
    criterion(CriterionId::SeoUrl, "URL SEO-friendly", Category::Technique),
    criterion(CriterionId::LoadTime, "Temps de chargement OK", Category::Technique),
    criterion(CriterionId::UniqueContent, "Contenu unique", Category::Technique),
];
