//! Small text helpers for front ends: slugs, excerpts and display dates

use crate::scoring::strip_tags;
use chrono::{Datelike, NaiveDate};
use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// URL slug from a title.
///
/// Lower-cases, folds accents (`é` → `e`), collapses every run of other
/// characters into one `-`, and trims hyphens at both ends.
pub fn slugify(text: &str) -> String {
    let folded: String = text.to_lowercase().nfd().filter(|c| !is_diacritic(*c)).collect();

    let mut slug = String::with_capacity(folded.len());
    let mut pending_dash = false;
    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Plain-text excerpt of an HTML body, at most `max_chars` characters
/// plus a trailing ellipsis when cut.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = strip_tags(html).split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim())
}

const FRENCH_MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

/// Long French date as shown to editors, e.g. `14 mars 2026`
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        FRENCH_MONTHS[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::is_clean_slug;

    #[test]
    fn test_slugify_folds_accents() {
        assert_eq!(
            slugify("Transition énergétique : les objectifs 2030"),
            "transition-energetique-les-objectifs-2030"
        );
        assert_eq!(slugify("Mobilité durable : l'achat"), "mobilite-durable-l-achat");
    }

    #[test]
    fn test_slugify_trims_and_collapses() {
        assert_eq!(slugify("  --Guide   Compost!!  "), "guide-compost");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_output_is_clean() {
        for title in ["Réforme des retraites : ce qui change en 2025", "IA & régulation"] {
            assert!(is_clean_slug(&slugify(title)));
        }
    }

    #[test]
    fn test_format_date_is_long_french() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(format_date(date(2026, 3, 14)), "14 mars 2026");
        assert_eq!(format_date(date(2025, 8, 1)), "1 août 2025");
        assert_eq!(format_date(date(2024, 12, 31)), "31 décembre 2024");
    }

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(excerpt("<p>Un   texte\ncourt</p>", 160), "Un texte court");
    }

    #[test]
    fn test_excerpt_cuts_and_adds_ellipsis() {
        assert_eq!(excerpt("<p>abcdef ghij</p>", 7), "abcdef…");
        assert_eq!(excerpt("<p>abcdefgh</p>", 4), "abcd…");
    }
}
