//! Check command - score an article file without touching the store

use super::read_input;
use anyhow::{Context, Result};
use console::style;
use seo_gate::{Article, ArticlePatch, ContentScorer};
use std::path::Path;

/// Run the check command
pub fn run(file: &Path, format: &str) -> Result<()> {
    let raw = read_input(file)?;
    // Unknown keys (id, statut, ...) are ignored; only scored fields matter
    let patch: ArticlePatch = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse article {}", file.display()))?;
    let mut article = Article::default();
    article.apply(patch);

    let scorer = ContentScorer::new();
    let report = scorer.score(&article);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{} {}\n", style("Checking").bold(), style(file.display()).cyan());
    println!("{}", scorer.explain(&report));
    super::articles::print_score_line(report.score);
    Ok(())
}
