//! Article commands - create, edit, show and list

use super::ArticleArgs;
use anyhow::{anyhow, Result};
use console::style;
use seo_gate::text::{excerpt, format_date, slugify};
use seo_gate::{Article, ArticleRepository, ArticleStatus, ContentScorer};

/// Characters of body text shown per line in `list`
const LIST_EXCERPT_LEN: usize = 60;

pub fn create(repo: &mut ArticleRepository, fields: ArticleArgs) -> Result<()> {
    let mut patch = fields.into_patch()?;
    if patch.slug.is_none() {
        patch.slug = patch.title.as_deref().map(slugify);
    }

    let article = repo.create(patch)?;
    let (article, _) = repo.rescore(article.id)?;

    println!("{} Created article {}", style("✓").green(), style(article.id).cyan());
    print_article(&article);
    Ok(())
}

pub fn edit(repo: &mut ArticleRepository, id: u64, fields: ArticleArgs) -> Result<()> {
    let patch = fields.into_patch()?;
    if patch.is_empty() {
        anyhow::bail!("Nothing to edit: pass at least one field flag");
    }

    let before = repo.update(id, patch)?;
    let (article, _) = repo.rescore(before.id)?;

    if article.seo_frozen {
        println!(
            "{} Article {} is certified: only titre and contenu were applied",
            style("!").yellow(),
            id
        );
    }
    println!("{} Updated article {}", style("✓").green(), style(id).cyan());
    print_article(&article);
    Ok(())
}

pub fn show(repo: &ArticleRepository, id: u64, format: &str) -> Result<()> {
    let article = repo
        .get_by_id(id)
        .ok_or_else(|| anyhow!("Article {} not found", id))?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(article)?);
        return Ok(());
    }

    print_article(article);
    let scorer = ContentScorer::new();
    let report = scorer.score(article);
    if report.score != article.score() {
        println!(
            "  Current content would score {}\n",
            style(report.score).yellow()
        );
    }
    println!("{}", scorer.explain(&report));
    Ok(())
}

pub fn list(repo: &ArticleRepository, status: Option<ArticleStatus>, format: &str) -> Result<()> {
    let articles: Vec<&Article> = match status {
        Some(status) => repo.list_by_status(status).collect(),
        None => repo.list().iter().collect(),
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(());
    }

    if articles.is_empty() {
        println!("{}", style("No articles").dim());
        return Ok(());
    }

    for article in articles {
        println!(
            "{:>5}  {:<11}  {:>3}  {}",
            style(article.id).cyan(),
            status_label(article.status),
            article.score(),
            style(display_title(article)).bold()
        );
        let summary = excerpt(&article.content, LIST_EXCERPT_LEN);
        if !summary.is_empty() {
            println!("       {}", style(summary).dim());
        }
    }
    Ok(())
}

pub(super) fn print_article(article: &Article) {
    println!();
    println!("  {}", style(display_title(article)).bold());
    println!("  Id:        {}", style(article.id).cyan());
    println!("  Status:    {}", status_label(article.status));
    println!("  Slug:      {}", article.slug);
    println!("  Keyword:   {}", article.primary_keyword);
    println!("  Created:   {}", format_date(article.created_on));
    if let Some(published) = article.published_on {
        println!("  Published: {}", format_date(published));
    }
    print_score_line(article.score());
}

pub(super) fn print_score_line(score: u8) {
    let styled = match score {
        s if s >= 80 => style(s).green().bold(),
        s if s >= 50 => style(s).yellow().bold(),
        s => style(s).red().bold(),
    };
    println!("  Score:     {}/100\n", styled);
}

fn display_title(article: &Article) -> &str {
    if !article.title.is_empty() {
        &article.title
    } else if !article.seo_title.is_empty() {
        &article.seo_title
    } else {
        "(untitled)"
    }
}

fn status_label(status: ArticleStatus) -> console::StyledObject<&'static str> {
    let label = status.as_str();
    match status {
        ArticleStatus::Certified => style(label).green(),
        ArticleStatus::Submitted => style(label).cyan(),
        ArticleStatus::Rejected | ArticleStatus::Blocked => style(label).red(),
        _ => style(label).dim(),
    }
}
