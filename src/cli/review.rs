//! Review commands - submit, reject and certify
//!
//! Role checks happen here; the repository trusts its caller.

use anyhow::Result;
use console::style;
use seo_gate::{Action, Article, ArticleRepository, Role};

/// Fail unless `role` may perform `action`
fn authorize(role: Role, action: Action) -> Result<()> {
    if !role.permits(action) {
        anyhow::bail!("Role '{}' is not allowed to {}", role, action);
    }
    Ok(())
}

pub fn submit(repo: &mut ArticleRepository, id: u64, role: Role) -> Result<()> {
    authorize(role, Action::Submit)?;
    let article = repo.submit(id)?;
    if article.seo_frozen {
        return frozen_notice(&article);
    }
    report(&article, "Submitted for review");
    Ok(())
}

pub fn reject(repo: &mut ArticleRepository, id: u64, role: Role) -> Result<()> {
    authorize(role, Action::Reject)?;
    let article = repo.reject(id)?;
    if article.seo_frozen {
        return frozen_notice(&article);
    }
    report(&article, "Rejected");
    Ok(())
}

pub fn certify(repo: &mut ArticleRepository, id: u64, role: Role, score: Option<u8>) -> Result<()> {
    authorize(role, Action::Certify)?;
    let article = match score {
        Some(score) => {
            let criteria = repo.score(id)?.criteria;
            repo.certify(id, score, criteria)?
        }
        None => repo.certify_with_current_score(id)?,
    };
    report(&article, "Certified");
    println!("  SEO fields are now frozen (score {})", article.score());
    Ok(())
}

fn frozen_notice(article: &Article) -> Result<()> {
    println!(
        "{} Article {} is certified, status left unchanged",
        style("!").yellow(),
        style(article.id).cyan()
    );
    Ok(())
}

fn report(article: &Article, what: &str) {
    println!(
        "{} {} article {} ({})",
        style("✓").green(),
        what,
        style(article.id).cyan(),
        article.status
    );
}
