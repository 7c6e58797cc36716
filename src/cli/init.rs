//! Init command - write a seo-gate.toml template

use anyhow::{Context, Result};
use console::style;
use seo_gate::config::{CONFIG_TEMPLATE, TOML_CONFIG_FILE};
use std::path::Path;

/// Run the init command
pub fn run(dir: &Path, force: bool) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(TOML_CONFIG_FILE);
    if config_path.exists() && !force {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );

    println!("\nNext steps:");
    println!("  {} Create a draft", style("seo-gate create --titre \"...\"").cyan());
    println!("  {} Score a file", style("seo-gate check article.json").cyan());

    Ok(())
}
