//! CLI command definitions and handlers

mod articles;
mod check;
mod init;
mod review;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use seo_gate::config::load_config;
use seo_gate::{ArticlePatch, ArticleRepository, ArticleStatus, Role, SystemClock};
use std::path::{Path, PathBuf};

/// seo-gate - SEO scoring and editorial workflow
#[derive(Parser, Debug)]
#[command(name = "seo-gate")]
#[command(
    version,
    about = "Score articles against a 15-point SEO rubric and move them through review",
    after_help = "\
Examples:
  seo-gate init                                   Write a seo-gate.toml template
  seo-gate check draft.json                       Score an article file
  seo-gate create --titre \"Compost urbain\" --content-file body.html
  seo-gate list --status submitted                Articles awaiting review
  seo-gate submit 100 --role editor               Send for review (score >= 66)
  seo-gate certify 100 --role admin               Publish and freeze SEO fields"
)]
pub struct Cli {
    /// Working directory holding seo-gate.toml and the article store
    #[arg(long, global = true, default_value = ".", env = "SEO_GATE_DIR")]
    pub dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Editable article fields shared by `create` and `edit`
#[derive(Args, Debug, Default)]
pub struct ArticleArgs {
    /// Working title
    #[arg(long)]
    pub titre: Option<String>,

    /// Title shown in search results
    #[arg(long = "titre-seo")]
    pub titre_seo: Option<String>,

    /// File with the HTML body
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Meta description
    #[arg(long)]
    pub meta: Option<String>,

    /// Primary keyword
    #[arg(long)]
    pub keyword: Option<String>,

    /// URL slug (create derives one from the title when omitted)
    #[arg(long)]
    pub slug: Option<String>,

    /// File with the image payload, usually a data URL
    #[arg(long)]
    pub image_file: Option<PathBuf>,
}

impl ArticleArgs {
    /// Patch carrying every flag that was given
    fn into_patch(self) -> Result<ArticlePatch> {
        let mut patch = ArticlePatch {
            title: self.titre,
            seo_title: self.titre_seo,
            meta_description: self.meta,
            primary_keyword: self.keyword,
            slug: self.slug,
            ..ArticlePatch::default()
        };
        if let Some(path) = self.content_file {
            patch.content = Some(read_input(&path)?);
        }
        if let Some(path) = self.image_file {
            patch.image_data = Some(read_input(&path)?.trim().to_string());
        }
        Ok(patch)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a seo-gate.toml config file with the default settings
    Init {
        /// Overwrite an existing seo-gate.toml
        #[arg(long)]
        force: bool,
    },

    /// Score an article JSON file without touching the store
    Check {
        /// Article record (titre, titreSeo, contenu, ...)
        file: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Create a draft, score it and store it
    Create {
        #[command(flatten)]
        fields: ArticleArgs,
    },

    /// Edit an article, then score it again (SEO fields are ignored once certified)
    Edit {
        id: u64,

        #[command(flatten)]
        fields: ArticleArgs,
    },

    /// Show one article with its score breakdown
    Show {
        id: u64,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// List articles in creation order
    List {
        /// Only articles in this status
        #[arg(long)]
        status: Option<ArticleStatus>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Send an article for review (editor)
    Submit {
        id: u64,

        /// Caller role: visitor, editor, admin
        #[arg(long)]
        role: Role,
    },

    /// Reject a submitted article (admin)
    Reject {
        id: u64,

        /// Caller role: visitor, editor, admin
        #[arg(long)]
        role: Role,
    },

    /// Publish an article and freeze its SEO fields (admin)
    Certify {
        id: u64,

        /// Caller role: visitor, editor, admin
        #[arg(long)]
        role: Role,

        /// Final score to record (default: score the article as it stands)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        score: Option<u8>,
    },
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => init::run(&cli.dir, force),

        Commands::Check { file, format } => check::run(&file, &format),

        Commands::Create { fields } => {
            let mut repo = open_repository(&cli.dir)?;
            articles::create(&mut repo, fields)
        }

        Commands::Edit { id, fields } => {
            let mut repo = open_repository(&cli.dir)?;
            articles::edit(&mut repo, id, fields)
        }

        Commands::Show { id, format } => {
            let repo = open_repository(&cli.dir)?;
            articles::show(&repo, id, &format)
        }

        Commands::List { status, format } => {
            let repo = open_repository(&cli.dir)?;
            articles::list(&repo, status, &format)
        }

        Commands::Submit { id, role } => {
            let mut repo = open_repository(&cli.dir)?;
            review::submit(&mut repo, id, role)
        }

        Commands::Reject { id, role } => {
            let mut repo = open_repository(&cli.dir)?;
            review::reject(&mut repo, id, role)
        }

        Commands::Certify { id, role, score } => {
            let mut repo = open_repository(&cli.dir)?;
            review::certify(&mut repo, id, role, score)
        }
    }
}

/// Repository over the JSON store configured for `dir`
fn open_repository(dir: &Path) -> Result<ArticleRepository> {
    let config = load_config(dir);
    let repo = ArticleRepository::new(config.json_store(dir), SystemClock)
        .with_gate(config.gate())
        .with_first_id(config.store.first_id)
        .init()?;
    Ok(repo)
}

fn read_input(path: &Path) -> Result<String> {
    use anyhow::Context;
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
