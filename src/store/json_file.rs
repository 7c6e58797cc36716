//! JSON file [`ArticleStore`]
//!
//! Two files in one directory:
//!
//! - `articles.json`: `{ "articles": [...], "nextId": N }` with every
//!   `imageData` stripped
//! - `images.json`: `{ "<id>": "<imageData>" }` for articles that carry one
//!
//! Image payloads can be large, so they travel separately and are
//! reattached by id on load. Both files are written to a temp file and
//! renamed into place.

use super::{ArticleStore, StoreSnapshot, DEFAULT_FIRST_ID};
use crate::models::Article;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const ARTICLES_FILE: &str = "articles.json";
pub const IMAGES_FILE: &str = "images.json";

/// On-disk shape of `articles.json`
#[derive(Debug, Serialize, Deserialize)]
struct ArticlesFile {
    articles: Vec<Article>,
    #[serde(rename = "nextId", default)]
    next_id: Option<u64>,
}

/// Image payloads keyed by article id
type ImagesFile = BTreeMap<String, String>;

/// Store rooted at a directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    first_id: u64,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            first_id: DEFAULT_FIRST_ID,
        }
    }

    /// Id used when `articles.json` has no `nextId`
    pub fn with_first_id(mut self, first_id: u64) -> Self {
        self.first_id = first_id;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn articles_path(&self) -> PathBuf {
        self.dir.join(ARTICLES_FILE)
    }

    pub fn images_path(&self) -> PathBuf {
        self.dir.join(IMAGES_FILE)
    }

    fn load_images(&self) -> Result<ImagesFile> {
        let path = self.images_path();
        if !path.exists() {
            return Ok(ImagesFile::new());
        }
        let file = File::open(&path).context("Failed to open images file")?;
        let images = serde_json::from_reader(BufReader::new(file))
            .context("Failed to parse images file")?;
        Ok(images)
    }
}

/// Write `value` as JSON to a temp file, then rename over `path`
fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let tmp_file = path.with_extension("tmp");

    let file = File::create(&tmp_file)
        .with_context(|| format!("Failed to create {}", tmp_file.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)
        .with_context(|| format!("Failed to write {}", tmp_file.display()))?;
    // Buffered bytes must reach the disk before the rename replaces the old file
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", tmp_file.display()))?;
    writer
        .into_inner()
        .map_err(|e| e.into_error())
        .and_then(|file| file.sync_all())
        .with_context(|| format!("Failed to sync {}", tmp_file.display()))?;

    fs::rename(&tmp_file, path).with_context(|| format!("Failed to rename {}", path.display()))?;
    Ok(())
}

impl ArticleStore for JsonFileStore {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load_all(&self) -> Result<Option<StoreSnapshot>> {
        let path = self.articles_path();
        if !path.exists() {
            debug!("No article store at {}", path.display());
            return Ok(None);
        }

        let file = File::open(&path).context("Failed to open articles file")?;
        let data: ArticlesFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        let mut articles = data.articles;

        // Articles stay usable even when their images cannot be read
        match self.load_images() {
            Ok(mut images) => {
                for article in &mut articles {
                    if let Some(image) = images.remove(&article.id.to_string()) {
                        article.image_data = Some(image);
                    }
                }
            }
            Err(e) => warn!("Ignoring images for {}: {:#}", self.dir.display(), e),
        }

        debug!("Loaded {} articles from {}", articles.len(), path.display());

        Ok(Some(StoreSnapshot {
            articles,
            next_id: data.next_id.unwrap_or(self.first_id),
        }))
    }

    fn save_all(&self, snapshot: &StoreSnapshot) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let mut images = ImagesFile::new();
        let articles: Vec<Article> = snapshot
            .articles
            .iter()
            .map(|a| {
                let mut stripped = a.clone();
                if let Some(image) = stripped.image_data.take() {
                    images.insert(a.id.to_string(), image);
                }
                stripped
            })
            .collect();

        write_json_atomic(
            &self.articles_path(),
            &ArticlesFile {
                articles,
                next_id: Some(snapshot.next_id),
            },
        )?;
        write_json_atomic(&self.images_path(), &images)?;

        debug!(
            "Saved {} articles ({} images) to {}",
            snapshot.articles.len(),
            images.len(),
            self.dir.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn article(id: u64, image: Option<&str>) -> Article {
        Article {
            id,
            title: format!("Article {}", id),
            image_data: image.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_store_loads_none() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("nowhere"));
        assert!(store.load_all().unwrap().is_none());
    }

    #[test]
    fn test_images_are_written_separately() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path());
        let snapshot = StoreSnapshot {
            articles: vec![article(100, Some("data:image/png;base64,AAAA")), article(101, None)],
            next_id: 102,
        };

        store.save_all(&snapshot).unwrap();

        let primary = fs::read_to_string(store.articles_path()).unwrap();
        assert!(!primary.contains("imageData"));
        assert!(primary.contains("\"nextId\":102"));
        let images: ImagesFile =
            serde_json::from_str(&fs::read_to_string(store.images_path()).unwrap()).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images["100"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_round_trip_reattaches_images() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path());
        let snapshot = StoreSnapshot {
            articles: vec![article(100, None), article(101, Some("img-101"))],
            next_id: 102,
        };

        store.save_all(&snapshot).unwrap();
        let loaded = store.load_all().unwrap().unwrap();

        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_corrupt_images_file_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path());
        store
            .save_all(&StoreSnapshot {
                articles: vec![article(100, Some("img"))],
                next_id: 101,
            })
            .unwrap();
        fs::write(store.images_path(), "{not json").unwrap();

        let loaded = store.load_all().unwrap().unwrap();

        assert_eq!(loaded.articles.len(), 1);
        assert!(loaded.articles[0].image_data.is_none());
    }

    #[test]
    fn test_missing_next_id_uses_first_id() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path()).with_first_id(500);
        fs::write(store.articles_path(), r#"{"articles": []}"#).unwrap();

        let loaded = store.load_all().unwrap().unwrap();

        assert_eq!(loaded.next_id, 500);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_write_keeps_previous_file() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path());
        let first = StoreSnapshot {
            articles: vec![article(100, None)],
            next_id: 101,
        };
        store.save_all(&first).unwrap();

        // Every write to the temp file now fails with ENOSPC
        std::os::unix::fs::symlink("/dev/full", tmp.path().join("articles.tmp")).unwrap();
        let second = StoreSnapshot {
            articles: vec![article(100, None), article(101, None)],
            next_id: 102,
        };

        assert!(store.save_all(&second).is_err());
        assert_eq!(store.load_all().unwrap(), Some(first));
    }

    #[test]
    fn test_corrupt_articles_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path());
        fs::write(store.articles_path(), "[[[").unwrap();
        assert!(store.load_all().is_err());
    }
}
