//! End-to-end tests for the article lifecycle through the public API
//!
//! Each test builds its own repository, either in memory or over a JSON
//! store in an isolated temp directory.

mod common;

use chrono::NaiveDate;
use common::{compost_patch, thin_patch, COMPOST_SLUG};
use seo_gate::config::load_config;
use seo_gate::store::{ARTICLES_FILE, IMAGES_FILE};
use seo_gate::{
    ArticlePatch, ArticleRepository, ArticleStatus, CriterionId, FixedClock, JsonFileStore,
    MemoryStore, RepositoryError,
};
use tempfile::TempDir;

fn day(d: u32) -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2026, 5, d).unwrap())
}

#[test]
fn test_full_lifecycle_in_memory() {
    let mut repo = ArticleRepository::open(MemoryStore::new(), day(1)).unwrap();

    let draft = repo.create(compost_patch()).unwrap();
    assert_eq!(draft.id, 100);
    assert_eq!(draft.score(), 0);

    let (scored, report) = repo.rescore(draft.id).unwrap();
    assert_eq!(report.score, 100);
    assert_eq!(scored.score(), 100);
    assert!(scored.criteria().values().all(|ok| *ok));

    assert_eq!(repo.submit(draft.id).unwrap().status, ArticleStatus::Submitted);
    assert_eq!(repo.reject(draft.id).unwrap().status, ArticleStatus::Rejected);
    assert_eq!(repo.submit(draft.id).unwrap().status, ArticleStatus::Submitted);

    let published = repo.certify_with_current_score(draft.id).unwrap();
    assert_eq!(published.status, ArticleStatus::Certified);
    assert_eq!(published.published_on, Some(day(1).0));
    assert!(published.seo_frozen);
    assert_eq!(repo.list_certified().count(), 1);
    assert_eq!(repo.list_submitted().count(), 0);
}

#[test]
fn test_thin_draft_is_held_at_the_gate() {
    let mut repo = ArticleRepository::open(MemoryStore::new(), day(2)).unwrap();
    let id = repo.create(thin_patch()).unwrap().id;
    let (_, report) = repo.rescore(id).unwrap();
    assert!(report.score < 66);

    match repo.submit(id) {
        Err(RepositoryError::GateNotMet {
            id: err_id,
            score,
            threshold,
        }) => {
            assert_eq!(err_id, id);
            assert_eq!(score, report.score);
            assert_eq!(threshold, 66);
        }
        other => panic!("expected GateNotMet, got {:?}", other),
    }
    assert_eq!(repo.get_by_id(id).unwrap().status, ArticleStatus::Draft);
}

#[test]
fn test_editing_after_certification_only_touches_title_and_content() {
    let mut repo = ArticleRepository::open(MemoryStore::new(), day(3)).unwrap();
    let id = repo.create(compost_patch()).unwrap().id;
    repo.rescore(id).unwrap();
    repo.certify_with_current_score(id).unwrap();

    let edited = repo
        .update(
            id,
            ArticlePatch::new()
                .title("Compost urbain : le guide")
                .content("<p>Version courte.</p>")
                .slug("nouvelle-url")
                .meta_description("Autre description"),
        )
        .unwrap();
    assert_eq!(edited.title, "Compost urbain : le guide");
    assert_eq!(edited.content, "<p>Version courte.</p>");
    assert_eq!(edited.slug, COMPOST_SLUG);
    assert_eq!(edited.meta_description, common::COMPOST_META);

    // The stored score no longer follows the content
    let (after, report) = repo.rescore(id).unwrap();
    assert_eq!(after.score(), 100);
    assert!(report.score < 100);
    assert!(!report.is_passing(CriterionId::MinWords));
}

#[test]
fn test_json_store_survives_reopen() {
    let tmp = TempDir::new().unwrap();
    let store = JsonFileStore::new(tmp.path().join(".seo-gate"));

    let (kept, imaged) = {
        let mut repo = ArticleRepository::open(store.clone(), day(4)).unwrap();
        let kept = repo.create(compost_patch()).unwrap().id;
        let imaged = repo
            .create(thin_patch().image_data("data:image/png;base64,iVBORw0KGgo="))
            .unwrap()
            .id;
        repo.rescore(kept).unwrap();
        repo.submit(kept).unwrap();
        (kept, imaged)
    };

    assert!(store.articles_path().ends_with(ARTICLES_FILE));
    let primary = std::fs::read_to_string(store.articles_path()).unwrap();
    assert!(!primary.contains("iVBORw0KGgo"));
    assert!(std::fs::read_to_string(store.dir().join(IMAGES_FILE))
        .unwrap()
        .contains("iVBORw0KGgo"));

    let mut repo = ArticleRepository::open(store, day(5)).unwrap();
    assert_eq!(repo.list().len(), 2);
    assert_eq!(repo.get_by_id(kept).unwrap().status, ArticleStatus::Submitted);
    assert_eq!(repo.get_by_id(kept).unwrap().score(), 100);
    assert_eq!(
        repo.get_by_id(imaged).unwrap().image_data.as_deref(),
        Some("data:image/png;base64,iVBORw0KGgo=")
    );
    assert_eq!(repo.create(ArticlePatch::new()).unwrap().id, 102);
}

#[test]
fn test_store_records_use_cms_field_names() {
    let tmp = TempDir::new().unwrap();
    let store = JsonFileStore::new(tmp.path());
    let mut repo = ArticleRepository::open(store.clone(), day(6)).unwrap();
    let id = repo.create(compost_patch()).unwrap().id;
    repo.rescore(id).unwrap();
    repo.certify_with_current_score(id).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.articles_path()).unwrap()).unwrap();
    let record = &raw["articles"][0];

    assert_eq!(raw["nextId"], 101);
    assert_eq!(record["statut"], "certified");
    assert_eq!(record["seoFrozen"], true);
    assert_eq!(record["score"], 100);
    assert_eq!(record["datePublication"], "2026-05-06");
    assert_eq!(record["criteres"]["urlSeo"], true);
    assert_eq!(record["titreSeo"], common::COMPOST_TITLE);
}

#[test]
fn test_config_drives_gate_and_store() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("seo-gate.toml"),
        "[workflow]\nsubmission_threshold = 20\n\n[store]\ndir = \"data\"\nfirst_id = 1\n",
    )
    .unwrap();

    let config = load_config(tmp.path());
    let mut repo = ArticleRepository::new(config.json_store(tmp.path()), day(7))
        .with_gate(config.gate())
        .with_first_id(config.store.first_id)
        .init()
        .unwrap();

    let id = repo.create(thin_patch()).unwrap().id;
    assert_eq!(id, 1);
    repo.rescore(id).unwrap();
    assert_eq!(repo.submit(id).unwrap().status, ArticleStatus::Submitted);
    assert!(tmp.path().join("data").join(ARTICLES_FILE).exists());
}
