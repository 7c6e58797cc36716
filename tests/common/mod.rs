//! Shared fixtures for integration tests

#![allow(dead_code)]

use seo_gate::ArticlePatch;

pub const COMPOST_TITLE: &str = "Guide complet du compost urbain";
pub const COMPOST_SLUG: &str = "guide-complet-du-compost-urbain";
pub const COMPOST_META: &str = "Tout pour réussir son compost urbain : choisir un bac, nourrir les vers, \
éviter les odeurs et récolter un terreau riche, même sur un balcon.";

/// One H1, four links, 850 words in short sentences
pub fn compost_body() -> String {
    let mut body = String::from("<h1>Guide complet du compost urbain</h1>\n");
    body.push_str(
        r#"<p>Voir <a href="/guide">le guide</a> puis <a href="/bacs">les bacs</a> puis <a href="/vers">les vers</a> et <a href="/broyat">le broyat</a> aujourd'hui.</p>"#,
    );
    body.push_str("\n<p>");
    for _ in 0..83 {
        body.push_str("Le compost urbain transforme les restes de cuisine en terreau. ");
    }
    body.push_str("Bonne lecture.</p>");
    body
}

/// Draft that passes all 15 criteria
pub fn compost_patch() -> ArticlePatch {
    ArticlePatch::new()
        .title(COMPOST_TITLE)
        .seo_title(COMPOST_TITLE)
        .content(compost_body())
        .meta_description(COMPOST_META)
        .slug(COMPOST_SLUG)
}

/// Draft with a title and almost nothing else
pub fn thin_patch() -> ArticlePatch {
    ArticlePatch::new()
        .title("Brouillon")
        .content("<p>Trop court.</p>")
}
