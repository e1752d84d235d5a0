//! Integration tests for composing and exporting the static page.

use std::fs;

use folio::render::{compose_page, export_page, html::EXTERNAL_LINK_ATTRS, PageOptions};
use folio_models::{Profile, NAV_ITEMS};
use tempfile::TempDir;

fn exported() -> String {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("site").join("index.html");
    let html = compose_page(&Profile::builtin(), &PageOptions::default());
    export_page(&path, &html).unwrap();
    fs::read_to_string(&path).unwrap()
}

#[test]
fn test_every_nav_target_resolves() {
    let html = exported();
    for item in NAV_ITEMS.iter() {
        assert!(
            html.contains(&format!(r#"<section id="{}""#, item.target())),
            "nav item {} has no section",
            item.label
        );
    }
}

#[test]
fn test_outbound_links_open_unprivileged() {
    let html = exported();
    // Every new-tab anchor carries both rel values
    assert_eq!(
        html.matches(r#"target="_blank""#).count(),
        html.matches(EXTERNAL_LINK_ATTRS).count()
    );
    assert!(html.contains(r#"href="https://github.com/Mansi-126""#));
}

#[test]
fn test_reveal_once_blocks_marked() {
    let html = exported();
    let profile = Profile::builtin();
    let cards = html.matches("skill-card\" data-reveal-once").count();
    assert_eq!(cards, profile.skills.len());
}

#[test]
fn test_custom_profile_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let content = temp_dir.path().join("content.json");
    let mut profile = Profile::builtin();
    profile.name = "Grace Hopper".to_string();
    profile.short_name = "Grace".to_string();
    fs::write(&content, serde_json::to_string_pretty(&profile).unwrap()).unwrap();

    let loaded = folio::load_profile(Some(&content), None).unwrap();
    let html = compose_page(&loaded, &PageOptions::default());

    assert!(html.contains("<title>Grace Hopper</title>"));
    assert!(html.contains(r#"var TARGET = "Grace Hopper";"#));
}
