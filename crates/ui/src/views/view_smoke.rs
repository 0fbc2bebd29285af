use std::sync::Arc;

use oedipus_core::model::SectionId;
use services::{AppConfig, AppServices, load_content};

use super::test_harness::{setup_view_harness, setup_view_harness_with_services};

#[tokio::test(flavor = "current_thread")]
async fn page_renders_every_section() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    for section in SectionId::ALL {
        let anchor = format!("id=\"{section}\"");
        assert!(html.contains(&anchor), "missing {anchor} in {html}");
        assert!(html.contains(section.nav_label()), "missing nav label {section}");
    }
    assert!(html.contains("Unfolding the Fate of a King"));
}

#[tokio::test(flavor = "current_thread")]
async fn nav_starts_on_first_section() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    assert_eq!(html.matches("nav-link--active").count(), 1, "{html}");
    assert!(!html.contains("navbar--scrolled"));
    assert!(!html.contains("nav-links--open"));
}

#[tokio::test(flavor = "current_thread")]
async fn games_section_starts_fresh() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 4"), "missing quiz progress in {html}");
    assert!(!html.contains("quiz-score"), "score shown before any answer");
    assert!(html.contains("Scenario 1 of 3"), "missing prophecy progress in {html}");
    assert!(html.contains("Alas, how terrible is wisdom"), "missing first chorus quote");
}

#[tokio::test(flavor = "current_thread")]
async fn catalog_lists_every_entry_unfiltered() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Showing 20 of 20 entries"), "missing count in {html}");
    assert!(!html.contains("Clear Filters"));
    assert!(!html.contains("catalog-entry--open"));
}

#[tokio::test(flavor = "current_thread")]
async fn author_and_poll_render_initial_state() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("497 BCE"), "missing first timeline event in {html}");
    assert!(html.contains("carousel-dot--active"));
    assert!(html.contains("Click an option to cast your vote"));
    assert!(!html.contains("poll-result"));
}

#[tokio::test(flavor = "current_thread")]
async fn page_survives_closed_scroll_bridge() {
    let config = AppConfig::default();
    let content = load_content(&config.content).expect("bundled content");
    let services = AppServices::from_content(Arc::clone(&content), &config);
    let mut harness = setup_view_harness_with_services(services);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains(&content.hero.subtitle));
    assert_eq!(html.matches("nav-link--active").count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn symbol_meanings_stay_hidden_until_hovered() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Eyes/Blindness"), "missing symbol title in {html}");
    assert!(!html.contains("Physical sight vs. inner vision"));
    assert!(!html.contains("symbol--revealed"));
    assert!(html.contains("Hover to reveal"));
}
