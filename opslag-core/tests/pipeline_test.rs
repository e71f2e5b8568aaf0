//! End-to-end pipeline tests: registry -> parse -> select -> prompt.

use std::collections::BTreeSet;
use std::fs;

use opslag_core::config::constants::generation;
use opslag_core::error::Error;
use opslag_core::prompt::{GenerationParameters, Length, Platform, Tone, build_prompt};
use opslag_core::{DatasetRegistry, ParsedTable, RegistryFetch, TableSource};
use tempfile::TempDir;

fn registry_with(files: &[(&str, &str)]) -> (TempDir, DatasetRegistry) {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    let registry = DatasetRegistry::new(dir.path());
    (dir, registry)
}

#[tokio::test]
async fn full_flow_from_listing_to_prompt() {
    let (_dir, registry) = registry_with(&[(
        "alice.csv",
        "date,ad_creative_bodies\n2024-01-01,Hello world\n2024-01-02,\n",
    )]);

    assert_eq!(registry.list().await.unwrap(), vec!["alice"]);

    let table = RegistryFetch::new(&registry, "alice").load().await.unwrap();
    assert_eq!(table.columns, vec!["date", "ad_creative_bodies"]);
    assert_eq!(table.rows.len(), 2);

    let selected = table.effective_selection(None).unwrap();
    assert_eq!(selected, "ad_creative_bodies");

    let history = table.column_text(&selected);
    assert_eq!(history, "Hello world");

    let params = GenerationParameters {
        platform: Platform::LinkedIn,
        length: Length::Lang,
        tones: BTreeSet::from([Tone::Inspirerende]),
        topic: "grøn omstilling".to_string(),
    };
    let prompt = build_prompt(&history, &params);
    assert!(prompt.contains("et lang opslag til LinkedIn"));
    assert!(prompt.contains("Tidligere opslag:\nHello world"));
    assert_eq!(prompt, build_prompt(&history, &params));
}

#[tokio::test]
async fn listing_is_lexicographic_and_extension_filtered() {
    let (_dir, registry) = registry_with(&[
        ("zoe.csv", "a\n"),
        ("alice.csv", "a\n"),
        ("readme.md", "not a dataset"),
    ]);
    assert_eq!(registry.list().await.unwrap(), vec!["alice", "zoe"]);
}

#[tokio::test]
async fn traversal_identifier_never_leaves_the_root() {
    let outer = TempDir::new().unwrap();
    fs::write(outer.path().join("secret.csv"), "leaked\n").unwrap();
    let inner = outer.path().join("data");
    fs::create_dir(&inner).unwrap();
    fs::write(inner.join("alice.csv"), "date\n").unwrap();

    let registry = DatasetRegistry::new(&inner);
    let err = registry.resolve("../secret").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn missing_root_is_a_storage_error_not_not_found() {
    let dir = TempDir::new().unwrap();
    let registry = DatasetRegistry::new(dir.path().join("does-not-exist"));
    let err = registry.list().await.unwrap_err();
    assert!(matches!(err, Error::Storage(_)));
}

#[tokio::test]
async fn unknown_identifier_is_not_found() {
    let (_dir, registry) = registry_with(&[]);
    let err = registry.resolve("nobody").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn quoted_post_bodies_survive_the_registry_path() {
    let (_dir, registry) = registry_with(&[(
        "bob.csv",
        "date,ad_creative_bodies\n2024-01-01,\"Nyt år, nye mål.\nVi ses derude!\"\n",
    )]);
    let table = RegistryFetch::new(&registry, "bob").load().await.unwrap();
    assert_eq!(
        table.rows[0]["ad_creative_bodies"],
        "Nyt år, nye mål.\nVi ses derude!"
    );
}

#[test]
fn selection_is_recomputed_per_dataset() {
    let first = ParsedTable::parse("date,ad_creative_bodies\nx,y\n");
    let second = ParsedTable::parse("timestamp,text\nx,y\n");

    let carried_over = first.effective_selection(None);
    assert_eq!(carried_over.as_deref(), Some("ad_creative_bodies"));
    // The old selection is not a column of the new table; the rule re-applies.
    assert_eq!(
        second.effective_selection(carried_over.as_deref()).as_deref(),
        Some("timestamp")
    );
}

#[test]
fn fallback_reply_constant_matches_product_text() {
    assert_eq!(generation::EMPTY_REPLY, "Ingen svar.");
}
