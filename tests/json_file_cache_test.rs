mod common;

use std::collections::HashMap;

use smart_qa::application::ports::AnswerCache;
use smart_qa::infrastructure::cache::{InMemoryAnswerCache, JsonFileCache};
use tempfile::TempDir;

use common::write_file;

#[test]
fn given_missing_file_when_opening_then_cache_is_empty() {
    let dir = TempDir::new().unwrap();

    let cache = JsonFileCache::open(dir.path().join("cache.json"));

    assert!(cache.is_empty());
    assert!(!dir.path().join("cache.json").exists());
}

#[test]
fn given_existing_file_when_opening_then_entries_are_served() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "cache.json", r#"{"What is 2+2?": "4"}"#);

    let cache = JsonFileCache::open(&path);

    assert_eq!(cache.get("What is 2+2?"), Some("4".to_string()));
    assert_eq!(cache.get("What is 3+3?"), None);
}

#[test]
fn given_corrupt_file_when_opening_then_cache_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "cache.json", "not json at all");

    let cache = JsonFileCache::open(&path);

    assert_eq!(cache.len(), 0);
}

#[test]
fn given_file_with_non_string_values_when_loading_then_mapping_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "cache.json", r#"{"question": 42}"#);

    assert!(JsonFileCache::load(&path).is_empty());
}

#[test]
fn given_put_when_reopening_then_entry_is_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.json");

    let cache = JsonFileCache::open(&path);
    cache.put("capital of France?".to_string(), "Paris".to_string());
    drop(cache);

    let reopened = JsonFileCache::open(&path);
    assert_eq!(reopened.get("capital of France?"), Some("Paris".to_string()));
}

#[test]
fn given_put_when_reading_file_then_it_holds_a_flat_json_object() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "cache.json", r#"{"existing": "kept"}"#);

    let cache = JsonFileCache::open(&path);
    cache.put("new".to_string(), "added".to_string());

    let on_disk: HashMap<String, String> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        HashMap::from([
            ("existing".to_string(), "kept".to_string()),
            ("new".to_string(), "added".to_string()),
        ])
    );
    assert_eq!(cache.snapshot(), on_disk);
}

#[test]
fn given_same_key_twice_when_putting_then_latest_value_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.json");

    let cache = JsonFileCache::open(&path);
    cache.put("q".to_string(), "first".to_string());
    cache.put("q".to_string(), "second".to_string());

    assert_eq!(cache.len(), 1);
    assert_eq!(JsonFileCache::load(&path).get("q"), Some(&"second".to_string()));
}

#[test]
fn given_missing_parent_directory_when_putting_then_it_is_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("answers").join("cache.json");

    let cache = JsonFileCache::open(&path);
    cache.put("q".to_string(), "a".to_string());

    assert!(path.is_file());
    assert_eq!(cache.path(), path.as_path());
}

#[test]
fn given_unwritable_target_when_putting_then_entry_is_kept_in_memory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("occupied");
    std::fs::create_dir(&path).unwrap();

    let cache = JsonFileCache::open(&path);
    cache.put("q".to_string(), "a".to_string());

    assert_eq!(cache.get("q"), Some("a".to_string()));
    assert!(path.is_dir());
}

#[test]
fn given_in_memory_cache_when_putting_then_get_returns_value() {
    let cache = InMemoryAnswerCache::with_entries(HashMap::from([(
        "seeded".to_string(),
        "yes".to_string(),
    )]));

    cache.put("q".to_string(), "a".to_string());

    assert_eq!(cache.get("seeded"), Some("yes".to_string()));
    assert_eq!(cache.get("q"), Some("a".to_string()));
    assert_eq!(cache.len(), 2);
}
