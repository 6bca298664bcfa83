use std::fs;

use ticklist::core::action::{Action, update};
use ticklist::core::list::ListService;
use ticklist::core::state::App;
use ticklist::core::store::{FileStore, Store, StoreError};

// ============================================================================
// Helper Functions
// ============================================================================

fn file_service(dir: &tempfile::TempDir) -> ListService {
    let store = FileStore::new(dir.path(), "list").unwrap();
    ListService::new(Box::new(store))
}

fn seed(dir: &tempfile::TempDir, items: &[&str]) {
    let mut store = FileStore::new(dir.path(), "list").unwrap();
    let list: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    store.save(&list).unwrap();
}

// ============================================================================
// FileStore
// ============================================================================

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path(), "list").unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_empty_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("list.json"), "").unwrap();
    let store = FileStore::new(dir.path(), "list").unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_persisted_format_is_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = file_service(&dir);
    service.append("Buy milk").unwrap();
    service.append("Call Bob").unwrap();

    let blob = fs::read_to_string(dir.path().join("list.json")).unwrap();
    assert_eq!(blob, r#"["Buy milk","Call Bob"]"#);
    assert!(!dir.path().join("list.tmp").exists(), "temp file is renamed away");
}

#[test]
fn test_save_creates_missing_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let mut store = FileStore::new(&nested, "work").unwrap();
    store.save(&["x".to_string()]).unwrap();
    assert!(nested.join("work.json").exists());
}

#[test]
fn test_keys_are_separate_slots() {
    let dir = tempfile::tempdir().unwrap();
    let mut home = FileStore::new(dir.path(), "home").unwrap();
    let mut work = FileStore::new(dir.path(), "work").unwrap();
    home.save(&["dishes".to_string()]).unwrap();
    work.save(&["report".to_string()]).unwrap();
    assert_eq!(home.load().unwrap(), vec!["dishes"]);
    assert_eq!(work.load().unwrap(), vec!["report"]);
}

#[test]
fn test_malformed_file_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("list.json"), "not json").unwrap();
    let store = FileStore::new(dir.path(), "list").unwrap();
    assert!(matches!(store.load(), Err(StoreError::Decode(_))));
}

#[test]
fn test_save_of_load_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    seed(&dir, &["A", "B", "ünïcode", ""]);
    let mut store = FileStore::new(dir.path(), "list").unwrap();

    let before = store.load().unwrap();
    store.save(&before).unwrap();
    assert_eq!(store.load().unwrap(), before);
}

// ============================================================================
// ListService scenarios
// ============================================================================

#[test]
fn test_empty_store_append_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = file_service(&dir);
    service.append("A").unwrap();
    assert_eq!(service.items().unwrap(), vec!["A"]);
}

#[test]
fn test_appends_come_back_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = file_service(&dir);
    let items: Vec<String> = (0..25).map(|i| format!("item {i}")).collect();
    for item in &items {
        service.append(item.clone()).unwrap();
    }
    assert_eq!(service.items().unwrap(), items);

    // A fresh service over the same slot sees the same list
    assert_eq!(file_service(&dir).items().unwrap(), items);
}

#[test]
fn test_remove_middle() {
    let dir = tempfile::tempdir().unwrap();
    seed(&dir, &["A", "B", "C"]);
    let mut service = file_service(&dir);
    service.remove_at(1).unwrap();
    assert_eq!(service.items().unwrap(), vec!["A", "C"]);
}

#[test]
fn test_remove_out_of_range_leaves_list() {
    let dir = tempfile::tempdir().unwrap();
    seed(&dir, &["A"]);
    let mut service = file_service(&dir);
    service.remove_at(5).unwrap();
    assert_eq!(service.items().unwrap(), vec!["A"]);
}

#[test]
fn test_remove_each_position_preserves_relative_order() {
    let original = ["a", "b", "c", "d", "e"];
    for i in 0..original.len() {
        let dir = tempfile::tempdir().unwrap();
        seed(&dir, &original);
        let mut service = file_service(&dir);
        service.remove_at(i).unwrap();

        let expected: Vec<&str> = original
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, s)| *s)
            .collect();
        assert_eq!(service.items().unwrap(), expected, "removing position {i}");
    }
}

// ============================================================================
// App over a real file
// ============================================================================

#[test]
fn test_app_reloads_from_disk_after_each_mutation() {
    let dir = tempfile::tempdir().unwrap();
    seed(&dir, &["A", "B"]);
    let mut app = App::new(file_service(&dir));
    assert_eq!(app.items, vec!["A", "B"]);

    update(&mut app, Action::Submit("C".to_string()));
    update(&mut app, Action::Delete(0));
    assert_eq!(app.items, vec!["B", "C"]);

    update(&mut app, Action::Submit(String::new()));
    assert_eq!(app.items, vec!["B", "C"]);

    let blob = fs::read_to_string(dir.path().join("list.json")).unwrap();
    assert_eq!(blob, r#"["B","C"]"#);
}
