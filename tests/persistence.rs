use jobtracker::app::ApplicationStore;
use jobtracker::domain::{JobApplication, NewApplication, Status};
use jobtracker::storage::{
    load_applications, save_applications, FileStorage, MemoryStorage, Storage, STORAGE_KEY,
};

fn record(id: &str, status: Status) -> JobApplication {
    JobApplication {
        id: id.to_string(),
        company: "Acme".to_string(),
        role: "Engineer".to_string(),
        date: "2026-10-17".to_string(),
        status,
        created_at: 1_760_000_000_000,
    }
}

#[test]
fn save_then_load_round_trips() {
    let mut storage = MemoryStorage::default();
    let apps = vec![record("a", Status::Offer), record("b", Status::Rejected)];

    save_applications(&mut storage, &apps).unwrap();
    assert_eq!(load_applications(&storage), apps);
}

#[test]
fn stored_format_is_camel_case_array() {
    let mut storage = MemoryStorage::default();
    save_applications(&mut storage, &[record("a", Status::Interview)]).unwrap();

    let value: serde_json::Value = serde_json::from_str(storage.raw(STORAGE_KEY).unwrap()).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["status"], "Interview");
    assert_eq!(first["createdAt"], 1_760_000_000_000_i64);
    assert!(first.get("created_at").is_none());
}

#[test]
fn absent_key_loads_empty() {
    assert!(load_applications(&MemoryStorage::default()).is_empty());
}

#[test]
fn corrupt_data_loads_empty() {
    for raw in ["not json", "{\"id\":\"a\"}", "[{\"id\":1}]", "null"] {
        let storage = MemoryStorage::with_item(STORAGE_KEY, raw);
        assert!(load_applications(&storage).is_empty(), "input: {raw}");
    }
}

#[test]
fn unknown_status_rejects_whole_collection() {
    let raw = r#"[{"id":"a","company":"Acme","role":"Eng","date":"2026-10-01","status":"Ghosted","createdAt":1}]"#;
    let storage = MemoryStorage::with_item(STORAGE_KEY, raw);
    assert!(load_applications(&storage).is_empty());
}

#[test]
fn file_storage_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = ApplicationStore::open(FileStorage::new(dir.path()).unwrap());
    store
        .add(NewApplication::new("Acme", "Engineer").with_date("2026-09-30"))
        .unwrap()
        .unwrap();

    assert!(dir.path().join("job-tracker-items-v1.json").exists());

    let reopened = ApplicationStore::open(FileStorage::new(dir.path()).unwrap());
    assert_eq!(reopened.applications(), store.applications());
    assert_eq!(reopened.applications()[0].date, "2026-09-30");
}

#[test]
fn file_storage_get_set_remove() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path().join("nested")).unwrap();

    assert_eq!(storage.get_item("k").unwrap(), None);
    storage.set_item("k", "v1").unwrap();
    storage.set_item("k", "v2").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));

    storage.remove_item("k").unwrap();
    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k").unwrap(), None);
}

#[test]
fn corrupt_file_opens_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("job-tracker-items-v1.json"), "[{broken").unwrap();

    let store = ApplicationStore::open(FileStorage::new(dir.path()).unwrap());
    assert!(store.is_empty());
}
