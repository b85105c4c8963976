use std::fs;
use tempfile::TempDir;
use userdesk::model::{Company, UserData};
use userdesk::store::fs::FileStore;
use userdesk::store::UserStore;

fn data(name: &str, email: &str) -> UserData {
    UserData {
        name: Some(name.to_string()),
        username: Some(name.to_lowercase()),
        email: Some(email.to_string()),
        phone: Some("".to_string()),
        website: Some("".to_string()),
        company: Some(Company::named("")),
    }
}

#[test]
fn persisted_layout_uses_the_two_blob_keys() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf());

    store.create(&data("Alice", "a@b.com")).unwrap();
    store.create(&data("Bob", "b@b.com")).unwrap();

    let users_raw = fs::read_to_string(dir.path().join("users")).unwrap();
    let users: serde_json::Value = serde_json::from_str(&users_raw).unwrap();
    assert_eq!(users[0]["id"], 1);
    assert_eq!(users[0]["name"], "Alice");
    assert_eq!(users[0]["company"]["name"], "");
    assert_eq!(users[1]["id"], 2);

    let seq_raw = fs::read_to_string(dir.path().join("users_seq")).unwrap();
    assert_eq!(seq_raw, "3");
}

#[test]
fn records_survive_a_new_store_instance() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.create(&data("Alice", "a@b.com")).unwrap();
    }

    let store = FileStore::new(dir.path().to_path_buf());
    let users = store.list().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Alice");

    // the counter carries on where the last session stopped
    let mut store = FileStore::new(dir.path().to_path_buf());
    let created = store.create(&data("Bob", "b@b.com")).unwrap();
    assert_eq!(created.id, Some(2));
}

#[test]
fn first_read_initializes_the_layout() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());

    assert!(store.list().unwrap().is_empty());
    assert_eq!(fs::read_to_string(dir.path().join("users")).unwrap(), "[]");
}

#[test]
fn malformed_persisted_state_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("users"), "{{{ not json").unwrap();
    fs::write(dir.path().join("users_seq"), "also not a number").unwrap();

    let mut store = FileStore::new(dir.path().to_path_buf());
    assert!(store.list().unwrap().is_empty());
    assert_eq!(store.read(1).unwrap(), None);

    let created = store.create(&data("Alice", "a@b.com")).unwrap();
    assert_eq!(created.id, Some(1));
}

#[test]
fn writes_leave_no_tmp_artifacts() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf());

    store.create(&data("Alice", "a@b.com")).unwrap();
    store
        .update(
            1,
            &UserData {
                phone: Some("555".to_string()),
                ..UserData::default()
            },
        )
        .unwrap();
    store.delete(1).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let name = entry.unwrap().file_name();
        let name = name.to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
    }
}
