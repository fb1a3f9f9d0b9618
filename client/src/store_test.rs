use super::*;

fn pair(tag: &str) -> TokenPair {
    TokenPair {
        access_token: format!("access-{tag}"),
        refresh_token: format!("refresh-{tag}"),
    }
}

fn admin_user() -> User {
    User {
        username: "root".to_owned(),
        email: "root@example.com".to_owned(),
        role: "admin".to_owned(),
    }
}

#[test]
fn memory_store_namespaces_actor_kinds() {
    let store = MemoryTokenStore::new();
    store.save(ActorKind::User, &pair("u")).unwrap();
    store.save(ActorKind::Admin, &pair("a")).unwrap();

    assert_eq!(store.load(ActorKind::User), Some(pair("u")));
    assert_eq!(store.load(ActorKind::Admin), Some(pair("a")));

    store.clear(ActorKind::User);
    assert_eq!(store.load(ActorKind::User), None);
    assert_eq!(store.load(ActorKind::Admin), Some(pair("a")));
}

#[test]
fn memory_store_save_overwrites_unconditionally() {
    let store = MemoryTokenStore::new();
    store.save(ActorKind::User, &pair("old")).unwrap();
    store.save(ActorKind::User, &pair("new")).unwrap();
    assert_eq!(store.load(ActorKind::User), Some(pair("new")));
}

#[test]
fn memory_store_clear_drops_cached_user_too() {
    let store = MemoryTokenStore::new();
    store.save(ActorKind::Admin, &pair("a")).unwrap();
    store.save_cached_user(ActorKind::Admin, &admin_user()).unwrap();
    assert!(store.load_cached_user(ActorKind::Admin).is_some());

    store.clear(ActorKind::Admin);
    assert!(store.load(ActorKind::Admin).is_none());
    assert!(store.load_cached_user(ActorKind::Admin).is_none());
}

#[test]
fn file_store_round_trips_both_actors() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("tokens.json"));

    store.save(ActorKind::User, &pair("u")).unwrap();
    store.save(ActorKind::Admin, &pair("a")).unwrap();
    store.save_cached_user(ActorKind::Admin, &admin_user()).unwrap();

    assert_eq!(store.load(ActorKind::User), Some(pair("u")));
    assert_eq!(store.load(ActorKind::Admin), Some(pair("a")));
    assert_eq!(store.load_cached_user(ActorKind::Admin), Some(admin_user()));
}

#[test]
fn file_store_uses_browser_storage_key_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokens.json");
    let store = FileTokenStore::new(&path);

    store.save(ActorKind::User, &pair("u")).unwrap();
    store.save(ActorKind::Admin, &pair("a")).unwrap();
    store.save_cached_user(ActorKind::Admin, &admin_user()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    for key in ["\"token\"", "\"refreshToken\"", "\"adminToken\"", "\"adminRefreshToken\"", "\"adminUser\""] {
        assert!(raw.contains(key), "missing key {key} in {raw}");
    }
}

#[test]
fn file_store_clear_leaves_other_actor_intact() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("tokens.json"));

    store.save(ActorKind::User, &pair("u")).unwrap();
    store.save(ActorKind::Admin, &pair("a")).unwrap();
    store.clear(ActorKind::Admin);

    assert_eq!(store.load(ActorKind::User), Some(pair("u")));
    assert!(store.load(ActorKind::Admin).is_none());
}

#[test]
fn file_store_reads_missing_or_corrupt_file_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokens.json");

    let store = FileTokenStore::new(&path);
    assert!(store.load(ActorKind::User).is_none());

    std::fs::write(&path, "not json at all").unwrap();
    assert!(store.load(ActorKind::User).is_none());
    assert!(store.load_cached_user(ActorKind::Admin).is_none());
}
