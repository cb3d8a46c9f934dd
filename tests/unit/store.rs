use super::*;
use crate::i18n::Locale;

struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[test]
fn empty_store_has_no_preference() {
    let store = LocaleStore::in_memory();
    assert_eq!(store.stored_language(), None);
    assert!(!store.is_manual_selection());
    assert_eq!(store.manual_preference(), None);
}

#[test]
fn manual_preference_sets_both_keys() {
    let store = LocaleStore::in_memory();
    store.set_preference("ja", true);
    assert_eq!(store.stored_language().as_deref(), Some("ja"));
    assert!(store.is_manual_selection());
    assert_eq!(store.manual_preference().as_deref(), Some("ja"));
}

#[test]
fn automatic_preference_does_not_set_manual_flag() {
    let store = LocaleStore::in_memory();
    store.set_preference("ko", false);
    assert_eq!(store.stored_language().as_deref(), Some("ko"));
    assert!(!store.is_manual_selection());
}

#[test]
fn automatic_write_keeps_existing_manual_flag() {
    let store = LocaleStore::in_memory();
    store.set_preference("vi", true);
    store.set_preference("en", false);
    assert_eq!(store.stored_language().as_deref(), Some("en"));
    assert!(store.is_manual_selection());
}

#[test]
fn clear_manual_flag_keeps_code() {
    let store = LocaleStore::in_memory();
    store.set_preference("pt", true);
    store.clear_manual_flag();
    assert!(!store.is_manual_selection());
    assert_eq!(store.stored_language().as_deref(), Some("pt"));
}

#[test]
fn manual_flag_requires_exact_marker() {
    let backend = MemoryStore::default();
    backend.set(MANUAL_KEY, "yes").expect("set");
    let store = LocaleStore::new(Box::new(backend));
    assert!(!store.is_manual_selection());
}

#[test]
fn blank_manual_code_is_not_a_preference() {
    let backend = MemoryStore::default();
    backend.set(LANGUAGE_KEY, "  ").expect("set");
    backend.set(MANUAL_KEY, "true").expect("set");
    let store = LocaleStore::new(Box::new(backend));
    assert!(store.is_manual_selection());
    assert_eq!(store.manual_preference(), None);
}

#[test]
fn failing_backend_reads_as_empty_and_writes_are_swallowed() {
    let store = LocaleStore::new(Box::new(FailingStore));
    store.set_preference("es", true);
    store.clear_manual_flag();
    assert_eq!(store.stored_language(), None);
    assert!(!store.is_manual_selection());
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("geolang").join("preferences.ron");

    let first = LocaleStore::new(Box::new(FileStore::new(path.clone())));
    first.set_preference(Locale::Vi.code(), true);

    let second = LocaleStore::new(Box::new(FileStore::new(path.clone())));
    assert_eq!(second.stored_language().as_deref(), Some("vi"));
    assert!(second.is_manual_selection());

    let contents = std::fs::read_to_string(&path).expect("read");
    assert!(contents.contains(LANGUAGE_KEY));
    assert!(contents.contains(MANUAL_KEY));
}

#[test]
fn file_store_missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let backend = FileStore::new(dir.path().join("absent.ron"));
    assert_eq!(backend.get(LANGUAGE_KEY).expect("get"), None);
}

#[test]
fn file_store_corrupt_file_is_an_error_on_read_and_replaced_on_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.ron");
    std::fs::write(&path, "{{{ definitely not ron").expect("write");

    let backend = FileStore::new(path.clone());
    assert!(matches!(backend.get(LANGUAGE_KEY), Err(StoreError::Parse(_))));

    let store = LocaleStore::new(Box::new(backend));
    assert_eq!(store.stored_language(), None);
    store.set_preference("zh", false);
    assert_eq!(store.stored_language().as_deref(), Some("zh"));
}

#[test]
fn file_store_remove_only_touches_one_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let backend = FileStore::new(dir.path().join("preferences.ron"));
    backend.set(LANGUAGE_KEY, "ja").expect("set");
    backend.set(MANUAL_KEY, "true").expect("set");
    backend.remove(MANUAL_KEY).expect("remove");
    assert_eq!(backend.get(LANGUAGE_KEY).expect("get").as_deref(), Some("ja"));
    assert_eq!(backend.get(MANUAL_KEY).expect("get"), None);
}

#[test]
fn file_store_write_replaces_file_without_leftovers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.ron");
    let backend = FileStore::new(path.clone());
    backend.set(LANGUAGE_KEY, "ko").expect("set");
    backend.set(LANGUAGE_KEY, "vi").expect("set");

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read_dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("preferences.ron")]);
    assert_eq!(backend.get(LANGUAGE_KEY).expect("get").as_deref(), Some("vi"));
}

#[test]
fn file_store_ignores_stale_staging_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.ron");
    std::fs::write(dir.path().join("preferences.ron.tmp"), "half a wri").expect("write");

    let backend = FileStore::new(path.clone());
    assert_eq!(backend.get(LANGUAGE_KEY).expect("get"), None);
    backend.set(LANGUAGE_KEY, "es").expect("set");
    assert_eq!(backend.get(LANGUAGE_KEY).expect("get").as_deref(), Some("es"));
    assert!(!dir.path().join("preferences.ron.tmp").exists());
}
