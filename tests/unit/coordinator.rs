use super::*;
use crate::store::{KeyValueStore, LANGUAGE_KEY, MANUAL_KEY, MemoryStore, StoreError};
use crate::test_support::{RecordingRuntime, ResolverHarness};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const KOREA_NO_HINT: &str = r#"{"country_code": "KR"}"#;
const BRAZIL_SUCCESS: &str = r#"{"status": "success", "countryCode": "BR"}"#;

/// Memory store that counts writes, shared with the test through an `Arc`.
#[derive(Clone, Default)]
struct CountingStore {
    inner: Arc<MemoryStore>,
    writes: Arc<AtomicUsize>,
    log: Arc<Mutex<Vec<(String, String)>>>,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.log
            .lock()
            .expect("lock")
            .push((key.to_string(), value.to_string()));
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(key)
    }
}

fn build(
    harness: ResolverHarness,
    store: LocaleStore,
) -> (LanguageCoordinator<RecordingRuntime>, Arc<AtomicUsize>) {
    let calls = Arc::clone(&harness.primary_calls);
    (
        LanguageCoordinator::new(store, harness.resolver, RecordingRuntime::default()),
        calls,
    )
}

fn offline() -> ResolverHarness {
    ResolverHarness::new(Err(500), Err(500), None)
}

#[test]
fn select_every_supported_locale_persists_as_manual() {
    let (coordinator, _) = build(offline(), LocaleStore::in_memory());
    for &locale in Locale::ALL {
        let selected = coordinator.select_language(locale.code()).expect("select");
        assert_eq!(selected, locale);
        assert_eq!(
            coordinator.store().stored_language().as_deref(),
            Some(locale.code())
        );
        assert!(coordinator.store().is_manual_selection());
        assert_eq!(coordinator.runtime().current_language(), locale);
    }
}

#[test]
fn select_invalid_code_is_a_no_op() {
    let (coordinator, _) = build(offline(), LocaleStore::in_memory());
    coordinator.store().set_preference("ko", false);

    for code in ["fr", "zh-CN", "", "english"] {
        let err = coordinator.select_language(code).expect_err("must reject");
        assert!(matches!(err, SelectError::Unsupported(_)));
    }
    assert_eq!(coordinator.store().stored_language().as_deref(), Some("ko"));
    assert!(!coordinator.store().is_manual_selection());
    assert!(coordinator.runtime().applied().is_empty());
}

#[test]
fn manual_japanese_applies_without_network() {
    let harness = ResolverHarness::new(Ok(KOREA_NO_HINT), Ok(BRAZIL_SUCCESS), Some("en-US"));
    let store = LocaleStore::in_memory();
    store.set_preference("ja", true);
    let (coordinator, primary_calls) = build(harness, store);

    assert_eq!(coordinator.resolve_startup_language(), Outcome::Manual(Locale::Ja));
    assert_eq!(coordinator.runtime().applied(), vec![Locale::Ja]);
    assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn korea_resolves_auto_and_persists_non_manual() {
    let harness = ResolverHarness::new(Ok(KOREA_NO_HINT), Err(500), None);
    let (coordinator, _) = build(harness, LocaleStore::in_memory());

    assert_eq!(coordinator.resolve_startup_language(), Outcome::Auto(Locale::Ko));
    assert_eq!(coordinator.store().stored_language().as_deref(), Some("ko"));
    assert!(!coordinator.store().is_manual_selection());
    assert_eq!(coordinator.runtime().applied(), vec![Locale::Ko]);
}

#[test]
fn brazil_from_secondary_resolves_portuguese() {
    let harness = ResolverHarness::new(Err(503), Ok(BRAZIL_SUCCESS), None);
    let (coordinator, _) = build(harness, LocaleStore::in_memory());
    assert_eq!(coordinator.resolve_startup_language(), Outcome::Auto(Locale::Pt));
}

#[test]
fn runtime_tag_used_when_offline() {
    let harness = ResolverHarness::new(Err(500), Err(500), Some("es-MX"));
    let (coordinator, _) = build(harness, LocaleStore::in_memory());
    assert_eq!(coordinator.resolve_startup_language(), Outcome::Auto(Locale::Es));
}

#[test]
fn repeated_resolution_is_stable() {
    let harness = ResolverHarness::new(Ok(KOREA_NO_HINT), Err(500), None);
    let backend = CountingStore::default();
    let log = Arc::clone(&backend.log);
    let (coordinator, _) = build(harness, LocaleStore::new(Box::new(backend)));

    let first = coordinator.resolve_startup_language();
    let second = coordinator.resolve_startup_language();
    assert_eq!(first, Outcome::Auto(Locale::Ko));
    assert_eq!(second, first);

    let log = log.lock().expect("lock");
    assert_eq!(
        *log,
        vec![
            (LANGUAGE_KEY.to_string(), "ko".to_string()),
            (LANGUAGE_KEY.to_string(), "ko".to_string()),
        ]
    );
}

#[test]
fn resolution_after_manual_selection_is_manual() {
    let harness = ResolverHarness::new(Ok(KOREA_NO_HINT), Err(500), None);
    let (coordinator, primary_calls) = build(harness, LocaleStore::in_memory());

    assert_eq!(coordinator.resolve_startup_language(), Outcome::Auto(Locale::Ko));
    coordinator.select_language("vi").expect("select");
    assert_eq!(coordinator.resolve_startup_language(), Outcome::Manual(Locale::Vi));
    assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn unsupported_manual_code_falls_back_without_writes() {
    let harness = ResolverHarness::new(Ok(KOREA_NO_HINT), Err(500), None);
    let backend = CountingStore::default();
    backend.inner.set(LANGUAGE_KEY, "fr").expect("set");
    backend.inner.set(MANUAL_KEY, "true").expect("set");
    let writes = Arc::clone(&backend.writes);
    let (coordinator, _) = build(harness, LocaleStore::new(Box::new(backend)));

    assert_eq!(coordinator.resolve_startup_language(), Outcome::Fallback);
    assert_eq!(writes.load(Ordering::SeqCst), 0);
    assert!(coordinator.runtime().applied().is_empty());
}

#[test]
fn rejected_apply_reports_error() {
    let harness = ResolverHarness::new(Ok(KOREA_NO_HINT), Err(500), None);
    let coordinator = LanguageCoordinator::new(
        LocaleStore::in_memory(),
        harness.resolver,
        RecordingRuntime::rejecting(),
    );
    assert_eq!(coordinator.resolve_startup_language(), Outcome::Error);
    assert!(matches!(
        coordinator.select_language("en"),
        Err(SelectError::Runtime(_))
    ));
}

#[test]
fn clear_manual_flag_reenables_detection() {
    let harness = ResolverHarness::new(Ok(KOREA_NO_HINT), Err(500), None);
    let (coordinator, _) = build(harness, LocaleStore::in_memory());
    coordinator.select_language("ja").expect("select");
    coordinator.clear_manual_flag();
    assert_eq!(coordinator.resolve_startup_language(), Outcome::Auto(Locale::Ko));
}

#[test]
fn spawned_resolution_reports_outcome() {
    let harness = ResolverHarness::new(Err(500), Ok(BRAZIL_SUCCESS), None);
    let (coordinator, _) = build(harness, LocaleStore::in_memory());
    let (tx, rx) = mpsc::channel();
    assert!(spawn_startup_resolution(coordinator, tx));
    let outcome = rx.recv_timeout(Duration::from_secs(5)).expect("outcome");
    assert_eq!(outcome, Outcome::Auto(Locale::Pt));
}

#[test]
fn outcome_display() {
    assert_eq!(Outcome::Manual(Locale::Ja).to_string(), "manual (ja)");
    assert_eq!(Outcome::Auto(Locale::Ko).to_string(), "auto (ko)");
    assert_eq!(Outcome::Fallback.to_string(), "fallback");
    assert_eq!(Outcome::Error.to_string(), "error");
}
