use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Durable key-value store for visitor preferences.
///
/// Values live in a single JSON object on disk and are loaded once when the
/// store is opened. Storage that is unavailable (unreadable file, missing
/// parent directory, corrupt JSON) never surfaces to callers: the store keeps
/// serving the in-memory map and logs a warning on each failed write.
#[derive(Clone)]
pub struct PreferenceStore {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    path: Option<PathBuf>,
    values: HashMap<String, String>,
}

impl PreferenceStore {
    /// Open the store backed by the given file, creating it on first write.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<HashMap<String, String>>(&contents) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring corrupt preferences file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!("Cannot read preferences file {}: {}", path.display(), e);
                HashMap::new()
            }
        };

        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                path: Some(path),
                values,
            })),
        }
    }

    /// A store with no backing file. Used in tests and as the degraded mode
    /// when durable storage is disabled entirely.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                path: None,
                values: HashMap::new(),
            })),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.values.get(key).cloned()
    }

    pub fn set(&self, key: &str, value: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.values.insert(key.to_string(), value.to_string());
        inner.persist();
    }

    pub fn remove(&self, key: &str) {
        let mut inner = self.inner.lock().unwrap();
        if inner.values.remove(key).is_some() {
            inner.persist();
        }
    }
}

impl StoreInner {
    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };

        let contents =
            serde_json::to_string_pretty(&self.values).expect("string map serializes to JSON");
        if let Err(e) = std::fs::write(path, contents) {
            warn!("Cannot write preferences file {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (PreferenceStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = PreferenceStore::open(temp_dir.path().join("preferences.json"));
        (store, temp_dir)
    }

    // ==================== Basic Contract Tests ====================

    #[test]
    fn test_get_missing_key_returns_none() {
        let (store, _temp_dir) = create_test_store();
        assert_eq!(store.get("preferredLanguage"), None);
    }

    #[test]
    fn test_set_then_get() {
        let (store, _temp_dir) = create_test_store();

        store.set("preferredLanguage", "it");
        assert_eq!(store.get("preferredLanguage"), Some("it".to_string()));
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let (store, _temp_dir) = create_test_store();

        store.set("preferredLanguage", "it");
        store.set("preferredLanguage", "fr");
        assert_eq!(store.get("preferredLanguage"), Some("fr".to_string()));
    }

    #[test]
    fn test_remove_clears_key() {
        let (store, _temp_dir) = create_test_store();

        store.set("cookieConsent", "true");
        store.remove("cookieConsent");
        assert_eq!(store.get("cookieConsent"), None);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let (store, _temp_dir) = create_test_store();
        store.remove("cookieConsent");
        assert_eq!(store.get("cookieConsent"), None);
    }

    #[test]
    fn test_keys_are_independent() {
        let (store, _temp_dir) = create_test_store();

        store.set("preferredLanguage", "es");
        store.set("cookieConsent", "false");
        store.remove("cookieConsent");

        assert_eq!(store.get("preferredLanguage"), Some("es".to_string()));
        assert_eq!(store.get("cookieConsent"), None);
    }

    // ==================== Persistence Tests ====================

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("preferences.json");

        {
            let store = PreferenceStore::open(&path);
            store.set("preferredLanguage", "pt");
            store.set("cookieConsent", "true");
        }

        {
            let store = PreferenceStore::open(&path);
            assert_eq!(store.get("preferredLanguage"), Some("pt".to_string()));
            assert_eq!(store.get("cookieConsent"), Some("true".to_string()));
        }
    }

    #[test]
    fn test_remove_survives_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("preferences.json");

        {
            let store = PreferenceStore::open(&path);
            store.set("cookieConsent", "true");
            store.remove("cookieConsent");
        }

        {
            let store = PreferenceStore::open(&path);
            assert_eq!(store.get("cookieConsent"), None);
        }
    }

    #[test]
    fn test_clone_shares_state() {
        let (store, _temp_dir) = create_test_store();
        let clone = store.clone();

        store.set("preferredLanguage", "fr");
        assert_eq!(clone.get("preferredLanguage"), Some("fr".to_string()));
    }

    // ==================== Degraded Storage Tests ====================

    #[test]
    fn test_unavailable_path_degrades_to_in_memory() {
        // Parent directory does not exist, so every write fails. The store
        // must keep working against its in-memory map.
        let store = PreferenceStore::open("/nonexistent/dir/preferences.json");

        store.set("preferredLanguage", "it");
        assert_eq!(store.get("preferredLanguage"), Some("it".to_string()));

        store.remove("preferredLanguage");
        assert_eq!(store.get("preferredLanguage"), None);
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").expect("write");

        let store = PreferenceStore::open(&path);
        assert_eq!(store.get("preferredLanguage"), None);

        // Writes recover the file.
        store.set("preferredLanguage", "en");
        let reopened = PreferenceStore::open(&path);
        assert_eq!(reopened.get("preferredLanguage"), Some("en".to_string()));
    }

    #[test]
    fn test_in_memory_store() {
        let store = PreferenceStore::in_memory();

        store.set("cookieConsent", "false");
        assert_eq!(store.get("cookieConsent"), Some("false".to_string()));

        store.remove("cookieConsent");
        assert_eq!(store.get("cookieConsent"), None);
    }
}
