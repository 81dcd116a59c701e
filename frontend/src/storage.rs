use shared::spin_lock::RecordStore;
use web_sys::{window, Storage};

/// [`RecordStore`] over `window.localStorage`. Storage can be absent
/// or blocked (private browsing, sandboxed iframes); in that case
/// every read misses and writes are dropped, so the widget degrades
/// to an unpersisted single-page session.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("local storage unavailable; spin lock will not survive reloads");
        }
        Self { storage }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}
