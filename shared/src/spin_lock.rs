use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    KEY_DISCOUNT_VALUE, KEY_SESSION_ID, KEY_SPIN_TIME, KEY_SPIN_USED, KEY_SS_START,
    SESSION_ID_ALPHABET, SESSION_ID_LEN,
};

/// The persisted outcome of a spin. Written once when the animation
/// completes, read back on every page load, purged when the lock
/// window elapses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinRecord {
    pub used: bool,
    /// Epoch milliseconds of the spin.
    pub spin_time: i64,
    pub discount_label: String,
    pub session_id: String,
    /// Epoch milliseconds the screenshot window opened.
    pub screenshot_start: i64,
}

/// String key-value persistence. The frontend backs this with
/// `window.localStorage`; tests use [`MemoryStore`].
pub trait RecordStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and headless embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// The spin/lock state machine over a [`RecordStore`]: Idle (no
/// record, spin enabled) -> Locked (record present, spin disabled)
/// -> Idle again once the lock window elapses.
pub struct LockState<S> {
    store: S,
    lock_ms: i64,
}

impl<S: RecordStore> LockState<S> {
    pub fn new(store: S, lock_ms: i64) -> Self {
        Self { store, lock_ms }
    }

    pub fn lock_ms(&self) -> i64 {
        self.lock_ms
    }

    /// Persists a fresh record, overwriting any prior one.
    pub fn write(&mut self, label: &str, session_id: &str, now: i64) -> SpinRecord {
        let record = SpinRecord {
            used: true,
            spin_time: now,
            discount_label: label.to_string(),
            session_id: session_id.to_string(),
            screenshot_start: now,
        };
        self.store.set(KEY_SPIN_USED, "true");
        self.store.set(KEY_SPIN_TIME, &now.to_string());
        self.store.set(KEY_DISCOUNT_VALUE, label);
        self.store.set(KEY_SESSION_ID, session_id);
        self.store.set(KEY_SS_START, &now.to_string());
        record
    }

    /// Reads the current record, or None if no spin was recorded.
    /// Missing or garbled numeric fields coerce to 0, which reads as
    /// long expired and gets cleaned up by [`Self::initialize`].
    pub fn read(&self) -> Option<SpinRecord> {
        let used = self.store.get(KEY_SPIN_USED)? == "true";
        let spin_time = self
            .store
            .get(KEY_SPIN_TIME)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let screenshot_start = self
            .store
            .get(KEY_SS_START)
            .and_then(|v| v.parse().ok())
            .unwrap_or(spin_time);
        Some(SpinRecord {
            used,
            spin_time,
            discount_label: self.store.get(KEY_DISCOUNT_VALUE).unwrap_or_default(),
            session_id: self.store.get(KEY_SESSION_ID).unwrap_or_default(),
            screenshot_start,
        })
    }

    /// Removes every persisted field, re-enabling the spin.
    pub fn clear(&mut self) {
        for key in [
            KEY_SPIN_USED,
            KEY_SPIN_TIME,
            KEY_DISCOUNT_VALUE,
            KEY_SESSION_ID,
            KEY_SS_START,
        ] {
            self.store.remove(key);
        }
    }

    /// True while a used record exists and the lock window has not
    /// elapsed.
    pub fn is_locked(&self, now: i64) -> bool {
        match self.read() {
            Some(record) => record.used && now - record.spin_time < self.lock_ms,
            None => false,
        }
    }

    /// Epoch milliseconds at which the given record unlocks.
    pub fn unlock_at(&self, record: &SpinRecord) -> i64 {
        record.spin_time + self.lock_ms
    }

    /// Load-time resolution: returns the record to resume when still
    /// inside the lock window, otherwise purges stale state and
    /// returns None.
    pub fn initialize(&mut self, now: i64) -> Option<SpinRecord> {
        match self.read() {
            Some(record) if record.used && now - record.spin_time < self.lock_ms => Some(record),
            Some(_) => {
                log::debug!("spin lock expired, clearing stale record");
                self.clear();
                None
            }
            None => None,
        }
    }
}

/// 8 characters drawn uniformly from a 32-symbol alphabet.
pub fn generate_session_id<R: Rng>(rng: &mut R) -> String {
    (0..SESSION_ID_LEN)
        .map(|_| SESSION_ID_ALPHABET[rng.gen_range(0..SESSION_ID_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const LOCK_MS: i64 = 24 * 60 * 60 * 1000;

    fn lock_state() -> LockState<MemoryStore> {
        LockState::new(MemoryStore::default(), LOCK_MS)
    }

    #[test]
    fn test_write_read_round_trip() {
        let mut state = lock_state();
        let written = state.write("10%", "ABCD2345", 1_000);
        assert_eq!(state.read(), Some(written));
    }

    #[test]
    fn test_lock_window_boundaries() {
        let mut state = lock_state();
        state.write("5%", "ABCD2345", 0);
        assert!(state.is_locked(0));
        assert!(state.is_locked(100));
        assert!(state.is_locked(LOCK_MS - 1));
        assert!(!state.is_locked(LOCK_MS));
        assert!(!state.is_locked(LOCK_MS + 1));
    }

    #[test]
    fn test_initialize_resumes_within_window() {
        let mut state = lock_state();
        state.write("10%", "WXYZ6789", 500);
        let resumed = state.initialize(500 + LOCK_MS - 1).expect("still locked");
        assert_eq!(resumed.discount_label, "10%");
        assert_eq!(resumed.session_id, "WXYZ6789");
    }

    #[test]
    fn test_initialize_clears_expired_record() {
        let mut state = lock_state();
        state.write("5%", "WXYZ6789", 500);
        assert!(state.initialize(500 + LOCK_MS).is_none());
        assert!(state.read().is_none());
    }

    #[test]
    fn test_missing_timestamp_reads_as_expired() {
        let mut store = MemoryStore::default();
        store.set(KEY_SPIN_USED, "true");
        store.set(KEY_DISCOUNT_VALUE, "5%");
        let mut state = LockState::new(store, LOCK_MS);
        // spin_time coerces to 0, so any realistic clock is past it.
        assert!(!state.is_locked(LOCK_MS + 1));
        assert!(state.initialize(LOCK_MS + 1).is_none());
    }

    #[test]
    fn test_screenshot_start_falls_back_to_spin_time() {
        let mut store = MemoryStore::default();
        store.set(KEY_SPIN_USED, "true");
        store.set(KEY_SPIN_TIME, "12345");
        let state = LockState::new(store, LOCK_MS);
        assert_eq!(state.read().unwrap().screenshot_start, 12345);
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut state = lock_state();
        state.write("10%", "ABCD2345", 1_000);
        state.clear();
        assert!(state.read().is_none());
        assert!(!state.is_locked(1_001));
    }

    #[test]
    fn test_session_id_shape() {
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..200 {
            let id = generate_session_id(&mut rng);
            assert_eq!(id.len(), SESSION_ID_LEN);
            assert!(id.bytes().all(|b| SESSION_ID_ALPHABET.contains(&b)));
        }
    }
}
