// crates/worldmark-core/src/visited.rs

//! # Visited-set store
//!
//! A persisted set of country codes the user has marked as visited.
//! Hydrated once at startup, mutated only by [`VisitedSet::toggle`], and
//! mirrored back to storage after every mutation.
//!
//! Persistence is strictly best-effort: read and write failures are logged
//! and swallowed, never propagated. After hydration the in-memory set is the
//! source of truth; storage is a mirror, not authoritative.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage key shared by all backends (native file name, localStorage key).
pub const STORAGE_KEY: &str = "visitedCountries";

/// Backend abstraction for the single key-value persistence slot.
///
/// Implementors take `&self` for writes so they can be shared behind the
/// application state; interior mutability is the backend's concern.
pub trait VisitedStore {
    /// Returns the raw serialized payload, or `None` when the slot is absent
    /// or unreadable.
    fn read(&self) -> Option<String>;

    /// Writes the serialized payload. Errors are reported to the caller,
    /// which logs and continues.
    fn write(&self, payload: &str) -> std::io::Result<()>;
}

/// The set of visited country codes. Order-independent for storage purposes;
/// a `BTreeSet` keeps serialization deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitedSet(BTreeSet<String>);

impl VisitedSet {
    /// Rebuild the set from persistent storage.
    ///
    /// Missing slot or malformed payload both yield the empty set with a
    /// diagnostic log; this never fails.
    pub fn hydrate(store: &dyn VisitedStore) -> Self {
        let Some(raw) = store.read() else {
            return Self::default();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(codes) => Self(codes.into_iter().collect()),
            Err(err) => {
                log::warn!("ignoring corrupt visited-set storage: {err}");
                Self::default()
            }
        }
    }

    /// Returns a new set with `code` removed if present, otherwise added.
    ///
    /// Self-inverse and non-mutating: callers may hold the prior value for
    /// comparison or rendering.
    #[must_use]
    pub fn toggle(&self, code: &str) -> Self {
        let mut next = self.0.clone();
        if !next.remove(code) {
            next.insert(code.to_owned());
        }
        Self(next)
    }

    /// Mirror the set to persistent storage as a JSON array of codes.
    /// Failure (quota, permissions, ...) is logged and swallowed.
    pub fn persist(&self, store: &dyn VisitedStore) {
        let payload = match serde_json::to_string(&self.0) {
            Ok(p) => p,
            Err(err) => {
                log::warn!("failed to serialize visited set: {err}");
                return;
            }
        };
        if let Err(err) = store.write(&payload) {
            log::warn!("failed to persist visited set: {err}");
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for VisitedSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// -----------------------------------------------------------------------------
// Backends
// -----------------------------------------------------------------------------

/// Native backend: one JSON file named after [`STORAGE_KEY`].
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `visitedCountries.json` in the current directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from(format!("{STORAGE_KEY}.json"))
    }
}

impl VisitedStore for FileStore {
    /// Absent file is the normal empty-slot case; any other read failure
    /// gets a diagnostic before falling back to `None`.
    fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Some(payload),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!(
                    "failed to read visited-set storage at {}: {err}",
                    self.path.display()
                );
                None
            }
        }
    }

    fn write(&self, payload: &str) -> std::io::Result<()> {
        fs::write(&self.path, payload)
    }
}

/// In-memory backend for tests and for hosts without persistent storage.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn with_payload(payload: &str) -> Self {
        Self {
            slot: Mutex::new(Some(payload.to_owned())),
        }
    }
}

impl VisitedStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|s| s.clone())
    }

    fn write(&self, payload: &str) -> std::io::Result<()> {
        match self.slot.lock() {
            Ok(mut slot) => {
                *slot = Some(payload.to_owned());
                Ok(())
            }
            Err(_) => Err(std::io::Error::other("storage slot poisoned")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A backend whose writes always fail, for the best-effort contract.
    struct BrokenStore;

    impl VisitedStore for BrokenStore {
        fn read(&self) -> Option<String> {
            None
        }
        fn write(&self, _payload: &str) -> std::io::Result<()> {
            Err(std::io::Error::other("quota exceeded"))
        }
    }

    #[test]
    fn hydrates_from_json_array() {
        let store = MemoryStore::with_payload(r#"["FRA","DEU"]"#);
        let set = VisitedSet::hydrate(&store);
        assert_eq!(set.len(), 2);
        assert!(set.contains("FRA") && set.contains("DEU"));

        let set = set.toggle("FRA");
        assert_eq!(set.iter().collect::<Vec<_>>(), ["DEU"]);

        let set = set.toggle("USA");
        assert!(set.contains("DEU") && set.contains("USA"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn hydrate_tolerates_missing_slot() {
        let store = MemoryStore::default();
        assert!(VisitedSet::hydrate(&store).is_empty());
    }

    #[test]
    fn hydrate_tolerates_corrupt_payload() {
        for bad in [r#"{"not":"an array"}"#, "42", "not json at all"] {
            let store = MemoryStore::with_payload(bad);
            assert!(VisitedSet::hydrate(&store).is_empty(), "payload: {bad}");
        }
    }

    #[test]
    fn toggle_is_self_inverse() {
        let set: VisitedSet = ["FRA".to_owned(), "JPN".to_owned()].into_iter().collect();
        assert_eq!(set.toggle("FRA").toggle("FRA"), set);
        assert_eq!(set.toggle("USA").toggle("USA"), set);
    }

    #[test]
    fn toggle_does_not_mutate_the_original() {
        let before: VisitedSet = ["FRA".to_owned()].into_iter().collect();
        let after = before.toggle("DEU");
        assert!(!before.contains("DEU"));
        assert!(after.contains("DEU"));
    }

    #[test]
    fn persist_round_trips_through_storage() {
        let store = MemoryStore::default();
        let set: VisitedSet = ["USA".to_owned(), "FRA".to_owned()].into_iter().collect();
        set.persist(&store);
        assert_eq!(VisitedSet::hydrate(&store), set);
    }

    #[test]
    fn persist_swallows_write_failure() {
        let set: VisitedSet = ["FRA".to_owned()].into_iter().collect();
        // Must not panic or propagate.
        set.persist(&BrokenStore);
    }

    #[test]
    fn file_store_missing_file_is_the_empty_slot() {
        let store = FileStore::new(std::env::temp_dir().join("worldmark-no-such-slot.json"));
        assert!(store.read().is_none());
        assert!(VisitedSet::hydrate(&store).is_empty());
    }

    #[test]
    fn file_store_read_failure_yields_empty_set() {
        // A directory cannot be read as a file, so this is a real read
        // failure rather than the absent-slot case; hydration still falls
        // back to the empty set without panicking.
        let store = FileStore::new(std::env::temp_dir());
        assert!(store.read().is_none());
        assert!(VisitedSet::hydrate(&store).is_empty());
    }

    #[test]
    fn file_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "worldmark-visited-{}.json",
            std::process::id()
        ));
        let store = FileStore::new(&path);

        let set: VisitedSet = ["DEU".to_owned(), "FRA".to_owned()].into_iter().collect();
        set.persist(&store);
        assert_eq!(VisitedSet::hydrate(&store), set);

        std::fs::remove_file(&path).ok();
    }
}
