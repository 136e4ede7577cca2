use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_OPTIONS, STORAGE_KEY};
use crate::error::{StorageError, WheelError};
use crate::storage::KeyValueStore;
use crate::validation::{validate_option_label, validate_unique_option};

/// Ordered wheel labels. Order is slot order; labels are trimmed and unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionList(Vec<String>);

impl OptionList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Checks `raw` against the list and returns the label that would be
    /// appended.
    pub fn check_new(&self, raw: &str) -> Result<String, WheelError> {
        validate_option_label(raw).map_err(|_| WheelError::EmptyOption)?;
        let label = raw.trim();
        validate_unique_option(label, &self.0)
            .map_err(|_| WheelError::DuplicateOption(label.to_string()))?;
        Ok(label.to_string())
    }

    pub fn push(&mut self, raw: &str) -> Result<&str, WheelError> {
        let label = self.check_new(raw)?;
        self.0.push(label);
        Ok(self.0.last().map(String::as_str).unwrap_or_default())
    }

    pub fn remove(&mut self, index: usize) -> Result<String, WheelError> {
        if index >= self.0.len() {
            return Err(WheelError::NoSuchOption { index, len: self.0.len() });
        }
        Ok(self.0.remove(index))
    }

    /// Rebuilds a list from untrusted labels, trimming them and dropping
    /// blanks and repeats. Returns how many entries were dropped.
    fn sanitized(labels: Vec<String>) -> (Self, usize) {
        let total = labels.len();
        let mut list = Self::new();
        for label in labels {
            let _ = list.push(&label);
        }
        let dropped = total - list.len();
        (list, dropped)
    }
}

impl Default for OptionList {
    fn default() -> Self {
        Self(DEFAULT_OPTIONS.iter().map(|label| label.to_string()).collect())
    }
}

/// The option list together with the store it is mirrored to. Every
/// successful mutation writes the whole list back under `key`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionStore<S> {
    key: String,
    options: OptionList,
    storage: S,
}

impl<S: KeyValueStore> OptionStore<S> {
    /// Reads the list saved under the default key.
    pub fn load(storage: S) -> Result<Self, StorageError> {
        Self::load_with_key(storage, STORAGE_KEY)
    }

    /// Falls back to the default options when nothing is stored yet.
    /// Stored data that is not a JSON array of strings is an error.
    pub fn load_with_key(storage: S, key: &str) -> Result<Self, StorageError> {
        let options = match storage.get_item(key)? {
            Some(json) => {
                let labels: Vec<String> = serde_json::from_str(&json)?;
                let (options, dropped) = OptionList::sanitized(labels);
                if dropped > 0 {
                    log::warn!("Dropped {} blank or repeated stored options", dropped);
                }
                log::info!("Loaded {} options from storage", options.len());
                options
            }
            None => {
                log::debug!("No options stored under {:?}, using defaults", key);
                OptionList::default()
            }
        };

        Ok(Self {
            key: key.to_string(),
            options,
            storage,
        })
    }

    /// Starts from the default options without reading the store. Used
    /// when the stored value could not be read.
    pub fn with_defaults(storage: S, key: &str) -> Self {
        Self {
            key: key.to_string(),
            options: OptionList::default(),
            storage,
        }
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Appends a trimmed, previously unseen label. If the write to storage
    /// fails the label stays in the list and the storage error is returned.
    pub fn add(&mut self, raw: &str) -> Result<(), WheelError> {
        let label = self.options.push(raw)?.to_string();
        log::debug!("Added option {:?}", label);
        self.persist()?;
        Ok(())
    }

    /// Same write-failure behaviour as [`OptionStore::add`].
    pub fn remove(&mut self, index: usize) -> Result<String, WheelError> {
        let removed = self.options.remove(index)?;
        log::debug!("Removed option {:?}", removed);
        self.persist()?;
        Ok(removed)
    }

    pub fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.options)?;
        self.storage.set_item(&self.key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }
    }

    fn store_with(labels: &[&str]) -> OptionStore<MemoryStore> {
        let json = serde_json::to_string(labels).unwrap();
        OptionStore::load(MemoryStore::with_item(STORAGE_KEY, &json)).unwrap()
    }

    #[test]
    fn test_defaults_when_nothing_stored() {
        let store = OptionStore::load(MemoryStore::new()).unwrap();
        assert_eq!(store.options().labels(), ["Option 1", "Option 2", "Option 3"]);
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut store = store_with(&["A"]);
        store.add("  B  ").unwrap();
        assert_eq!(store.options().labels(), ["A", "B"]);
    }

    #[test]
    fn test_add_blank_is_rejected_without_change() {
        let mut store = store_with(&["A"]);
        assert!(matches!(store.add(""), Err(WheelError::EmptyOption)));
        assert!(matches!(store.add("   "), Err(WheelError::EmptyOption)));
        assert_eq!(store.options().labels(), ["A"]);
    }

    #[test]
    fn test_add_duplicate_is_a_user_notice() {
        let mut store = store_with(&[]);
        store.add("X").unwrap();
        let err = store.add(" X ").unwrap_err();
        assert!(err.is_user_notice());
        assert_eq!(err.to_string(), "This option already exists!");
        assert_eq!(store.options().len(), 1);
    }

    #[test]
    fn test_add_sequence_keeps_order_and_uniqueness() {
        let mut store = store_with(&[]);
        for raw in ["b", "a", "b ", "c", " a", "B", ""] {
            let _ = store.add(raw);
        }
        assert_eq!(store.options().labels(), ["b", "a", "c", "B"]);
    }

    #[test]
    fn test_remove_middle_option() {
        let mut store = store_with(&["A", "B", "C"]);
        assert_eq!(store.remove(1).unwrap(), "B");
        assert_eq!(store.options().labels(), ["A", "C"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = store_with(&["A"]);
        assert!(matches!(
            store.remove(3),
            Err(WheelError::NoSuchOption { index: 3, len: 1 })
        ));
        assert_eq!(store.options().labels(), ["A"]);
    }

    #[test]
    fn test_mutations_are_persisted_and_reload_identically() {
        let backing = MemoryStore::new();
        let mut store = OptionStore::load(backing.clone()).unwrap();
        store.add("Tacos").unwrap();
        store.remove(0).unwrap();

        let stored = backing.get_item(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(stored, r#"["Option 2","Option 3","Tacos"]"#);

        let reloaded = OptionStore::load(backing).unwrap();
        assert_eq!(reloaded.options(), store.options());
    }

    #[test]
    fn test_malformed_storage_is_a_parse_error() {
        let backing = MemoryStore::with_item(STORAGE_KEY, "{not json");
        assert!(matches!(
            OptionStore::load(backing),
            Err(StorageError::Parse(_))
        ));
        let backing = MemoryStore::with_item(STORAGE_KEY, r#"{"a": 1}"#);
        assert!(OptionStore::load(backing).is_err());
    }

    #[test]
    fn test_load_drops_blank_and_repeated_entries() {
        let store = store_with(&[" A ", "", "B", "A", "  "]);
        assert_eq!(store.options().labels(), ["A", "B"]);
    }

    #[test]
    fn test_failed_write_keeps_mutation() {
        let mut store = OptionStore::load(FailingStore).unwrap();
        let err = store.add("D").unwrap_err();
        assert!(matches!(err, WheelError::Storage(StorageError::Backend(_))));
        assert_eq!(store.options().len(), 4);
    }

    #[test]
    fn test_custom_key() {
        let backing = MemoryStore::new();
        let mut store = OptionStore::load_with_key(backing.clone(), "other").unwrap();
        store.add("Z").unwrap();
        assert!(backing.get_item("other").unwrap().is_some());
        assert!(backing.get_item(STORAGE_KEY).unwrap().is_none());
        assert_eq!(store.key(), "other");
    }
}
