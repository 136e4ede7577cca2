use shared::{KeyValueStore, MemoryStore, StorageError};
use web_sys::{window, Storage};

/// Where the option list is kept: the browser's `localStorage`, or memory
/// when the browser refuses access (private windows, storage disabled).
#[derive(Debug, Clone)]
pub enum BrowserStorage {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => BrowserStorage::Local(storage),
            Some(Err(err)) => {
                log::warn!("localStorage access error, options will not be saved: {:?}", err);
                BrowserStorage::Memory(MemoryStore::new())
            }
            _ => {
                log::warn!("localStorage not available, options will not be saved");
                BrowserStorage::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStorage::Local(storage) => storage
                .get_item(key)
                .map_err(|e| StorageError::Backend(format!("Failed to read from localStorage: {:?}", e))),
            BrowserStorage::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStorage::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| StorageError::Backend(format!("Failed to save to localStorage: {:?}", e))),
            BrowserStorage::Memory(store) => store.set_item(key, value),
        }
    }
}
