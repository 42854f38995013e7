mod error;
mod file_storage;
mod memory_storage;

pub use error::{Result as StorageResult, StorageError};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// String key-value persistence, shaped after the browser's `localStorage`.
pub trait KeyValueStorage {
    /// Returns the stored value, or `None` if the key is absent.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}
