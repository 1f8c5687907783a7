// Durable key-value storage for the explorer
// Favorites survive restarts here; session flags live in memory

pub mod error;
pub mod memory;
pub mod sqlite;

pub use error::StorageError;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

pub type Result<T> = std::result::Result<T, StorageError>;

/// String-keyed, string-valued storage
///
/// Implementations report failures honestly. Callers decide whether a failure
/// matters (the favorites store swallows them, for example).
pub trait Storage: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}
