//! Durable storage implementations.

mod atomic_file;
mod file_storage;
mod memory_storage;

pub use atomic_file::{AtomicFileError, AtomicTextFile};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
