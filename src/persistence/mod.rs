pub mod files;
pub mod snapshot;
pub mod storage;

pub use files::{ensure_inbox_dir, init_local_inbox, log_file};
pub use storage::{JsonFileStorage, Storage};

#[cfg(test)]
pub use storage::MemoryStorage;
