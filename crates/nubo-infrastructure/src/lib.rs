pub mod config_service;
pub mod ip_lookup;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::ip_lookup::HttpIpLookup;
pub use crate::paths::NuboPaths;
pub use crate::storage::{FileStorage, MemoryStorage};
