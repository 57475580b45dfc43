pub mod config;
pub mod dashboard;
pub mod error;
pub mod listing;
pub mod navigation;
pub mod session;

// Re-export common error type
pub use error::NuboError;
