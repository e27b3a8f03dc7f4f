//! Configuration types module

pub mod app;
pub mod database;
pub mod http;
pub mod logging;

// Re-export main types
pub use app::*;
pub use database::DatabaseConfig;
pub use http::HttpConfig;
pub use logging::LoggingConfig;
