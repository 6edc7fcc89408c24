pub mod config;
pub mod logging;

// Proxy engine modules
pub mod error;
pub mod fetch;
pub mod filename;
pub mod format;
pub mod http;
pub mod metadata;
pub mod probe;
pub mod scratch;
pub mod transcript;
