//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Google Cloud Storage client.
pub mod gcs;
/// Media link launcher.
pub mod media;
/// Photo upload handling.
pub mod photo;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use gcs::GcsStorageClient;
pub use media::open_media_links;
pub use photo::PhotoLoader;
