//! Google Cloud Storage adapter.

mod auth;
mod client;
mod credentials;
mod dto;

pub use client::GcsStorageClient;
pub use credentials::ServiceAccountKey;
