//! Use case implementations.

mod verify_cloud_key_use_case;

pub use verify_cloud_key_use_case::VerifyCloudKeyUseCase;
