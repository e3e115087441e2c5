mod cloud_storage_port;

pub use cloud_storage_port::CloudStoragePort;

#[cfg(test)]
pub mod mocks {
    pub use super::cloud_storage_port::MockCloudStoragePort;
}
