//! Domain layer with venue value objects, errors and port definitions.

/// Cloud connectivity status.
pub mod connection;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use connection::ConnectionStatus;
pub use entities::{
    Bucket, HeatIndex, MonitoredZone, PhotoFormat, SeatingZone, UploadedPhoto, WristbandColor,
};
pub use errors::{CloudError, LabelError, PhotoError};
pub use ports::CloudStoragePort;
