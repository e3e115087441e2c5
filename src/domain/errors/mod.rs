//! Domain error types.

mod cloud_error;
mod label_error;
mod photo_error;

pub use cloud_error::CloudError;
pub use label_error::LabelError;
pub use photo_error::PhotoError;
