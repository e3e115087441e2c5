//! Domain entities.

mod bucket;
mod photo;
mod zone;

pub use bucket::Bucket;
pub use photo::{PhotoFormat, UploadedPhoto};
pub use zone::{
    HeatIndex, MonitoredZone, SeatingZone, WristbandColor, violation, water_needed,
};
