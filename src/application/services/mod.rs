//! Panel services.
//!
//! Each panel is a pure function from its inputs to a [`PanelOutput`].
//!
//! [`PanelOutput`]: crate::application::dto::PanelOutput

pub mod cloud_check;
pub mod lost_child;
pub mod media;
pub mod seating;
pub mod voice_alert;
pub mod water_dispatch;
pub mod wristband;

pub use cloud_check::cloud_check_output;
pub use lost_child::lost_child_report;
pub use seating::parking_guidance;
pub use voice_alert::voice_alert;
pub use water_dispatch::{DispatchStage, water_dispatch};
pub use wristband::check_wristband;
