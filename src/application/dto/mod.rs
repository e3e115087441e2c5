//! Data transfer objects for the application layer.

mod cloud_report;
mod panel_output;

pub use cloud_report::CloudReport;
pub use panel_output::{NoticeLevel, OutputBlock, PanelOutput};
