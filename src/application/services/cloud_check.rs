//! Cloud key verification rendering.

use crate::application::dto::{CloudReport, PanelOutput};

/// Banner shown on any failed verification.
pub const FAILURE_BANNER: &str = "❌ Failed to connect to Google Cloud:";

/// Renders the outcome of a cloud key verification.
#[must_use]
pub fn cloud_check_output(report: &CloudReport) -> PanelOutput {
    match report {
        CloudReport::Connected { buckets } => {
            let output = PanelOutput::new().success("✅ Successfully connected to Google Cloud!");
            if buckets.is_empty() {
                return output.info("ℹ️ No storage buckets found, but connection is working.");
            }
            buckets.iter().fold(
                output.text("📦 Storage Buckets found in your project:"),
                |output, bucket| output.bullet(format!("– {}", bucket.name())),
            )
        }
        CloudReport::Failed { diagnostic } => PanelOutput::new()
            .error(FAILURE_BANNER)
            .code(diagnostic.clone()),
    }
}
