//! Wristband zone violation check.

use tracing::debug;

use super::media::ALARM_BEEP_URL;
use crate::application::dto::PanelOutput;
use crate::domain::entities::{SeatingZone, WristbandColor, violation};

/// Compares a wristband against the zone its wearer was spotted in.
#[must_use]
pub fn check_wristband(color: WristbandColor, current_zone: SeatingZone) -> PanelOutput {
    if violation(color, current_zone) {
        debug!(
            color = color.color_name(),
            required = %color.required_zone(),
            current = %current_zone,
            "Wristband zone violation"
        );
        PanelOutput::new()
            .error("🚨 Zone Violation Detected! Guard alerted + drone voice warning activated.")
            .audio(ALARM_BEEP_URL)
    } else {
        PanelOutput::new().success("✅ You are in the correct zone.")
    }
}
