//! Crowd voice alert trigger.

use super::media::ALARM_BEEP_URL;
use crate::application::dto::PanelOutput;

/// Label of the trigger button.
pub const TRIGGER_LABEL: &str = "Trigger Alert: High Crowd in Zone C";

/// Renders the alert confirmation once the trigger has been pressed.
#[must_use]
pub fn voice_alert(triggered: bool) -> PanelOutput {
    if !triggered {
        return PanelOutput::new();
    }

    PanelOutput::new()
        .warning("📢 Alert Sent: Zone C is overcrowded! Please move calmly.")
        .audio(ALARM_BEEP_URL)
        .info("🗣️ Voice message played + guards notified.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_button_is_silent() {
        assert!(voice_alert(false).is_empty());
    }

    #[test]
    fn test_pressed_button_announces() {
        let output = voice_alert(true);
        assert!(output.mentions("Zone C is overcrowded"));
        assert!(output.mentions("guards notified"));
        assert_eq!(output.media_links(), vec![ALARM_BEEP_URL]);
    }
}
