//! Water need detection and drone dispatch flow.

use super::media::{DRONE_GIF_URL, WATER_POUR_URL};
use crate::application::dto::PanelOutput;
use crate::domain::entities::{HeatIndex, MonitoredZone};

/// Label of the guard confirmation checkbox.
pub const CONFIRM_LABEL: &str = "✅ Guard confirmed: Water bottle loaded into drone.";

/// Position in the two-step dispatch flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStage {
    /// Heat is within limits.
    Normal,
    /// Water is needed but the guard has not confirmed loading.
    AwaitingConfirmation,
    /// Guard confirmed; the drone is on its way.
    Dispatched,
}

impl DispatchStage {
    /// Resolves the stage from a reading and the guard checkbox.
    #[must_use]
    pub const fn resolve(heat: HeatIndex, guard_confirmed: bool) -> Self {
        match (heat.water_needed(), guard_confirmed) {
            (false, _) => Self::Normal,
            (true, false) => Self::AwaitingConfirmation,
            (true, true) => Self::Dispatched,
        }
    }

    /// Returns whether the confirmation checkbox is shown.
    #[must_use]
    pub const fn shows_confirmation(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// Renders the dispatch panel for a zone.
#[must_use]
pub fn water_dispatch(zone: MonitoredZone, heat: HeatIndex, guard_confirmed: bool) -> PanelOutput {
    match DispatchStage::resolve(heat, guard_confirmed) {
        DispatchStage::Normal => PanelOutput::new()
            .success("✅ Zone conditions are normal. No water assistance needed right now."),
        DispatchStage::AwaitingConfirmation => high_risk(zone)
            .checkbox(CONFIRM_LABEL, false)
            .info("⏳ Awaiting guard confirmation for drone loading..."),
        DispatchStage::Dispatched => high_risk(zone)
            .checkbox(CONFIRM_LABEL, true)
            .success(format!("🚁 Drone dispatched to {zone} with water bottles!"))
            .image(DRONE_GIF_URL, "Drone en route with water 💧")
            .audio(WATER_POUR_URL),
    }
}

fn high_risk(zone: MonitoredZone) -> PanelOutput {
    PanelOutput::new().warning(format!(
        "🚨 High dehydration risk detected in {zone}! Notify security to initiate drone loading."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::NoticeLevel;
    use test_case::test_case;

    #[test_case(40, false, DispatchStage::Normal ; "cool")]
    #[test_case(70, true, DispatchStage::Normal ; "threshold_ignores_confirmation")]
    #[test_case(71, false, DispatchStage::AwaitingConfirmation ; "hot_unconfirmed")]
    #[test_case(95, true, DispatchStage::Dispatched ; "hot_confirmed")]
    fn test_stage(heat: u8, confirmed: bool, expected: DispatchStage) {
        assert_eq!(DispatchStage::resolve(HeatIndex::new(heat), confirmed), expected);
    }

    #[test]
    fn test_dispatch_requires_need_and_confirmation() {
        for heat in 0..=HeatIndex::MAX {
            for confirmed in [false, true] {
                let output = water_dispatch(MonitoredZone::B, HeatIndex::new(heat), confirmed);
                let dispatched = output.mentions("Drone dispatched");
                assert_eq!(dispatched, heat > 70 && confirmed, "heat={heat} confirmed={confirmed}");
            }
        }
    }

    #[test]
    fn test_awaiting_names_zone() {
        let output = water_dispatch(MonitoredZone::D, HeatIndex::new(80), false);
        assert!(output.has_notice(NoticeLevel::Warning));
        assert!(output.mentions("High dehydration risk detected in Zone D!"));
        assert!(output.mentions("Awaiting guard confirmation"));
        assert!(output.media_links().is_empty());
    }

    #[test]
    fn test_dispatched_plays_media() {
        let output = water_dispatch(MonitoredZone::A, HeatIndex::new(71), true);
        assert!(output.mentions("Drone dispatched to Zone A with water bottles!"));
        assert_eq!(output.media_links(), vec![DRONE_GIF_URL, WATER_POUR_URL]);
    }

    #[test]
    fn test_normal_hides_checkbox() {
        let output = water_dispatch(MonitoredZone::C, HeatIndex::new(10), true);
        assert!(!output.mentions(CONFIRM_LABEL));
        assert!(output.mentions("Zone conditions are normal"));
    }
}
