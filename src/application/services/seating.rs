//! Seating and parking guidance.

use crate::application::dto::PanelOutput;
use crate::domain::entities::SeatingZone;

/// Tells a visitor where to park for their seating zone.
#[must_use]
pub fn parking_guidance(zone: SeatingZone) -> PanelOutput {
    PanelOutput::new().success(format!(
        "🚘 Park your vehicle in Row {}",
        zone.parking_row()
    ))
}
