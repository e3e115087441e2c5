//! Stock media played alongside panel notices.

/// Short alarm used for zone violations and crowd alerts.
pub const ALARM_BEEP_URL: &str = "https://actions.google.com/sounds/v1/alarms/beep_short.ogg";

/// Pouring water clip played on drone dispatch.
pub const WATER_POUR_URL: &str = "https://actions.google.com/sounds/v1/water/water_pour.ogg";

/// Animation of the water drone in flight.
pub const DRONE_GIF_URL: &str = "https://media.giphy.com/media/iFY8jynx1q3QA/giphy.gif";
