//! Venue zone value objects.
//!
//! Seating zones double as wristband access zones: every wristband color
//! authorizes exactly one seating zone, and every seating zone has a fixed
//! parking row.

use std::fmt;
use std::str::FromStr;

use crate::domain::errors::LabelError;

/// Ticketed seating zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatingZone {
    /// Front section, parks in row 1.
    Platinum,
    /// Middle section, parks in row 2.
    Diamond,
    /// Rear section, parks in row 3.
    Gold,
}

impl SeatingZone {
    /// Every seating zone in display order.
    pub const ALL: [Self; 3] = [Self::Platinum, Self::Diamond, Self::Gold];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Platinum => "Platinum",
            Self::Diamond => "Diamond",
            Self::Gold => "Gold",
        }
    }

    /// Returns the parking row assigned to this zone.
    #[must_use]
    pub const fn parking_row(self) -> u8 {
        match self {
            Self::Platinum => 1,
            Self::Diamond => 2,
            Self::Gold => 3,
        }
    }
}

impl fmt::Display for SeatingZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SeatingZone {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|zone| zone.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LabelError::unknown("seating zone", s))
    }
}

/// Wristband color handed out at the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WristbandColor {
    Red,
    Blue,
    Green,
}

impl WristbandColor {
    /// Every wristband color in display order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Blue, Self::Green];

    /// Returns the bare color name.
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
        }
    }

    /// Returns the display label, e.g. `Red – Platinum`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "Red – Platinum",
            Self::Blue => "Blue – Diamond",
            Self::Green => "Green – Gold",
        }
    }

    /// Returns the only zone this wristband grants access to.
    #[must_use]
    pub const fn required_zone(self) -> SeatingZone {
        match self {
            Self::Red => SeatingZone::Platinum,
            Self::Blue => SeatingZone::Diamond,
            Self::Green => SeatingZone::Gold,
        }
    }
}

impl fmt::Display for WristbandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WristbandColor {
    type Err = LabelError;

    /// Accepts either the full label or the bare color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|color| {
                color.label() == trimmed || color.color_name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| LabelError::unknown("wristband color", s))
    }
}

/// Returns true when a wristband is worn outside its authorized zone.
#[must_use]
pub fn violation(color: WristbandColor, current_zone: SeatingZone) -> bool {
    color.required_zone() != current_zone
}

/// Area watched by the heat monitoring cameras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonitoredZone {
    A,
    B,
    C,
    D,
}

impl MonitoredZone {
    /// Every monitored zone in display order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Zone A",
            Self::B => "Zone B",
            Self::C => "Zone C",
            Self::D => "Zone D",
        }
    }
}

impl fmt::Display for MonitoredZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MonitoredZone {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|zone| zone.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LabelError::unknown("monitored zone", s))
    }
}

/// Heat/stress reading asserted by an external sensor, bounded to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeatIndex(u8);

impl HeatIndex {
    /// Highest reading the slider accepts.
    pub const MAX: u8 = 100;
    /// Readings strictly above this need water.
    pub const WATER_THRESHOLD: u8 = 70;
    const DEFAULT: u8 = 40;

    /// Creates a reading, clamping to [`Self::MAX`].
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the raw reading.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Raises the reading by `step`, saturating at [`Self::MAX`].
    #[must_use]
    pub const fn raised(self, step: u8) -> Self {
        Self::new(self.0.saturating_add(step))
    }

    /// Lowers the reading by `step`, saturating at zero.
    #[must_use]
    pub const fn lowered(self, step: u8) -> Self {
        Self(self.0.saturating_sub(step))
    }

    /// Returns whether this reading calls for a water dispatch.
    #[must_use]
    pub const fn water_needed(self) -> bool {
        water_needed(self.0)
    }
}

impl Default for HeatIndex {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for HeatIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns true iff `heat_index` is strictly above the water threshold.
#[must_use]
pub const fn water_needed(heat_index: u8) -> bool {
    heat_index > HeatIndex::WATER_THRESHOLD
}
