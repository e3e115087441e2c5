/// Top-level panels, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Seating,
    Wristband,
    LostChild,
    Water,
    VoiceAlert,
    Cloud,
}

impl Tab {
    pub const ALL: [Self; 6] = [
        Self::Seating,
        Self::Wristband,
        Self::LostChild,
        Self::Water,
        Self::VoiceAlert,
        Self::Cloud,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Seating => "📍 Smart Parking & Seating",
            Self::Wristband => "🎟️ Wristband Violation Detection",
            Self::LostChild => "🧒 Lost Child Finder",
            Self::Water => "💧 Water Dispatch AI",
            Self::VoiceAlert => "📢 Voice Alert Simulation",
            Self::Cloud => "☁️ Google Cloud Key Test",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
