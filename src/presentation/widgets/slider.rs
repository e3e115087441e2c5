//! Horizontal slider for the heat index.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::domain::entities::HeatIndex;
use crate::presentation::theme::Theme;

const TRACK_WIDTH: usize = 25;

/// Heat index slider.
#[derive(Debug, Clone)]
pub struct HeatSlider {
    label: &'static str,
    value: HeatIndex,
    step: u8,
}

impl HeatSlider {
    #[must_use]
    pub const fn new(label: &'static str, value: HeatIndex, step: u8) -> Self {
        Self {
            label,
            value,
            step: if step == 0 { 1 } else { step },
        }
    }

    #[must_use]
    pub const fn value(&self) -> HeatIndex {
        self.value
    }

    pub const fn increase(&mut self) {
        self.value = self.value.raised(self.step);
    }

    pub const fn decrease(&mut self) {
        self.value = self.value.lowered(self.step);
    }

    /// Renders label, track and value. The filled part turns red past the
    /// water threshold.
    #[must_use]
    pub fn line(&self, focused: bool, theme: &Theme) -> Line<'static> {
        let filled = usize::from(self.value.value()) * TRACK_WIDTH / usize::from(HeatIndex::MAX);
        let fill_color = if self.value.water_needed() {
            Color::Red
        } else {
            Color::Green
        };
        let marker = if focused { "› " } else { "  " };

        Line::from(vec![
            Span::styled(marker, theme.focus_style),
            Span::raw(format!("{}  ", self.label)),
            Span::styled("━".repeat(filled), Style::default().fg(fill_color)),
            Span::styled("─".repeat(TRACK_WIDTH - filled), theme.dimmed_style),
            Span::styled(
                format!(" {:>3}", self.value.value()),
                if focused {
                    theme.focus_style
                } else {
                    Style::default()
                },
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_saturate() {
        let mut slider = HeatSlider::new("Heat", HeatIndex::new(98), 5);
        slider.increase();
        assert_eq!(slider.value().value(), 100);

        let mut slider = HeatSlider::new("Heat", HeatIndex::new(2), 5);
        slider.decrease();
        assert_eq!(slider.value().value(), 0);
    }

    #[test]
    fn test_zero_step_still_moves() {
        let mut slider = HeatSlider::new("Heat", HeatIndex::new(70), 0);
        slider.increase();
        assert!(slider.value().water_needed());
    }

    #[test]
    fn test_track_width_is_constant() {
        for value in [0, 40, 71, 100] {
            let slider = HeatSlider::new("Heat", HeatIndex::new(value), 5);
            let line = slider.line(false, &Theme::default());
            let track: usize = line.spans[2..4].iter().map(|s| s.content.chars().count()).sum();
            assert_eq!(track, TRACK_WIDTH);
        }
    }
}
