use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use super::{PanelEvent, Step, render_panel, value_step};
use crate::application::PanelOutput;
use crate::application::services::parking_guidance;
use crate::domain::entities::SeatingZone;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{KeyHint, OutputView, Selector};

const SUBHEADER: &str = "🎯 Intelligent Seating & Parking Zone Planner";

const HINTS: [KeyHint; 1] = [KeyHint::new("←/→", "Zone")];

pub struct SeatingPanel {
    zone: Selector<SeatingZone>,
}

impl SeatingPanel {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zone: Selector::new("Select your seating zone:", &SeatingZone::ALL),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PanelEvent {
        match value_step(&key) {
            Some(Step::Back) => self.zone.previous(),
            Some(Step::Forward) => self.zone.next(),
            None => return PanelEvent::Ignored,
        }
        PanelEvent::Consumed
    }

    #[must_use]
    pub fn output(&self) -> PanelOutput {
        parking_guidance(self.zone.selected())
    }

    #[must_use]
    pub const fn key_hints(&self) -> &'static [KeyHint] {
        &HINTS
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let output = self.output();
        render_panel(
            area,
            buf,
            theme,
            SUBHEADER,
            vec![self.zone.line(true, theme)],
            OutputView::new(&output, theme),
        );
    }
}

impl Default for SeatingPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ui::panels::test_support::{key, screen};
    use crossterm::event::KeyCode;

    #[test]
    fn test_starts_on_platinum() {
        let panel = SeatingPanel::new();
        assert!(panel.output().mentions("Row 1"));
    }

    #[test]
    fn test_arrows_change_zone() {
        let mut panel = SeatingPanel::new();

        assert_eq!(panel.handle_key(key(KeyCode::Right)), PanelEvent::Consumed);
        assert!(panel.output().mentions("Row 2"));

        panel.handle_key(key(KeyCode::Left));
        panel.handle_key(key(KeyCode::Left));
        assert!(panel.output().mentions("Row 3"));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut panel = SeatingPanel::new();
        assert_eq!(panel.handle_key(key(KeyCode::Enter)), PanelEvent::Ignored);
    }

    #[test]
    fn test_render_shows_guidance() {
        let panel = SeatingPanel::new();
        let theme = Theme::default();
        let text = screen(70, 10, |area, buf| panel.render(area, buf, &theme));

        assert!(text.contains("Select your seating zone:"));
        assert!(text.contains("Park your vehicle in Row 1"));
    }
}
