use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use super::{PanelEvent, Step, focus_step, render_panel, value_step};
use crate::application::PanelOutput;
use crate::application::services::check_wristband;
use crate::domain::entities::{SeatingZone, WristbandColor};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{KeyHint, OutputView, Selector};

const SUBHEADER: &str = "🎟️ Wristband Zone Violation Checker";

const HINTS: [KeyHint; 2] = [KeyHint::new("↑/↓", "Field"), KeyHint::new("←/→", "Change")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Color,
    Zone,
}

pub struct WristbandPanel {
    color: Selector<WristbandColor>,
    zone: Selector<SeatingZone>,
    focus: Field,
}

impl WristbandPanel {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: Selector::new("What is your wristband color?", &WristbandColor::ALL),
            zone: Selector::new("Which zone are you currently in?", &SeatingZone::ALL),
            focus: Field::Color,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PanelEvent {
        if focus_step(&key).is_some() {
            self.focus = match self.focus {
                Field::Color => Field::Zone,
                Field::Zone => Field::Color,
            };
            return PanelEvent::Consumed;
        }

        let Some(step) = value_step(&key) else {
            return PanelEvent::Ignored;
        };
        match (self.focus, step) {
            (Field::Color, Step::Back) => self.color.previous(),
            (Field::Color, Step::Forward) => self.color.next(),
            (Field::Zone, Step::Back) => self.zone.previous(),
            (Field::Zone, Step::Forward) => self.zone.next(),
        }
        PanelEvent::Consumed
    }

    #[must_use]
    pub fn output(&self) -> PanelOutput {
        check_wristband(self.color.selected(), self.zone.selected())
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
            vec![
                self.color.line(self.focus == Field::Color, theme),
                self.zone.line(self.focus == Field::Zone, theme),
            ],
            OutputView::new(&output, theme),
        );
    }
}

impl Default for WristbandPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::NoticeLevel;
    use crate::presentation::ui::panels::test_support::{key, screen};
    use crossterm::event::KeyCode;

    #[test]
    fn test_default_pair_matches() {
        let panel = WristbandPanel::new();
        assert!(panel.output().has_notice(NoticeLevel::Success));
    }

    #[test]
    fn test_changing_zone_raises_violation() {
        let mut panel = WristbandPanel::new();

        panel.handle_key(key(KeyCode::Down));
        panel.handle_key(key(KeyCode::Right));

        let output = panel.output();
        assert!(output.has_notice(NoticeLevel::Error));
        assert!(output.mentions("Zone Violation Detected!"));
        assert_eq!(output.media_links().len(), 1);
    }

    #[test]
    fn test_changing_both_fields_back_to_match() {
        let mut panel = WristbandPanel::new();

        panel.handle_key(key(KeyCode::Right));
        panel.handle_key(key(KeyCode::Char('j')));
        panel.handle_key(key(KeyCode::Char('l')));

        assert_eq!(panel.color.selected(), WristbandColor::Blue);
        assert_eq!(panel.zone.selected(), SeatingZone::Diamond);
        assert!(panel.output().mentions("You are in the correct zone."));
    }

    #[test]
    fn test_render_lists_both_questions() {
        let panel = WristbandPanel::new();
        let theme = Theme::default();
        let text = screen(70, 10, |area, buf| panel.render(area, buf, &theme));

        assert!(text.contains("What is your wristband color?"));
        assert!(text.contains("Which zone are you currently in?"));
    }
}
