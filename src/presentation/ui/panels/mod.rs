//! Interactive panels, one per tab.
//!
//! Each panel owns its input widgets, turns key presses into state changes and
//! asks the matching application service for its output.

mod cloud;
mod lost_child;
mod seating;
mod voice_alert;
mod water;
mod wristband;

pub use cloud::CloudPanel;
pub use lost_child::LostChildPanel;
pub use seating::SeatingPanel;
pub use voice_alert::VoiceAlertPanel;
pub use water::WaterPanel;
pub use wristband::WristbandPanel;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::presentation::theme::Theme;
use crate::presentation::widgets::{OutputView, StatusLevel};

/// What a panel did with a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// Key not handled by the panel.
    Ignored,
    /// Key changed panel state.
    Consumed,
    /// Panel asks for a cloud key verification.
    VerifyCloud,
    /// Transient message for the status line.
    Hint { level: StatusLevel, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    Back,
    Forward,
}

/// Left/right: change the focused value.
pub(super) const fn value_step(key: &KeyEvent) -> Option<Step> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Step::Back),
        KeyCode::Right | KeyCode::Char('l') => Some(Step::Forward),
        _ => None,
    }
}

/// Up/down: move focus between controls.
pub(super) const fn focus_step(key: &KeyEvent) -> Option<Step> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Step::Back),
        KeyCode::Down | KeyCode::Char('j') => Some(Step::Forward),
        _ => None,
    }
}

pub(super) const fn cycle(index: usize, len: usize, step: Step) -> usize {
    match step {
        Step::Forward => (index + 1) % len,
        Step::Back => (index + len - 1) % len,
    }
}

/// Draws subheader, input controls and output below each other.
pub(super) fn render_panel(
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    subheader: &'static str,
    controls: Vec<Line<'static>>,
    output: OutputView<'_>,
) {
    let controls_height = u16::try_from(controls.len()).unwrap_or(u16::MAX);
    let [title_area, controls_area, output_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(controls_height.saturating_add(1)),
        Constraint::Min(0),
    ])
    .areas(area);

    Line::styled(subheader, theme.focus_style).render(title_area, buf);
    Paragraph::new(controls).render(controls_area, buf);
    output.render(output_area, buf);
}

#[cfg(test)]
pub(super) mod test_support {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{buffer::Buffer, layout::Rect};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn screen(width: u16, height: u16, draw: impl FnOnce(Rect, &mut Buffer)) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        draw(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(cycle(2, 3, Step::Forward), 0);
        assert_eq!(cycle(0, 3, Step::Back), 2);
        assert_eq!(cycle(1, 3, Step::Forward), 2);
    }

    #[test]
    fn test_key_classes() {
        let left = test_support::key(KeyCode::Char('h'));
        let down = test_support::key(KeyCode::Down);

        assert_eq!(value_step(&left), Some(Step::Back));
        assert_eq!(focus_step(&left), None);
        assert_eq!(focus_step(&down), Some(Step::Forward));
    }
}
