use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
};
use tracing::info;

use super::{PanelEvent, render_panel};
use crate::application::PanelOutput;
use crate::application::services::voice_alert::{TRIGGER_LABEL, voice_alert};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{KeyHint, OutputView};

const SUBHEADER: &str = "📢 AI-Powered Voice & Display Alerts";

const HINTS: [KeyHint; 1] = [KeyHint::new("Enter", "Trigger")];

/// One-shot alert button. The result disappears when the tab is left.
#[derive(Debug, Default)]
pub struct VoiceAlertPanel {
    triggered: bool,
}

impl VoiceAlertPanel {
    #[must_use]
    pub const fn new() -> Self {
        Self { triggered: false }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PanelEvent {
        if !EventHandler::is_submit_event(&key) {
            return PanelEvent::Ignored;
        }
        self.triggered = true;
        info!("Crowd alert triggered for Zone C");
        PanelEvent::Consumed
    }

    pub const fn reset(&mut self) {
        self.triggered = false;
    }

    #[must_use]
    pub fn output(&self) -> PanelOutput {
        voice_alert(self.triggered)
    }

    #[must_use]
    pub const fn key_hints(&self) -> &'static [KeyHint] {
        &HINTS
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let output = self.output();
        let button = Line::from(Span::styled(
            format!("[ {TRIGGER_LABEL} ]"),
            theme.selection_style.add_modifier(Modifier::BOLD),
        ));
        render_panel(
            area,
            buf,
            theme,
            SUBHEADER,
            vec![button],
            OutputView::new(&output, theme),
        );
    }
}
