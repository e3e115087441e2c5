use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::info;

use super::{PanelEvent, Step, cycle, focus_step, render_panel, value_step};
use crate::application::PanelOutput;
use crate::application::services::{DispatchStage, water_dispatch};
use crate::domain::entities::{HeatIndex, MonitoredZone};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{HeatSlider, KeyHint, OutputView, Selector};

const SUBHEADER: &str = "💧 Smart Water Need Detection & Drone Dispatch System";

const HINTS: [KeyHint; 3] = [
    KeyHint::new("↑/↓", "Field"),
    KeyHint::new("←/→", "Adjust"),
    KeyHint::new("Space", "Confirm"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Zone,
    Heat,
    Confirmation,
}

impl Field {
    const ORDER: [Self; 3] = [Self::Zone, Self::Heat, Self::Confirmation];
}

pub struct WaterPanel {
    zone: Selector<MonitoredZone>,
    heat: HeatSlider,
    guard_confirmed: bool,
    focus: Field,
}

impl WaterPanel {
    #[must_use]
    pub const fn new(initial_heat: HeatIndex, heat_step: u8) -> Self {
        Self {
            zone: Selector::new("Select zone for monitoring:", &MonitoredZone::ALL),
            heat: HeatSlider::new("AI Detected Heat/Stress Level", initial_heat, heat_step),
            guard_confirmed: false,
            focus: Field::Zone,
        }
    }

    fn stage(&self) -> DispatchStage {
        DispatchStage::resolve(self.heat.value(), self.guard_confirmed)
    }

    fn field_count(&self) -> usize {
        if self.stage().shows_confirmation() {
            Field::ORDER.len()
        } else {
            Field::ORDER.len() - 1
        }
    }

    /// The checkbox keeps its state only while it is shown.
    fn sync_confirmation(&mut self) {
        if !self.heat.value().water_needed() {
            self.guard_confirmed = false;
            if self.focus == Field::Confirmation {
                self.focus = Field::Heat;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PanelEvent {
        if let Some(step) = focus_step(&key) {
            let current = Field::ORDER
                .iter()
                .position(|f| *f == self.focus)
                .unwrap_or_default();
            self.focus = Field::ORDER[cycle(current, self.field_count(), step)];
            return PanelEvent::Consumed;
        }

        if self.focus == Field::Confirmation && EventHandler::is_submit_event(&key) {
            self.guard_confirmed = !self.guard_confirmed;
            if self.stage() == DispatchStage::Dispatched {
                info!(
                    zone = %self.zone.selected(),
                    heat = self.heat.value().value(),
                    "Water drone dispatched"
                );
            }
            return PanelEvent::Consumed;
        }

        let Some(step) = value_step(&key) else {
            return PanelEvent::Ignored;
        };
        match (self.focus, step) {
            (Field::Zone, Step::Back) => self.zone.previous(),
            (Field::Zone, Step::Forward) => self.zone.next(),
            (Field::Heat, Step::Back) => self.heat.decrease(),
            (Field::Heat, Step::Forward) => self.heat.increase(),
            (Field::Confirmation, _) => return PanelEvent::Ignored,
        }
        self.sync_confirmation();
        PanelEvent::Consumed
    }

    #[must_use]
    pub fn output(&self) -> PanelOutput {
        water_dispatch(self.zone.selected(), self.heat.value(), self.guard_confirmed)
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
                self.zone.line(self.focus == Field::Zone, theme),
                self.heat.line(self.focus == Field::Heat, theme),
            ],
            OutputView::new(&output, theme).checkbox_focused(self.focus == Field::Confirmation),
        );
    }
}
