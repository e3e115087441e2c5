//! Renders a panel's output blocks.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::status_bar::StatusLevel;
use crate::application::dto::{OutputBlock, PanelOutput};
use crate::presentation::theme::Theme;

pub struct OutputView<'a> {
    output: &'a PanelOutput,
    theme: &'a Theme,
    selected_button: Option<usize>,
    checkbox_focused: bool,
}

impl<'a> OutputView<'a> {
    #[must_use]
    pub const fn new(output: &'a PanelOutput, theme: &'a Theme) -> Self {
        Self {
            output,
            theme,
            selected_button: None,
            checkbox_focused: false,
        }
    }

    #[must_use]
    pub const fn selected_button(mut self, index: Option<usize>) -> Self {
        self.selected_button = index;
        self
    }

    #[must_use]
    pub const fn checkbox_focused(mut self, focused: bool) -> Self {
        self.checkbox_focused = focused;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        let mut button_index = 0;

        for block in self.output.blocks() {
            match block {
                OutputBlock::Notice { level, text } => {
                    let color = StatusLevel::from(*level).color();
                    lines.push(Line::from(vec![
                        Span::styled("▌ ", Style::default().fg(color)),
                        Span::styled(
                            text.as_str(),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                    ]));
                }
                OutputBlock::Text(text) => lines.push(Line::raw(text.as_str())),
                OutputBlock::Bullet(text) => {
                    lines.push(Line::from(vec![Span::raw("  "), Span::raw(text.as_str())]));
                }
                OutputBlock::Code(text) => {
                    let style = Style::default().fg(Color::White).bg(Color::Rgb(40, 40, 40));
                    lines.extend(
                        text.lines()
                            .map(|l| Line::from(Span::styled(format!("  {l}  "), style))),
                    );
                }
                OutputBlock::Audio { url } => lines.push(Line::from(vec![
                    Span::styled("♪ audio ", self.theme.badge_style),
                    Span::styled(format!(" {url}"), self.theme.dimmed_style),
                ])),
                OutputBlock::Image { source, caption } => lines.push(Line::from(vec![
                    Span::styled("▣ image ", self.theme.badge_style),
                    Span::raw(format!(" {caption} ")),
                    Span::styled(source.as_str(), self.theme.dimmed_style),
                ])),
                OutputBlock::Checkbox { label, checked } => {
                    let mark = if *checked { "[x]" } else { "[ ]" };
                    let style = if self.checkbox_focused {
                        self.theme.selection_style
                    } else {
                        Style::default()
                    };
                    lines.push(Line::from(vec![
                        Span::styled(mark, Style::default().fg(Color::Yellow)),
                        Span::raw(" "),
                        Span::styled(label.as_str(), style),
                    ]));
                }
                OutputBlock::Button { label } => {
                    let style = if self.selected_button == Some(button_index) {
                        self.theme.selection_style.add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    lines.push(Line::from(Span::styled(format!("[ {label} ]"), style)));
                    button_index += 1;
                }
            }
            lines.push(Line::default());
        }

        lines
    }
}

impl Widget for OutputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
