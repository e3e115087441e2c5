use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Key and what it does, shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

pub struct FooterBarStyle {
    pub key_style: Style,
    pub label_style: Style,
    pub caption: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            key_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label_style: theme.badge_style,
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            key_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            caption: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Key hints on the left, project caption on the right when it fits.
pub struct FooterBar<'a> {
    hints: &'a [KeyHint],
    caption: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(hints: &'a [KeyHint]) -> Self {
        Self {
            hints,
            caption: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }

    #[must_use]
    pub fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn hint_spans(&self) -> (Vec<Span<'a>>, usize) {
        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        let mut width = 0;

        for hint in self.hints {
            let key = format!(" {} ", hint.key);
            let label = format!(" {} ", hint.label);
            width += key.width() + label.width() + 1;
            spans.push(Span::styled(key, self.style.key_style));
            spans.push(Span::styled(label, self.style.label_style));
            spans.push(Span::raw(" "));
        }

        (spans, width)
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let (mut spans, used) = self.hint_spans();

        if let Some(caption) = self.caption {
            let caption_width = caption.width();
            let free = usize::from(area.width).saturating_sub(used);
            if caption_width < free {
                spans.push(Span::raw(" ".repeat(free - caption_width)));
                spans.push(Span::styled(caption, self.style.caption));
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
