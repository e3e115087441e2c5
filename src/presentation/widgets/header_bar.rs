use crate::domain::ConnectionStatus;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

trait ConnectionStatusExt {
    fn display_text(self) -> &'static str;
    fn indicator(self) -> &'static str;
}

impl ConnectionStatusExt for ConnectionStatus {
    fn display_text(self) -> &'static str {
        match self {
            Self::Unchecked => "CLOUD UNCHECKED",
            Self::Checking => "CLOUD CHECKING",
            Self::Connected => "CLOUD CONNECTED",
            Self::Failed => "CLOUD FAILED",
        }
    }

    fn indicator(self) -> &'static str {
        match self {
            Self::Connected => "●",
            Self::Checking => "◐",
            Self::Unchecked | Self::Failed => "○",
        }
    }
}

pub struct HeaderBarStyle {
    pub app_name: Style,
    pub tagline: Style,
    pub status_unchecked: Style,
    pub status_checking: Style,
    pub status_connected: Style,
    pub status_failed: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            tagline: theme.badge_style,
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            tagline: Style::default().fg(Color::DarkGray),
            status_unchecked: Style::default().fg(Color::DarkGray),
            status_checking: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            status_connected: Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            status_failed: Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Title row with the cloud check indicator on the right.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    tagline: &'a str,
    cloud_status: ConnectionStatus,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, tagline: &'a str) -> Self {
        Self {
            app_name,
            tagline,
            cloud_status: ConnectionStatus::default(),
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn cloud_status(mut self, status: ConnectionStatus) -> Self {
        self.cloud_status = status;
        self
    }

    #[must_use]
    pub fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    const fn status_style(&self) -> Style {
        match self.cloud_status {
            ConnectionStatus::Unchecked => self.style.status_unchecked,
            ConnectionStatus::Checking => self.style.status_checking,
            ConnectionStatus::Connected => self.style.status_connected,
            ConnectionStatus::Failed => self.style.status_failed,
        }
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let app_name = format!(" {} ", self.app_name);
        let tagline = format!(" {} ", self.tagline);
        let left_width = (app_name.width() + 1 + tagline.width()) as u16;

        let left_line = Line::from(vec![
            Span::styled(app_name, self.style.app_name),
            Span::raw(" "),
            Span::styled(tagline, self.style.tagline),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let status = format!(
            " {} {} ",
            self.cloud_status.indicator(),
            self.cloud_status.display_text()
        );
        let status_width = status.width() as u16;

        if status_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(status_width);
            let right_area = Rect::new(right_x, area.y, status_width, 1);
            Paragraph::new(Span::styled(status, self.status_style())).render(right_area, buf);
        }
    }
}
