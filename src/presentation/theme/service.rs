use super::adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub selection_style: Style,
    pub focus_style: Style,
    pub dimmed_style: Style,
    pub badge_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Cyan")
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color: &str) -> Self {
        Self::from_color(parse_color(accent_color))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let selection_bg = ColorConverter::shade(accent, 0.2, 0.3);
        let badge_bg = ColorConverter::shade(accent, 0.08, 0.5);

        Self {
            accent,
            selection_style: Style::default().bg(selection_bg).fg(Color::White),
            focus_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            badge_style: Style::default().bg(badge_bg).fg(Color::White),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        "saffron" => Color::Rgb(244, 196, 48),
        _ => Color::Cyan,
    }
}
