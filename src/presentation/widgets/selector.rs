//! Cycling choice field, the terminal stand-in for a dropdown.

use std::fmt::Display;

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::presentation::theme::Theme;

/// Fixed list of choices with one selected.
#[derive(Debug, Clone)]
pub struct Selector<T: 'static> {
    label: &'static str,
    options: &'static [T],
    index: usize,
}

impl<T: Copy + PartialEq + Display> Selector<T> {
    /// Creates selector on the first option. `options` must not be empty.
    #[must_use]
    pub const fn new(label: &'static str, options: &'static [T]) -> Self {
        Self {
            label,
            options,
            index: 0,
        }
    }

    /// Returns the selected option.
    #[must_use]
    pub fn selected(&self) -> T {
        self.options[self.index]
    }

    /// Selects `value` if it is one of the options.
    pub fn select(&mut self, value: T) {
        if let Some(index) = self.options.iter().position(|o| *o == value) {
            self.index = index;
        }
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.options.len();
    }

    pub fn previous(&mut self) {
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or(self.options.len().saturating_sub(1));
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Renders `label  ◀ value ▶`, highlighted when focused.
    #[must_use]
    pub fn line(&self, focused: bool, theme: &Theme) -> Line<'static> {
        let value_style = if focused {
            theme.selection_style
        } else {
            Style::default()
        };
        let marker = if focused { "› " } else { "  " };

        Line::from(vec![
            Span::styled(marker, theme.focus_style),
            Span::raw(format!("{}  ", self.label)),
            Span::styled(format!(" ◀ {} ▶ ", self.selected()), value_style),
        ])
    }
}
