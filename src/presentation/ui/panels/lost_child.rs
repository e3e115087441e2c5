use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
};
use tracing::{debug, info, warn};

use super::{PanelEvent, cycle, render_panel, value_step};
use crate::application::PanelOutput;
use crate::application::services::lost_child_report;
use crate::domain::entities::UploadedPhoto;
use crate::infrastructure::PhotoLoader;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FileExplorerAction, FileExplorerComponent, KeyHint, OutputView, StatusLevel,
};

const SUBHEADER: &str = "🧒 Lost Child Finder";

const HINTS: [KeyHint; 3] = [
    KeyHint::new("u", "Upload"),
    KeyHint::new("←/→", "Button"),
    KeyHint::new("Del", "Clear"),
];

const PICKER_HINTS: [KeyHint; 3] = [
    KeyHint::new("↑/↓", "Move"),
    KeyHint::new("Enter", "Open"),
    KeyHint::new("Esc", "Cancel"),
];

/// Photo upload with a canned match report.
pub struct LostChildPanel {
    photo: Option<UploadedPhoto>,
    picker: Option<FileExplorerComponent>,
    picker_start: Option<PathBuf>,
    selected_button: usize,
}

impl LostChildPanel {
    #[must_use]
    pub fn new(picker_start: Option<PathBuf>) -> Self {
        Self {
            photo: None,
            picker: None,
            picker_start,
            selected_button: 0,
        }
    }

    /// Returns whether the photo picker owns keyboard input.
    #[must_use]
    pub const fn captures_input(&self) -> bool {
        self.picker.is_some()
    }

    fn open_picker(&mut self) {
        self.picker = Some(FileExplorerComponent::new(self.picker_start.as_deref()));
    }

    /// Loads `path` as the uploaded photo. A rejected file clears the upload.
    pub fn upload(&mut self, path: &Path) -> PanelEvent {
        self.selected_button = 0;
        match PhotoLoader::load(path) {
            Ok(photo) => {
                info!(file = %photo.file_name(), "Photo uploaded for lost child search");
                let message = format!("Uploaded {}", photo.file_name());
                self.photo = Some(photo);
                PanelEvent::Hint {
                    level: StatusLevel::Success,
                    message,
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Photo rejected");
                self.photo = None;
                PanelEvent::Hint {
                    level: StatusLevel::Warning,
                    message: format!("Photo rejected: {e}"),
                }
            }
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) -> PanelEvent {
        let Some(picker) = self.picker.as_mut() else {
            return PanelEvent::Ignored;
        };
        match picker.handle_key(key) {
            FileExplorerAction::SelectFile(path) => {
                self.picker_start = Some(picker.current_dir().to_path_buf());
                self.picker = None;
                self.upload(&path)
            }
            FileExplorerAction::Close => {
                self.picker = None;
                PanelEvent::Consumed
            }
            FileExplorerAction::None => PanelEvent::Consumed,
        }
    }

    fn press_button(&self) -> PanelEvent {
        let output = self.output();
        if let Some(label) = output.buttons().get(self.selected_button) {
            debug!(button = *label, "Lost child button pressed");
        }
        PanelEvent::Consumed
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PanelEvent {
        if self.captures_input() {
            return self.handle_picker_key(key);
        }

        match key.code {
            KeyCode::Char('u') => {
                self.open_picker();
                PanelEvent::Consumed
            }
            KeyCode::Enter if self.photo.is_none() => {
                self.open_picker();
                PanelEvent::Consumed
            }
            KeyCode::Enter | KeyCode::Char(' ') if self.photo.is_some() => self.press_button(),
            KeyCode::Backspace | KeyCode::Delete if self.photo.is_some() => {
                self.photo = None;
                self.selected_button = 0;
                PanelEvent::Consumed
            }
            _ => match (value_step(&key), self.photo.is_some()) {
                (Some(step), true) => {
                    let count = self.output().buttons().len().max(1);
                    self.selected_button = cycle(self.selected_button, count, step);
                    PanelEvent::Consumed
                }
                _ => PanelEvent::Ignored,
            },
        }
    }

    #[must_use]
    pub fn output(&self) -> PanelOutput {
        lost_child_report(self.photo.as_ref())
    }

    #[must_use]
    pub const fn key_hints(&self) -> &'static [KeyHint] {
        if self.captures_input() {
            &PICKER_HINTS
        } else {
            &HINTS
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let output = self.output();
        let prompt = match &self.photo {
            Some(photo) => Line::from(vec![
                Span::raw("Upload your child's photo: "),
                Span::styled(photo.file_name().to_string(), theme.focus_style),
            ]),
            None => Line::from(vec![
                Span::raw("Upload your child's photo "),
                Span::styled("(jpg, jpeg, png)", theme.dimmed_style),
                Span::raw("  press u to browse"),
            ]),
        };
        let selected = self.photo.is_some().then_some(self.selected_button);

        render_panel(
            area,
            buf,
            theme,
            SUBHEADER,
            vec![prompt],
            OutputView::new(&output, theme).selected_button(selected),
        );

        if let Some(picker) = self.picker.as_mut() {
            picker.render(popup_area(area), buf);
        }
    }
}

fn popup_area(area: Rect) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(vertical);
    popup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::lost_child::{CONFIRM_BUTTON, REJECT_BUTTON};
    use crate::presentation::ui::panels::test_support::{key, screen};
    use std::fs;
    use tempfile::TempDir;

    fn photo_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        image::RgbImage::new(8, 6)
            .save(dir.path().join("kid.png"))
            .unwrap();
        dir
    }

    #[test]
    fn test_empty_without_upload() {
        let panel = LostChildPanel::new(None);
        assert!(panel.output().is_empty());
    }

    #[test]
    fn test_upload_reports_match() {
        let dir = photo_dir();
        let mut panel = LostChildPanel::new(None);

        let event = panel.upload(&dir.path().join("kid.png"));

        assert!(matches!(event, PanelEvent::Hint { level: StatusLevel::Success, .. }));
        let output = panel.output();
        assert!(output.mentions("Possible match found in Zone A, Block 4"));
        assert_eq!(output.buttons(), vec![CONFIRM_BUTTON, REJECT_BUTTON]);
    }

    #[test]
    fn test_rejected_upload_leaves_output_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kid.gif");
        fs::write(&path, b"GIF89a").unwrap();
        let mut panel = LostChildPanel::new(None);

        let event = panel.upload(&path);

        let PanelEvent::Hint { level, message } = event else {
            panic!("expected hint");
        };
        assert_eq!(level, StatusLevel::Warning);
        assert!(message.contains("unsupported file type"));
        assert!(panel.output().is_empty());
    }

    #[test]
    fn test_picker_flow() {
        let dir = photo_dir();
        let mut panel = LostChildPanel::new(Some(dir.path().to_path_buf()));

        panel.handle_key(key(KeyCode::Char('u')));
        assert!(panel.captures_input());
        assert_eq!(panel.key_hints(), &PICKER_HINTS);

        panel.handle_key(key(KeyCode::Down));
        let event = panel.handle_key(key(KeyCode::Enter));

        assert!(!panel.captures_input());
        assert!(matches!(event, PanelEvent::Hint { .. }));
        assert!(panel.output().mentions("kid.png"));
    }

    #[test]
    fn test_escape_closes_picker_only() {
        let mut panel = LostChildPanel::new(None);
        panel.handle_key(key(KeyCode::Enter));
        assert!(panel.captures_input());

        assert_eq!(panel.handle_key(key(KeyCode::Esc)), PanelEvent::Consumed);
        assert!(!panel.captures_input());
    }

    #[test]
    fn test_buttons_and_clear() {
        let dir = photo_dir();
        let mut panel = LostChildPanel::new(None);
        panel.upload(&dir.path().join("kid.png"));

        panel.handle_key(key(KeyCode::Right));
        assert_eq!(panel.selected_button, 1);
        panel.handle_key(key(KeyCode::Right));
        assert_eq!(panel.selected_button, 0);
        assert_eq!(panel.handle_key(key(KeyCode::Enter)), PanelEvent::Consumed);
        assert!(!panel.captures_input());

        panel.handle_key(key(KeyCode::Delete));
        assert!(panel.output().is_empty());
    }

    #[test]
    fn test_render_with_picker_open() {
        let dir = photo_dir();
        let mut panel = LostChildPanel::new(Some(dir.path().to_path_buf()));
        panel.handle_key(key(KeyCode::Char('u')));
        let theme = Theme::default();

        let text = screen(80, 20, |area, buf| panel.render(area, buf, &theme));

        assert!(text.contains("kid.png"));
        assert!(text.contains("[Esc] Cancel"));
    }
}
