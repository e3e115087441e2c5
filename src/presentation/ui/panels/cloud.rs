use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
};

use super::{PanelEvent, render_panel};
use crate::application::services::cloud_check_output;
use crate::application::{CloudReport, PanelOutput};
use crate::domain::ConnectionStatus;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{KeyHint, OutputView};

const SUBHEADER: &str = "☁️ Google Cloud Key File Verification";

const HINTS: [KeyHint; 1] = [KeyHint::new("r", "Re-check")];

/// Shows the outcome of the last storage listing.
pub struct CloudPanel {
    credentials_path: PathBuf,
    status: ConnectionStatus,
    report: Option<CloudReport>,
}

impl CloudPanel {
    #[must_use]
    pub fn new(credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            status: ConnectionStatus::Unchecked,
            report: None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> ConnectionStatus {
        self.status
    }

    #[must_use]
    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PanelEvent {
        match key.code {
            KeyCode::Char('r') if !self.status.is_checking() => PanelEvent::VerifyCloud,
            KeyCode::Char('r') => PanelEvent::Consumed,
            _ => PanelEvent::Ignored,
        }
    }

    pub fn begin_check(&mut self) {
        self.status = ConnectionStatus::Checking;
    }

    pub fn finish_check(&mut self, report: CloudReport) {
        self.status = if report.is_connected() {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Failed
        };
        self.report = Some(report);
    }

    #[must_use]
    pub fn output(&self) -> PanelOutput {
        if self.status.is_checking() {
            return PanelOutput::new().info("⏳ Connecting to Google Cloud...");
        }
        self.report
            .as_ref()
            .map(cloud_check_output)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn key_hints(&self) -> &'static [KeyHint] {
        &HINTS
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let output = self.output();
        let key_line = Line::from(vec![
            Span::raw("Key file: "),
            Span::styled(
                self.credentials_path.display().to_string(),
                theme.dimmed_style,
            ),
        ]);
        render_panel(
            area,
            buf,
            theme,
            SUBHEADER,
            vec![key_line],
            OutputView::new(&output, theme),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::NoticeLevel;
    use crate::domain::entities::Bucket;
    use crate::presentation::ui::panels::test_support::{key, screen};

    #[test]
    fn test_unchecked_panel_is_empty() {
        let panel = CloudPanel::new("crowdmanagement.json");
        assert_eq!(panel.status(), ConnectionStatus::Unchecked);
        assert!(panel.output().is_empty());
    }

    #[test]
    fn test_refresh_requests_verification() {
        let mut panel = CloudPanel::new("key.json");
        assert_eq!(panel.handle_key(key(KeyCode::Char('r'))), PanelEvent::VerifyCloud);

        panel.begin_check();
        assert_eq!(panel.handle_key(key(KeyCode::Char('r'))), PanelEvent::Consumed);
        assert!(panel.output().mentions("Connecting to Google Cloud"));
    }

    #[test]
    fn test_finish_with_buckets() {
        let mut panel = CloudPanel::new("key.json");
        panel.begin_check();
        panel.finish_check(CloudReport::Connected {
            buckets: vec![Bucket::new("crowd-feeds")],
        });

        assert_eq!(panel.status(), ConnectionStatus::Connected);
        assert!(panel.output().mentions("– crowd-feeds"));
    }

    #[test]
    fn test_finish_with_failure() {
        let mut panel = CloudPanel::new("key.json");
        panel.finish_check(CloudReport::Failed {
            diagnostic: "credentials file not found: key.json".to_string(),
        });

        assert_eq!(panel.status(), ConnectionStatus::Failed);
        let output = panel.output();
        assert!(output.has_notice(NoticeLevel::Error));
        assert!(output.mentions("credentials file not found: key.json"));
    }

    #[test]
    fn test_render_shows_key_path() {
        let panel = CloudPanel::new("/etc/drishti/key.json");
        let theme = Theme::default();
        let text = screen(70, 8, |area, buf| panel.render(area, buf, &theme));
        assert!(text.contains("/etc/drishti/key.json"));
    }
}
