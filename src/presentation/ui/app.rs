//! Main application orchestrator.

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Tabs},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::panels::{
    CloudPanel, LostChildPanel, PanelEvent, SeatingPanel, VoiceAlertPanel, WaterPanel,
    WristbandPanel,
};
use super::tabs::Tab;
use crate::application::{CloudReport, PanelOutput, VerifyCloudKeyUseCase};
use crate::domain::ConnectionStatus;
use crate::domain::entities::HeatIndex;
use crate::infrastructure::{AppConfig, open_media_links};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, KeyHint, StatusBar,
};

const TITLE: &str = "DRISHTI";
const TAGLINE: &str = "AI Safety Assistant";
const CAPTION: &str =
    "🔐 Project Drishti | Powered by AI + Human Collaboration | Prototype by Kamal Hasan";

const GLOBAL_HINTS: [KeyHint; 4] = [
    KeyHint::new("Tab", "Next"),
    KeyHint::new("1-6", "Jump"),
    KeyHint::new("o", "Media"),
    KeyHint::new("q", "Quit"),
];

#[derive(Debug)]
enum Action {
    CloudVerified(CloudReport),
}

pub struct App {
    running: bool,
    tab: Tab,
    seating: SeatingPanel,
    wristband: WristbandPanel,
    lost_child: LostChildPanel,
    water: WaterPanel,
    voice_alert: VoiceAlertPanel,
    cloud: CloudPanel,
    verify_cloud_key: VerifyCloudKeyUseCase,
    theme: Theme,
    status: StatusBar,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    #[must_use]
    pub fn new(verify_cloud_key: VerifyCloudKeyUseCase, config: &AppConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            running: true,
            tab: Tab::default(),
            seating: SeatingPanel::new(),
            wristband: WristbandPanel::new(),
            lost_child: LostChildPanel::new(config.ui.photo_start_dir.clone()),
            water: WaterPanel::new(
                HeatIndex::new(config.ui.default_heat_index),
                config.ui.heat_step,
            ),
            voice_alert: VoiceAlertPanel::new(),
            cloud: CloudPanel::new(verify_cloud_key.credentials_path()),
            verify_cloud_key,
            theme: Theme::new(&config.theme.accent_color),
            status: StatusBar::info("Ready"),
            action_tx,
            action_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event
                        && self.handle_key(key) == EventResult::Exit
                    {
                        self.running = false;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::CloudVerified(report) => {
                self.status = if report.is_connected() {
                    StatusBar::success(format!(
                        "Cloud key verified, {} bucket(s)",
                        report.buckets().len()
                    ))
                } else {
                    StatusBar::error("Cloud key verification failed")
                };
                self.cloud.finish_check(report);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if key.kind != KeyEventKind::Press {
            return EventResult::Continue;
        }

        if EventHandler::is_interrupt_event(&key) {
            return EventResult::Exit;
        }

        if self.tab == Tab::LostChild && self.lost_child.captures_input() {
            let event = self.lost_child.handle_key(key);
            return self.apply_panel_event(event);
        }

        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }
        if EventHandler::is_next_tab(&key) {
            self.switch_tab(self.tab.next());
            return EventResult::Consumed;
        }
        if EventHandler::is_previous_tab(&key) {
            self.switch_tab(self.tab.previous());
            return EventResult::Consumed;
        }
        if let Some(tab) = EventHandler::tab_shortcut(&key).and_then(Tab::from_index) {
            self.switch_tab(tab);
            return EventResult::Consumed;
        }

        let event = match self.tab {
            Tab::Seating => self.seating.handle_key(key),
            Tab::Wristband => self.wristband.handle_key(key),
            Tab::LostChild => self.lost_child.handle_key(key),
            Tab::Water => self.water.handle_key(key),
            Tab::VoiceAlert => self.voice_alert.handle_key(key),
            Tab::Cloud => self.cloud.handle_key(key),
        };

        if event == PanelEvent::Ignored && key.code == KeyCode::Char('o') {
            self.open_media();
            return EventResult::Consumed;
        }

        self.apply_panel_event(event)
    }

    fn apply_panel_event(&mut self, event: PanelEvent) -> EventResult {
        match event {
            PanelEvent::Ignored => EventResult::Continue,
            PanelEvent::Consumed => EventResult::Consumed,
            PanelEvent::VerifyCloud => {
                self.start_cloud_check();
                EventResult::Consumed
            }
            PanelEvent::Hint { level, message } => {
                self.status = StatusBar::new().left(message).level(level);
                EventResult::Consumed
            }
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        debug!(from = ?self.tab, to = ?tab, "Switching tab");

        if self.tab == Tab::VoiceAlert {
            self.voice_alert.reset();
        }
        self.tab = tab;

        if tab == Tab::Cloud && self.cloud.status() == ConnectionStatus::Unchecked {
            self.start_cloud_check();
        }
    }

    fn start_cloud_check(&mut self) {
        if self.cloud.status().is_checking() {
            return;
        }
        self.cloud.begin_check();
        self.status = StatusBar::info("Connecting to Google Cloud...");

        let use_case = self.verify_cloud_key.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let report = use_case.execute().await;
            let _ = tx.send(Action::CloudVerified(report));
        });
    }

    fn active_output(&self) -> PanelOutput {
        match self.tab {
            Tab::Seating => self.seating.output(),
            Tab::Wristband => self.wristband.output(),
            Tab::LostChild => self.lost_child.output(),
            Tab::Water => self.water.output(),
            Tab::VoiceAlert => self.voice_alert.output(),
            Tab::Cloud => self.cloud.output(),
        }
    }

    fn open_media(&mut self) {
        let output = self.active_output();
        let links = output.media_links();
        if links.is_empty() {
            self.status = StatusBar::info("No media on this panel");
            return;
        }

        let total = links.len();
        let opened = open_media_links(links);
        self.status = if opened == total {
            StatusBar::success(format!("Opened {opened} media link(s)"))
        } else {
            StatusBar::warning(format!("Opened {opened} of {total} media link(s)"))
        };
    }

    fn key_hints(&self) -> Vec<KeyHint> {
        let panel_hints = match self.tab {
            Tab::Seating => self.seating.key_hints(),
            Tab::Wristband => self.wristband.key_hints(),
            Tab::LostChild => self.lost_child.key_hints(),
            Tab::Water => self.water.key_hints(),
            Tab::VoiceAlert => self.voice_alert.key_hints(),
            Tab::Cloud => self.cloud.key_hints(),
        };
        panel_hints.iter().chain(GLOBAL_HINTS.iter()).copied().collect()
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header_area, tabs_area, body_area, status_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            HeaderBar::new(TITLE, TAGLINE)
                .cloud_status(self.cloud.status())
                .style(HeaderBarStyle::from_theme(&self.theme)),
            header_area,
        );

        let titles = Tab::ALL.iter().map(|t| Line::from(t.title()));
        frame.render_widget(
            Tabs::new(titles)
                .select(self.tab.index())
                .style(self.theme.dimmed_style)
                .highlight_style(self.theme.focus_style)
                .divider("│"),
            tabs_area,
        );

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(body_area);
        frame.render_widget(block, body_area);
        self.render_panel(frame, inner);

        frame.render_widget(&self.status, status_area);

        let hints = self.key_hints();
        frame.render_widget(
            FooterBar::new(&hints)
                .caption(CAPTION)
                .style(FooterBarStyle::from_theme(&self.theme)),
            footer_area,
        );
    }

    fn render_panel(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let buf = frame.buffer_mut();
        match self.tab {
            Tab::Seating => self.seating.render(area, buf, &theme),
            Tab::Wristband => self.wristband.render(area, buf, &theme),
            Tab::LostChild => self.lost_child.render(area, buf, &theme),
            Tab::Water => self.water.render(area, buf, &theme),
            Tab::VoiceAlert => self.voice_alert.render(area, buf, &theme),
            Tab::Cloud => self.cloud.render(area, buf, &theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Bucket;
    use crate::domain::errors::CloudError;
    use crate::domain::ports::mocks::MockCloudStoragePort;
    use crate::presentation::widgets::StatusLevel;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(mock: MockCloudStoragePort) -> App {
        let use_case = VerifyCloudKeyUseCase::new(Arc::new(mock), "key.json");
        App::new(use_case, &AppConfig::default())
    }

    fn idle_app() -> App {
        app_with(MockCloudStoragePort::new())
    }

    #[test]
    fn test_quit_keys_exit() {
        let mut app = idle_app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Exit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = idle_app();
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(app.handle_key(release), EventResult::Continue);
    }

    #[test]
    fn test_tab_navigation() {
        let mut app = idle_app();

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Wristband);

        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.tab, Tab::Water);

        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.tab, Tab::LostChild);
    }

    #[test]
    fn test_keys_reach_active_panel() {
        let mut app = idle_app();
        app.handle_key(key(KeyCode::Right));
        assert!(app.active_output().mentions("Row 2"));
    }

    #[test]
    fn test_voice_alert_resets_on_leave() {
        let mut app = idle_app();
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.active_output().is_empty());

        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('5')));
        assert!(app.active_output().is_empty());
    }

    #[test]
    fn test_picker_swallows_quit() {
        let mut app = idle_app();
        app.handle_key(key(KeyCode::Char('3')));
        app.handle_key(key(KeyCode::Char('u')));

        assert_ne!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Exit);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), EventResult::Consumed);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), EventResult::Exit);
    }

    #[test]
    fn test_ctrl_c_quits_with_picker_open() {
        let mut app = idle_app();
        app.handle_key(key(KeyCode::Char('3')));
        app.handle_key(key(KeyCode::Char('u')));
        assert!(app.lost_child.captures_input());

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), EventResult::Exit);
    }

    #[test]
    fn test_media_on_empty_panel() {
        let mut app = idle_app();
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Char('o')));
        assert_eq!(app.status.message(), "No media on this panel");
    }

    #[tokio::test]
    async fn test_first_cloud_visit_runs_check() {
        let mut mock = MockCloudStoragePort::new();
        mock.expect_list_buckets()
            .times(1)
            .returning(|_| Ok(vec![Bucket::new("crowd-feeds")]));
        let mut app = app_with(mock);

        app.handle_key(key(KeyCode::Char('6')));
        assert_eq!(app.cloud.status(), ConnectionStatus::Checking);

        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action);

        assert_eq!(app.cloud.status(), ConnectionStatus::Connected);
        assert!(app.active_output().mentions("crowd-feeds"));

        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('6')));
        assert_eq!(app.cloud.status(), ConnectionStatus::Connected);
    }

    #[tokio::test]
    async fn test_refresh_reports_failure() {
        let mut mock = MockCloudStoragePort::new();
        mock.expect_list_buckets()
            .times(2)
            .returning(|_| Err(CloudError::network("failed to connect: refused")));
        let mut app = app_with(mock);

        app.handle_key(key(KeyCode::Char('6')));
        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action);
        assert_eq!(app.cloud.status(), ConnectionStatus::Failed);

        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.cloud.status(), ConnectionStatus::Checking);
        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action);

        assert_eq!(app.status.current_level(), StatusLevel::Error);
        assert!(app.active_output().mentions("failed to connect: refused"));
    }

    #[test]
    fn test_render_layout() {
        let mut app = idle_app();
        let mut terminal = Terminal::new(TestBackend::new(140, 20)).unwrap();

        terminal.draw(|frame| app.render(frame)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("DRISHTI"));
        assert!(text.contains("Smart Parking & Seating"));
        assert!(text.contains("Park your vehicle in Row 1"));
        assert!(text.contains("Quit"));
    }
}
