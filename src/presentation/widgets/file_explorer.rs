use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};
use std::{
    cmp::Ordering,
    env, fs,
    path::{Path, PathBuf},
};

use crate::infrastructure::PhotoLoader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileExplorerAction {
    SelectFile(PathBuf),
    Close,
    None,
}

#[derive(Debug, Clone)]
struct FileEntry {
    path: PathBuf,
    is_dir: bool,
    name: String,
}

/// Directory browser listing folders and accepted photo files only.
pub struct FileExplorerComponent {
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    state: ListState,
    show_hidden: bool,
}

impl FileExplorerComponent {
    /// Opens at `start_dir`, or `$HOME` when none is given.
    #[must_use]
    pub fn new(start_dir: Option<&Path>) -> Self {
        let root = start_dir.map_or_else(
            || env::var("HOME").map_or_else(|_| PathBuf::from("/"), PathBuf::from),
            Path::to_path_buf,
        );
        let mut component = Self {
            current_dir: root,
            entries: Vec::new(),
            state: ListState::default(),
            show_hidden: false,
        };
        component.reload();
        component
    }

    #[must_use]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    fn reload(&mut self) {
        let selected_name = self.selected_entry().map(|e| e.name.clone());

        self.entries.clear();

        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(FileEntry {
                path: parent.to_path_buf(),
                is_dir: true,
                name: "..".to_string(),
            });
        }

        if let Ok(read_dir) = fs::read_dir(&self.current_dir) {
            let mut entries: Vec<FileEntry> = read_dir
                .filter_map(Result::ok)
                .map(|entry| {
                    let path = entry.path();
                    let is_dir = path.is_dir();
                    let name = entry.file_name().to_string_lossy().to_string();
                    FileEntry { path, is_dir, name }
                })
                .filter(|entry| self.show_hidden || !entry.name.starts_with('.'))
                .filter(|entry| entry.is_dir || PhotoLoader::is_candidate(&entry.path))
                .collect();

            entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => a.name.cmp(&b.name),
            });

            self.entries.extend(entries);
        }

        let index = selected_name
            .and_then(|name| self.entries.iter().position(|e| e.name == name))
            .or_else(|| (!self.entries.is_empty()).then_some(0));
        self.state.select(index);
    }

    fn change_dir(&mut self, path: PathBuf) {
        self.current_dir = path;
        self.state.select(None);
        self.reload();
    }

    fn go_up(&mut self) {
        if let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) {
            self.change_dir(parent);
        }
    }

    fn open_selected(&mut self) -> FileExplorerAction {
        let Some(selected) = self.selected_entry().cloned() else {
            return FileExplorerAction::None;
        };

        if selected.name == ".." {
            self.go_up();
            FileExplorerAction::None
        } else if selected.is_dir {
            self.change_dir(selected.path);
            FileExplorerAction::None
        } else {
            FileExplorerAction::SelectFile(selected.path)
        }
    }

    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.reload();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FileExplorerAction {
        match key.code {
            KeyCode::Esc => FileExplorerAction::Close,
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                FileExplorerAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                FileExplorerAction::None
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => {
                self.go_up();
                FileExplorerAction::None
            }
            KeyCode::Char('.') => {
                self.toggle_hidden();
                FileExplorerAction::None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => self.open_selected(),
            _ => FileExplorerAction::None,
        }
    }

    fn next(&mut self) {
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.entries.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    fn previous(&mut self) {
        let i = match self.state.selected() {
            Some(0) | None => self.entries.len().saturating_sub(1),
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn selected_entry(&self) -> Option<&FileEntry> {
        self.state.selected().and_then(|i| self.entries.get(i))
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Upload your child's photo (jpg, jpeg, png) ")
            .title_style(Style::default().add_modifier(Modifier::BOLD));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let [path_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner_area);

        Widget::render(
            Line::styled(
                self.current_dir.display().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            path_area,
            buf,
        );

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let (icon, color) = if entry.is_dir {
                    ("▸ ", Color::Blue)
                } else {
                    ("  ", Color::White)
                };
                ListItem::new(format!("{icon}{}", entry.name)).style(Style::default().fg(color))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        StatefulWidget::render(list, list_area, buf, &mut self.state);

        let footer = Line::from(vec![
            Span::raw(" [Esc] Cancel | "),
            Span::raw("[Enter] Select/Enter | "),
            Span::raw("[.] Hidden "),
        ])
        .style(Style::default().fg(Color::Gray));

        Widget::render(footer, footer_area, buf);
    }
}
