mod backend;
mod update;
mod update_file_picker;
mod util;
pub use util::open_in_browser;

use std::path::{Path, PathBuf};

use docsim_core::{Config, Link, LinkKind, SearchWidget};
use tokio::sync::mpsc;

use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Which screen is currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Search,
    FilePicker,
}

/// State for the file picker screen.
#[derive(Debug, Clone)]
pub struct FilePickerState {
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// Entries in the current directory (dirs first, then files).
    pub entries: Vec<FileEntry>,
    /// Cursor position in the entries list.
    pub cursor: usize,
}

/// A single entry in the file picker.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_pdf: bool,
}

impl FilePickerState {
    pub fn new(start_dir: PathBuf) -> Self {
        let mut state = Self {
            current_dir: start_dir,
            entries: Vec::new(),
            cursor: 0,
        };
        state.refresh_entries();
        state
    }

    /// Refresh the entries list from the current directory.
    pub fn refresh_entries(&mut self) {
        let mut entries = Vec::new();

        // Parent directory entry
        if let Some(parent) = self.current_dir.parent() {
            entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
                is_pdf: false,
            });
        }

        match std::fs::read_dir(&self.current_dir) {
            Ok(read_dir) => {
                let mut dirs = Vec::new();
                let mut files = Vec::new();

                for entry in read_dir.flatten() {
                    let path = entry.path();
                    let name = entry.file_name().to_string_lossy().to_string();

                    // Skip hidden files/dirs
                    if name.starts_with('.') {
                        continue;
                    }

                    if path.is_dir() {
                        dirs.push(FileEntry {
                            name,
                            path,
                            is_dir: true,
                            is_pdf: false,
                        });
                    } else {
                        let is_pdf = is_pdf_path(&path);
                        files.push(FileEntry {
                            name,
                            path,
                            is_dir: false,
                            is_pdf,
                        });
                    }
                }

                dirs.sort_by_key(|e| e.name.to_lowercase());
                files.sort_by_key(|e| e.name.to_lowercase());

                entries.extend(dirs);
                entries.extend(files);
            }
            Err(e) => {
                tracing::warn!(dir = %self.current_dir.display(), error = %e, "cannot list directory");
            }
        }

        self.entries = entries;
        self.cursor = 0;
    }

    /// Enter the directory at cursor, or return false if not a directory.
    pub fn enter_directory(&mut self) -> bool {
        if let Some(entry) = self.entries.get(self.cursor)
            && entry.is_dir
        {
            self.current_dir = entry.path.clone();
            self.refresh_entries();
            return true;
        }
        false
    }

    /// Go up one directory, leaving the cursor on the directory we came from.
    pub fn leave_directory(&mut self) -> bool {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return false;
        };
        let came_from = self.current_dir.clone();
        self.current_dir = parent;
        self.refresh_entries();
        if let Some(pos) = self.entries.iter().position(|e| e.path == came_from) {
            self.cursor = pos;
        }
        true
    }

    /// The PDF under the cursor, if the cursor is on one.
    pub fn pdf_at_cursor(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor).filter(|e| e.is_pdf)
    }
}

/// Main application state.
pub struct App {
    pub screen: Screen,
    /// The search widget; owns file, results, error and loading state.
    pub widget: SearchWidget,
    pub file_picker: FilePickerState,
    /// Cursor into the results list.
    pub result_cursor: usize,
    pub tick: usize,
    pub theme: Theme,
    /// Base URL shown in the header.
    pub server_url: String,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    /// Height of the visible list area (set on resize, used for page up/down).
    pub visible_rows: usize,
    /// One-line feedback for link actions, cleared on the next key.
    pub status_message: Option<String>,
    /// Channel to send commands to the backend listener.
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
    /// Hands a URL to the platform. Swapped out in tests.
    pub link_opener: fn(&str) -> Result<(), String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let start_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            screen: Screen::Search,
            widget: SearchWidget::new(config.locale, config.link_set),
            file_picker: FilePickerState::new(start_dir),
            result_cursor: 0,
            tick: 0,
            theme: Theme::by_name(&config.theme),
            server_url: config.base_url.clone(),
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            visible_rows: 10,
            status_message: None,
            backend_cmd_tx: None,
            link_opener: open_in_browser,
        }
    }

    /// The link of `kind` on the result under the cursor, if the current
    /// link set offers it.
    pub fn selected_link(&self, kind: LinkKind) -> Option<Link> {
        let view = self.widget.view();
        let row = view.results?.rows.into_iter().nth(self.result_cursor)?;
        row.links.into_iter().find(|l| l.kind == kind)
    }

    // update() is in update.rs
    // handle_file_picker_action() is in update_file_picker.rs
    // handle_backend_event() is in backend.rs

    /// Render the current screen.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();

        match self.screen {
            Screen::Search => crate::view::search::render_in(f, self, area),
            Screen::FilePicker => crate::view::file_picker::render_in(f, self, area),
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme, &self.widget.strings().ui);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme, &self.widget.strings().ui);
        }
    }
}

pub(crate) fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}
