use docsim_core::{LinkKind, SearchError, SelectedFile};

use super::{App, Screen};
use crate::action::Action;
use crate::tui_event::BackendCommand;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        if action == Action::ForceQuit {
            self.should_quit = true;
            return true;
        }

        // Quit confirmation modal: q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => {
                    self.confirm_quit = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                Action::Resize(_w, h) => self.resize(h),
                _ => {}
            }
            return false;
        }

        // Help overlay: any key closes it
        if self.show_help {
            match action {
                Action::Tick => self.tick = self.tick.wrapping_add(1),
                Action::Resize(_w, h) => self.resize(h),
                Action::None => {}
                _ => self.show_help = false,
            }
            return false;
        }

        if !matches!(action, Action::Tick | Action::Resize(..) | Action::None) {
            self.status_message = None;
        }

        if self.screen == Screen::FilePicker {
            self.handle_file_picker_action(action);
            return self.should_quit;
        }

        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::Confirm | Action::Submit => self.submit_search(),
            Action::OpenPicker => {
                if let Some(parent) = self
                    .widget
                    .selected_file()
                    .and_then(|f| f.path.parent())
                    .filter(|p| p.is_dir())
                    .map(|p| p.to_path_buf())
                    && parent != self.file_picker.current_dir
                {
                    self.file_picker.current_dir = parent;
                    self.file_picker.refresh_entries();
                }
                self.screen = Screen::FilePicker;
            }
            Action::ClearFile => {
                self.select_file(None);
            }
            Action::MoveDown => {
                let max = self.result_count().saturating_sub(1);
                if self.result_cursor < max {
                    self.result_cursor += 1;
                }
            }
            Action::MoveUp => {
                self.result_cursor = self.result_cursor.saturating_sub(1);
            }
            Action::PageDown => {
                let page = self.visible_rows.max(1);
                let max = self.result_count().saturating_sub(1);
                self.result_cursor = (self.result_cursor + page).min(max);
            }
            Action::PageUp => {
                let page = self.visible_rows.max(1);
                self.result_cursor = self.result_cursor.saturating_sub(page);
            }
            Action::GoTop => {
                self.result_cursor = 0;
            }
            Action::GoBottom => {
                self.result_cursor = self.result_count().saturating_sub(1);
            }
            Action::OpenLink => self.follow_link(LinkKind::Open),
            Action::DownloadLink => self.follow_link(LinkKind::Download),
            Action::CopyLink => {
                if let Some(link) = self.selected_link(LinkKind::Download) {
                    super::util::osc52_copy(&link.href);
                    let copied = self.widget.strings().ui.copied;
                    self.status_message = Some(format!("{} {}", copied, link.href));
                }
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::Resize(_w, h) => self.resize(h),
            Action::ForceQuit | Action::NavigateBack | Action::ParentDir | Action::None => {}
        }

        false
    }

    /// Replace the widget's selection and reset the results cursor with it.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.widget.select_file(file);
        self.result_cursor = 0;
    }

    /// Start a search and hand it to the backend task.
    ///
    /// If the backend is gone the search is completed on the spot as a
    /// failure, so the loading flag never sticks.
    fn submit_search(&mut self) {
        let Some(ticket) = self.widget.begin_search() else {
            return;
        };
        let generation = ticket.generation;

        let sent = match &self.backend_cmd_tx {
            Some(tx) => tx.send(BackendCommand::Search { ticket }).is_ok(),
            None => false,
        };

        if !sent {
            tracing::error!(generation, "backend listener unavailable");
            self.widget.complete_search(
                generation,
                Err(SearchError::Aborted("backend unavailable".to_string())),
            );
        }
    }

    fn follow_link(&mut self, kind: LinkKind) {
        let Some(link) = self.selected_link(kind) else {
            return;
        };
        match (self.link_opener)(&link.href) {
            Ok(()) => {
                tracing::debug!(url = %link.href, ?kind, "link handed to browser");
                self.status_message = Some(format!("{}: {}", link.label, link.href));
            }
            Err(e) => {
                tracing::warn!(url = %link.href, error = %e, "could not open link");
                let failed = self.widget.strings().ui.open_failed;
                self.status_message = Some(format!("{} {}: {}", failed, link.href, e));
            }
        }
    }

    fn result_count(&self) -> usize {
        self.widget.results().len()
    }

    fn resize(&mut self, height: u16) {
        // header, file box, button, error line, footer and list borders
        self.visible_rows = ((height as usize).saturating_sub(10) / 2).max(1);
    }
}
