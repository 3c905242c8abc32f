use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::action::Action;

/// Map a crossterm terminal event to a TUI action.
pub fn map_event(event: &Event) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits, no confirmation
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::ForceQuit;
            }
            map_key(key)
        }
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::MoveDown,
        MouseEventKind::ScrollUp => Action::MoveUp,
        _ => Action::None,
    }
}

fn map_key(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Char('s') => Action::Submit,
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => Action::ParentDir,
        KeyCode::Char('o') | KeyCode::Char('a') => Action::OpenPicker,
        KeyCode::Char('x') => Action::ClearFile,
        KeyCode::Char('O') => Action::OpenLink,
        KeyCode::Char('d') => Action::DownloadLink,
        KeyCode::Char('y') => Action::CopyLink,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn ctrl_c_force_quits_but_plain_c_does_nothing() {
        assert_eq!(
            map_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::ForceQuit
        );
        assert_eq!(
            map_event(&press(KeyCode::Char('c'), KeyModifiers::NONE)),
            Action::None
        );
    }

    #[test]
    fn ctrl_d_pages_while_d_downloads() {
        assert_eq!(
            map_event(&press(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Action::PageDown
        );
        assert_eq!(
            map_event(&press(KeyCode::Char('d'), KeyModifiers::NONE)),
            Action::DownloadLink
        );
    }

    #[test]
    fn enter_confirms_and_s_submits() {
        assert_eq!(
            map_event(&press(KeyCode::Enter, KeyModifiers::NONE)),
            Action::Confirm
        );
        assert_eq!(
            map_event(&press(KeyCode::Char('s'), KeyModifiers::NONE)),
            Action::Submit
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&release), Action::None);
    }

    #[test]
    fn resize_carries_dimensions() {
        assert_eq!(map_event(&Event::Resize(120, 40)), Action::Resize(120, 40));
    }
}
