//! Key and mouse mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What a user input asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    /// Connect the platform in 0-based slot
    Connect(usize),
    DraftFromSuggestion,
    /// Scroll by lines; negative moves up
    Scroll(i32),
    ScrollToTop,
    Click { column: u16, row: u16 },
}

pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char(c @ '1'..='4') => Some(Action::Connect(c as usize - '1' as usize)),
        KeyCode::Char('p') => Some(Action::DraftFromSuggestion),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Scroll(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Scroll(-1)),
        KeyCode::PageDown => Some(Action::Scroll(10)),
        KeyCode::PageUp => Some(Action::Scroll(-10)),
        KeyCode::Char('t') | KeyCode::Home => Some(Action::ScrollToTop),
        _ => None,
    }
}

pub fn action_for_mouse(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Action::Scroll(1)),
        MouseEventKind::ScrollUp => Some(Action::Scroll(-1)),
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for_key(key(KeyCode::Esc)), Some(Action::Quit));
        let mut ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        ctrl_c.state = KeyEventState::NONE;
        assert_eq!(action_for_key(ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_connect_slots() {
        assert_eq!(action_for_key(key(KeyCode::Char('1'))), Some(Action::Connect(0)));
        assert_eq!(action_for_key(key(KeyCode::Char('4'))), Some(Action::Connect(3)));
        assert_eq!(action_for_key(key(KeyCode::Char('5'))), None);
    }

    #[test]
    fn test_scroll_keys_and_wheel() {
        assert_eq!(action_for_key(key(KeyCode::Char('j'))), Some(Action::Scroll(1)));
        assert_eq!(action_for_key(key(KeyCode::Up)), Some(Action::Scroll(-1)));

        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(action_for_mouse(wheel), Some(Action::Scroll(1)));
    }

    #[test]
    fn test_left_click() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(action_for_mouse(click), Some(Action::Click { column: 7, row: 3 }));
    }
}
