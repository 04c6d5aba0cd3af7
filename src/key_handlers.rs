use crate::app::{App, AppState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

pub fn handle_chat_input(key: KeyEvent, app: &mut App) {
    match key.code {
        // Enter sends regardless of modifiers; Shift+Enter is not a
        // separate gesture.
        KeyCode::Enter => app.widget.send_message(),
        KeyCode::Esc => app.state = AppState::QuitConfirm,
        KeyCode::PageUp => app.widget.scroll_up(),
        KeyCode::PageDown => app.widget.scroll_down(),
        KeyCode::Backspace => {
            app.widget.input.pop();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.state = AppState::QuitConfirm,
                    'u' => app.widget.scroll_up(),
                    'd' => app.widget.scroll_down(),
                    _ => {}
                }
            } else {
                app.widget.input.push(c);
            }
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.state = AppState::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.state = AppState::Chat;
        }
        _ => {}
    }
}

/// Left click inside the send control triggers a send. Only reachable
/// when mouse capture was enabled at startup.
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if let Some(button) = app.send_button {
            if button.contains(Position::new(mouse.column, mouse.row)) {
                app.widget.send_message();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[tokio::test]
    async fn test_enter_sends_non_empty_input() {
        let (mut app, _rx) = App::new();
        app.widget.input = "hello".to_string();
        handle_chat_input(key(KeyCode::Enter), &mut app);
        assert_eq!(app.widget.messages.len(), 1);
        assert_eq!(app.widget.messages[0].sender, Sender::User);
        assert!(app.widget.input.is_empty());
    }

    #[tokio::test]
    async fn test_shift_enter_is_not_distinguished() {
        let (mut app, _rx) = App::new();
        app.widget.input = "hello".to_string();
        let mut shifted = key(KeyCode::Enter);
        shifted.modifiers = KeyModifiers::SHIFT;
        handle_chat_input(shifted, &mut app);
        assert_eq!(app.widget.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_other_keys_edit_without_sending() {
        let (mut app, _rx) = App::new();
        handle_chat_input(key(KeyCode::Char('h')), &mut app);
        handle_chat_input(key(KeyCode::Char('i')), &mut app);
        assert_eq!(app.widget.input, "hi");
        assert!(app.widget.messages.is_empty());

        handle_chat_input(key(KeyCode::Backspace), &mut app);
        assert_eq!(app.widget.input, "h");
        assert!(app.widget.messages.is_empty());
    }

    #[tokio::test]
    async fn test_click_inside_send_button_sends() {
        let (mut app, _rx) = App::new();
        app.widget.input = "hello".to_string();
        app.send_button = Some(Rect::new(10, 5, 8, 3));
        handle_mouse(click(12, 6), &mut app);
        assert_eq!(app.widget.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_click_outside_send_button_does_nothing() {
        let (mut app, _rx) = App::new();
        app.widget.input = "hello".to_string();
        app.send_button = Some(Rect::new(10, 5, 8, 3));
        handle_mouse(click(1, 1), &mut app);
        assert!(app.widget.messages.is_empty());
        assert_eq!(app.widget.input, "hello");
    }

    #[tokio::test]
    async fn test_click_with_no_recorded_button_does_nothing() {
        let (mut app, _rx) = App::new();
        app.widget.input = "hello".to_string();
        handle_mouse(click(12, 6), &mut app);
        assert!(app.widget.messages.is_empty());
    }

    #[tokio::test]
    async fn test_quit_confirm_keys() {
        let (mut app, _rx) = App::new();
        app.state = AppState::QuitConfirm;
        handle_quit_confirm_input(key(KeyCode::Char('n')), &mut app);
        assert_eq!(app.state, AppState::Chat);

        app.state = AppState::QuitConfirm;
        handle_quit_confirm_input(key(KeyCode::Char('y')), &mut app);
        assert_eq!(app.state, AppState::Quit);
    }
}
