//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    match app.input_mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        // The one designated user action: cycle to the next contact
        KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => Action::Advance,
        KeyCode::Right | KeyCode::Char('l') => Action::Advance,

        // Jump to contact by number
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            Action::SelectContact(index)
        }

        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => Action::CloseHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Roster;
    use crate::selector::Selector;

    fn app_in_mode(mode: InputMode) -> App {
        let mut app = App::new(Selector::new(Roster::sample()).unwrap());
        app.input_mode = mode;
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_advance_keys() {
        let app = app_in_mode(InputMode::Normal);

        for code in [
            KeyCode::Char('n'),
            KeyCode::Char(' '),
            KeyCode::Enter,
            KeyCode::Right,
            KeyCode::Char('l'),
        ] {
            assert_eq!(handle_key_event(&app, key(code)), Action::Advance);
        }
    }

    #[test]
    fn test_normal_mode_number_jump() {
        let app = app_in_mode(InputMode::Normal);

        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('1'))),
            Action::SelectContact(0)
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('3'))),
            Action::SelectContact(2)
        );
    }

    #[test]
    fn test_normal_mode_quit_and_help() {
        let app = app_in_mode(InputMode::Normal);

        assert_eq!(handle_key_event(&app, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('?'))),
            Action::OpenHelp
        );
        assert_eq!(
            handle_key_event(
                &app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Action::Quit
        );
    }

    #[test]
    fn test_help_mode_close_keys() {
        let app = app_in_mode(InputMode::Help);

        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::CloseHelp);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('?'))),
            Action::CloseHelp
        );
        // Advance keys are inert while help is open
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('n'))), Action::None);
    }
}
