use crate::contact::Contact;
use crate::events::Action;
use crate::log;
use crate::selector::Selector;
use crate::tui::interaction::InteractionRegistry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal, // Cycling through contacts
    Help,   // Help popup showing all hotkeys
}

pub struct App {
    /// The contact roster with its cursor. Owned here for the lifetime of
    /// the app; nothing else mutates it.
    pub contacts: Selector<Contact>,
    pub input_mode: InputMode,
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
}

impl App {
    pub fn new(contacts: Selector<Contact>) -> Self {
        Self {
            contacts,
            input_mode: InputMode::Normal,
            interactions: InteractionRegistry::new(),
            should_quit: false,
        }
    }

    /// The contact currently shown in the card.
    pub fn current_contact(&self) -> &Contact {
        self.contacts.current()
    }

    /// Cycle to the next contact, wrapping at the end of the roster.
    pub fn advance(&mut self) {
        let name = self.contacts.advance().name.clone();
        let position = self.contacts.position() + 1;
        let len = self.contacts.len();
        log::log_event(&format!("advance -> {} ({}/{})", name, position, len));
    }

    /// Jump to a contact by index. Out-of-range indices are ignored rather
    /// than clamped so stray number keys don't move the cursor.
    pub fn select_contact(&mut self, index: usize) {
        if index < self.contacts.len() {
            self.contacts.select(index);
        }
    }

    /// Open the help popup
    pub fn open_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    /// Close the help popup
    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Apply a dispatched action to the app state.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Advance => self.advance(),
            Action::SelectContact(index) => self.select_contact(index),
            Action::OpenHelp => self.open_help(),
            Action::CloseHelp => self.close_help(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Roster;

    fn sample_app() -> App {
        App::new(Selector::new(Roster::sample()).unwrap())
    }

    #[test]
    fn test_apply_advance_cycles() {
        let mut app = sample_app();
        assert_eq!(app.current_contact().name, "Adam");

        app.apply(Action::Advance);
        assert_eq!(app.current_contact().name, "Brittany");

        app.apply(Action::Advance);
        app.apply(Action::Advance); // wraps
        assert_eq!(app.current_contact().name, "Adam");
    }

    #[test]
    fn test_apply_select_contact() {
        let mut app = sample_app();

        app.apply(Action::SelectContact(2));
        assert_eq!(app.current_contact().name, "Russell");

        // Out of range is ignored
        app.apply(Action::SelectContact(7));
        assert_eq!(app.current_contact().name, "Russell");
    }

    #[test]
    fn test_apply_help_and_quit() {
        let mut app = sample_app();

        app.apply(Action::OpenHelp);
        assert_eq!(app.input_mode, InputMode::Help);

        app.apply(Action::CloseHelp);
        assert_eq!(app.input_mode, InputMode::Normal);

        assert!(!app.should_quit);
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
