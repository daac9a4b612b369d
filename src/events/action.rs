//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or customized.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No-op, the event did not map to anything
    None,

    /// Quit the application
    Quit,

    /// Advance to the next contact, wrapping at the end
    Advance,

    /// Jump to a contact by index (1-9 keys)
    SelectContact(usize),

    /// Open help popup
    OpenHelp,

    /// Close help popup
    CloseHelp,
}
