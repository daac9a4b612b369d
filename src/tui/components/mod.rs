//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `contact_card` - Centered card showing the current contact with the
//!   Next button
//! - `help_popup` - Help overlay with keybindings

mod contact_card;
mod help_popup;

pub use contact_card::render_contact_card;
pub use help_popup::render_help_popup;
