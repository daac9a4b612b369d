//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by UI components during each render. This allows components
//! to define their own clickable regions without modifying the mouse handler.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
///
/// Components register their interactive regions during render, and the
/// registry handles hit testing and action dispatch.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.interactions.handle_click(mouse.column, mouse.row)
        }
        _ => Action::None,
    }
}
