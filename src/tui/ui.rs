use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode};
use super::components::{render_contact_card, render_help_popup};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Interactive regions are rebuilt every frame
    app.interactions.clear();

    // Main vertical layout: logo, content, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2),  // Logo + spacing
        Constraint::Min(0),     // Content
        Constraint::Length(1),  // Hotkeys
    ])
    .split(area);

    // Render centered colorful logo
    render_logo(frame, main_layout[0]);

    // Contact card with its clickable Next button
    let next_button = render_contact_card(frame, main_layout[1], app);
    if let Some(region) = next_button {
        app.interactions
            .register_click("next_button", region, crate::events::Action::Advance);
    }

    // Render hotkey bar
    render_hotkeys(frame, main_layout[2]);

    // Help popup overlays everything
    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area);
    }
}

fn render_logo(frame: &mut Frame, area: Rect) {
    // Center the colorful "rolo" logo
    let padding = (area.width.saturating_sub(4)) / 2;
    let centered = Line::from(vec![
        Span::raw(" ".repeat(padding as usize)),
        Span::styled("r", Style::new().fg(LOGO_CORAL).bold()),
        Span::styled("o", Style::new().fg(LOGO_GOLD).bold()),
        Span::styled("l", Style::new().fg(LOGO_LIGHT_BLUE).bold()),
        Span::styled("o", Style::new().fg(LOGO_MINT).bold()),
    ]);

    let paragraph = Paragraph::new(centered);
    frame.render_widget(paragraph, area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let hotkeys = Line::from(vec![
        Span::styled(" [n/Space]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" next · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[1-9]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" jump · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[?]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" help · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" quit", Style::new().fg(TEXT_DIM)),
    ]);

    frame.render_widget(Paragraph::new(hotkeys), area);
}
