//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

/// Render the help popup with keyboard shortcuts.
#[allow(clippy::vec_init_then_push)]
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    // Calculate centered popup area
    let popup_width = 44u16;
    let popup_height = 14u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];

    // Title
    lines.push(Line::from(vec![Span::styled(
        "Keyboard Shortcuts",
        Style::new().fg(TEXT_WHITE).bold(),
    )]));
    lines.push(Line::raw(""));

    lines.push(Line::styled(
        "Contacts",
        Style::new().fg(LOGO_LIGHT_BLUE).bold(),
    ));
    lines.push(Line::from(vec![
        Span::styled("  n/Space ", Style::new().fg(TEXT_WHITE)),
        Span::styled("Next contact", Style::new().fg(TEXT_DIM)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Enter/→ ", Style::new().fg(TEXT_WHITE)),
        Span::styled("Next contact", Style::new().fg(TEXT_DIM)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  1-9     ", Style::new().fg(TEXT_WHITE)),
        Span::styled("Jump to contact by number", Style::new().fg(TEXT_DIM)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  q       ", Style::new().fg(TEXT_WHITE)),
        Span::styled("Quit", Style::new().fg(TEXT_DIM)),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Mouse", Style::new().fg(LOGO_MINT).bold()));
    lines.push(Line::from(vec![
        Span::styled("  Click   ", Style::new().fg(TEXT_WHITE)),
        Span::styled("[ Next ] button cycles", Style::new().fg(TEXT_DIM)),
    ]));
    lines.push(Line::raw(""));

    // Footer
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::new().fg(TEXT_DIM)),
        Span::styled("?", Style::new().fg(TEXT_WHITE)),
        Span::styled(" or ", Style::new().fg(TEXT_DIM)),
        Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
        Span::styled(" to close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_LIGHT_BLUE))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
