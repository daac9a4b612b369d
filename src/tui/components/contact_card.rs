//! Contact card component.
//!
//! Renders the current contact as a centered card with a `[ Next ]` button.
//! The button's screen region is returned so the caller can register it as
//! clickable for the frame.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::tui::interaction::ClickRegion;
use crate::tui::theme::*;

const CARD_WIDTH: u16 = 44;
const CARD_HEIGHT: u16 = 11;
const BUTTON_LABEL: &str = "[ Next ]";

/// Render the contact card as a centered box.
///
/// Returns the region of the Next button for click registration.
pub fn render_contact_card(frame: &mut Frame, area: Rect, app: &App) -> Option<ClickRegion> {
    let card_width = CARD_WIDTH.min(area.width.saturating_sub(2));
    let card_height = CARD_HEIGHT.min(area.height);
    if card_width < 12 || card_height < 6 {
        return None;
    }

    let x = area.x + (area.width.saturating_sub(card_width)) / 2;
    let y = area.y + (area.height.saturating_sub(card_height)) / 2;
    let card_area = Rect::new(x, y, card_width, card_height);

    frame.render_widget(Clear, card_area);

    let contact = app.current_contact();

    let mut lines: Vec<Line> = vec![];
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        contact.name.clone(),
        Style::new().fg(TEXT_WHITE).bold(),
    ));
    lines.push(Line::styled(
        contact.title.clone(),
        Style::new().fg(LOGO_LIGHT_BLUE),
    ));

    if let Some(image) = &contact.image {
        lines.push(Line::styled(
            format!("img: {}", image),
            Style::new().fg(TEXT_DIM),
        ));
    }

    lines.push(Line::raw(""));
    lines.push(position_line(app));

    let block = Block::default()
        .title(" Contacts ")
        .title_style(Style::new().fg(LOGO_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_MINT))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, card_area);

    // The Next button sits on its own row above the bottom border.
    let button_width = BUTTON_LABEL.len() as u16;
    let button_x = card_area.x + (card_width.saturating_sub(button_width)) / 2;
    let button_y = card_area.y + card_height - 2;
    let button_area = Rect::new(button_x, button_y, button_width, 1);

    let button = Paragraph::new(Line::styled(
        BUTTON_LABEL,
        Style::new().fg(LOGO_GOLD).bold(),
    ));
    frame.render_widget(button, button_area);

    Some(ClickRegion::new(button_x, button_y, button_width, 1))
}

/// Position indicator: one dot per contact plus an `m / n` counter.
fn position_line(app: &App) -> Line<'static> {
    let mut spans: Vec<Span> = vec![];

    // Dots are unreadable past a handful of entries; counter only then.
    if app.contacts.len() <= 10 {
        for (is_current, _) in app.contacts.iter() {
            let (dot, color) = if is_current {
                ("●", LOGO_MINT)
            } else {
                ("○", TEXT_DIM)
            };
            spans.push(Span::styled(dot, Style::new().fg(color)));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled(
        format!("{} / {}", app.contacts.position() + 1, app.contacts.len()),
        Style::new().fg(TEXT_DIM),
    ));

    Line::from(spans)
}
