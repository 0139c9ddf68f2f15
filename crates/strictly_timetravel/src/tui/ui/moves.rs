//! Move list and reverse-order button.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::super::app::{App, Focus};
use super::super::layout::ScreenLayout;

/// Renders the reverse-order button and the visible move-list entries.
pub fn render_moves(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    let order = if app.store().is_reversed() {
        "newest first"
    } else {
        "oldest first"
    };
    let toggle = Paragraph::new(format!("[ Reverse order ] ({order})"))
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(toggle, layout.toggle);

    let border_style = if app.focus() == Focus::Moves {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Moves");
    f.render_widget(block, layout.moves);

    let entries = app.move_entries();
    let offset = app.scroll_offset(layout.visible_entries());
    let selected_row = app.selected_row();

    for (line, (row, entry)) in entries.iter().enumerate().skip(offset).enumerate() {
        let Some(area) = layout.entry_rect(line) else {
            break;
        };

        let mut style = if entry.is_control() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        if app.focus() == Focus::Moves && row == selected_row {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let mut spans = vec![
            Span::raw(format!("{}. ", row + 1)),
            Span::styled(entry.description(), style),
        ];
        if let Some(suffix) = entry.coordinate_suffix() {
            spans.push(Span::styled(suffix, Style::default().fg(Color::Gray)));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
