//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{Player, Position, Square};

use super::super::app::{App, Focus};
use super::super::layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};

/// Renders the displayed snapshot with the winning line and cursor highlighted.
pub fn render_board(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    let border_style = if app.focus() == Focus::Board {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("Move #{}", app.store().current_move()));
    f.render_widget(block, layout.board_panel);

    render_separators(f, layout.grid);

    let winning_line = app.store().winning_line();
    let board = app.store().current_board();
    for pos in Position::ALL {
        let winning = winning_line.is_some_and(|line| line.contains(pos));
        let cursor = app.focus() == Focus::Board && app.cursor() == pos;
        render_square(f, layout.cells[pos.to_index()], board.get(pos), pos, winning, cursor);
    }
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    winning: bool,
    cursor: bool,
) {
    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if winning {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }
    if cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Pad to the full cell so the background fills it; mark on the middle line.
    let blank = " ".repeat(usize::from(CELL_WIDTH));
    let lines: Vec<Line> = (0..CELL_HEIGHT)
        .map(|line| {
            let content = if line == CELL_HEIGHT / 2 {
                format!("{:^width$}", text, width = usize::from(CELL_WIDTH))
            } else {
                blank.clone()
            };
            Line::from(Span::styled(content, style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_separators(f: &mut Frame, grid: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    for row in 1..3u16 {
        let y = grid.y + row * (CELL_HEIGHT + 1) - 1;
        if y < grid.y + grid.height {
            let sep = Paragraph::new("─".repeat(usize::from(grid.width))).style(style);
            f.render_widget(sep, Rect::new(grid.x, y, grid.width, 1));
        }
    }
    for col in 1..3u16 {
        let x = grid.x + col * (CELL_WIDTH + 1) - 1;
        if x < grid.x + grid.width {
            let lines: Vec<Line> = (0..grid.height).map(|_| Line::from("│")).collect();
            let sep = Paragraph::new(lines).style(style);
            f.render_widget(sep, Rect::new(x, grid.y, 1, grid.height));
        }
    }
}
