//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Rendering and click handling must agree on where every cell and move
//! entry sits, so both derive their rectangles from [`ScreenLayout::new`].

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use strictly_tictactoe::Position;

/// Width of one board cell.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the grid including the two vertical separators.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the grid including the two horizontal separators.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Rectangles for every widget on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered panel around the grid.
    pub board_panel: Rect,
    /// The grid itself, separators included.
    pub grid: Rect,
    /// One rectangle per cell, in index order.
    pub cells: [Rect; 9],
    /// Reverse-order button.
    pub toggle: Rect,
    /// Bordered move list panel.
    pub moves: Rect,
    /// Area inside the move list border, one entry per line.
    pub entries: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Lays out the screen for a terminal of size `area`.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Title
                Constraint::Min(GRID_HEIGHT + 2),    // Board and moves
                Constraint::Length(3),               // Status
                Constraint::Length(3),               // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GRID_WIDTH + 4), Constraint::Min(0)])
            .split(rows[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(body[1]);

        let board_panel = body[0];
        let grid = center_rect(board_panel.inner(Margin::new(1, 1)), GRID_WIDTH, GRID_HEIGHT);
        let cells = Position::ALL.map(|pos| cell_rect(grid, pos));

        Self {
            title: rows[0],
            board_panel,
            grid,
            cells,
            toggle: info[0],
            moves: info[1],
            entries: info[1].inner(Margin::new(1, 1)),
            status: rows[2],
            help: rows[3],
        }
    }

    /// Cell under the terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| hit(self.cells[pos.to_index()], column, row))
    }

    /// Whether the coordinate is on the reverse-order button.
    pub fn toggle_hit(&self, column: u16, row: u16) -> bool {
        hit(self.toggle, column, row)
    }

    /// Number of move entries that fit on screen at once.
    pub fn visible_entries(&self) -> usize {
        usize::from(self.entries.height)
    }

    /// Screen rectangle of the `line`th visible entry.
    pub fn entry_rect(&self, line: usize) -> Option<Rect> {
        let line = u16::try_from(line).ok()?;
        (line < self.entries.height).then(|| {
            Rect::new(self.entries.x, self.entries.y + line, self.entries.width, 1)
        })
    }

    /// Display row of the entry under the coordinate, given the scroll offset.
    pub fn entry_at(&self, column: u16, row: u16, offset: usize) -> Option<usize> {
        if !hit(self.entries, column, row) {
            return None;
        }
        Some(offset + usize::from(row - self.entries.y))
    }
}

/// First display row to show so that `selected` stays visible.
pub fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        (selected + 1).saturating_sub(visible)
    }
}

fn cell_rect(grid: Rect, pos: Position) -> Rect {
    // Cell widths are tiny, so the casts cannot truncate.
    let col = pos.col() as u16;
    let row = pos.row() as u16;
    Rect::new(
        grid.x + col * (CELL_WIDTH + 1),
        grid.y + row * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
    .intersection(grid)
}

fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.width > 0
        && rect.height > 0
        && column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 100, 30))
    }

    #[test]
    fn test_cells_do_not_overlap_and_hit_themselves() {
        let layout = screen();
        for pos in Position::ALL {
            let rect = layout.cells[pos.to_index()];
            assert_eq!(rect.width, CELL_WIDTH);
            assert_eq!(rect.height, CELL_HEIGHT);
            assert_eq!(layout.cell_at(rect.x, rect.y), Some(pos));
            assert_eq!(
                layout.cell_at(rect.x + rect.width - 1, rect.y + rect.height - 1),
                Some(pos)
            );
        }
    }

    #[test]
    fn test_separators_are_not_cells() {
        let layout = screen();
        let first = layout.cells[0];
        assert_eq!(layout.cell_at(first.x + CELL_WIDTH, first.y), None);
        assert_eq!(layout.cell_at(first.x, first.y + CELL_HEIGHT), None);
    }

    #[test]
    fn test_entries_map_to_rows_with_offset() {
        let layout = screen();
        let e = layout.entries;
        assert_eq!(layout.entry_at(e.x, e.y, 0), Some(0));
        assert_eq!(layout.entry_at(e.x + 2, e.y + 3, 2), Some(5));
        assert_eq!(layout.entry_at(e.x, e.y + e.height, 0), None);
        assert_eq!(layout.entry_rect(0).map(|r| r.y), Some(e.y));
        assert_eq!(layout.entry_rect(layout.visible_entries()), None);
    }

    #[test]
    fn test_toggle_is_separate_from_entries() {
        let layout = screen();
        let t = layout.toggle;
        assert!(layout.toggle_hit(t.x + 1, t.y + 1));
        assert_eq!(layout.entry_at(t.x + 1, t.y + 1, 0), None);
    }

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(7, 5), 3);
        assert_eq!(scroll_offset(3, 0), 0);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 10, 5));
        assert!(layout.grid.width <= 10);
        for column in 0..10 {
            for row in 0..5 {
                let _ = layout.cell_at(column, row);
                let _ = layout.entry_at(column, row, 0);
            }
        }
    }
}
