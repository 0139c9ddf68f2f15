//! Key and mouse handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use strictly_tictactoe::Position;

use super::app::{Action, App, Focus};
use super::layout::ScreenLayout;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps a key press to an action for the focused panel.
pub fn action_for_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::ToggleOrder),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Play),
        code => match focus {
            Focus::Board => match code {
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    Some(Action::MoveCursor(code))
                }
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayAtCursor),
                _ => None,
            },
            Focus::Moves => match code {
                KeyCode::Up => Some(Action::SelectPrevious),
                KeyCode::Down => Some(Action::SelectNext),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::JumpToSelected),
                _ => None,
            },
        },
    }
}

/// Maps a left click to the control under it.
///
/// The current move's entry is a plain label, so clicking it does nothing.
pub fn action_for_mouse(mouse: MouseEvent, layout: &ScreenLayout, app: &App) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (column, row) = (mouse.column, mouse.row);

    if let Some(position) = layout.cell_at(column, row) {
        return Some(Action::Play(position));
    }
    if layout.toggle_hit(column, row) {
        return Some(Action::ToggleOrder);
    }

    let offset = app.scroll_offset(layout.visible_entries());
    let entry_row = layout.entry_at(column, row, offset)?;
    app.move_entries()
        .get(entry_row)
        .filter(|entry| entry.is_control())
        .map(|entry| Action::JumpTo(entry.move_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_moves_inside_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_digits_play_in_any_focus() {
        for focus in [Focus::Board, Focus::Moves] {
            assert_eq!(
                action_for_key(press(KeyCode::Char('1')), focus),
                Some(Action::Play(Position::TopLeft))
            );
            assert_eq!(
                action_for_key(press(KeyCode::Char('9')), focus),
                Some(Action::Play(Position::BottomRight))
            );
        }
        assert_eq!(action_for_key(press(KeyCode::Char('0')), Focus::Board), None);
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            action_for_key(press(KeyCode::Up), Focus::Board),
            Some(Action::MoveCursor(KeyCode::Up))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Up), Focus::Moves),
            Some(Action::SelectPrevious)
        );
        assert_eq!(
            action_for_key(press(KeyCode::Enter), Focus::Moves),
            Some(Action::JumpToSelected)
        );
        assert_eq!(
            action_for_key(press(KeyCode::Enter), Focus::Board),
            Some(Action::PlayAtCursor)
        );
    }

    #[test]
    fn test_global_keys() {
        assert_eq!(action_for_key(press(KeyCode::Char('q')), Focus::Moves), Some(Action::Quit));
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Focus::Board),
            Some(Action::Quit)
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('r')), Focus::Board),
            Some(Action::ToggleOrder)
        );
        assert_eq!(action_for_key(press(KeyCode::Tab), Focus::Board), Some(Action::SwitchFocus));
    }
}
