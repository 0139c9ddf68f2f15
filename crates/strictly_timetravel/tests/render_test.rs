//! Rendering into an in-memory backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, style::Color};
use strictly_tictactoe::Position;
use strictly_timetravel::{Action, App, ScreenLayout, draw};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    buffer
        .content()
        .chunks(usize::from(WIDTH))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell_center(buffer: &Buffer, pos: Position) -> (String, Color) {
    let layout = ScreenLayout::new(Rect::new(0, 0, WIDTH, HEIGHT));
    let rect = layout.cells[pos.to_index()];
    let (x, y) = (rect.x + rect.width / 2, rect.y + rect.height / 2);
    let cell = &buffer.content()[usize::from(y) * usize::from(WIDTH) + usize::from(x)];
    (cell.symbol().to_string(), cell.bg)
}

fn play(app: &mut App, cells: &[usize]) {
    for &i in cells {
        app.dispatch(Action::Play(Position::ALL[i]));
    }
}

#[test]
fn test_initial_screen() {
    let text = screen_text(&render(&App::default()));
    assert!(text.contains("Next player: X"));
    assert!(text.contains("You are at move #0"));
    assert!(text.contains("Reverse order"));
    assert!(!text.contains("Go to game start"));
}

#[test]
fn test_move_list_shows_coordinates() {
    let mut app = App::default();
    play(&mut app, &[4, 3]);
    app.dispatch(Action::JumpTo(1));

    let text = screen_text(&render(&app));
    assert!(text.contains("1. Go to game start"));
    assert!(text.contains("2. You are at move #1 - [(row, col) = (2, 2)]"));
    assert!(text.contains("3. Go to move #2 - [(row, col) = (2, 1)]"));
    assert!(text.contains("Next player: O"));
}

#[test]
fn test_reversed_move_list() {
    let mut app = App::default();
    play(&mut app, &[0]);
    app.dispatch(Action::ToggleOrder);

    let text = screen_text(&render(&app));
    let current = text.find("You are at move #1").expect("current entry");
    let start = text.find("Go to game start").expect("start entry");
    assert!(current < start);
    assert!(text.contains("newest first"));
}

#[test]
fn test_winning_line_is_highlighted() {
    let mut app = App::default();
    play(&mut app, &[0, 1, 4, 2, 8]);
    let buffer = render(&app);

    for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
        let (symbol, bg) = cell_center(&buffer, pos);
        assert_eq!(symbol, "X");
        assert_eq!(bg, Color::Yellow);
    }
    let (symbol, bg) = cell_center(&buffer, Position::TopCenter);
    assert_eq!(symbol, "O");
    assert_ne!(bg, Color::Yellow);

    assert!(screen_text(&buffer).contains("Winner: X"));
}

#[test]
fn test_highlight_follows_time_travel() {
    let mut app = App::default();
    play(&mut app, &[0, 1, 4, 2, 8]);
    app.dispatch(Action::JumpTo(4));
    let buffer = render(&app);

    let (symbol, bg) = cell_center(&buffer, Position::TopLeft);
    assert_eq!(symbol, "X");
    assert_ne!(bg, Color::Yellow);
    let (symbol, _) = cell_center(&buffer, Position::BottomRight);
    assert_eq!(symbol, "9");
}

#[test]
fn test_draw_status() {
    let mut app = App::default();
    play(&mut app, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(screen_text(&render(&app)).contains("Draw"));
}
