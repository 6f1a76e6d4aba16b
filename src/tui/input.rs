//! Input handling for the quick-pick.
//!
//! The prompt always has focus: printable keys edit the query, everything
//! else navigates or closes the picker.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;

/// Handle a terminal event.
///
/// `page_rows` is the height of the list, used for PageUp/PageDown.
/// Returns `true` once the picker is finished.
pub fn handle_event(app: &mut App, event: Event, page_rows: usize) -> bool {
    if let Event::Key(key) = event {
        // Windows reports both press and release.
        if key.kind == KeyEventKind::Press {
            handle_key(app, key, page_rows);
        }
    }
    app.is_done()
}

/// Handle a key event.
///
/// - Enter: run the highlighted script
/// - Esc, Ctrl+C: close without running anything
/// - ↑/↓, Ctrl+P/Ctrl+N: previous/next script
/// - PageUp/PageDown, Home/End: jump
/// - Backspace: delete a character, Ctrl+U: clear the query
fn handle_key(app: &mut App, key: KeyEvent, page_rows: usize) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => app.accept(),
        KeyCode::Esc => app.cancel(),
        KeyCode::Char('c') if ctrl => app.cancel(),

        KeyCode::Up => app.move_up(),
        KeyCode::Down | KeyCode::Tab => app.move_down(),
        KeyCode::BackTab => app.move_up(),
        KeyCode::Char('p') if ctrl => app.move_up(),
        KeyCode::Char('n') if ctrl => app.move_down(),
        KeyCode::PageUp => app.page_up(page_rows),
        KeyCode::PageDown => app.page_down(page_rows),
        KeyCode::Home => app.move_to_first(),
        KeyCode::End => app.move_to_last(),

        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char('u') if ctrl => app.clear_query(),
        KeyCode::Char(c) if !ctrl => app.push_char(c),

        _ => {}
    }
}
