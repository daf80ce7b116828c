use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        // Back: conceal an open row first, quit only from a clean list
        KeyCode::Esc => {
            if app.swipe.ajar_rows().is_empty() {
                app.should_quit = true;
            } else {
                let commands = app.swipe.close_all();
                app.apply_commands(commands);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = app.tasks.len().saturating_sub(1),
        KeyCode::Char('a') => app.open_editor(None),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.selected_id() {
                app.open_editor(Some(id));
            }
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_id() {
                app.toggle(&id);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_id() {
                app.delete(&id);
            }
        }
        KeyCode::Char('h') | KeyCode::Left => reveal_selected(app),
        KeyCode::Char('l') | KeyCode::Right => {
            if let Some(id) = app.selected_id() {
                let commands = app.swipe.close(&id);
                app.apply_commands(commands);
            }
        }
        _ => {}
    }
}

pub(super) fn move_cursor(app: &mut App, delta: isize) {
    let len = app.tasks.len();
    if len == 0 {
        return;
    }
    app.cursor = app.cursor.saturating_add_signed(delta).min(len - 1);
}

/// Keyboard stand-in for a full swipe: one sample the width of the
/// buttons, then a release.
fn reveal_selected(app: &mut App) {
    let Some(id) = app.selected_id() else {
        return;
    };
    let width = app.swipe.reveal_width(&id);
    let raw = app.swipe.config().direction.reveal_delta(width);
    let mut commands = app.swipe.drag(&id, raw, true);
    commands.extend(app.swipe.release(&id));
    app.apply_commands(commands);
}
