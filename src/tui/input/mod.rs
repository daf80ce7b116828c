mod editor;
mod mouse;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use ratatui::layout::Rect;

use super::app::{App, Mode};

use editor::handle_editor;
use mouse::{cancel_drag, handle_row_mouse};
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status = None;

    // A key press ends any pointer gesture in flight
    cancel_drag(app);

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Editor => handle_editor(app, key),
    }
}

/// Handle a mouse event. The editor panel is modal: a press on the backdrop
/// dismisses it, anything else is swallowed.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.mode == Mode::Editor {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && let Some(area) = app.editor_area
            && !contains(area, mouse.column, mouse.row)
        {
            app.close_editor();
        }
        return;
    }
    handle_row_mouse(app, mouse);
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}
