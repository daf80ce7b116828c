use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::model::gesture::TapOutcome;
use crate::tui::app::{App, DragState};
use crate::tui::row_strip::RowHit;

pub(super) fn handle_row_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => press(app, mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => drag_to(app, mouse.column),
        MouseEventKind::Up(MouseButton::Left) => lift(app),
        MouseEventKind::ScrollDown => {
            cancel_drag(app);
            super::navigate::move_cursor(app, 1);
        }
        MouseEventKind::ScrollUp => {
            cancel_drag(app);
            super::navigate::move_cursor(app, -1);
        }
        _ => {}
    }
}

fn press(app: &mut App, column: u16, y: u16) {
    // A second press without a lift in between: settle the first one
    cancel_drag(app);

    let Some((row, area)) = app.row_at(column, y) else {
        // Pressing outside every row conceals whatever is open
        let commands = app.swipe.close_all();
        app.apply_commands(commands);
        return;
    };
    let offset = app.visible_offset(&row);
    let Some(record) = app.tasks.get(&row) else {
        return;
    };
    let hit = app
        .strip_for(record, area.width as usize)
        .hit(offset, (column - area.x) as usize);
    app.select(&row);
    if let RowHit::Button(action) = hit
        && offset > 0.0
    {
        app.fire_action(&row, action);
        return;
    }
    app.drag = Some(DragState {
        row,
        origin_x: column,
        moved: false,
        on_checkbox: hit == RowHit::Checkbox,
    });
}

fn drag_to(app: &mut App, column: u16) {
    let Some(drag) = app.drag.as_mut() else {
        return;
    };
    if column != drag.origin_x {
        drag.moved = true;
    }
    if !drag.moved {
        return;
    }
    let delta = column as f32 - drag.origin_x as f32;
    let row = drag.row.clone();
    let commands = app.swipe.drag(&row, delta, true);
    app.apply_commands(commands);
}

fn lift(app: &mut App) {
    let Some(drag) = app.drag.take() else {
        return;
    };
    if drag.moved {
        let commands = app.swipe.release(&drag.row);
        app.apply_commands(commands);
        return;
    }
    let (outcome, commands) = app.swipe.tap(&drag.row);
    app.apply_commands(commands);
    if outcome == TapOutcome::Activate && drag.on_checkbox {
        app.toggle(&drag.row);
    }
}

/// The gesture was taken away (scroll, key press): settle like a release.
pub(super) fn cancel_drag(app: &mut App) {
    if let Some(drag) = app.drag.take()
        && drag.moved
    {
        let commands = app.swipe.cancel(&drag.row);
        app.apply_commands(commands);
    }
}
