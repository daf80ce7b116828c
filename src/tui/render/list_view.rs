use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{spans_width, strip_spans};

/// Render the task rows, each slid left (or right) by its reveal offset.
/// Records the screen area of every drawn row for mouse hit-testing.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    app.list_width = area.width;

    if app.tasks.is_empty() {
        app.row_areas.clear();
        let line = Line::from(Span::styled(
            "No tasks. Press a to add one.",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    // Keep the cursor in view
    let visible_height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let width = area.width as usize;
    let mut lines = Vec::new();
    let mut areas = Vec::new();
    for (i, record) in app
        .tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let row_bg = if i == app.cursor {
            app.theme.selection_bg
        } else {
            bg
        };
        let content_style = if record.is_checked {
            Style::default()
                .fg(app.theme.done)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let offset = app.visible_offset(&record.id);
        let strip = app.strip_for(record, width);
        let mut spans = strip_spans(strip.visible(offset), content_style, &app.theme);
        let used = spans_width(&spans);
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(row_bg)));
        }
        lines.push(Line::from(spans));

        let y = area.y + (i - app.scroll_offset) as u16;
        areas.push((record.id.clone(), Rect::new(area.x, y, area.width, 1)));
    }
    app.row_areas = areas;

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
