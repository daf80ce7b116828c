use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

const MAX_WIDTH: u16 = 60;

/// Where the panel goes inside `area`; None when there is no room for it
pub fn popup_area(area: Rect) -> Option<Rect> {
    let popup_w = MAX_WIDTH.min(area.width.saturating_sub(4));
    let popup_h = 3.min(area.height);
    if popup_w < 4 || popup_h < 3 {
        return None;
    }
    Some(centered_rect_fixed(popup_w, popup_h, area))
}

/// Render the floating editor panel: a one-line input centered on screen
pub fn render_editor_popup(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let Some(popup_area) = popup_area(area) else {
        return;
    };
    let popup_w = popup_area.width;
    frame.render_widget(Clear, popup_area);

    let title = if app.editor.target.is_some() {
        " Edit task "
    } else {
        " New task "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, Style::default().fg(app.theme.highlight).bg(bg)))
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let inner_w = popup_w.saturating_sub(2) as usize;
    let paragraph = Paragraph::new(input_line(app, inner_w))
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);
}

/// The buffer with a `▌` cursor, scrolled so the cursor stays in view
fn input_line(app: &App, inner_w: usize) -> Line<'static> {
    let editor = &app.editor;
    let before = &editor.buffer[..editor.cursor];
    let after = &editor.buffer[editor.cursor..];
    let text_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background);

    // One cell is the cursor itself
    let room = inner_w.saturating_sub(1);
    let before_w = unicode::display_width(before);
    let skip = before_w.saturating_sub(room);
    let shown_before = unicode::slice_columns(before, skip, before_w - skip);
    let after_room = room - (before_w - skip);
    let shown_after = unicode::slice_columns(after, 0, after_room);

    Line::from(vec![
        Span::styled(shown_before, text_style),
        Span::styled(
            "\u{258C}",
            Style::default()
                .fg(app.theme.highlight)
                .bg(app.theme.background),
        ),
        Span::styled(shown_after, text_style),
    ])
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
