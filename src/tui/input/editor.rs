use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::unicode;

/// Keys in the floating editor panel. Back closes the panel before anything
/// else sees it.
pub(super) fn handle_editor(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => return app.close_editor(),
        KeyCode::Enter => return app.commit_editor(),
        _ => {}
    }

    let editor = &mut app.editor;
    match (key.modifiers, key.code) {
        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&editor.buffer, editor.cursor) {
                editor.buffer.drain(prev..editor.cursor);
                editor.cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&editor.buffer, editor.cursor) {
                editor.buffer.drain(editor.cursor..next);
            }
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&editor.buffer, editor.cursor) {
                editor.cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&editor.buffer, editor.cursor) {
                editor.cursor = next;
            }
        }
        (_, KeyCode::Home) => editor.cursor = 0,
        (_, KeyCode::End) => editor.cursor = editor.buffer.len(),
        // Ctrl+U: clear the line
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            editor.buffer.clear();
            editor.cursor = 0;
        }
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            editor.buffer.insert(editor.cursor, c);
            editor.cursor += c.len_utf8();
        }
        _ => {}
    }
}
