use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::model::config::RevealConfig;
use crate::ops::task_ops::TaskList;
use crate::tui::app::App;

pub const TERM_W: u16 = 40;
pub const TERM_H: u16 = 8;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app over a fresh task list, saving into a temp dir. Every task is
/// dated 01.02.2026 and numbered from 1.
pub fn app_with(texts: &[&str]) -> (TempDir, App) {
    let tmp = TempDir::new().unwrap();
    let mut tasks = TaskList::new();
    for text in texts {
        tasks.add_with_date(text, "01.02.2026").unwrap();
    }
    let app = App::new(tasks, tmp.path().join("tasks.json"), &RevealConfig::default());
    (tmp, app)
}

/// Render the whole app and keep the frame's hit-test areas.
pub fn render_app(app: &mut App, w: u16, h: u16) -> String {
    render_to_string(w, h, |frame, _| super::render(frame, app))
}
