use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::io::config_io::read_config;
use crate::io::task_io::{read_tasks, write_tasks};
use crate::model::config::{RevealConfig, UiConfig};
use crate::model::gesture::RevealCommand;
use crate::model::row::{RowId, TaskRecord};
use crate::ops::swipe_list::SwipeList;
use crate::ops::task_ops::TaskList;

use super::animation::Animator;
use super::input;
use super::render;
use super::row_strip::{RowAction, RowStrip, format_row_content};
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// The floating editor panel is open
    Editor,
}

/// Contents of the floating editor panel
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub buffer: String,
    /// Byte offset into `buffer`
    pub cursor: usize,
    /// Record being edited; None when adding
    pub target: Option<RowId>,
}

/// A left-button press on a row that has not been released yet
#[derive(Debug, Clone)]
pub struct DragState {
    pub row: RowId,
    /// Column of the press
    pub origin_x: u16,
    /// Whether the pointer left the press column at any point
    pub moved: bool,
    /// The press landed on the checkbox
    pub on_checkbox: bool,
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    pub tasks_path: PathBuf,
    pub swipe: SwipeList,
    pub animator: Animator,
    pub theme: Theme,
    pub ui: UiConfig,
    pub mode: Mode,
    pub editor: EditorState,
    pub drag: Option<DragState>,
    /// Index of the highlighted record
    pub cursor: usize,
    /// First visible record
    pub scroll_offset: usize,
    pub should_quit: bool,
    /// One-shot message for the status row (errors, confirmations)
    pub status: Option<String>,
    /// Screen rect of every row drawn in the last frame, for hit-testing
    pub row_areas: Vec<(RowId, Rect)>,
    /// Width of the list area in the last frame
    pub list_width: u16,
    /// Screen rect of the editor panel in the last frame
    pub editor_area: Option<Rect>,
}

impl App {
    pub fn new(tasks: TaskList, tasks_path: PathBuf, config: &RevealConfig) -> Self {
        let mut app = App {
            tasks,
            tasks_path,
            swipe: SwipeList::new(config.gesture.clone()),
            animator: Animator::default(),
            theme: Theme::from_config(&config.ui),
            ui: config.ui.clone(),
            mode: Mode::Navigate,
            editor: EditorState::default(),
            drag: None,
            cursor: 0,
            scroll_offset: 0,
            should_quit: false,
            status: None,
            row_areas: Vec::new(),
            list_width: 0,
            editor_area: None,
        };
        app.bind_rows();
        app
    }

    /// Hidden buttons behind every record, padded by one cell on each side
    pub fn actions(&self) -> Vec<(RowAction, String)> {
        vec![
            (RowAction::Edit, format!(" {} ", self.ui.edit_label)),
            (RowAction::Delete, format!(" {} ", self.ui.delete_label)),
        ]
    }

    /// Lay out a record's row at `width` cells.
    pub fn strip_for(&self, record: &TaskRecord, width: usize) -> RowStrip {
        RowStrip::new(
            &format_row_content(record, width),
            width,
            self.actions(),
            self.swipe.config().direction,
        )
    }

    /// Re-read every row's reveal width and forget rows whose record is gone.
    pub fn bind_rows(&mut self) {
        let widths: Vec<(RowId, f32)> = self
            .tasks
            .iter()
            .map(|r| (r.id.clone(), self.strip_for(r, 0).buttons_width() as f32))
            .collect();
        for (id, width) in &widths {
            let commands = self.swipe.bind(id, *width);
            self.apply_commands(commands);
        }
        let ids: Vec<RowId> = self.tasks.ids().cloned().collect();
        let stale: Vec<RowId> = self
            .swipe
            .tracked_rows()
            .into_iter()
            .filter(|row| !ids.contains(row))
            .cloned()
            .collect();
        for row in &stale {
            self.animator.stop(row);
        }
        self.swipe.retain(&ids);
        if self.cursor >= self.tasks.len() {
            self.cursor = self.tasks.len().saturating_sub(1);
        }
    }

    /// Turn gesture commands into what gets drawn: offsets jump, settles animate.
    pub fn apply_commands(&mut self, commands: Vec<RevealCommand>) {
        let now = Instant::now();
        for command in commands {
            match command {
                RevealCommand::ApplyOffset { row, .. } => self.animator.stop(&row),
                RevealCommand::AnimateTo {
                    row,
                    target,
                    duration,
                } => {
                    let from = self.visible_offset_at(&row, now);
                    self.animator.start(&row, from, target, duration, now);
                    log::trace!("animate {row} {from} -> {target}");
                }
            }
        }
    }

    /// Offset to draw for `row` right now
    pub fn visible_offset(&self, row: &RowId) -> f32 {
        self.visible_offset_at(row, Instant::now())
    }

    fn visible_offset_at(&self, row: &RowId, now: Instant) -> f32 {
        self.animator
            .value(row, now)
            .unwrap_or_else(|| self.swipe.offset(row))
    }

    pub fn selected_id(&self) -> Option<RowId> {
        self.tasks.get_index(self.cursor).map(|r| r.id.clone())
    }

    pub fn row_at(&self, column: u16, y: u16) -> Option<(RowId, Rect)> {
        self.row_areas
            .iter()
            .find(|(_, area)| {
                y >= area.y && y < area.y + area.height && column >= area.x && column < area.x + area.width
            })
            .cloned()
    }

    pub fn select(&mut self, row: &RowId) {
        if let Some(index) = self.tasks.ids().position(|id| id == row) {
            self.cursor = index;
        }
    }

    fn save(&mut self) {
        if let Err(e) = write_tasks(&self.tasks_path, &self.tasks) {
            self.status = Some(e.to_string());
        }
    }

    // -- task actions --

    pub fn toggle(&mut self, row: &RowId) {
        match self.tasks.toggle(row) {
            Ok(_) => self.save(),
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    pub fn delete(&mut self, row: &RowId) {
        match self.tasks.delete(row) {
            Ok(record) => {
                self.swipe.recycle(row);
                self.animator.stop(row);
                self.save();
                self.bind_rows();
                self.status = Some(format!("deleted \"{}\"", record.text));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// A revealed button was clicked: close the row, then run its action.
    pub fn fire_action(&mut self, row: &RowId, action: RowAction) {
        let commands = self.swipe.close(row);
        self.apply_commands(commands);
        match action {
            RowAction::Edit => self.open_editor(Some(row.clone())),
            RowAction::Delete => self.delete(row),
        }
    }

    // -- editor panel --

    /// Open the editor to add a task (`None`) or edit one.
    pub fn open_editor(&mut self, target: Option<RowId>) {
        let buffer = target
            .as_ref()
            .and_then(|id| self.tasks.get(id))
            .map(|r| r.text.clone())
            .unwrap_or_default();
        self.editor = EditorState {
            cursor: buffer.len(),
            buffer,
            target,
        };
        self.mode = Mode::Editor;
    }

    pub fn close_editor(&mut self) {
        self.editor = EditorState::default();
        self.editor_area = None;
        self.mode = Mode::Navigate;
    }

    /// Commit the editor. Blank text leaves the panel open.
    pub fn commit_editor(&mut self) {
        if self.editor.buffer.trim().is_empty() {
            self.status = Some("task text is empty".into());
            return;
        }
        let text = std::mem::take(&mut self.editor.buffer);
        let result = match self.editor.target.take() {
            Some(id) => self.tasks.edit(&id, &text, None).map(|r| r.id.clone()),
            None => self.tasks.add(&text),
        };
        match result {
            Ok(id) => {
                self.save();
                self.bind_rows();
                self.select(&id);
            }
            Err(e) => self.status = Some(e.to_string()),
        }
        self.close_editor();
    }
}

pub fn run(tasks_path: &Path, config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config(config_path)?;
    let tasks = read_tasks(tasks_path)?;
    let mut app = App::new(tasks, tasks_path.to_path_buf(), &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Redraw at ~60fps while a row is animating
        let timeout = if app.animator.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(250)
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }
        app.animator.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
