use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::store;
use crate::model::{Filter, Task};
use crate::ops::task_ops;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Insert,
    Confirm,
}

/// A destructive action waiting for the user's yes/no
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    ClearCompleted { count: usize },
}

/// Main application state. Every mutation goes through the task operations,
/// then a synchronous save, then the next frame re-renders the whole list.
pub struct App {
    pub tasks: Vec<Task>,
    pub data_path: PathBuf,
    pub filter: Filter,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the visible (filtered) list
    pub cursor: usize,
    /// Scroll offset (first visible row), adjusted during render
    pub scroll_offset: usize,
    /// Text being typed in insert mode
    pub input_buffer: String,
    /// Byte offset of the input cursor
    pub input_cursor: usize,
    /// Pending destructive action (confirm modal showing)
    pub confirm: Option<ConfirmAction>,
    /// Transient message shown in the footer (save failures)
    pub status_message: Option<String>,
}

impl App {
    pub fn new(tasks: Vec<Task>, data_path: PathBuf) -> Self {
        App {
            tasks,
            data_path,
            filter: Filter::default(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::default(),
            cursor: 0,
            scroll_offset: 0,
            input_buffer: String::new(),
            input_cursor: 0,
            confirm: None,
            status_message: None,
        }
    }

    /// The tasks visible under the current filter, in list order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        task_ops::visible(&self.tasks, self.filter)
    }

    /// Footer summary over the entire list, not the filtered view.
    pub fn footer_summary(&self) -> String {
        format!(
            "{} remaining  \u{2022}  {} done",
            task_ops::remaining_count(&self.tasks),
            task_ops::done_count(&self.tasks)
        )
    }

    /// Submit the insert-mode buffer as a new task. Blank input is a no-op
    /// and keeps the buffer; on success the buffer clears for the next entry.
    pub fn submit_input(&mut self) {
        if task_ops::add(&mut self.tasks, &self.input_buffer).is_some() {
            self.input_buffer.clear();
            self.input_cursor = 0;
            self.cursor = 0;
            self.persist();
        }
    }

    /// Flip done on the task under the cursor.
    pub fn toggle_at_cursor(&mut self) {
        let id = match self.visible_tasks().get(self.cursor) {
            Some(task) => task.id,
            None => return,
        };
        if task_ops::toggle(&mut self.tasks, id) {
            self.persist();
            self.clamp_cursor();
        }
    }

    /// Delete the task under the cursor.
    pub fn delete_at_cursor(&mut self) {
        let id = match self.visible_tasks().get(self.cursor) {
            Some(task) => task.id,
            None => return,
        };
        if task_ops::delete(&mut self.tasks, id) {
            self.persist();
            self.clamp_cursor();
        }
    }

    /// Open the confirm modal for clearing completed tasks. Does nothing
    /// (no prompt, no write) when no task is completed.
    pub fn request_clear_completed(&mut self) {
        let count = task_ops::done_count(&self.tasks);
        if count == 0 {
            return;
        }
        self.confirm = Some(ConfirmAction::ClearCompleted { count });
        self.mode = Mode::Confirm;
    }

    /// Apply a confirmed clear-completed.
    pub fn apply_clear_completed(&mut self) {
        if task_ops::clear_completed(&mut self.tasks) > 0 {
            self.persist();
        }
        self.clamp_cursor();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    /// Keep the cursor inside the visible list after mutations or filter
    /// changes shrink it.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(len - 1);
        }
    }

    /// Rewrite the task file. The in-memory list is already mutated; a
    /// failure leaves it intact and surfaces in the footer.
    fn persist(&mut self) {
        match store::save(&self.data_path, &self.tasks) {
            Ok(()) => self.status_message = None,
            Err(e) => self.status_message = Some(format!("save failed: {}", e)),
        }
    }
}

/// Run the TUI application
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = store::data_file_path()?;
    let tasks = store::load(&path)?;
    let mut app = App::new(tasks, path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
