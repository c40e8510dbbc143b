use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::Task;
use crate::tui::app::App;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 16;

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

/// An App over the given tasks, backed by a path no render test writes to.
pub fn app_with_tasks(tasks: Vec<Task>) -> App {
    App::new(tasks, std::env::temp_dir().join("jot-render-test.json"))
}

/// Two tasks, newest first: one open, one done.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 2,
            text: "Call Bob".into(),
            done: false,
            created: "2025-05-02 09:00".into(),
        },
        Task {
            id: 1,
            text: "Buy milk".into(),
            done: true,
            created: "2025-05-01 09:00".into(),
        },
    ]
}
