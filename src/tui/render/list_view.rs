use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Render the scrollable task list for the active filter.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible_height = area.height as usize;

    // Clamp cursor and adjust scroll before borrowing the list for rendering
    let len = app.visible_tasks().len();
    app.cursor = if len == 0 {
        0
    } else {
        app.cursor.min(len - 1)
    };
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor - visible_height + 1;
    }

    let cursor = app.cursor;
    let scroll = app.scroll_offset;
    let visible = app.visible_tasks();

    if visible.is_empty() {
        let empty = Paragraph::new(" No tasks here.").style(
            Style::default()
                .fg(app.theme.subtext)
                .bg(app.theme.background),
        );
        frame.render_widget(empty, area);
        return;
    }

    let end = visible.len().min(scroll + visible_height);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    for (task, row) in visible[scroll..end].iter().copied().zip(scroll..end) {
        lines.push(render_task_line(
            &app.theme,
            task,
            row == cursor,
            area.width as usize,
        ));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// One row: cursor marker, checkbox, text (struck through when done).
fn render_task_line(theme: &Theme, task: &Task, is_cursor: bool, width: usize) -> Line<'static> {
    let bg = if is_cursor {
        theme.surface
    } else {
        theme.background
    };
    let mut spans: Vec<Span> = Vec::new();

    let marker = if is_cursor { "\u{258C}" } else { " " };
    spans.push(Span::styled(
        marker.to_string(),
        Style::default().fg(theme.accent).bg(bg),
    ));

    let (checkbox, check_color) = if task.done {
        ("[x] ", theme.green)
    } else {
        ("[ ] ", theme.subtext)
    };
    spans.push(Span::styled(
        checkbox.to_string(),
        Style::default().fg(check_color).bg(bg),
    ));

    let text_style = if task.done {
        Style::default()
            .fg(theme.subtext)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    let text_width = width.saturating_sub(6); // marker + checkbox + right margin
    spans.push(Span::styled(
        unicode::truncate_to_width(&task.text, text_width),
        text_style,
    ));

    // Pad so the row background covers the full width
    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
    }

    Line::from(spans)
}
