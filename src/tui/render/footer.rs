use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::task_ops;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the footer: summary over the whole list on the left, key hints
/// (or a save-failure message) on the right.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        format!(" {}", app.footer_summary()),
        Style::default().fg(app.theme.subtext).bg(bg),
    )];

    let (right, right_color) = match &app.status_message {
        Some(msg) => (msg.clone(), app.theme.red),
        None => (hints(app), app.theme.border),
    };

    let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let right_width = unicode::display_width(&right) + 1;
    if content_width + right_width < width {
        let padding = width - content_width - right_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            right,
            Style::default().fg(right_color).bg(bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Key hints for the current mode. "c clear" only appears while the list
/// holds at least one completed task.
fn hints(app: &App) -> String {
    match app.mode {
        Mode::Navigate => {
            if task_ops::done_count(&app.tasks) > 0 {
                "a add  space toggle  d delete  tab filter  c clear  q quit".into()
            } else {
                "a add  space toggle  d delete  tab filter  q quit".into()
            }
        }
        Mode::Insert => "Enter add  Esc cancel".into(),
        Mode::Confirm => "y confirm  n cancel".into(),
    }
}
