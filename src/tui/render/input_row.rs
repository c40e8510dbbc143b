use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the task-entry row. In insert mode this is a live single-line
/// editor with a block cursor; otherwise a dim hint.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    if app.mode != Mode::Insert {
        let hint = Paragraph::new(" press a to add a task")
            .style(Style::default().fg(app.theme.border).bg(bg));
        frame.render_widget(hint, area);
        return;
    }

    let buf = &app.input_buffer;
    let cur = app.input_cursor.min(buf.len());
    let (cell, after) = if cur >= buf.len() {
        (" ".to_string(), "")
    } else {
        let end = unicode::next_grapheme_boundary(buf, cur).unwrap_or(buf.len());
        (buf[cur..end].to_string(), &buf[end..])
    };

    // Keep the cursor on screen when the text outgrows the row
    let prompt = " > ";
    let available = (area.width as usize)
        .saturating_sub(unicode::display_width(prompt) + unicode::display_width(&cell) + 1);
    let before = tail_to_width(&buf[..cur], available);

    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let spans = vec![
        Span::styled(prompt, Style::default().fg(app.theme.accent).bg(bg)),
        Span::styled(before, text_style),
        // Block cursor: inverted cell
        Span::styled(cell, Style::default().fg(bg).bg(app.theme.accent)),
        Span::styled(after.to_string(), text_style),
    ];

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// The trailing portion of `s` that fits in `max_cells`.
fn tail_to_width(s: &str, max_cells: usize) -> String {
    if unicode::display_width(s) <= max_cells {
        return s.to_string();
    }
    let mut start = s.len();
    let mut width = 0;
    while let Some(prev) = unicode::prev_grapheme_boundary(s, start) {
        let gw = unicode::display_width(&s[prev..start]);
        if width + gw > max_cells {
            break;
        }
        width += gw;
        start = prev;
    }
    s[start..].to_string()
}
