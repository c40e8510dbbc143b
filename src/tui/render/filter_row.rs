use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::App;

/// Render the three-way filter selector. Returns the column positions of
/// the vertical separators so the rule below can draw `┴` joints.
pub fn render_filter_row(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();

    spans.push(Span::styled(" ", Style::default().bg(bg)));

    for (i, filter) in Filter::ALL.into_iter().enumerate() {
        if i > 0 {
            sep_cols.push(spans.iter().map(|s| s.content.chars().count()).sum());
            spans.push(Span::styled(
                "\u{2502}",
                Style::default().fg(app.theme.border).bg(bg),
            ));
        }
        let style = if filter == app.filter {
            Style::default()
                .fg(app.theme.accent)
                .bg(app.theme.surface)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.subtext).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }

    let line = Line::from(spans);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
    sep_cols
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{app_with_tasks, render_to_string};

    #[test]
    fn shows_all_three_states() {
        let app = app_with_tasks(vec![]);
        let output = render_to_string(40, 1, |frame, area| {
            render_filter_row(frame, &app, area);
        });
        assert_eq!(output, " All \u{2502} Active \u{2502} Done");
    }

    #[test]
    fn separator_columns_line_up_with_the_bars() {
        let app = app_with_tasks(vec![]);
        let mut cols = Vec::new();
        let output = render_to_string(40, 1, |frame, area| {
            cols = render_filter_row(frame, &app, area);
        });
        let chars: Vec<char> = output.chars().collect();
        assert_eq!(cols.len(), 2);
        for col in cols {
            assert_eq!(chars[col], '\u{2502}');
        }
    }
}
