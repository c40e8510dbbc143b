pub mod confirm_popup;
pub mod filter_row;
pub mod footer;
pub mod input_row;
pub mod list_view;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | input | filter selector | separator | list | footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // input row
            Constraint::Length(1), // filter selector
            Constraint::Length(1), // separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    input_row::render_input_row(frame, app, chunks[1]);
    let sep_cols = filter_row::render_filter_row(frame, app, chunks[2]);
    render_separator(frame, app, chunks[3], &sep_cols);
    list_view::render_list(frame, app, chunks[4]);
    footer::render_footer(frame, app, chunks[5]);

    // Confirm modal (rendered on top of everything)
    if app.confirm.is_some() {
        confirm_popup::render_confirm_popup(frame, app, frame.area());
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(" My To-Do List").style(
        Style::default()
            .fg(app.theme.accent)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(header, area);
}

/// Horizontal rule under the filter selector, with `┴` where the selector's
/// vertical separators land.
fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let mut line = String::with_capacity(width * 3);
    for col in 0..width {
        if sep_cols.contains(&col) {
            line.push('\u{2534}');
        } else {
            line.push('\u{2500}');
        }
    }
    let sep = Paragraph::new(line).style(
        Style::default()
            .fg(app.theme.border)
            .bg(app.theme.background),
    );
    frame.render_widget(sep, area);
}
