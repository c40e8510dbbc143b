use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, ConfirmAction};

/// Render the confirmation modal for a pending destructive action.
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ConfirmAction::ClearCompleted { count }) = &app.confirm else {
        return;
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let hint_style = Style::default().fg(app.theme.subtext).bg(bg);

    let styled_lines = [
        (" Clear completed".to_string(), header_style),
        (String::new(), text_style),
        (
            format!(" Remove {} completed task(s)?", count),
            text_style,
        ),
        (String::new(), text_style),
        (" y confirm    n cancel".to_string(), hint_style),
    ];

    let popup_w: u16 = 36.min(area.width.saturating_sub(2));
    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
