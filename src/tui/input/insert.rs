use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Submit. Blank input is rejected silently and the buffer stays.
        (_, KeyCode::Enter) => app.submit_input(),

        // Leave insert mode, dropping whatever was typed
        (_, KeyCode::Esc) => {
            app.input_buffer.clear();
            app.input_cursor = 0;
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_buffer.replace_range(prev..app.input_cursor, "");
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_buffer.replace_range(app.input_cursor..next, "");
            }
        }

        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_cursor = next;
            }
        }
        (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
            app.input_cursor = 0;
        }
        (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
            app.input_cursor = app.input_buffer.len();
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            if !c.is_control() {
                app.input_buffer.insert(app.input_cursor, c);
                app.input_cursor += c.len_utf8();
            }
        }

        _ => {}
    }
}
