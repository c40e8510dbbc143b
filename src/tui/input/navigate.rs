use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Filter;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }

        // Cursor movement over the visible list
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            let len = app.visible_tasks().len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor = 0;
        }
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.visible_tasks().len().saturating_sub(1);
        }

        // Row actions
        (_, KeyCode::Char(' ')) => app.toggle_at_cursor(),
        (KeyModifiers::NONE, KeyCode::Char('d')) | (_, KeyCode::Delete) => app.delete_at_cursor(),

        // New task
        (_, KeyCode::Char('a')) | (_, KeyCode::Char('i')) => {
            app.status_message = None;
            app.mode = Mode::Insert;
        }

        // Filter selector
        (_, KeyCode::Char('1')) => app.set_filter(Filter::All),
        (_, KeyCode::Char('2')) => app.set_filter(Filter::Active),
        (_, KeyCode::Char('3')) => app.set_filter(Filter::Done),
        (_, KeyCode::Tab) => app.cycle_filter(),

        // Clear completed (confirmed in the modal)
        (KeyModifiers::NONE, KeyCode::Char('c')) => app.request_clear_completed(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use crate::tui::app::ConfirmAction;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(tasks: Vec<Task>, dir: &TempDir) -> App {
        App::new(tasks, dir.path().join("todos.json"))
    }

    fn sample_tasks() -> Vec<Task> {
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

    #[test]
    fn space_toggles_cursor_task_and_saves() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(sample_tasks(), &dir);

        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        assert!(app.tasks[0].done);

        let on_disk = crate::io::store::load(&app.data_path).unwrap();
        assert_eq!(on_disk, app.tasks);
    }

    #[test]
    fn delete_removes_cursor_task() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(sample_tasks(), &dir);

        handle_navigate(&mut app, key(KeyCode::Char('j')));
        handle_navigate(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].text, "Call Bob");
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn filter_keys_select_and_tab_cycles() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(sample_tasks(), &dir);

        handle_navigate(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.filter, Filter::Done);
        assert_eq!(app.visible_tasks().len(), 1);

        handle_navigate(&mut app, key(KeyCode::Tab));
        assert_eq!(app.filter, Filter::All);
    }

    #[test]
    fn clear_opens_confirm_only_when_done_tasks_exist() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(sample_tasks(), &dir);

        handle_navigate(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.mode, Mode::Confirm);
        assert_eq!(
            app.confirm,
            Some(ConfirmAction::ClearCompleted { count: 1 })
        );

        // With no completed tasks the key must not prompt at all
        let mut app = app_with(vec![], &dir);
        handle_navigate(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.confirm.is_none());
    }

    #[test]
    fn cursor_stays_inside_visible_list() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(sample_tasks(), &dir);

        for _ in 0..5 {
            handle_navigate(&mut app, key(KeyCode::Char('j')));
        }
        assert_eq!(app.cursor, 1);

        handle_navigate(&mut app, key(KeyCode::Char('k')));
        handle_navigate(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.cursor, 0);
    }
}
