use chrono::Local;

use crate::model::filter::Filter;
use crate::model::task::Task;

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Add a new task to the front of the list. Input is trimmed first; blank
/// input is a no-op. Returns the assigned id.
pub fn add(tasks: &mut Vec<Task>, text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let id = next_id(tasks);
    tasks.insert(0, Task::new(id, text.to_string(), created_stamp()));
    Some(id)
}

/// Flip the completion state of the task with the given id.
/// Returns false (no-op) if no task matches.
pub fn toggle(tasks: &mut [Task], id: i64) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.done = !task.done;
            true
        }
        None => false,
    }
}

/// Remove the task with the given id. Returns false (no-op) if absent.
pub fn delete(tasks: &mut Vec<Task>, id: i64) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}

/// Remove every completed task, preserving the relative order of the rest.
/// Returns the number of tasks removed (0 means the list was untouched).
pub fn clear_completed(tasks: &mut Vec<Task>) -> usize {
    let before = tasks.len();
    tasks.retain(|t| !t.done);
    before - tasks.len()
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// The tasks visible under a filter, in list order.
pub fn visible(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.accepts(t)).collect()
}

/// Count of open tasks over the entire list.
pub fn remaining_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.done).count()
}

/// Count of completed tasks over the entire list.
pub fn done_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.done).count()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Next task id: millisecond-timestamp seeded, but strictly greater than
/// every existing id so back-to-back adds within one millisecond still get
/// distinct, increasing ids.
fn next_id(tasks: &[Task]) -> i64 {
    let now = Local::now().timestamp_millis();
    let max = tasks.iter().map(|t| t.id).max().unwrap_or(0);
    now.max(max + 1)
}

fn created_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
