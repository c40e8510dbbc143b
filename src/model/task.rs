use serde::{Deserialize, Serialize};

/// A single to-do item. The serialized shape is exactly these four fields,
/// matching the on-disk `todos.json` records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, strictly increasing (millisecond-timestamp seeded).
    pub id: i64,
    /// Trimmed, never empty.
    pub text: String,
    /// Completion state.
    pub done: bool,
    /// Human-readable creation stamp, display-only.
    pub created: String,
}

impl Task {
    /// Create a new open task.
    pub fn new(id: i64, text: String, created: String) -> Self {
        Task {
            id,
            text,
            done: false,
            created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_exactly_the_four_fields() {
        let task = Task::new(1715000000000, "Buy milk".into(), "2024-05-06 14:13".into());
        let json = serde_json::to_value(&task).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["created", "done", "id", "text"]);
        assert_eq!(obj["done"], serde_json::Value::Bool(false));
    }

    #[test]
    fn deserializes_ignoring_key_order() {
        let a: Task = serde_json::from_str(
            r#"{"id":1,"text":"a","done":true,"created":"2024-05-06 14:13"}"#,
        )
        .unwrap();
        let b: Task = serde_json::from_str(
            r#"{"created":"2024-05-06 14:13","done":true,"text":"a","id":1}"#,
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
