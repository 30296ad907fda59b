use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Input structure for creating or updating a to-do task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ToDoTaskInput {
    /// What needs doing. Must be between 1 and 500 characters.
    #[validate(length(min = 1, max = 500))]
    pub description: String,

    /// Completion flag. Defaults to false when omitted on creation.
    #[serde(default)]
    pub done: bool,

    /// Optional due date for the task.
    pub due_date: Option<DateTime<Utc>>,
}

/// A to-do task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct ToDoTask {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    pub description: String,
    pub done: bool,
    pub due_date: Option<DateTime<Utc>>,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the task.
    pub updated_at: DateTime<Utc>,
    /// Identifier of the user who owns the task.
    pub user_id: i32,
}

impl ToDoTask {
    /// Creates a new `ToDoTask` from input and the owner's `user_id`.
    pub fn new(input: ToDoTaskInput, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            description: input.description,
            done: input.done,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_task_creation() {
        let input = ToDoTaskInput {
            description: "Water the plants".to_string(),
            done: false,
            due_date: Some(Utc::now()),
        };

        let task = ToDoTask::new(input, 1);
        assert_eq!(task.description, "Water the plants");
        assert!(!task.done);
        assert_eq!(task.user_id, 1);
        assert!(task.due_date.is_some());
    }

    #[test]
    fn test_done_defaults_to_false() {
        let input: ToDoTaskInput =
            serde_json::from_value(serde_json::json!({ "description": "Call the bank" })).unwrap();
        assert!(!input.done);
        assert!(input.due_date.is_none());
    }

    #[test]
    fn test_task_input_validation() {
        let valid_input = ToDoTaskInput {
            description: "Valid task".to_string(),
            done: true,
            due_date: None,
        };
        assert!(valid_input.validate().is_ok());

        let empty_description = ToDoTaskInput {
            description: "".to_string(),
            done: false,
            due_date: None,
        };
        assert!(empty_description.validate().is_err());

        let long_description = ToDoTaskInput {
            description: "a".repeat(501),
            done: false,
            due_date: None,
        };
        assert!(long_description.validate().is_err());
    }
}
