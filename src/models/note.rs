use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Input structure for creating or updating a note.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NoteInput {
    /// The title of the note. Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Body text of the note. Maximum length of 10000 characters.
    #[validate(length(max = 10000))]
    pub body: String,
}

/// A note entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Unique identifier for the note (UUID v4).
    pub id: Uuid,
    pub title: String,
    pub body: String,
    /// Timestamp of when the note was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the note.
    pub updated_at: DateTime<Utc>,
    /// Identifier of the user who owns the note.
    pub user_id: i32,
}

impl Note {
    /// Creates a new `Note` from `NoteInput` and the owner's `user_id`, with
    /// a fresh UUID and both timestamps set to now.
    pub fn new(input: NoteInput, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            body: input.body,
            created_at: now,
            updated_at: now,
            user_id,
        }
    }
}
