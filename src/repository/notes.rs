use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Note, NoteInput};
use crate::repository::Repository;

const NOTE_COLUMNS: &str = "id, title, body, created_at, updated_at, user_id";

/// Postgres-backed repository for [`Note`] entities.
#[derive(Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for NoteRepository {
    type Entity = Note;
    type Input = NoteInput;

    async fn create(&self, owner_id: i32, input: NoteInput) -> Result<Note, AppError> {
        let note = Note::new(input, owner_id);

        let result = sqlx::query_as::<_, Note>(&format!(
            "INSERT INTO notes (id, title, body, created_at, updated_at, user_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            NOTE_COLUMNS
        ))
        .bind(note.id)
        .bind(note.title)
        .bind(note.body)
        .bind(note.created_at)
        .bind(note.updated_at)
        .bind(note.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn find_by_id(&self, owner_id: i32, id: Uuid) -> Result<Note, AppError> {
        let note = sqlx::query_as::<_, Note>(&format!(
            "SELECT {} FROM notes WHERE id = $1 AND user_id = $2",
            NOTE_COLUMNS
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        note.ok_or_else(|| AppError::NotFound("Note not found".into()))
    }

    async fn list(&self, owner_id: i32) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>(&format!(
            "SELECT {} FROM notes WHERE user_id = $1 ORDER BY created_at DESC",
            NOTE_COLUMNS
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    async fn update(&self, owner_id: i32, id: Uuid, input: NoteInput) -> Result<Note, AppError> {
        let note = sqlx::query_as::<_, Note>(&format!(
            "UPDATE notes
             SET title = $1, body = $2, updated_at = NOW()
             WHERE id = $3 AND user_id = $4
             RETURNING {}",
            NOTE_COLUMNS
        ))
        .bind(input.title)
        .bind(input.body)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        note.ok_or_else(|| AppError::NotFound("Note not found".into()))
    }

    async fn delete(&self, owner_id: i32, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Note not found".into()));
        }

        Ok(())
    }
}
