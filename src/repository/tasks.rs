use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{ToDoTask, ToDoTaskInput};
use crate::repository::Repository;

const TASK_COLUMNS: &str = "id, description, done, due_date, created_at, updated_at, user_id";

/// Postgres-backed repository for [`ToDoTask`] entities.
#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for TaskRepository {
    type Entity = ToDoTask;
    type Input = ToDoTaskInput;

    async fn create(&self, owner_id: i32, input: ToDoTaskInput) -> Result<ToDoTask, AppError> {
        let task = ToDoTask::new(input, owner_id);

        let result = sqlx::query_as::<_, ToDoTask>(&format!(
            "INSERT INTO todo_tasks (id, description, done, due_date, created_at, updated_at, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(task.id)
        .bind(task.description)
        .bind(task.done)
        .bind(task.due_date)
        .bind(task.created_at)
        .bind(task.updated_at)
        .bind(task.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn find_by_id(&self, owner_id: i32, id: Uuid) -> Result<ToDoTask, AppError> {
        let task = sqlx::query_as::<_, ToDoTask>(&format!(
            "SELECT {} FROM todo_tasks WHERE id = $1 AND user_id = $2",
            TASK_COLUMNS
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        task.ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    async fn list(&self, owner_id: i32) -> Result<Vec<ToDoTask>, AppError> {
        let tasks = sqlx::query_as::<_, ToDoTask>(&format!(
            "SELECT {} FROM todo_tasks WHERE user_id = $1 ORDER BY created_at DESC",
            TASK_COLUMNS
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn update(
        &self,
        owner_id: i32,
        id: Uuid,
        input: ToDoTaskInput,
    ) -> Result<ToDoTask, AppError> {
        let task = sqlx::query_as::<_, ToDoTask>(&format!(
            "UPDATE todo_tasks
             SET description = $1, done = $2, due_date = $3, updated_at = NOW()
             WHERE id = $4 AND user_id = $5
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(input.description)
        .bind(input.done)
        .bind(input.due_date)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        task.ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    async fn delete(&self, owner_id: i32, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM todo_tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Task not found".into()));
        }

        Ok(())
    }
}
