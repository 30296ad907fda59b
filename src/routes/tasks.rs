use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::ToDoTaskInput,
    repository::{Repository, TaskRepository},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Retrieves the authenticated user's to-do tasks, newest first.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `ToDoTask` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For database errors.
#[get("")]
pub async fn list_tasks(
    repo: web::Data<TaskRepository>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let tasks = repo.list(user.0).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new to-do task for the authenticated user.
///
/// ## Request Body:
/// A JSON object matching `ToDoTaskInput`:
/// - `description`: What needs doing (required, 1-500 characters).
/// - `done` (optional): Completion flag, defaults to false.
/// - `due_date` (optional): Due date for the task.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `ToDoTask` object as JSON.
/// - `400 Bad Request`: If validation on `ToDoTaskInput` fails.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For database errors.
#[post("")]
pub async fn create_task(
    repo: web::Data<TaskRepository>,
    task_data: web::Json<ToDoTaskInput>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = repo.create(user.0, task_data.into_inner()).await?;
    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a specific to-do task by its ID.
///
/// ## Responses:
/// - `200 OK`: Returns the `ToDoTask` object as JSON if found and owned by the user.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the task does not exist or is owned by another user.
#[get("/{id}")]
pub async fn get_task(
    repo: web::Data<TaskRepository>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let task = repo.find_by_id(user.0, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Updates an existing to-do task owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `ToDoTask` object as JSON.
/// - `400 Bad Request`: If validation on `ToDoTaskInput` fails.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the task does not exist or is owned by another user.
#[put("/{id}")]
pub async fn update_task(
    repo: web::Data<TaskRepository>,
    task_id: web::Path<Uuid>,
    task_data: web::Json<ToDoTaskInput>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = repo
        .update(user.0, task_id.into_inner(), task_data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a to-do task owned by the authenticated user.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the task does not exist or is owned by another user.
#[delete("/{id}")]
pub async fn delete_task(
    repo: web::Data<TaskRepository>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    repo.delete(user.0, task_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
