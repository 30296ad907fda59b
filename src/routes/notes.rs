use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::NoteInput,
    repository::{NoteRepository, Repository},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Retrieves the authenticated user's notes, newest first.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Note` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For database errors.
#[get("")]
pub async fn list_notes(
    repo: web::Data<NoteRepository>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let notes = repo.list(user.0).await?;
    Ok(HttpResponse::Ok().json(notes))
}

/// Creates a new note for the authenticated user.
///
/// ## Request Body:
/// A JSON object matching `NoteInput`:
/// - `title`: The note title (required, 1-200 characters).
/// - `body`: The note body (up to 10000 characters).
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Note` object as JSON.
/// - `400 Bad Request`: If validation on `NoteInput` fails.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For database errors.
#[post("")]
pub async fn create_note(
    repo: web::Data<NoteRepository>,
    note_data: web::Json<NoteInput>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    note_data.validate()?;

    let note = repo.create(user.0, note_data.into_inner()).await?;
    Ok(HttpResponse::Created().json(note))
}

/// Retrieves a specific note by its ID.
///
/// ## Responses:
/// - `200 OK`: Returns the `Note` object as JSON if found and owned by the user.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the note does not exist or is owned by another user.
#[get("/{id}")]
pub async fn get_note(
    repo: web::Data<NoteRepository>,
    note_id: web::Path<Uuid>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let note = repo.find_by_id(user.0, note_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(note))
}

/// Updates an existing note owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Note` object as JSON.
/// - `400 Bad Request`: If validation on `NoteInput` fails.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the note does not exist or is owned by another user.
#[put("/{id}")]
pub async fn update_note(
    repo: web::Data<NoteRepository>,
    note_id: web::Path<Uuid>,
    note_data: web::Json<NoteInput>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    note_data.validate()?;

    let note = repo
        .update(user.0, note_id.into_inner(), note_data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(note))
}

/// Deletes a note owned by the authenticated user.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the note does not exist or is owned by another user.
#[delete("/{id}")]
pub async fn delete_note(
    repo: web::Data<NoteRepository>,
    note_id: web::Path<Uuid>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    repo.delete(user.0, note_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
