use crate::{
    auth::{LoginRequest, RegisterRequest},
    error::AppError,
    identity::IdentityService,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns an authentication token.
///
/// ## Responses:
/// - `201 Created`: Returns `{token, user_id}` as JSON.
/// - `400 Bad Request`: If the payload fails validation.
/// - `409 Conflict`: If the username is already taken.
#[post("/register")]
pub async fn register(
    identity: web::Data<IdentityService>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let response = identity
        .register(&register_data.username, &register_data.password)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// Login user
///
/// Authenticates a user and returns an authentication token.
///
/// ## Responses:
/// - `200 OK`: Returns `{token, user_id}` as JSON.
/// - `400 Bad Request`: If the payload fails validation.
/// - `401 Unauthorized`: For an unknown username or wrong password.
#[post("/login")]
pub async fn login(
    identity: web::Data<IdentityService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let response = identity
        .login(&login_data.username, &login_data.password)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
