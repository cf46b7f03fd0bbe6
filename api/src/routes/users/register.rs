use actix_web::{web, HttpResponse};

use crate::dto::RegisterResponse;
use crate::handlers::error::ApiError;
use crate::middleware::validation::ValidatedCredentials;
use crate::state::AppState;

/// Handler for POST /api/users/register
///
/// # Request Body
///
/// ```json
/// {
///     "email": "kate@mail.com",
///     "password": "secret1"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "user": { "email": "kate@mail.com", "subscription": "starter" }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or invalid email/password
/// - 409 Conflict: Email in use
pub async fn register(
    state: web::Data<AppState>,
    body: ValidatedCredentials,
) -> Result<HttpResponse, ApiError> {
    let user = state
        .auth_service
        .register(&body.email, &body.password)
        .await?;

    Ok(HttpResponse::Created().json(RegisterResponse { user }))
}
