use actix_web::{web, HttpResponse};

use crate::handlers::error::ApiError;
use crate::middleware::validation::ValidatedCredentials;
use crate::state::AppState;

/// Handler for POST /api/users/login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJhbGciOiJIUzI1NiIs...",
///     "user": { "email": "kate@mail.com", "subscription": "starter" }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or invalid email/password
/// - 401 Unauthorized: Email or password is wrong / Email is not verified
pub async fn login(
    state: web::Data<AppState>,
    body: ValidatedCredentials,
) -> Result<HttpResponse, ApiError> {
    let outcome = state.auth_service.login(&body.email, &body.password).await?;

    Ok(HttpResponse::Ok().json(outcome))
}
