use actix_web::{web, HttpResponse};

use pb_shared::MessageResponse;

use crate::handlers::error::ApiError;
use crate::middleware::validation::ValidatedEmail;
use crate::state::AppState;

/// Handler for GET /api/users/verify/{verification_token}
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Verification successful" }
/// ```
///
/// ## Errors
/// - 404 Not Found: User not found
pub async fn verify_email(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    state.auth_service.verify(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Verification successful")))
}

/// Handler for POST /api/users/verify
///
/// Sends the verification mail again.
///
/// # Request Body
///
/// ```json
/// { "email": "kate@mail.com" }
/// ```
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Verification email sent" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing required field email / Verification has already been passed
/// - 401 Unauthorized: User not found
/// - 503 Service Unavailable: the mail provider failed
pub async fn resend_verification(
    state: web::Data<AppState>,
    body: ValidatedEmail,
) -> Result<HttpResponse, ApiError> {
    state.auth_service.resend_verification(&body.0).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Verification email sent")))
}
