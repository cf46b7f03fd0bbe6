use actix_web::{web, HttpResponse};

use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::middleware::validation::ValidatedFavorite;
use crate::state::AppState;

use super::contact_id;

/// Handler for PATCH /api/contacts/{id}/favorite
///
/// # Request Body
///
/// ```json
/// { "favorite": true }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing field favorite
/// - 404 Not Found: no such contact for this user
pub async fn update_favorite(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    body: ValidatedFavorite,
) -> Result<HttpResponse, ApiError> {
    let id = contact_id(&path)?;
    let contact = state
        .contact_service
        .update_favorite(auth.user_id(), id, body.0)
        .await?;

    Ok(HttpResponse::Ok().json(contact))
}
