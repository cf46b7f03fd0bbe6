use actix_web::{web, HttpResponse};

use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::middleware::validation::ValidatedContactPatch;
use crate::state::AppState;

use super::contact_id;

/// Handler for PUT /api/contacts/{id}
///
/// Replaces the fields present in the body and keeps the rest.
///
/// ## Errors
/// - 400 Bad Request: missing fields
/// - 404 Not Found: no such contact for this user
pub async fn update_contact(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    body: ValidatedContactPatch,
) -> Result<HttpResponse, ApiError> {
    let id = contact_id(&path)?;
    let contact = state
        .contact_service
        .update(auth.user_id(), id, body.0)
        .await?;

    Ok(HttpResponse::Ok().json(contact))
}
