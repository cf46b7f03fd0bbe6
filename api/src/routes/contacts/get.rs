use actix_web::{web, HttpResponse};

use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

use super::contact_id;

/// Handler for GET /api/contacts/{id}
///
/// ## Errors
/// - 404 Not Found: no such contact for this user
pub async fn get_contact(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = contact_id(&path)?;
    let contact = state.contact_service.get(auth.user_id(), id).await?;

    Ok(HttpResponse::Ok().json(contact))
}
