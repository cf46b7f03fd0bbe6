use actix_web::{web, HttpResponse};

use pb_shared::MessageResponse;

use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

use super::contact_id;

/// Handler for DELETE /api/contacts/{id}
///
/// ## Success (200 OK)
/// ```json
/// { "message": "contact deleted" }
/// ```
///
/// ## Errors
/// - 404 Not Found: no such contact for this user
pub async fn remove_contact(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = contact_id(&path)?;
    state.contact_service.remove(auth.user_id(), id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("contact deleted")))
}
