use actix_web::{web, HttpResponse};

use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::middleware::validation::ValidatedContact;
use crate::state::AppState;

/// Handler for POST /api/contacts
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Kate",
///     "email": "kate@mail.com",
///     "phone": "(067) 123-45-67"
/// }
/// ```
///
/// ## Success (201 Created)
/// The stored contact, with `favorite: false`.
///
/// ## Errors
/// - 400 Bad Request: missing required '<key>' field
pub async fn add_contact(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: ValidatedContact,
) -> Result<HttpResponse, ApiError> {
    let contact = state.contact_service.add(auth.user_id(), body.0).await?;

    Ok(HttpResponse::Created().json(contact))
}
