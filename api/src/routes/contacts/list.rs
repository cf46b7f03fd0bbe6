use actix_web::{web, HttpResponse};

use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::middleware::validation::ContactQuery;
use crate::state::AppState;

/// Handler for GET /api/contacts?page=1&limit=20&favorite=true
///
/// ## Success (200 OK)
/// ```json
/// {
///     "data": [{ "id": "...", "name": "Kate", "email": "kate@mail.com", "phone": "123", "favorite": true }],
///     "page": 1,
///     "limit": 20,
///     "total": 1,
///     "total_pages": 1,
///     "has_next": false,
///     "has_prev": false
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Wrong query field
pub async fn list_contacts(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: ContactQuery,
) -> Result<HttpResponse, ApiError> {
    let page = state
        .contact_service
        .list(auth.user_id(), query.0)
        .await?;

    Ok(HttpResponse::Ok().json(page))
}
