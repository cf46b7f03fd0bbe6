use actix_web::{web, HttpResponse};

use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for POST /api/users/logout
///
/// Ends the current session; the token stops working immediately.
///
/// ## Success (204 No Content)
///
/// ## Errors
/// - 401 Unauthorized: Not authorized
pub async fn logout(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    state.auth_service.logout(&auth.user, &auth.token).await?;

    Ok(HttpResponse::NoContent().finish())
}
