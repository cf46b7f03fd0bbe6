use actix_web::{web, HttpResponse};

use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/users/current
///
/// ## Success (200 OK)
/// ```json
/// { "email": "kate@mail.com", "subscription": "starter" }
/// ```
pub async fn current(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(state.auth_service.current(&auth.user))
}
