use actix_web::{web, HttpResponse};

use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::middleware::validation::SubscriptionBody;
use crate::state::AppState;

/// Handler for PATCH /api/users
///
/// # Request Body
///
/// ```json
/// { "subscription": "pro" }
/// ```
///
/// ## Success (200 OK)
/// ```json
/// { "email": "kate@mail.com", "subscription": "pro" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Subscription value is wrong
/// - 401 Unauthorized: Not authorized
pub async fn change_subscription(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: SubscriptionBody,
) -> Result<HttpResponse, ApiError> {
    let profile = state
        .auth_service
        .change_subscription(&auth.user, &body.0)
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}
