use actix_multipart::{Multipart, MultipartError};
use actix_web::{http::header::CONTENT_TYPE, web, HttpRequest, HttpResponse};
use futures_util::TryStreamExt;

use pb_core::errors::ValidationError;
use pb_core::services::AvatarUpload;

use crate::dto::AvatarResponse;
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Multipart field carrying the image
const AVATAR_FIELD: &str = "avatar";

/// Handler for PATCH /api/users/avatars
///
/// Accepts `multipart/form-data` with the image in the `avatar` field. The
/// image is resized to a square and served from `/avatars/{user_id}.{ext}`.
/// Without a file the current avatar is kept.
///
/// ## Success (200 OK)
/// ```json
/// { "avatarURL": "avatars/0b6f....png" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: the upload is not a readable image
/// - 401 Unauthorized: Not authorized
pub async fn change_avatar(
    req: HttpRequest,
    state: web::Data<AppState>,
    auth: AuthContext,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let upload = if is_multipart(&req) {
        read_avatar(payload, state.storage.max_upload_bytes).await?
    } else {
        None
    };

    let avatar_url = state.auth_service.change_avatar(&auth.user, upload).await?;

    Ok(HttpResponse::Ok().json(AvatarResponse { avatar_url }))
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.to_ascii_lowercase().starts_with("multipart/form-data"))
}

fn invalid_upload(error: MultipartError) -> ApiError {
    ValidationError::InvalidImage {
        reason: error.to_string(),
    }
    .into()
}

/// Collect the `avatar` field, skipping any other parts
async fn read_avatar(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<Option<AvatarUpload>, ApiError> {
    let mut upload = None;

    while let Some(mut field) = payload.try_next().await.map_err(invalid_upload)? {
        let disposition = field.content_disposition();
        if disposition.get_name() != Some(AVATAR_FIELD) || upload.is_some() {
            while field.try_next().await.map_err(invalid_upload)?.is_some() {}
            continue;
        }

        let file_name = disposition.get_filename().map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(invalid_upload)? {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(ValidationError::InvalidImage {
                    reason: format!("file exceeds {} bytes", max_bytes),
                }
                .into());
            }
            bytes.extend_from_slice(&chunk);
        }

        if bytes.is_empty() {
            continue;
        }

        upload = Some(AvatarUpload {
            bytes,
            file_name,
            content_type,
        });
    }

    Ok(upload)
}
