use serde::{Deserialize, Serialize};
use validator::Validate;

use pb_core::domain::UserProfile;

/// Body of register and login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 64))]
    pub password: String,
}

/// Body of the verification mail resend
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmailRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarResponse {
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
}
