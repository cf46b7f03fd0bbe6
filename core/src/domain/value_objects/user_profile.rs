//! Public view of a user and the result of a successful login.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Subscription, User};

/// `{email, subscription}` pair returned by most user endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub subscription: Subscription,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            subscription: user.subscription,
        }
    }
}

/// Session token together with the profile it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserProfile,
}
