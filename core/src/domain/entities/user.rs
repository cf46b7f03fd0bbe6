//! User entity representing a registered account owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::subscription::Subscription;

/// A write to one aspect of a stored user
///
/// Repositories apply each change to the current row, so concurrent
/// requests never write back a stale copy of the other columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserChange {
    /// E-mail confirmed; the verification token is consumed
    Verified,
    /// New session token, replacing any previous one
    SessionStarted(String),
    /// Clear the session, only if it is still this token
    SessionEnded(String),
    Subscription(Subscription),
    AvatarUrl(String),
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login e-mail, stored lower-cased and trimmed
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Current subscription tier
    pub subscription: Subscription,

    /// JWT of the active session, if any
    #[serde(skip_serializing)]
    pub token: Option<String>,

    /// Public avatar location (Gravatar URL or `avatars/<file>`)
    pub avatar_url: String,

    /// Whether the e-mail address has been confirmed
    pub verify: bool,

    /// Token sent in the verification link; cleared once verified
    #[serde(skip_serializing)]
    pub verification_token: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates an unverified user with a fresh verification token
    pub fn new(email: impl Into<String>, password_hash: String, avatar_url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into().trim().to_lowercase(),
            password_hash,
            subscription: Subscription::default(),
            token: None,
            avatar_url,
            verify: false,
            verification_token: Some(Uuid::new_v4().to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a single-column change; returns false when nothing changed
    pub fn apply(&mut self, change: &UserChange) -> bool {
        match change {
            UserChange::Verified => {
                self.verify = true;
                self.verification_token = None;
            }
            UserChange::SessionStarted(token) => self.token = Some(token.clone()),
            UserChange::SessionEnded(token) => {
                if !self.holds_session(token) {
                    return false;
                }
                self.token = None;
            }
            UserChange::Subscription(subscription) => self.subscription = *subscription,
            UserChange::AvatarUrl(avatar_url) => self.avatar_url = avatar_url.clone(),
        }
        self.updated_at = Utc::now();
        true
    }

    /// Whether `token` is the session this user currently holds
    pub fn holds_session(&self, token: &str) -> bool {
        self.token.as_deref() == Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(" Kate@Mail.com ", "hash".to_string(), "https://gravatar".to_string())
    }

    #[test]
    fn new_user_is_unverified_starter() {
        let user = user();
        assert_eq!(user.email, "kate@mail.com");
        assert_eq!(user.subscription, Subscription::Starter);
        assert!(!user.verify);
        assert!(user.verification_token.is_some());
        assert!(user.token.is_none());
    }

    #[test]
    fn verification_consumes_token() {
        let mut user = user();
        assert!(user.apply(&UserChange::Verified));
        assert!(user.verify);
        assert!(user.verification_token.is_none());
    }

    #[test]
    fn session_lifecycle() {
        let mut user = user();
        user.apply(&UserChange::SessionStarted("jwt".to_string()));
        assert!(user.holds_session("jwt"));
        assert!(!user.holds_session("other"));

        assert!(!user.apply(&UserChange::SessionEnded("other".to_string())));
        assert!(user.holds_session("jwt"));

        assert!(user.apply(&UserChange::SessionEnded("jwt".to_string())));
        assert!(!user.holds_session("jwt"));
    }

    #[test]
    fn changes_bump_updated_at() {
        let mut user = user();
        let before = user.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(5));
        user.apply(&UserChange::Subscription(Subscription::Business));
        assert!(user.updated_at > before);
        assert_eq!(user.subscription, Subscription::Business);
    }

    #[test]
    fn secrets_are_not_serialized() {
        let mut user = user();
        user.apply(&UserChange::SessionStarted("jwt".to_string()));
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("token").is_none());
        assert!(json.get("verification_token").is_none());
        assert_eq!(json["subscription"], "starter");
    }
}
