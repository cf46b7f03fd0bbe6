//! Main authentication service implementation

use std::sync::Arc;

use pb_shared::utils::validation::{mask_email, normalize_email};
use tracing::{info, warn};

use crate::domain::entities::{Subscription, User, UserChange};
use crate::domain::value_objects::{LoginOutcome, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::{hash_password, verify_password};
use crate::services::token::TokenService;

use super::avatar::gravatar_url;
use super::config::AuthServiceConfig;
use super::traits::{AvatarStorageTrait, AvatarUpload, MailServiceTrait};

/// Authentication service for the account lifecycle
pub struct AuthService {
    /// User repository for database operations
    user_repository: Arc<dyn UserRepository>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Sends verification mails
    mail_service: Arc<dyn MailServiceTrait>,
    /// Stores resized avatars
    avatar_storage: Arc<dyn AvatarStorageTrait>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        token_service: Arc<TokenService>,
        mail_service: Arc<dyn MailServiceTrait>,
        avatar_storage: Arc<dyn AvatarStorageTrait>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            mail_service,
            avatar_storage,
            config,
        }
    }

    /// Register a new account and send the verification mail
    ///
    /// A mail delivery failure is logged but does not undo the registration;
    /// the user can ask for the mail again.
    ///
    /// # Errors
    ///
    /// * `AuthError::EmailInUse` - the address is already registered
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<UserProfile> {
        let email = normalize_email(email);

        if self.user_repository.exists_by_email(&email).await? {
            return Err(AuthError::EmailInUse.into());
        }

        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;
        let avatar_url = gravatar_url(&email);
        let user = self
            .user_repository
            .create(User::new(email, password_hash, avatar_url))
            .await?;

        info!(user_id = %user.id, email = %mask_email(&user.email), "User registered");

        if let Err(e) = self.send_verification(&user).await {
            warn!(
                user_id = %user.id,
                error = %e,
                "Verification mail not delivered at registration"
            );
        }

        Ok(UserProfile::from(&user))
    }

    /// Confirm the address that `verification_token` was sent to
    ///
    /// # Errors
    ///
    /// * `AuthError::UserNotFound` - no pending verification with this token
    pub async fn verify(&self, verification_token: &str) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_verification_token(verification_token)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.user_repository
            .apply(user.id, UserChange::Verified)
            .await?;

        info!(user_id = %user.id, "E-mail verified");
        Ok(())
    }

    /// Send the verification mail again
    ///
    /// # Errors
    ///
    /// * `AuthError::UnknownEmail` - no account for this address
    /// * `AuthError::AlreadyVerified` - nothing left to verify
    /// * `AuthError::MailServiceFailure` - the provider rejected the mail
    pub async fn resend_verification(&self, email: &str) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::UnknownEmail)?;

        if user.verify {
            return Err(AuthError::AlreadyVerified.into());
        }

        self.send_verification(&user).await
    }

    /// Check credentials and open a new session
    ///
    /// Checks run in order: account exists, address verified, password matches.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginOutcome> {
        let user = self
            .user_repository
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.verify {
            return Err(AuthError::EmailNotVerified.into());
        }

        if !verify_password(password, &user.password_hash).await? {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.generate_session_token(user.id)?;
        let user = self
            .user_repository
            .apply(user.id, UserChange::SessionStarted(token.clone()))
            .await?;

        info!(user_id = %user.id, "User logged in");
        Ok(LoginOutcome {
            token,
            user: UserProfile::from(&user),
        })
    }

    /// Resolve a bearer token to its user
    ///
    /// The token must verify and must still be the session stored on the user,
    /// so tokens issued before a logout or a newer login are refused.
    pub async fn authenticate(&self, token: &str) -> DomainResult<User> {
        let claims = self
            .token_service
            .verify_session_token(token)
            .map_err(|_| AuthError::NotAuthorized)?;
        let user_id = claims.user_id().map_err(|_| AuthError::NotAuthorized)?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::NotAuthorized)?;

        if !user.holds_session(token) {
            return Err(AuthError::NotAuthorized.into());
        }

        Ok(user)
    }

    /// End the session opened with `token`; a newer session is left alone
    pub async fn logout(&self, user: &User, token: &str) -> DomainResult<()> {
        self.user_repository
            .apply(user.id, UserChange::SessionEnded(token.to_string()))
            .await?;
        info!(user_id = %user.id, "User logged out");
        Ok(())
    }

    pub fn current(&self, user: &User) -> UserProfile {
        UserProfile::from(user)
    }

    /// Move the user to another subscription tier
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidSubscription` - `value` is not a known tier
    pub async fn change_subscription(&self, user: &User, value: &str) -> DomainResult<UserProfile> {
        let subscription: Subscription =
            value.parse().map_err(|_| AuthError::InvalidSubscription)?;

        let user = self
            .user_repository
            .apply(user.id, UserChange::Subscription(subscription))
            .await?;

        Ok(UserProfile::from(&user))
    }

    /// Replace the avatar with an uploaded image; without an upload the
    /// current URL is kept. Returns the resulting avatar URL.
    pub async fn change_avatar(
        &self,
        user: &User,
        upload: Option<AvatarUpload>,
    ) -> DomainResult<String> {
        let Some(upload) = upload else {
            return Ok(user.avatar_url.clone());
        };

        let avatar_url = self.avatar_storage.store_avatar(user.id, upload).await?;
        let user = self
            .user_repository
            .apply(user.id, UserChange::AvatarUrl(avatar_url))
            .await?;
        Ok(user.avatar_url)
    }

    async fn send_verification(&self, user: &User) -> DomainResult<()> {
        let token = user
            .verification_token
            .as_deref()
            .ok_or(AuthError::AlreadyVerified)?;
        let link = self.config.verification_link(token);

        match self
            .mail_service
            .send_verification_email(&user.email, &link)
            .await
        {
            Ok(message_id) => {
                info!(
                    user_id = %user.id,
                    provider = self.mail_service.provider_name(),
                    message_id = %message_id,
                    "Verification mail sent"
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    user_id = %user.id,
                    provider = self.mail_service.provider_name(),
                    error = %e,
                    "Verification mail failed"
                );
                Err(DomainError::Auth(AuthError::MailServiceFailure))
            }
        }
    }
}
