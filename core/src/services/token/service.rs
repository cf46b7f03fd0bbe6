//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for signing and verifying session JWTs
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs a session token for `user_id`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(TokenError::TokenGenerationFailed)` - Encoding failed
    pub fn generate_session_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = Claims::new_session(
            user_id,
            &self.config.issuer,
            self.config.token_expiry_seconds,
        );
        self.encode_jwt(&claims)
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a session token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is invalid, expired, or malformed
    pub fn verify_session_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::InvalidTokenFormat,
            })?;

        Ok(token_data.claims)
    }
}
