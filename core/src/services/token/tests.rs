use uuid::Uuid;

use super::{TokenService, TokenServiceConfig};
use crate::domain::entities::Claims;
use crate::errors::{DomainError, TokenError};

fn config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        issuer: "phonebook".to_string(),
        token_expiry_seconds: 3600,
    }
}

#[test]
fn generated_token_verifies() {
    let service = TokenService::new(config());
    let user_id = Uuid::new_v4();

    let token = service.generate_session_token(user_id).unwrap();
    let claims = service.verify_session_token(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.iss, "phonebook");
}

#[test]
fn tokens_for_same_user_differ() {
    let service = TokenService::new(config());
    let user_id = Uuid::new_v4();
    let a = service.generate_session_token(user_id).unwrap();
    let b = service.generate_session_token(user_id).unwrap();
    assert_ne!(a, b);
}

#[test]
fn expired_token_rejected() {
    let service = TokenService::new(config());
    let claims = Claims::new_session(Uuid::new_v4(), "phonebook", -600);
    let token = service.encode_jwt(&claims).unwrap();

    assert_eq!(
        service.verify_session_token(&token).unwrap_err(),
        DomainError::Token(TokenError::TokenExpired)
    );
}

#[test]
fn token_from_other_secret_rejected() {
    let service = TokenService::new(config());
    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "another-secret".to_string(),
        ..config()
    });
    let token = other.generate_session_token(Uuid::new_v4()).unwrap();

    assert_eq!(
        service.verify_session_token(&token).unwrap_err(),
        DomainError::Token(TokenError::InvalidSignature)
    );
}

#[test]
fn wrong_issuer_rejected() {
    let service = TokenService::new(config());
    let foreign = TokenService::new(TokenServiceConfig {
        issuer: "someone-else".to_string(),
        ..config()
    });
    let token = foreign.generate_session_token(Uuid::new_v4()).unwrap();
    assert!(service.verify_session_token(&token).is_err());
}

#[test]
fn garbage_is_invalid_format() {
    let service = TokenService::new(config());
    assert_eq!(
        service.verify_session_token("not-a-jwt").unwrap_err(),
        DomainError::Token(TokenError::InvalidTokenFormat)
    );
}
