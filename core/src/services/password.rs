//! bcrypt password hashing on the blocking pool

use crate::errors::{DomainError, DomainResult};

/// bcrypt cost used when none is configured
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Hash `plain` with bcrypt at the given cost
pub async fn hash_password(plain: &str, cost: u32) -> DomainResult<String> {
    let plain = plain.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
        .await
        .map_err(|e| DomainError::internal(format!("password hashing task failed: {}", e)))?
        .map_err(|e| DomainError::internal(format!("password hashing failed: {}", e)))
}

/// Check `plain` against a stored bcrypt hash; a malformed hash never matches
pub async fn verify_password(plain: &str, hash: &str) -> DomainResult<bool> {
    let plain = plain.to_owned();
    let hash = hash.to_owned();
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash))
        .await
        .map_err(|e| DomainError::internal(format!("password check task failed: {}", e)))?;

    Ok(verified.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Lowest cost bcrypt accepts, keeps the tests fast
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn hash_then_verify() {
        let hash = hash_password("qwerty123", TEST_COST).await.unwrap();
        assert_ne!(hash, "qwerty123");
        assert!(verify_password("qwerty123", &hash).await.unwrap());
        assert!(!verify_password("qwerty124", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_hash_does_not_match() {
        assert!(!verify_password("qwerty123", "not-a-hash").await.unwrap());
    }
}
