//! Default avatar for new accounts

use sha2::{Digest, Sha256};

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

/// Gravatar identicon URL for an e-mail address
pub fn gravatar_url(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.trim().to_lowercase().as_bytes());
    format!("{}/{:x}?d=identicon", GRAVATAR_BASE, hasher.finalize())
}
