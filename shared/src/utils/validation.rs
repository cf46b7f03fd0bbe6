//! Common validation and masking utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters accepted in a contact phone number
pub static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\-()+ ]+$").expect("valid phone regex"));

/// E-mail address whose domain has at least two dot-separated segments
pub static EMAIL_DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("valid email domain regex")
});

/// Lower-case and trim an e-mail address for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Parse a boolean that may arrive as JSON bool text or a query value
pub fn parse_bool_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Mask an e-mail address for logging, keeping the first character and the domain
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        None => String::from("***"),
    }
}

/// Mask a secret (token, API key) for logging
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return String::from("********");
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{}…", prefix)
}

/// Mask the last path segment of a link, where one-time tokens travel
pub fn mask_link_token(link: &str) -> String {
    match link.rsplit_once('/') {
        Some((base, token)) if !token.is_empty() => format!("{}/{}", base, mask_secret(token)),
        _ => mask_secret(link),
    }
}
