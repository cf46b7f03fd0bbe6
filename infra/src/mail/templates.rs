//! Mail templates

use serde::Serialize;

/// A rendered outbound message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Build the address verification mail for `to`
pub fn verification_email(to: &str, verification_link: &str) -> EmailMessage {
    EmailMessage {
        to: to.to_string(),
        subject: "Verify email".to_string(),
        html: format!(
            r#"<a target="_blank" href="{}">Click verify email</a>"#,
            verification_link
        ),
        text: format!("Open this link to verify your email: {}", verification_link),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_email_embeds_link() {
        let link = "http://localhost:3000/api/users/verify/abc";
        let message = verification_email("kate@mail.com", link);

        assert_eq!(message.to, "kate@mail.com");
        assert_eq!(message.subject, "Verify email");
        assert!(message.html.contains(link));
        assert!(message.html.contains("Click verify email"));
        assert!(message.text.ends_with(link));
    }
}
