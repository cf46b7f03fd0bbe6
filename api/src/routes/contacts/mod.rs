//! Contact route handlers
//!
//! Every endpoint under `/api/contacts` requires a session and only sees
//! the caller's own contacts.

use actix_web::web;
use uuid::Uuid;

use pb_core::errors::DomainError;

use crate::handlers::error::ApiError;
use crate::middleware::auth::JwtAuth;

pub mod create;
pub mod delete;
pub mod favorite;
pub mod get;
pub mod list;
pub mod update;

/// Register the `/api/contacts` scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/contacts")
            .route("", web::get().to(list::list_contacts))
            .route("", web::post().to(create::add_contact))
            .route("/{id}", web::get().to(get::get_contact))
            .route("/{id}", web::delete().to(delete::remove_contact))
            .route("/{id}", web::put().to(update::update_contact))
            .route("/{id}/favorite", web::patch().to(favorite::update_favorite))
            .wrap(JwtAuth),
    );
}

/// A path id that is not a UUID cannot name an existing contact
pub(crate) fn contact_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::not_found(format!("contact {}", raw)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_id_is_not_found() {
        let id = Uuid::new_v4();
        assert_eq!(contact_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            contact_id("64b7f0c2e1"),
            Err(ApiError::Domain(DomainError::NotFound { .. }))
        ));
    }
}
