//! Shared application state

use std::sync::Arc;

use pb_core::repositories::{ContactRepository, UserRepository};
use pb_core::services::{
    AuthService, AuthServiceConfig, ContactService, MailServiceTrait, TokenService,
    TokenServiceConfig,
};
use pb_infra::avatar::LocalAvatarStorage;
use pb_infra::database::DatabasePool;
use pb_shared::config::{AppConfig, StorageConfig};

/// Services and settings handed to every request handler
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub contact_service: Arc<ContactService>,
    pub storage: StorageConfig,
    /// Present when running against MySQL
    pub database: Option<DatabasePool>,
}

impl AppState {
    /// Assemble the services over the given repositories and mail provider
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        contact_repository: Arc<dyn ContactRepository>,
        mail_service: Arc<dyn MailServiceTrait>,
        config: &AppConfig,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(
            config.auth.jwt.clone(),
        )));
        let avatar_storage = Arc::new(LocalAvatarStorage::new(&config.storage));
        let auth_config = AuthServiceConfig::new(
            config.server.base_url.clone(),
            config.auth.password.bcrypt_cost,
        );

        let auth_service = AuthService::new(
            user_repository,
            token_service,
            mail_service,
            avatar_storage,
            auth_config,
        );

        Self {
            auth_service: Arc::new(auth_service),
            contact_service: Arc::new(ContactService::new(contact_repository)),
            storage: config.storage.clone(),
            database: None,
        }
    }

    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }

    /// Name of the storage backend, reported by the health endpoint
    pub fn storage_backend(&self) -> &'static str {
        if self.database.is_some() {
            "mysql"
        } else {
            "memory"
        }
    }
}
