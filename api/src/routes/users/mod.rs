//! Account route handlers
//!
//! Registration, e-mail verification, login/logout, profile, subscription
//! and avatar endpoints under `/api/users`.

use actix_web::web;

use crate::middleware::auth::JwtAuth;

pub mod avatar;
pub mod current;
pub mod login;
pub mod logout;
pub mod register;
pub mod subscription;
pub mod verify;

/// Register the `/api/users` scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .route("/register", web::post().to(register::register))
            .route(
                "/verify/{verification_token}",
                web::get().to(verify::verify_email),
            )
            .route("/verify", web::post().to(verify::resend_verification))
            .route("/login", web::post().to(login::login))
            .service(
                web::resource("/logout")
                    .route(web::post().to(logout::logout))
                    .wrap(JwtAuth),
            )
            .service(
                web::resource("/current")
                    .route(web::get().to(current::current))
                    .wrap(JwtAuth),
            )
            .service(
                web::resource("")
                    .route(web::patch().to(subscription::change_subscription))
                    .wrap(JwtAuth),
            )
            .service(
                web::resource("/avatars")
                    .route(web::patch().to(avatar::change_avatar))
                    .wrap(JwtAuth),
            ),
    );
}
