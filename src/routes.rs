//! Route configuration
//!
//! Centralized route setup; each domain (profiles, posts) manages its own
//! routes. Public routes are registered before the auth-wrapped scope.

use crate::handlers;
use crate::middleware::JwtAuthMiddleware;
use actix_web::web;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .configure(routes::profiles::configure)
            .configure(routes::posts::configure),
    );
}

// Sub-modules for each domain
mod routes {
    use super::*;

    pub mod profiles {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/profiles")
                    .route("", web::get().to(handlers::list_profiles))
                    .route("/user/{user_id}", web::get().to(handlers::get_profile_by_user))
                    .route("/github/{username}", web::get().to(handlers::get_github_repos))
                    .service(
                        web::scope("")
                            .wrap(JwtAuthMiddleware)
                            .route("", web::post().to(handlers::upsert_profile))
                            .route("", web::delete().to(handlers::delete_account))
                            .route("/me", web::get().to(handlers::get_own_profile))
                            .route("/experience", web::put().to(handlers::add_experience))
                            .route(
                                "/experience/{entry_id}",
                                web::delete().to(handlers::remove_experience),
                            )
                            .route("/education", web::put().to(handlers::add_education))
                            .route(
                                "/education/{entry_id}",
                                web::delete().to(handlers::remove_education),
                            ),
                    ),
            );
        }
    }

    pub mod posts {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/posts")
                    .wrap(JwtAuthMiddleware)
                    .route("", web::post().to(handlers::create_post))
                    .route("", web::get().to(handlers::list_posts))
                    .route("/{id}", web::get().to(handlers::get_post))
                    .route("/{id}", web::delete().to(handlers::delete_post))
                    .route("/{id}/like", web::put().to(handlers::like_post))
                    .route("/{id}/unlike", web::put().to(handlers::unlike_post))
                    .route("/{id}/comments", web::post().to(handlers::add_comment))
                    .route(
                        "/{id}/comments/{comment_id}",
                        web::delete().to(handlers::delete_comment),
                    ),
            );
        }
    }
}
