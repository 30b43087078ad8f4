//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list))
                // Literal segment must be registered before the id matcher
                .route("/archive/dates", web::get().to(posts::archive_dates))
                .route("/{id}", web::get().to(posts::retrieve))
                .route("/{id}/comments", web::get().to(comments::list_for_post)),
        )
        .route("/comments", web::post().to(comments::create));
}
