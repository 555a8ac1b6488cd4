pub mod auth;
pub mod organizations;

use actix_web::web;

use crate::models::dashboard::DashboardStore;

/// Configure API v1 routes.
///
/// Generic over the dashboard query port so tests can mount the same surface
/// over a fixture store.
pub fn configure<S: DashboardStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/organizations")
            .route("/dashboard", web::get().to(organizations::dashboard::<S>)),
    );
    cfg.service(web::scope("/auth").route("/me", web::get().to(auth::me)));
}
