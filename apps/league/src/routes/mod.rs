use actix_web::web;

pub mod dashboard;
pub mod games;
pub mod health;
pub mod players;
pub mod reports;

/// Register every route. `main.rs` and the integration tests share this so
/// both see the same paths; middleware is wrapped by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Dashboard: /dashboard/**
    cfg.service(
        web::scope("/dashboard")
            .configure(dashboard::configure_routes)
            .service(web::scope("/players").configure(players::configure_routes))
            .service(web::scope("/games").configure(games::configure_routes))
            .service(web::scope("/reports").configure(reports::configure_routes)),
    );
}
