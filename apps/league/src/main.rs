use actix_web::{web, App, HttpServer};
use db_infra::db::{db_kind_from_env, RuntimeEnv};
use league::config::ServerConfig;
use league::infra::state::build_state;
use league::middleware::{CsrfProtect, RequestTrace, StructuredLogger};
use league::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    let server = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "startup.config_invalid");
            std::process::exit(1);
        }
    };

    let db_kind = match db_kind_from_env() {
        Ok(kind) => kind,
        Err(e) => {
            error!(error = %e, "startup.db_kind_invalid");
            std::process::exit(1);
        }
    };

    // Connects and applies pending migrations before serving
    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(db_kind)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "startup.state_failed");
            std::process::exit(1);
        }
    };

    info!(host = %server.host, port = server.port, "startup.listening");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(CsrfProtect)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
