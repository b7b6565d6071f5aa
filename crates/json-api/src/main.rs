//! Ad Booking JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use adbooking_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod ad_spaces;
mod booking_requests;
mod config;
mod cors;
mod extensions;
mod healthcheck;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Ad booking JSON API server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(source) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "tracing subscriber failed to install, stderr is the only sink left"
        )]
        {
            eprintln!("Observability error: {source}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        config.database.max_connections,
        config.database.run_migrations,
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let cors_handler = match cors::handler(&config.server.cors_allowed_origin) {
        Ok(handler) => handler,
        Err(source) => {
            error!("invalid CORS allowed origin: {source}");

            process::exit(1);
        }
    };

    let listener = TcpListener::new(addr).bind().await;

    let api = router::app_router();

    let doc = OpenApi::new("Ad Booking API", env!("CARGO_PKG_VERSION"))
        .merge_router(&api)
        .merge_router(&Router::with_path("healthcheck").get(healthcheck::handler));

    let mut router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(api)
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    if config.observability.metrics_enabled {
        router = router.push(Router::with_path("metrics").get(observability::metrics_handler));
    }

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    let service = Service::new(router).hoop(cors_handler);

    server.serve(service).await;

    info!("server stopped");
}
