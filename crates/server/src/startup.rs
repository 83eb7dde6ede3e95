use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;
use models::store::Store;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(5002);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Resolve the store URI and database name from configs, falling back to
/// environment/defaults when no config file exists.
fn load_store_target() -> (String, String) {
    let mut database = match configs::load_default() {
        Ok(cfg) => cfg.database,
        Err(_) => configs::DatabaseConfig::default(),
    };
    database.normalize_from_env();
    let uri = database.effective_uri().unwrap_or_else(|| models::db::fallback_uri().to_string());
    (uri, database.db_name)
}

/// Public entry: connect to the store, build the app, run the HTTP server.
/// An unreachable store fails startup instead of serving requests that can
/// only error.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    common::env::ensure_env("static").await?;

    let (uri, db_name) = load_store_target();
    let client = models::db::connect(&uri).await?;
    models::db::ping(&client).await?;

    let store = Store::new(&client.database(&db_name));
    let state = ServerState { store };

    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    let addr = load_bind_addr()?;
    info!(%addr, %db_name, "starting car-doctor backend");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
