use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::Client;
use once_cell::sync::Lazy;
use std::env;
use tracing::info;

static FALLBACK_URI: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
});

/// Development fallback URI, used when no config/env provides one.
pub fn fallback_uri() -> &'static str {
    FALLBACK_URI.as_str()
}

/// Build a client pinned to the Stable API (v1, strict, deprecation errors).
pub async fn connect(uri: &str) -> anyhow::Result<Client> {
    let mut options = ClientOptions::parse(uri).await?;
    options.server_api = Some(
        ServerApi::builder()
            .version(ServerApiVersion::V1)
            .strict(true)
            .deprecation_errors(true)
            .build(),
    );
    let client = Client::with_options(options)?;
    Ok(client)
}

/// Liveness check against the store's admin interface.
pub async fn ping(client: &Client) -> anyhow::Result<()> {
    client.database("admin").run_command(doc! { "ping": 1 }).await?;
    info!(event = "store_ping", "connected to MongoDB deployment");
    Ok(())
}
