use std::sync::Arc;

use user_records_axum::user_records_router;

mod server;

use server::{init_tracing, shutdown_signal};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("demo-records");

    // Refuse to serve when the store cannot be reached or its schema is wrong
    let store = Arc::new(user_records::init().await?);

    let app = user_records_router(store.clone());

    let addr = std::env::var("USER_RECORDS_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    Ok(())
}
