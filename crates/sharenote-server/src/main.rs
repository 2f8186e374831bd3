use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use sharenote_api::AppStateInner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sharenote=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let jwt_secret = std::env::var("SHARENOTE_JWT_SECRET").unwrap_or_else(|_| {
        warn!("SHARENOTE_JWT_SECRET not set, using the dev secret");
        "dev-secret-change-me".into()
    });
    let db_path = std::env::var("SHARENOTE_DB_PATH").unwrap_or_else(|_| "sharenote.db".into());
    let host = std::env::var("SHARENOTE_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("SHARENOTE_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // Init database
    let db = sharenote_db::Database::open(&PathBuf::from(&db_path))?;

    // Shared state
    let state = Arc::new(AppStateInner { db, jwt_secret });

    let app = sharenote_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Sharenote server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
