use std::sync::Arc;

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use coach3m_backend::config::AppConfig;
use coach3m_backend::routes;
use coach3m_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("coach3m_backend=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState::new(config));

    // Same CORS surface as the public site expects: any origin, JSON posts.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("coach3m backend listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
