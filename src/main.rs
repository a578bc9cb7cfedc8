use axum::{routing::get, Router};
use gipit_backend::{
    config::{get_config, init_config, LogFormat},
    database::{pool::create_pool, postgres::PgStore},
    middleware::auth::{require_token, JwtVerifier},
    routes, AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }

    let pool = create_pool(config).await?;
    let store = Arc::new(PgStore::new(pool));
    let verifier = Arc::new(JwtVerifier::new(&config.jwt_secret));
    let app_state = AppState::new(store, verifier);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let dashboard_api = Router::new().route(
        "/dashboard/stats",
        get(routes::dashboard::get_dashboard_stats),
    );

    let pre_invoice_api = Router::new()
        .route(
            "/preinvoices",
            get(routes::pre_invoice::list_pre_invoices).post(routes::pre_invoice::create_pre_invoice),
        )
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            require_token,
        ));

    let app = base_routes
        .merge(dashboard_api)
        .merge(pre_invoice_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
