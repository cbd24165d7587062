//! Carbon footprint API server.
//!
//! Configuration comes from `CARBON_FOOTPRINT__*` environment variables
//! (and `.env` in development). See [`carbon_footprint::config`].

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use carbon_footprint::adapters::http::{api_router, FootprintAppState};
use carbon_footprint::adapters::InMemoryFootprintRepository;
use carbon_footprint::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let engine = config.engine.build_engine()?;
    tracing::info!(
        category_scale = %engine.category_scale(),
        recommendation_limit = engine.recommendation_limit(),
        custom_factors = config.engine.factors_path.is_some(),
        "footprint engine ready"
    );

    let state = FootprintAppState::new(
        Arc::new(InMemoryFootprintRepository::new()),
        engine,
        config.features.verbose_errors,
    );

    let mut app = api_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(config.server.cors_layer());
    if config.features.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    serve(app, &config.server).await
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn serve(app: Router, server: &ServerConfig) -> Result<(), Box<dyn Error>> {
    let addr = server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?server.environment, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
