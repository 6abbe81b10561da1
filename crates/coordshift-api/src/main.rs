use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use coordshift_core::geocode::AmapGeocoder;
use coordshift_core::ports::ReverseGeocoder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coordshift_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coordshift_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;
    let default_from = config.converter.default_from.value;
    let default_to = config.converter.default_to.value;

    tracing::info!(
        port = config.port,
        default_from = %default_from,
        default_to = %default_to,
        "Starting coordshift API server"
    );

    let geocoder: Option<Arc<dyn ReverseGeocoder>> = if config.has_geocoder() {
        match AmapGeocoder::from_config(&config.converter) {
            Ok(geocoder) => {
                tracing::info!(
                    base_url = %config.converter.amap_base_url.value,
                    "AMap reverse geocoding enabled"
                );
                let geocoder: Arc<dyn ReverseGeocoder> = Arc::new(geocoder);
                Some(geocoder)
            }
            Err(e) => {
                tracing::warn!("Reverse geocoding disabled: {}", e);
                None
            }
        }
    } else {
        tracing::info!("Reverse geocoding disabled (set AMAP_KEY or COORDSHIFT_AMAP_KEY)");
        None
    };

    let state = Arc::new(AppState::new(geocoder, default_from, default_to));

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid COORDSHIFT_CORS_ORIGIN: {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
