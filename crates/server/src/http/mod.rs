use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{AppState, config::ServerConfig, routes};

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new().merge(routes::tasks::router());

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/", get(routes::frontend::serve_frontend_root))
        .route("/{*path}", get(routes::frontend::serve_frontend))
        .nest("/api", api_routes)
        .layer(cors_layer(config))
        .with_state(state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
