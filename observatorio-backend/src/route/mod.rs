#![allow(clippy::unused_async)]

pub mod statistics;
pub mod system;
pub mod water_body;

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config;
use crate::database::Database;

pub fn build(config: &config::Server, database: Database) -> Router {
    let router = Router::new()
        .route(system::root::URL, get(system::root::json_handler))
        .route(system::health::URL, get(system::health::json_handler))
        .route(
            water_body::list::URL,
            get(water_body::list::json_handler).post(water_body::create::json_handler),
        )
        .route(water_body::get::URL, get(water_body::get::json_handler))
        .route(water_body::by_kind::URL, get(water_body::by_kind::json_handler))
        .route(water_body::search::URL, get(water_body::search::json_handler))
        .route(statistics::URL, get(statistics::json_handler))
        .with_state(database);

    let router = if let Some(frontend_dir) = &config.frontend_dir {
        router.fallback_service(ServeDir::new(frontend_dir))
    } else {
        router
    };

    router.layer(cors(&config.cors_origins)).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<Body>| {
            tracing::info_span!(
                "request", method = %request.method(), uri = %request.uri()
            )
        },
    ))
}

fn cors(origins: &[String]) -> CorsLayer {
    let origins = origins.iter().filter_map(|origin| {
        HeaderValue::from_str(origin)
            .inspect_err(|_| tracing::warn!(origin, "ignoring invalid cors origin"))
            .ok()
    });
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
