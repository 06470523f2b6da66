pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    routing::{delete, get, post, put},
    Router,
};
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::NamesConfig;
use crate::services::NameStore;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Allah(SWT) 99 Names API",
        description = "API documentation for Allah(SWT) Beautiful Names"
    ),
    paths(
        handlers::health::root,
        handlers::health::health_check_text,
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::names::add_name,
        handlers::names::list_names,
        handlers::names::get_name,
        handlers::names::search_names,
        handlers::names::update_name,
        handlers::names::delete_name,
    ),
    components(schemas(
        dtos::AddNameRequest,
        dtos::UpdateNameRequest,
        dtos::NameResponse,
        dtos::MessageResponse,
        dtos::ErrorResponse,
    )),
    tags(
        (name = "Names", description = "Catalog of names"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: NamesConfig,
    pub store: Arc<dyn NameStore>,
}

impl AppState {
    pub fn new(config: NamesConfig, store: Arc<dyn NameStore>) -> Self {
        Self { config, store }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed_origins.iter().filter_map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::root))
        .route("/health-check", get(handlers::health_check_text))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics::metrics))
        .route("/add-name", post(handlers::add_name))
        .route("/names-of-allah", get(handlers::list_names))
        .route("/name/:number", get(handlers::get_name))
        .route("/search/:keyword", get(handlers::search_names))
        .route("/update-name/:number", put(handlers::update_name))
        .route("/delete-name/:number", delete(handlers::delete_name));

    if state.config.swagger.enabled {
        app = app.merge(
            SwaggerUi::new("/api-docs").url("/.well-known/openapi.json", ApiDoc::openapi()),
        );
    } else {
        // Machine-readable description stays available without the UI
        app = app.route(
            "/.well-known/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        );
    }

    let body_limit = state.config.security.body_limit_bytes;
    let cors = cors_layer(&state.config.security.allowed_origins);

    // Extractors carry their own 2 MB default; align it with the configured limit
    app.with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            },
        ))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_catalog_operation() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/",
            "/health-check",
            "/add-name",
            "/names-of-allah",
            "/name/{number}",
            "/search/{keyword}",
            "/update-name/{number}",
            "/delete-name/{number}",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn openapi_carries_service_title() {
        assert_eq!(ApiDoc::openapi().info.title, "Allah(SWT) 99 Names API");
    }
}
