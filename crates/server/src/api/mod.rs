pub mod chat;
pub mod health;
pub mod openapi;
pub mod schemas;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use aeval_advisor::ChatService;

use self::openapi::ApiDoc;

/// Shared application state passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
    /// Origins allowed by CORS. A single `*` entry allows any origin.
    pub allowed_origins: Vec<HeaderValue>,
}

/// Build the Axum router with all API routes.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    Router::new()
        .route("/health", get(health::health))
        .route("/api/chat", post(chat::chat))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        // Credentials cannot be combined with a wildcard origin.
        return CorsLayer::permissive();
    }
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
