pub mod forms;
pub mod health;
pub mod public;
pub mod submissions;

use crate::config::Config;
use crate::service::FormService;
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn FormService>,
    pub config: Config,
}

impl AppState {
    pub fn new(service: Arc<dyn FormService>, config: Config) -> Self {
        Self { service, config }
    }
}

pub fn create_router(state: AppState) -> Router {
    let origins = state.config.cors_allowed_origins.clone();

    let routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route(
            "/api/forms",
            post(forms::create_form).get(forms::list_forms),
        )
        .route(
            "/api/forms/:id",
            get(forms::get_form).delete(forms::delete_form),
        )
        .route(
            "/api/forms/:id/submissions",
            get(submissions::list_submissions),
        )
        .route("/api/submit", post(submissions::submit_form))
        .route(
            "/api/submissions/:id",
            delete(submissions::delete_submission),
        )
        .route("/public/forms/:id", get(public::view_form))
        .with_state(state);

    with_middleware(routes, &origins)
}

/// Request tracing, then CORS, then panic recovery, outermost first. CORS
/// sits outside the panic handler so recovered 500s still carry CORS headers.
fn with_middleware(router: Router, origins: &[String]) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(origins))
            .layer(CatchPanicLayer::new()),
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring CORS origin that is not a valid header value");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .expose_headers([header::LINK])
        .allow_credentials(true)
        .max_age(Duration::from_secs(300))
}
