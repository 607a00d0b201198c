#[cfg(feature = "swagger")]
pub mod openapi;
pub mod error;
pub mod estimate;
pub mod export;
pub mod health;
pub mod response;
pub mod v1;

use axum::{http::HeaderValue, Router};
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;

/// Source of the wall-clock time stamped on exports
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Shared handler state. Holds no estimate results: the caller keeps the
/// last report and resubmits inputs on every action.
#[derive(Clone)]
pub struct AppState {
    started_at: DateTime<Utc>,
    clock: Clock,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(|| Local::now().naive_local()))
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            started_at: Utc::now(),
            clock,
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

pub fn router(state: AppState, cfg: &Config) -> anyhow::Result<Router> {
    let mut router = Router::new().nest("/api/v1", v1::router(state));

    if cfg.server.enable_cors {
        let origin = HeaderValue::from_str(&cfg.server.cors_origin)?;
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    Ok(router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    cfg.server.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http()))
}

#[cfg(feature = "swagger")]
pub fn with_swagger(app: Router) -> Router {
    use crate::api::openapi::ApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;
    app.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
}
