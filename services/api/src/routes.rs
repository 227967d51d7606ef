use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use stayfront::error::AppError;
use stayfront::forms::{forms_router, FormCatalog};
use stayfront::site::{render_footer, FooterContent};

pub(crate) fn with_site_routes(catalog: Arc<FormCatalog>) -> axum::Router {
    forms_router(catalog)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/footer", axum::routing::get(footer_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn footer_endpoint() -> Result<Html<String>, AppError> {
    let html = render_footer(&FooterContent::default())?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn footer_endpoint_renders_html() {
        let Html(body) = footer_endpoint().await.expect("footer renders");
        assert!(body.contains("Find us"));
        assert!(body.contains("All Right Reserved"));
    }
}
