//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the lead proxy endpoint and stitches it with Leptos SSR
//! rendering under a single Axum router. The landing page lives at `/`,
//! its WASM/CSS bundle under `/pkg`, and images under `/assets`.

pub mod leads;

use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes called by the hydrated landing page.
pub fn api_routes(state: AppState) -> Router {
    let cors = cors_layer(std::env::var("CORS_ALLOW_ORIGIN").ok().as_deref());

    Router::new()
        .route("/api/leads", post(leads::submit_lead))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Cross-origin access to `/api/leads` is off unless `CORS_ALLOW_ORIGIN`
/// names the one origin allowed to post (e.g. a separate dev server).
fn cors_layer(allow_origin: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);
    match allow_origin.and_then(|raw| raw.trim().parse::<HeaderValue>().ok()) {
        Some(origin) => base.allow_origin(origin),
        None => base,
    }
}

/// Resolve the directory of static images referenced by the page from
/// `ASSETS_DIR`, defaulting to `assets/` next to the workspace root.
fn assets_dir(configured: Option<String>) -> PathBuf {
    configured
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets"))
}

/// Full application router: API routes + Leptos SSR at `/` + static bundles.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/assets", ServeDir::new(assets_dir(std::env::var("ASSETS_DIR").ok())))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthz_is_ok() {
        assert_eq!(healthz().await, StatusCode::OK);
    }

    #[test]
    fn assets_dir_defaults_next_to_workspace() {
        assert!(assets_dir(None).ends_with("../assets"));
    }

    #[test]
    fn assets_dir_honours_configured_path() {
        assert_eq!(assets_dir(Some("/srv/gravitybox/assets".into())), PathBuf::from("/srv/gravitybox/assets"));
    }
}
