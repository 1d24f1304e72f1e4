mod crm;
mod rate_limit;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::crm::{CrmClient, LeadSink};
use crate::rate_limit::RateLimiter;

#[tokio::main]
async fn main() {
    // `.env` is optional; real deployments set the variables directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Non-fatal: the page still renders, the lead endpoint answers 503.
    let crm: Option<Arc<dyn LeadSink>> = match CrmClient::from_env() {
        Ok(client) => {
            tracing::info!(url = client.buyer_url(), "crm client initialized");
            Some(Arc::new(client) as Arc<dyn LeadSink>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "crm client not configured; lead capture disabled");
            None
        }
    };

    let rate_limiter = RateLimiter::new();
    let limits = rate_limiter.config();
    tracing::info!(
        per_client = limits.per_client_limit,
        global = limits.global_limit,
        "lead rate limits"
    );

    let trust_forwarded_for = routes::leads::env_bool("TRUST_FORWARDED_FOR").unwrap_or(false);
    let state = state::AppState::new(crm, rate_limiter).with_trust_forwarded_for(trust_forwarded_for);
    let app = routes::app(state).expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "gravitybox listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
