//! Lead routes: the browser-facing proxy in front of the CRM.

use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::crm::{BuyerRequest, CrmError, LeadRequest};
use crate::state::AppState;

/// Parse a boolean flag value. Unrecognized spellings are `None`.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().as_deref().and_then(parse_bool)
}

/// Resolve the client address used for rate limiting.
///
/// `X-Forwarded-For` is honoured only when the deployment says a trusted
/// proxy sets it; otherwise the socket peer address is used.
pub(crate) fn client_ip(headers: &HeaderMap, peer: SocketAddr, trust_forwarded: bool) -> IpAddr {
    if trust_forwarded {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|raw| raw.split(',').next())
            .and_then(|first| first.trim().parse::<IpAddr>().ok());
        if let Some(ip) = forwarded {
            return ip;
        }
    }
    peer.ip()
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "ok": false, "error": message }))).into_response()
}

/// Map a CRM failure onto the status the browser sees.
///
/// Both upstream failure kinds surface as non-2xx so the page shows its
/// generic error text; the connection-failure text is reserved for the
/// browser failing to reach this service at all.
pub(crate) fn crm_error_to_status(err: &CrmError) -> StatusCode {
    match err {
        CrmError::Rejected { .. } => StatusCode::BAD_GATEWAY,
        // Unreachable CRM: the page shows its generic error text. The
        // connection-failure text stays reserved for the browser not
        // reaching this proxy.
        CrmError::Request(_) => StatusCode::GATEWAY_TIMEOUT,
        CrmError::ConfigParse(_) | CrmError::MissingToken { .. } | CrmError::HttpClientBuild(_) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// `POST /api/leads`: validate, rate-limit, and forward a lead to the CRM once.
pub async fn submit_lead(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(lead): Json<LeadRequest>,
) -> Response {
    let Some(crm) = state.crm.clone() else {
        return error_body(StatusCode::SERVICE_UNAVAILABLE, "lead capture not configured");
    };

    if lead.name.trim().is_empty() {
        return error_body(StatusCode::BAD_REQUEST, "name is required");
    }

    let ip = client_ip(&headers, peer, state.trust_forwarded_for);
    if let Err(e) = state.rate_limiter.check_and_record(ip) {
        tracing::warn!(%ip, error = %e, "lead submission rate limited");
        return error_body(StatusCode::TOO_MANY_REQUESTS, "too many submissions");
    }

    let buyer = BuyerRequest::from_lead(&lead);
    match crm.create_buyer(&buyer).await {
        Ok(()) => {
            tracing::info!(%ip, "lead forwarded to crm");
            (StatusCode::OK, Json(serde_json::json!({ "ok": true }))).into_response()
        }
        Err(e) => {
            let status = crm_error_to_status(&e);
            match &e {
                CrmError::Rejected { status: upstream, body } => {
                    tracing::error!(%ip, upstream = *upstream, body = %body, "crm rejected lead");
                }
                other => tracing::error!(%ip, error = %other, "crm request failed"),
            }
            error_body(status, "lead forwarding failed")
        }
    }
}

#[cfg(test)]
#[path = "leads_test.rs"]
mod tests;
