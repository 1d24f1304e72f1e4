//! CRM configuration parsed from environment variables.

use super::types::CrmError;

pub const DEFAULT_CRM_BASE_URL: &str = "https://openapi.keycrm.app";
pub const DEFAULT_CRM_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CRM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Clone, PartialEq, Eq)]
pub struct CrmConfig {
    pub base_url: String,
    pub api_token: String,
    pub timeouts: CrmTimeouts,
}

impl std::fmt::Debug for CrmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrmConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

impl CrmConfig {
    /// Build typed CRM config from environment variables.
    ///
    /// Required:
    /// - `CRM_API_TOKEN`: value sent verbatim in the `Authorization` header
    ///
    /// Optional:
    /// - `CRM_BASE_URL`: default `https://openapi.keycrm.app`
    /// - `CRM_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CRM_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, CrmError> {
        let api_token = std::env::var("CRM_API_TOKEN")
            .ok()
            .map(|raw| raw.trim().to_owned())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| CrmError::MissingToken { var: "CRM_API_TOKEN".into() })?;

        let base_url = parse_base_url(std::env::var("CRM_BASE_URL").ok().as_deref())?;
        let timeouts = CrmTimeouts {
            request_secs: env_parse_u64("CRM_REQUEST_TIMEOUT_SECS", DEFAULT_CRM_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("CRM_CONNECT_TIMEOUT_SECS", DEFAULT_CRM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, api_token, timeouts })
    }

    /// Full URL of the buyer-creation endpoint.
    #[must_use]
    pub fn buyer_url(&self) -> String {
        format!("{}/v1/buyer", self.base_url)
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_base_url(raw: Option<&str>) -> Result<String, CrmError> {
    let url = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_CRM_BASE_URL)
        .trim_end_matches('/');
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(CrmError::ConfigParse(format!("CRM_BASE_URL must be an http(s) URL, got '{url}'")));
    }
    Ok(url.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
