//! Health API slice: opaque passthrough to the external health
//! endpoint.
//!
//! # Design
//! The health service is a real HTTP collaborator, unlike the in-memory
//! recipe backend, so this slice owns a reqwest client. The response is
//! treated as data: non-2xx statuses come back as `ApiError::Http` with
//! the raw body, and no business logic is applied to the payload.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// Payload of the health endpoint. Everything past `status` is
/// optional; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Seconds since the service started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Read-only client for the external health service.
#[derive(Debug, Clone)]
pub struct HealthApi {
    client: reqwest::Client,
    base_url: String,
}

impl HealthApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET {base_url}/health`.
    pub async fn get_health(&self) -> Result<HealthStatus, ApiError> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Http { status, body });
        }
        debug!(status, "health check succeeded");
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_alone_is_a_valid_payload() {
        let parsed: HealthStatus = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(parsed.status, "ok");
        assert!(parsed.service.is_none());
        assert!(parsed.uptime.is_none());
    }

    #[test]
    fn full_payload_roundtrips() {
        let full = HealthStatus {
            status: "ok".to_string(),
            service: Some("mock-server".to_string()),
            uptime: Some(12.5),
            version: Some("0.1.0".to_string()),
            timestamp: Some("2025-01-01T00:00:00Z".to_string()),
        };
        let json = serde_json::to_string(&full).unwrap();
        let back: HealthStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, full);
    }

    #[test]
    fn none_fields_are_omitted_from_json() {
        let minimal = HealthStatus {
            status: "degraded".to_string(),
            service: None,
            uptime: None,
            version: None,
            timestamp: None,
        };
        let json = serde_json::to_value(&minimal).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let api = HealthApi::new("http://localhost:8000/api/v1/");
        assert_eq!(api.base_url, "http://localhost:8000/api/v1");
    }
}
