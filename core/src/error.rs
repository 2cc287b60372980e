//! Error types for the recipe and health API slices.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently
//! distinguish "the record does not exist" from transport or decoding
//! trouble. Every variant maps to an HTTP-equivalent status code via
//! [`ApiError::status`] so the failure always carries a code plus a
//! message, never a bare panic.

use thiserror::Error;

use crate::types::RecipeId;

/// Failures surfaced by the API slices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No record in the store matches the requested id.
    #[error("recipe {id} not found")]
    NotFound { id: RecipeId },

    /// The health endpoint answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// A response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// A value could not be encoded to JSON (cache keys, payloads).
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The HTTP round-trip to the health endpoint failed outright.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// HTTP-equivalent status code for this failure. Failures without a
    /// server-supplied status report 502, the passthrough convention.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::NotFound { .. } => 404,
            ApiError::Http { status, .. } => *status,
            ApiError::Deserialization(_)
            | ApiError::Serialization(_)
            | ApiError::Transport(_) => 502,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_status_and_message() {
        let err = ApiError::NotFound { id: 9 };
        assert_eq!(err.status(), 404);
        assert_eq!(err.to_string(), "recipe 9 not found");
    }

    #[test]
    fn http_error_passes_status_through() {
        let err = ApiError::Http {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.status(), 503);
        assert_eq!(err.to_string(), "HTTP 503: down");
    }

    #[test]
    fn local_failures_map_to_bad_gateway() {
        assert_eq!(ApiError::Transport("refused".to_string()).status(), 502);
        assert_eq!(ApiError::Deserialization("eof".to_string()).status(), 502);
    }
}
