//! API Client
//!
//! HTTP bindings to the remote ordering service, organized by domain.
//! Every call is a single request/response round trip; no retries.

mod auth;
mod feedback;
mod menu;
mod orders;

pub use auth::*;
pub use feedback::*;
pub use menu::*;
pub use orders::*;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// All endpoints hang off one same-origin prefix
const API_BASE: &str = "/api";

/// Failure surfaced by the API layer, classified by HTTP status where one exists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.status() == Some(400)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn client() -> Client {
    Client::new()
}

/// Absolute endpoint URL; reqwest's fetch backend rejects relative paths.
fn url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}{}", origin, API_BASE, path)
}

/// Send, surface non-2xx as ApiError::Status, decode the JSON body.
async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, ApiError> {
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    if status.is_success() {
        resp.json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(error_from_response(status, resp).await)
    }
}

/// Like send_json but for endpoints whose success body we don't care about.
async fn send_ok(req: RequestBuilder) -> Result<(), ApiError> {
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(error_from_response(status, resp).await)
    }
}

/// Service errors carry a `{"message": ...}` body; fall back to the status text.
async fn error_from_response(status: StatusCode, resp: Response) -> ApiError {
    let fallback = || {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    };
    let message = match resp.text().await {
        Ok(text) => serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or_else(|_| fallback()),
        Err(_) => fallback(),
    };
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_helpers_match_their_codes() {
        let bad = ApiError::Status {
            status: 400,
            message: "nope".to_string(),
        };
        assert!(bad.is_validation());
        assert!(!bad.is_unauthorized());

        let expired = ApiError::Status {
            status: 401,
            message: "expired".to_string(),
        };
        assert!(expired.is_unauthorized());

        let gone = ApiError::Status {
            status: 404,
            message: "gone".to_string(),
        };
        assert!(gone.is_not_found());

        assert_eq!(ApiError::Network("boom".to_string()).status(), None);
    }

    #[test]
    fn status_errors_display_the_server_message() {
        let err = ApiError::Status {
            status: 400,
            message: "Burger is unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Burger is unavailable");
    }
}
