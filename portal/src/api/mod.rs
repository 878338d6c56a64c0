//! REST clients for the TravelLight backend.
//!
//! Pages depend on the service traits; the `Http*` types are the reqwest-backed
//! implementations used by the CLI.

use common::config::PortalConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::messages;

common::agg_mod![hr_client, inquiry_client];

pub use hr_client::{HrService, HttpHrClient};
pub use inquiry_client::{HttpInquiryClient, InquiryService};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never produced a response (connect, timeout, TLS...).
    #[error("{0}")]
    Transport(String),
    /// A 2xx answer whose body could not be read.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status == StatusCode::UNAUTHORIZED.as_u16())
    }

    /// Best-effort text for the user: login prompt on 401, then the server's
    /// message, then the transport description, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            _ if self.is_unauthorized() => messages::LOGIN_EXPIRED.to_string(),
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Transport(description) if !description.trim().is_empty() => {
                description.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub fn build_http_client(config: &PortalConfig) -> Result<Client, ApiError> {
    Ok(Client::builder().timeout(config.request_timeout).build()?)
}

/// POSTs `body` as JSON and returns the response if its status is 2xx.
async fn post_json<B: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    body: &B,
    bearer_token: Option<&str>,
) -> Result<Response, ApiError> {
    let mut request = client.post(url).json(body);
    if let Some(token) = bearer_token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!(url, %status, "backend response");

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message);
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}
