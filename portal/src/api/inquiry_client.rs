use std::future::Future;
use std::sync::Arc;

use common::config::PortalConfig;
use common::models::{ApiResponse, CreatedInquiry, InquiryRequest};
use reqwest::Client;
use tracing::debug;

use super::{build_http_client, post_json, ApiError};
use crate::auth::AuthSession;

pub const INQUIRIES_PATH: &str = "/api/inquiries";

pub trait InquiryService: Send + Sync {
    /// Creates one inquiry. Exactly one request is issued per call.
    fn create_inquiry(
        &self,
        request: &InquiryRequest,
    ) -> impl Future<Output = Result<ApiResponse<CreatedInquiry>, ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpInquiryClient {
    client: Client,
    url: String,
    session: Arc<AuthSession>,
}

impl HttpInquiryClient {
    pub fn new(config: &PortalConfig, session: Arc<AuthSession>) -> Result<Self, ApiError> {
        Ok(HttpInquiryClient {
            client: build_http_client(config)?,
            url: config.endpoint(INQUIRIES_PATH),
            session,
        })
    }
}

impl InquiryService for HttpInquiryClient {
    async fn create_inquiry(
        &self,
        request: &InquiryRequest,
    ) -> Result<ApiResponse<CreatedInquiry>, ApiError> {
        debug!(?request, "creating inquiry");
        let token = self.session.bearer_token();
        let response = post_json(&self.client, &self.url, request, token.as_deref()).await?;
        Ok(response.json().await?)
    }
}
