use std::future::Future;

use common::config::PortalConfig;
use common::models::{JobApplicationRequest, TalentPoolRequest};
use reqwest::Client;

use super::{build_http_client, post_json, ApiError};

pub const APPLICATIONS_PATH: &str = "/api/hr/applications";
pub const TALENT_POOL_PATH: &str = "/api/hr/talent-pool";

/// Careers endpoints. Any 2xx answer counts as accepted; the body is ignored.
pub trait HrService: Send + Sync {
    fn submit_application(
        &self,
        request: &JobApplicationRequest,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn join_talent_pool(
        &self,
        request: &TalentPoolRequest,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpHrClient {
    client: Client,
    applications_url: String,
    talent_pool_url: String,
}

impl HttpHrClient {
    pub fn new(config: &PortalConfig) -> Result<Self, ApiError> {
        Ok(HttpHrClient {
            client: build_http_client(config)?,
            applications_url: config.endpoint(APPLICATIONS_PATH),
            talent_pool_url: config.endpoint(TALENT_POOL_PATH),
        })
    }
}

impl HrService for HttpHrClient {
    async fn submit_application(&self, request: &JobApplicationRequest) -> Result<(), ApiError> {
        post_json(&self.client, &self.applications_url, request, None).await?;
        Ok(())
    }

    async fn join_talent_pool(&self, request: &TalentPoolRequest) -> Result<(), ApiError> {
        post_json(&self.client, &self.talent_pool_url, request, None).await?;
        Ok(())
    }
}
