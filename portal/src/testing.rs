//! Test doubles for the page collaborators.

use std::sync::Arc;

use common::models::{
    ApiResponse, CreatedInquiry, InquiryRequest, JobApplicationRequest, TalentPoolRequest,
};
use parking_lot::Mutex;
use tokio::sync::Semaphore;

use crate::api::{ApiError, HrService, InquiryService};
use crate::auth::{AuthProvider, AuthSession, AuthenticatedUser};
use crate::navigation::Navigator;

pub fn user() -> AuthenticatedUser {
    AuthenticatedUser {
        email: "user@example.com".to_string(),
        name: "홍길동".to_string(),
        token: Some("token".to_string()),
    }
}

pub fn signed_in() -> Arc<dyn AuthProvider> {
    Arc::new(AuthSession::signed_in(user()))
}

pub fn signed_out() -> Arc<dyn AuthProvider> {
    Arc::new(AuthSession::new())
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().push(path.to_string());
    }
}

type InquiryAnswer = Result<ApiResponse<CreatedInquiry>, ApiError>;

struct FakeInquiryState {
    answer: InquiryAnswer,
    requests: Vec<InquiryRequest>,
}

/// Inquiry service that records requests and replies with a canned answer.
///
/// A held service parks each call until [`FakeInquiryService::release`].
#[derive(Clone)]
pub struct FakeInquiryService {
    state: Arc<Mutex<FakeInquiryState>>,
    gate: Option<Arc<Semaphore>>,
}

impl Default for FakeInquiryService {
    fn default() -> Self {
        Self::answering(Err(ApiError::Transport("no answer configured".to_string())))
    }
}

impl FakeInquiryService {
    pub fn answering(answer: InquiryAnswer) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeInquiryState {
                answer,
                requests: Vec::new(),
            })),
            gate: None,
        }
    }

    pub fn held(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn set_answer(&self, answer: InquiryAnswer) {
        self.state.lock().answer = answer;
    }

    pub fn calls(&self) -> usize {
        self.state.lock().requests.len()
    }

    pub fn requests(&self) -> Vec<InquiryRequest> {
        self.state.lock().requests.clone()
    }

    pub async fn wait_for_call(&self) {
        while self.calls() == 0 {
            tokio::task::yield_now().await;
        }
    }
}

impl InquiryService for FakeInquiryService {
    async fn create_inquiry(&self, request: &InquiryRequest) -> InquiryAnswer {
        self.state.lock().requests.push(request.clone());
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        self.state.lock().answer.clone()
    }
}

#[derive(Default)]
struct FakeHrState {
    applications: Vec<JobApplicationRequest>,
    talent_pool: Vec<TalentPoolRequest>,
    fail_with: Option<ApiError>,
}

#[derive(Clone, Default)]
pub struct FakeHrService {
    state: Arc<Mutex<FakeHrState>>,
}

impl FakeHrService {
    pub fn failing(err: ApiError) -> Self {
        let service = Self::default();
        service.state.lock().fail_with = Some(err);
        service
    }

    pub fn applications(&self) -> Vec<JobApplicationRequest> {
        self.state.lock().applications.clone()
    }

    pub fn talent_pool(&self) -> Vec<TalentPoolRequest> {
        self.state.lock().talent_pool.clone()
    }
}

impl HrService for FakeHrService {
    async fn submit_application(&self, request: &JobApplicationRequest) -> Result<(), ApiError> {
        let mut state = self.state.lock();
        state.applications.push(request.clone());
        state.fail_with.clone().map_or(Ok(()), Err)
    }

    async fn join_talent_pool(&self, request: &TalentPoolRequest) -> Result<(), ApiError> {
        let mut state = self.state.lock();
        state.talent_pool.push(request.clone());
        state.fail_with.clone().map_or(Ok(()), Err)
    }
}
