use std::sync::Arc;
use std::time::Duration;

use common::models::{JobApplicationRequest, TalentPoolRequest};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::api::{ApiError, HrService};

/// How long the "thank you" state stays before the dialog closes itself.
pub const DIALOG_CLOSE_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPosition {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationField {
    Name,
    Email,
    Phone,
    CoverLetter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
}

impl ApplicationForm {
    pub fn set(&mut self, field: ApplicationField, value: &str) {
        let slot = match field {
            ApplicationField::Name => &mut self.name,
            ApplicationField::Email => &mut self.email,
            ApplicationField::Phone => &mut self.phone,
            ApplicationField::CoverLetter => &mut self.cover_letter,
        };
        *slot = value.to_string();
    }

    /// Every field is required.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.cover_letter]
            .iter()
            .all(|value| !value.is_empty())
    }

    fn to_request(&self, job: &JobPosition) -> JobApplicationRequest {
        JobApplicationRequest {
            position_title: job.title.clone(),
            department: job.department.clone(),
            applicant_name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            cover_letter: self.cover_letter.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalentPoolField {
    Name,
    Email,
    Phone,
    Field,
    Experience,
    Introduction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TalentPoolForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub field: String,
    pub experience: String,
    pub introduction: String,
}

impl TalentPoolForm {
    pub fn set(&mut self, field: TalentPoolField, value: &str) {
        let slot = match field {
            TalentPoolField::Name => &mut self.name,
            TalentPoolField::Email => &mut self.email,
            TalentPoolField::Phone => &mut self.phone,
            TalentPoolField::Field => &mut self.field,
            TalentPoolField::Experience => &mut self.experience,
            TalentPoolField::Introduction => &mut self.introduction,
        };
        *slot = value.to_string();
    }

    /// Experience is the only optional field.
    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.field,
            &self.introduction,
        ]
        .iter()
        .all(|value| !value.is_empty())
    }

    fn to_request(&self) -> TalentPoolRequest {
        TalentPoolRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            field: self.field.clone(),
            experience: self.experience.clone(),
            introduction: self.introduction.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareersState {
    pub selected_job: Option<JobPosition>,
    pub show_application_form: bool,
    pub application: ApplicationForm,
    pub application_submitted: bool,
    pub show_talent_pool_form: bool,
    pub talent_pool: TalentPoolForm,
    pub talent_pool_submitted: bool,
}

impl CareersState {
    fn close_job_dialog(&mut self) {
        self.selected_job = None;
        self.show_application_form = false;
        self.application_submitted = false;
    }

    fn close_talent_pool_dialog(&mut self) {
        self.show_talent_pool_form = false;
        self.talent_pool_submitted = false;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CareerSubmission {
    Submitted,
    /// The submit control is disabled until the required fields are filled.
    Incomplete,
    NoPositionSelected,
    /// The form is not on screen, so there is no submit control to press.
    FormNotOpen,
    /// The thank-you state is showing; the form waits for its reset.
    AlreadySubmitted,
    /// Only logged; the page shows nothing.
    Failed(ApiError),
}

pub struct CareersPage<H> {
    service: H,
    positions: Vec<JobPosition>,
    state: Arc<Mutex<CareersState>>,
    application_close: Mutex<Option<JoinHandle<()>>>,
    talent_pool_close: Mutex<Option<JoinHandle<()>>>,
}

impl<H: HrService> CareersPage<H> {
    pub fn new(service: H, positions: Vec<JobPosition>) -> Self {
        CareersPage {
            service,
            positions,
            state: Arc::new(Mutex::new(CareersState::default())),
            application_close: Mutex::new(None),
            talent_pool_close: Mutex::new(None),
        }
    }

    pub fn positions(&self) -> &[JobPosition] {
        &self.positions
    }

    pub fn state(&self) -> CareersState {
        self.state.lock().clone()
    }

    /// Opens the detail dialog of a posting. Unknown ids are ignored.
    pub fn open_job(&self, id: u32) -> bool {
        let Some(job) = self.positions.iter().find(|job| job.id == id) else {
            warn!(id, "no such job posting");
            return false;
        };
        self.state.lock().selected_job = Some(job.clone());
        true
    }

    pub fn close_dialog(&self) {
        self.state.lock().close_job_dialog();
    }

    pub fn start_application(&self) {
        self.state.lock().show_application_form = true;
    }

    pub fn set_application_field(&self, field: ApplicationField, value: &str) {
        self.state.lock().application.set(field, value);
    }

    /// Whether the application submit control is shown and enabled.
    pub fn can_submit_application(&self) -> bool {
        let state = self.state.lock();
        state.show_application_form
            && !state.application_submitted
            && state.application.is_complete()
    }

    pub async fn submit_application(&self) -> CareerSubmission {
        let request = {
            let state = self.state.lock();
            let Some(job) = &state.selected_job else {
                return CareerSubmission::NoPositionSelected;
            };
            if !state.show_application_form {
                return CareerSubmission::FormNotOpen;
            }
            if state.application_submitted {
                return CareerSubmission::AlreadySubmitted;
            }
            if !state.application.is_complete() {
                return CareerSubmission::Incomplete;
            }
            state.application.to_request(job)
        };

        match self.service.submit_application(&request).await {
            Ok(()) => {
                info!(position = %request.position_title, "job application submitted");
                self.state.lock().application_submitted = true;
                self.schedule_reset(&self.application_close, |state| {
                    if state.application_submitted {
                        state.close_job_dialog();
                        state.application = ApplicationForm::default();
                    }
                });
                CareerSubmission::Submitted
            }
            Err(err) => {
                error!(error = %err, position = %request.position_title, "job application failed");
                CareerSubmission::Failed(err)
            }
        }
    }

    pub fn open_talent_pool(&self) {
        self.state.lock().show_talent_pool_form = true;
    }

    pub fn close_talent_pool(&self) {
        self.state.lock().close_talent_pool_dialog();
    }

    pub fn set_talent_pool_field(&self, field: TalentPoolField, value: &str) {
        self.state.lock().talent_pool.set(field, value);
    }

    pub fn can_submit_talent_pool(&self) -> bool {
        let state = self.state.lock();
        state.show_talent_pool_form
            && !state.talent_pool_submitted
            && state.talent_pool.is_complete()
    }

    pub async fn submit_talent_pool(&self) -> CareerSubmission {
        let request = {
            let state = self.state.lock();
            if !state.show_talent_pool_form {
                return CareerSubmission::FormNotOpen;
            }
            if state.talent_pool_submitted {
                return CareerSubmission::AlreadySubmitted;
            }
            if !state.talent_pool.is_complete() {
                return CareerSubmission::Incomplete;
            }
            state.talent_pool.to_request()
        };

        match self.service.join_talent_pool(&request).await {
            Ok(()) => {
                info!(field = %request.field, "talent pool registration submitted");
                self.state.lock().talent_pool_submitted = true;
                self.schedule_reset(&self.talent_pool_close, |state| {
                    if state.talent_pool_submitted {
                        state.close_talent_pool_dialog();
                        state.talent_pool = TalentPoolForm::default();
                    }
                });
                CareerSubmission::Submitted
            }
            Err(err) => {
                error!(error = %err, "talent pool registration failed");
                CareerSubmission::Failed(err)
            }
        }
    }

    /// Waits until every scheduled dialog close has run.
    pub async fn wait_pending_close(&self) {
        let handles = [
            self.application_close.lock().take(),
            self.talent_pool_close.lock().take(),
        ];
        for handle in handles.into_iter().flatten() {
            if let Err(err) = handle.await {
                warn!(error = %err, "dialog close task failed");
            }
        }
    }

    /// Arms the delayed reset of one dialog, replacing any earlier timer of it.
    fn schedule_reset(
        &self,
        slot: &Mutex<Option<JoinHandle<()>>>,
        reset: fn(&mut CareersState),
    ) {
        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(DIALOG_CLOSE_DELAY).await;
            reset(&mut state.lock());
        });
        if let Some(previous) = slot.lock().replace(handle) {
            previous.abort();
        }
    }
}
