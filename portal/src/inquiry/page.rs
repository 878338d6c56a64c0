use std::sync::Arc;
use std::time::Duration;

use common::models::Severity;
use common::utils::{format_inquiry_number, login_redirect_path};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::draft::{Attachment, FormError, FormField, InquiryDraft, MAX_ATTACHMENTS};
use super::validation::{validate, ValidationResult};
use crate::api::InquiryService;
use crate::auth::AuthProvider;
use crate::messages;
use crate::navigation::{routes, Navigator};
use crate::notification::{NotificationState, Notifier};

/// Delay between the login-required warning and the redirect to the login page.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Everything the inquiry page renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    pub draft: InquiryDraft,
    pub errors: ValidationResult,
    pub submitting: bool,
    pub submitted: bool,
    pub inquiry_id: Option<u64>,
    pub inquiry_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { id: u64, inquiry_number: String },
    Failure { reason: String },
    /// No signed-in user; a redirect to the login page is scheduled.
    LoginRequired,
    Invalid(ValidationResult),
    /// A previous submission is still in flight.
    AlreadySubmitting,
    /// The receipt is showing; `new_inquiry` brings the form back.
    AlreadySubmitted,
}

/// Clears the submitting flag when dropped, whichever way `submit` exits.
struct SubmittingGuard<'a> {
    form: &'a Mutex<InquiryForm>,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.form.lock().submitting = false;
    }
}

enum Prepared {
    Blocked(SubmissionOutcome),
    Invalid(ValidationResult),
    Ready(common::models::InquiryRequest),
}

pub struct InquiryPage<S> {
    service: S,
    auth: Arc<dyn AuthProvider>,
    navigator: Arc<dyn Navigator>,
    notifications: Notifier,
    form: Mutex<InquiryForm>,
    pending_redirect: Mutex<Option<JoinHandle<()>>>,
}

impl<S: InquiryService> InquiryPage<S> {
    pub fn new(service: S, auth: Arc<dyn AuthProvider>, navigator: Arc<dyn Navigator>) -> Self {
        let email = auth.current_user().map(|user| user.email);
        InquiryPage {
            service,
            auth,
            navigator,
            notifications: Notifier::new(),
            form: Mutex::new(InquiryForm {
                draft: InquiryDraft::for_user(email.as_deref()),
                ..InquiryForm::default()
            }),
            pending_redirect: Mutex::new(None),
        }
    }

    pub fn form(&self) -> InquiryForm {
        self.form.lock().clone()
    }

    pub fn notification(&self) -> NotificationState {
        self.notifications.state()
    }

    pub fn notification_message(&self) -> Option<(String, Severity)> {
        self.notifications.current()
    }

    /// Whether the "sign in to submit" banner should be shown.
    pub fn shows_login_hint(&self) -> bool {
        !self.auth.is_authenticated()
    }

    pub fn set_field(&self, field: FormField, value: &str) -> Result<(), FormError> {
        let mut form = self.form.lock();
        form.draft.set_field(field, value)?;
        form.errors.clear(field);
        Ok(())
    }

    /// The file picker is disabled once [`MAX_ATTACHMENTS`] files are held.
    pub fn can_attach(&self) -> bool {
        self.form.lock().draft.attachments.len() < MAX_ATTACHMENTS
    }

    pub fn attach_files(&self, files: Vec<Attachment>) {
        if files.is_empty() {
            return;
        }
        let (before, held) = {
            let mut form = self.form.lock();
            let before = form.draft.attachments.len();
            (before, form.draft.attach(files))
        };
        if held == before {
            debug!(held, "attachment limit reached, selection ignored");
            return;
        }
        debug!(held, "attachments updated");
        self.notifications
            .show(messages::FILES_ATTACHED, Severity::Success);
    }

    pub fn remove_attachment(&self, index: usize) {
        if let Some(removed) = self.form.lock().draft.remove_attachment(index) {
            debug!(name = %removed.name, "attachment removed");
        }
    }

    pub fn close_notification(&self) {
        self.notifications.close();
    }

    /// Starts over with a blank draft after a submission.
    pub fn new_inquiry(&self) {
        let email = self.auth.current_user().map(|user| user.email);
        let mut form = self.form.lock();
        let submitting = form.submitting;
        *form = InquiryForm {
            draft: InquiryDraft::for_user(email.as_deref()),
            submitting,
            ..InquiryForm::default()
        };
    }

    pub async fn submit(&self) -> SubmissionOutcome {
        let blocked = blocked(&self.form.lock());
        if let Some(outcome) = blocked {
            return outcome;
        }

        if !self.auth.is_authenticated() {
            warn!("inquiry submit without a signed-in user");
            self.notifications
                .show(messages::LOGIN_REQUIRED_TO_SUBMIT, Severity::Warning);
            self.schedule_login_redirect();
            return SubmissionOutcome::LoginRequired;
        }

        let request = match self.prepare() {
            Prepared::Blocked(outcome) => return outcome,
            Prepared::Invalid(errors) => {
                debug!(fields = ?errors.invalid_fields(), "inquiry form invalid");
                self.notifications
                    .show(messages::REQUIRED_FIELDS_MISSING, Severity::Error);
                return SubmissionOutcome::Invalid(errors);
            }
            Prepared::Ready(request) => request,
        };
        let _guard = SubmittingGuard { form: &self.form };

        debug!(?request, "submitting inquiry");
        let reason = match self.service.create_inquiry(&request).await {
            Ok(response) => match (response.success, response.data) {
                (true, Some(created)) => return self.complete(created.id),
                (true, None) => {
                    error!("inquiry accepted without an id");
                    messages::INQUIRY_SUBMIT_FAILED.to_string()
                }
                (false, _) => {
                    warn!(message = ?response.message, "inquiry rejected");
                    response
                        .message
                        .filter(|message| !message.trim().is_empty())
                        .unwrap_or_else(|| messages::INQUIRY_SUBMIT_FAILED.to_string())
                }
            },
            Err(err) => {
                error!(error = %err, "inquiry submission failed");
                err.user_message(messages::INQUIRY_SUBMIT_FAILED)
            }
        };

        self.notifications.show(reason.clone(), Severity::Error);
        SubmissionOutcome::Failure { reason }
    }

    /// Waits for a scheduled login redirect, if one is pending.
    pub async fn wait_pending_redirect(&self) {
        let handle = self.pending_redirect.lock().take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!(error = %err, "login redirect task failed");
            }
        }
    }

    /// Validates and claims the submitting flag under one lock.
    fn prepare(&self) -> Prepared {
        let mut form = self.form.lock();
        if let Some(blocked) = blocked(&form) {
            return Prepared::Blocked(blocked);
        }

        let errors = validate(&form.draft);
        form.errors = errors;
        let request = match form.draft.to_request() {
            Some(request) if errors.is_valid() => request,
            _ => return Prepared::Invalid(errors),
        };

        form.submitting = true;
        Prepared::Ready(request)
    }

    fn complete(&self, id: u64) -> SubmissionOutcome {
        let inquiry_number = format_inquiry_number(id);
        {
            let mut form = self.form.lock();
            form.submitted = true;
            form.inquiry_id = Some(id);
            form.inquiry_number = Some(inquiry_number.clone());
        }
        info!(id, %inquiry_number, "inquiry submitted");
        self.notifications
            .show(messages::INQUIRY_SUBMITTED, Severity::Success);
        SubmissionOutcome::Success { id, inquiry_number }
    }

    fn schedule_login_redirect(&self) {
        let navigator = Arc::clone(&self.navigator);
        let path = login_redirect_path(routes::INQUIRY);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(LOGIN_REDIRECT_DELAY).await;
            navigator.navigate(&path);
        });
        if let Some(previous) = self.pending_redirect.lock().replace(handle) {
            previous.abort();
        }
    }
}

/// Submit is unavailable while a call is in flight or the receipt is showing.
fn blocked(form: &InquiryForm) -> Option<SubmissionOutcome> {
    if form.submitting {
        Some(SubmissionOutcome::AlreadySubmitting)
    } else if form.submitted {
        Some(SubmissionOutcome::AlreadySubmitted)
    } else {
        None
    }
}
