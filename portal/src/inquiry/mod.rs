//! 1:1 inquiry page.
//!
//! ## Files
//! - `draft.rs`: form content, field edits and the attachment list.
//! - `validation.rs`: pure per-field checks run on every submit.
//! - `page.rs`: submission controller and page state.

pub mod draft;
pub mod page;
pub mod validation;

pub use draft::{Attachment, FormError, FormField, InquiryDraft, MAX_ATTACHMENTS};
pub use page::{InquiryForm, InquiryPage, SubmissionOutcome, LOGIN_REDIRECT_DELAY};
pub use validation::{is_valid_email, validate, ValidationResult};
