use lazy_static::lazy_static;
use regex::Regex;

use super::draft::{FormField, InquiryDraft};

pub const MIN_CONTENT_CHARS: usize = 10;

lazy_static! {
    // ASCII word characters only; `\w` would also admit Hangul and other scripts.
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@([A-Za-z0-9_-]+\.)+[a-zA-Z]{2,7}$")
            .expect("email pattern compiles");
}

/// Per-field "is invalid" flags of the inquiry form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub inquiry_type: bool,
    pub subject: bool,
    pub content: bool,
    pub email: bool,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        !(self.inquiry_type || self.subject || self.content || self.email)
    }

    pub fn is_invalid(&self, field: FormField) -> bool {
        match field {
            FormField::InquiryType => self.inquiry_type,
            FormField::Subject => self.subject,
            FormField::Content => self.content,
            FormField::Email => self.email,
            FormField::Phone => false,
        }
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::InquiryType => self.inquiry_type = false,
            FormField::Subject => self.subject = false,
            FormField::Content => self.content = false,
            FormField::Email => self.email = false,
            FormField::Phone => {}
        }
    }

    pub fn invalid_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.is_invalid(*field))
            .collect()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate(draft: &InquiryDraft) -> ValidationResult {
    ValidationResult {
        inquiry_type: draft.inquiry_type.is_none(),
        subject: draft.subject.trim().is_empty(),
        content: draft.content.trim().chars().count() < MIN_CONTENT_CHARS,
        email: !is_valid_email(&draft.email),
    }
}
