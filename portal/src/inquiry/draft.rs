use std::io;
use std::path::{Path, PathBuf};

use common::models::{InquiryRequest, InquiryType};
use common::utils::{is_blank, UnknownVariant};
use thiserror::Error;

/// Attachments beyond this count are dropped on selection.
pub const MAX_ATTACHMENTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    InquiryType,
    Subject,
    Content,
    Email,
    Phone,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::InquiryType,
        FormField::Subject,
        FormField::Content,
        FormField::Email,
        FormField::Phone,
    ];
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownInquiryType(#[from] UnknownVariant),
}

/// A file picked for upload. Only the reference is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl Attachment {
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Attachment {
            name,
            path: path.to_path_buf(),
            size_bytes: metadata.len(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryDraft {
    pub inquiry_type: Option<InquiryType>,
    pub subject: String,
    pub content: String,
    pub email: String,
    pub phone: String,
    pub attachments: Vec<Attachment>,
}

impl InquiryDraft {
    /// Empty draft with the email pre-filled from the signed-in user.
    pub fn for_user(email: Option<&str>) -> Self {
        InquiryDraft {
            email: email.unwrap_or_default().to_string(),
            ..InquiryDraft::default()
        }
    }

    /// Applies one input change. An empty inquiry type value unsets it.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), FormError> {
        match field {
            FormField::InquiryType => {
                self.inquiry_type = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            FormField::Subject => self.subject = value.to_string(),
            FormField::Content => self.content = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::Phone => self.phone = value.to_string(),
        }
        Ok(())
    }

    /// Appends `files` and truncates to [`MAX_ATTACHMENTS`]; returns how many
    /// attachments the draft now holds.
    pub fn attach<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = Attachment>,
    {
        self.attachments.extend(files);
        self.attachments.truncate(MAX_ATTACHMENTS);
        self.attachments.len()
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        (index < self.attachments.len()).then(|| self.attachments.remove(index))
    }

    /// Wire payload for the creation call, or `None` without an inquiry type.
    pub fn to_request(&self) -> Option<InquiryRequest> {
        Some(InquiryRequest {
            inquiry_type: self.inquiry_type?,
            subject: self.subject.clone(),
            content: self.content.clone(),
            email: self.email.clone(),
            phone: (!is_blank(&self.phone)).then(|| self.phone.clone()),
        })
    }
}
