use thiserror::Error;

/// Prefix of the human-facing inquiry receipt code.
pub const INQUIRY_NUMBER_PREFIX: &str = "INQ-";

/// Returned when a wire id does not name any variant of an enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Formats a created inquiry id as its receipt code, e.g. `42` -> `INQ-000042`.
///
/// Ids wider than six digits are printed in full.
pub fn format_inquiry_number(id: u64) -> String {
    format!("{INQUIRY_NUMBER_PREFIX}{id:06}")
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Login route that sends the user back to `return_to` afterwards.
pub fn login_redirect_path(return_to: &str) -> String {
    format!("/login?redirect={return_to}")
}
