use serde::Deserialize;
use serde::Serialize;

use crate::{impl_display_for_enum, impl_from_str_for_enum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InquiryType {
    Reservation,
    Delivery,
    Storage,
    Account,
    Refund,
    Other,
}

impl InquiryType {
    pub const ALL: [InquiryType; 6] = [
        InquiryType::Reservation,
        InquiryType::Delivery,
        InquiryType::Storage,
        InquiryType::Account,
        InquiryType::Refund,
        InquiryType::Other,
    ];

    /// Label shown in the inquiry type picker.
    pub fn label(self) -> &'static str {
        match self {
            InquiryType::Reservation => "예약 및 결제 문의",
            InquiryType::Delivery => "배송 서비스 문의",
            InquiryType::Storage => "짐 보관 문의",
            InquiryType::Account => "계정 관리 문의",
            InquiryType::Refund => "환불 및 취소 문의",
            InquiryType::Other => "기타 문의",
        }
    }
}

impl_from_str_for_enum!(
    InquiryType,
    Reservation => "reservation",
    Delivery => "delivery",
    Storage => "storage",
    Account => "account",
    Refund => "refund",
    Other => "other",
);
impl_display_for_enum!(
    InquiryType,
    Reservation => "reservation",
    Delivery => "delivery",
    Storage => "storage",
    Account => "account",
    Refund => "refund",
    Other => "other",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl_from_str_for_enum!(
    Severity,
    Success => "success",
    Error => "error",
    Warning => "warning",
    Info => "info",
);
impl_display_for_enum!(
    Severity,
    Success => "success",
    Error => "error",
    Warning => "warning",
    Info => "info",
);

/// Body of the inquiry creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
    pub inquiry_type: InquiryType,
    pub subject: String,
    pub content: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Envelope the backend wraps every JSON answer in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedInquiry {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationRequest {
    pub position_title: String,
    pub department: String,
    pub applicant_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentPoolRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub field: String,
    pub experience: String,
    pub introduction: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inquiry_type_parses_any_case() {
        assert_eq!("refund".parse::<InquiryType>(), Ok(InquiryType::Refund));
        assert_eq!("DELIVERY".parse::<InquiryType>(), Ok(InquiryType::Delivery));
        assert_eq!(" Storage ".parse::<InquiryType>(), Ok(InquiryType::Storage));
        assert!("parcel".parse::<InquiryType>().is_err());
    }

    #[test]
    fn inquiry_request_is_upper_cased_and_drops_missing_phone() {
        let request = InquiryRequest {
            inquiry_type: InquiryType::Reservation,
            subject: "Late pickup".to_string(),
            content: "Can I pick up my bag after 10pm?".to_string(),
            email: "user@example.com".to_string(),
            phone: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "inquiryType": "RESERVATION",
                "subject": "Late pickup",
                "content": "Can I pick up my bag after 10pm?",
                "email": "user@example.com",
            })
        );
    }

    #[test]
    fn api_response_tolerates_missing_data() {
        let parsed: ApiResponse<CreatedInquiry> =
            serde_json::from_value(json!({ "success": false, "message": "busy" })).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("busy"));
        assert!(parsed.data.is_none());

        let parsed: ApiResponse<CreatedInquiry> =
            serde_json::from_value(json!({ "success": true, "data": { "id": 42 } })).unwrap();
        assert_eq!(parsed.data, Some(CreatedInquiry { id: 42 }));
    }

    #[test]
    fn job_application_uses_camel_case() {
        let body = serde_json::to_value(JobApplicationRequest {
            position_title: "Designer".to_string(),
            department: "Design".to_string(),
            applicant_name: "Kim".to_string(),
            email: "kim@example.com".to_string(),
            phone: "010-0000-0000".to_string(),
            cover_letter: "Hello".to_string(),
        })
        .unwrap();
        assert_eq!(body["positionTitle"], "Designer");
        assert_eq!(body["applicantName"], "Kim");
        assert_eq!(body["coverLetter"], "Hello");
    }
}
