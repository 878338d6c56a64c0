//! User-facing copy shown in notifications and menus.

pub const LOGIN_REQUIRED_TO_SUBMIT: &str = "문의를 제출하려면 로그인이 필요합니다.";
pub const REQUIRED_FIELDS_MISSING: &str = "필수 입력 항목을 확인해주세요.";
pub const INQUIRY_SUBMITTED: &str = "문의사항이 성공적으로 제출되었습니다.";
pub const INQUIRY_SUBMIT_FAILED: &str = "문의 제출에 실패했습니다.";
pub const LOGIN_EXPIRED: &str = "로그인이 필요합니다. 다시 로그인해주세요.";
pub const FILES_ATTACHED: &str = "파일이 첨부되었습니다.";
