use tracing::info;

pub mod routes {
    pub const HOME: &str = "/";
    pub const INQUIRY: &str = "/Inquiry";
    pub const FAQ: &str = "/FAQ";
    pub const STORAGE_PARTNERSHIP: &str = "/StoragePartnership";
    pub const EVENT_STORAGE: &str = "/EventStorage";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const MY_PAGE: &str = "/mypage";
    pub const PROFILE: &str = "/profile";
    pub const SETTINGS: &str = "/settings";
}

/// Client-side route changes requested by a page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator for headless runs: there is no router, so route changes are logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        info!(path, "navigate");
    }
}
