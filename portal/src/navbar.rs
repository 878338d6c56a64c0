use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::auth::AuthProvider;
use crate::navigation::{routes, Navigator};

/// In-page sections of the landing page, as (label, anchor).
pub const SECTION_ANCHORS: [(&str, &str); 4] = [
    ("홈", "#home"),
    ("서비스", "#services"),
    ("이용방법", "#how-it-works"),
    ("가격", "#pricing"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerLink {
    Faq,
    StoragePartnership,
    EventStorage,
    Inquiry,
}

impl PartnerLink {
    pub const ALL: [PartnerLink; 4] = [
        PartnerLink::Faq,
        PartnerLink::StoragePartnership,
        PartnerLink::EventStorage,
        PartnerLink::Inquiry,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PartnerLink::Faq => "FAQ",
            PartnerLink::StoragePartnership => "짐보관 서비스 제휴 신청",
            PartnerLink::EventStorage => "콘서트 및 행사 전용 이동식 짐보관 신청",
            PartnerLink::Inquiry => "1:1 문의",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            PartnerLink::Faq => routes::FAQ,
            PartnerLink::StoragePartnership => routes::STORAGE_PARTNERSHIP,
            PartnerLink::EventStorage => routes::EVENT_STORAGE,
            PartnerLink::Inquiry => routes::INQUIRY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEntry {
    MyPage,
    Profile,
    Settings,
    Logout,
    Login,
    Register,
}

impl AccountEntry {
    const SIGNED_IN: [AccountEntry; 4] = [
        AccountEntry::MyPage,
        AccountEntry::Profile,
        AccountEntry::Settings,
        AccountEntry::Logout,
    ];
    const SIGNED_OUT: [AccountEntry; 2] = [AccountEntry::Login, AccountEntry::Register];

    pub fn label(self) -> &'static str {
        match self {
            AccountEntry::MyPage => "마이페이지",
            AccountEntry::Profile => "내 프로필",
            AccountEntry::Settings => "설정",
            AccountEntry::Logout => "로그아웃",
            AccountEntry::Login => "로그인",
            AccountEntry::Register => "회원가입",
        }
    }

    /// Route of the entry; logout is an action, not a page.
    pub fn path(self) -> Option<&'static str> {
        match self {
            AccountEntry::MyPage => Some(routes::MY_PAGE),
            AccountEntry::Profile => Some(routes::PROFILE),
            AccountEntry::Settings => Some(routes::SETTINGS),
            AccountEntry::Logout => None,
            AccountEntry::Login => Some(routes::LOGIN),
            AccountEntry::Register => Some(routes::REGISTER),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub mobile_open: bool,
    pub account_menu_open: bool,
    pub partner_menu_open: bool,
}

pub struct Navbar {
    auth: Arc<dyn AuthProvider>,
    navigator: Arc<dyn Navigator>,
    state: Mutex<NavbarState>,
}

impl Navbar {
    pub fn new(auth: Arc<dyn AuthProvider>, navigator: Arc<dyn Navigator>) -> Self {
        Navbar {
            auth,
            navigator,
            state: Mutex::new(NavbarState::default()),
        }
    }

    pub fn state(&self) -> NavbarState {
        *self.state.lock()
    }

    pub fn toggle_drawer(&self) {
        let mut state = self.state.lock();
        state.mobile_open = !state.mobile_open;
    }

    pub fn open_account_menu(&self) {
        self.state.lock().account_menu_open = true;
    }

    pub fn close_account_menu(&self) {
        self.state.lock().account_menu_open = false;
    }

    pub fn open_partner_menu(&self) {
        self.state.lock().partner_menu_open = true;
    }

    pub fn close_partner_menu(&self) {
        self.state.lock().partner_menu_open = false;
    }

    /// Jumps to a landing page section and folds the mobile drawer.
    pub fn select_section(&self, anchor: &str) {
        self.state.lock().mobile_open = false;
        self.navigator.navigate(anchor);
    }

    pub fn select_partner(&self, link: PartnerLink) {
        self.close_partner_menu();
        debug!(link = link.label(), "partner menu selection");
        self.navigator.navigate(link.path());
    }

    /// "안녕하세요, {name}님" for a signed-in user.
    pub fn greeting(&self) -> Option<String> {
        self.auth
            .current_user()
            .map(|user| format!("안녕하세요, {}님", user.name))
    }

    pub fn account_entries(&self) -> &'static [AccountEntry] {
        if self.auth.is_authenticated() {
            &AccountEntry::SIGNED_IN
        } else {
            &AccountEntry::SIGNED_OUT
        }
    }

    pub fn select_account(&self, entry: AccountEntry) {
        match entry.path() {
            Some(path) => {
                self.close_account_menu();
                self.navigator.navigate(path);
            }
            None => self.logout(),
        }
    }

    pub fn logout(&self) {
        self.auth.logout();
        self.close_account_menu();
        self.navigator.navigate(routes::HOME);
    }
}
