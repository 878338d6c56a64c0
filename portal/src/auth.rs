use common::config::PortalConfig;
use parking_lot::RwLock;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub name: String,
    pub token: Option<String>,
}

/// Read side of the signed-in session, as seen by the pages.
pub trait AuthProvider: Send + Sync {
    fn current_user(&self) -> Option<AuthenticatedUser>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    fn logout(&self);
}

#[derive(Debug, Default)]
pub struct AuthSession {
    user: RwLock<Option<AuthenticatedUser>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: AuthenticatedUser) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    /// A session is signed in when the configuration names a user email.
    pub fn from_config(config: &PortalConfig) -> Self {
        match &config.user_email {
            Some(email) => Self::signed_in(AuthenticatedUser {
                email: email.clone(),
                name: config
                    .user_name
                    .clone()
                    .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string()),
                token: config.auth_token.clone(),
            }),
            None => Self::new(),
        }
    }

    pub fn login(&self, user: AuthenticatedUser) {
        info!(email = %user.email, "signed in");
        *self.user.write() = Some(user);
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.user.read().as_ref().and_then(|user| user.token.clone())
    }
}

impl AuthProvider for AuthSession {
    fn current_user(&self) -> Option<AuthenticatedUser> {
        self.user.read().clone()
    }

    fn logout(&self) {
        if let Some(user) = self.user.write().take() {
            info!(email = %user.email, "signed out");
        }
    }
}
