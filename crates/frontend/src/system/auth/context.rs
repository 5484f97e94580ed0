use contracts::system::auth::Session;
use leptos::prelude::*;

use crate::shared::http::Gateway;

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn user_name(&self) -> String {
        self.session
            .with(|s| s.as_ref().map(|s| s.user_name.clone()))
            .unwrap_or_default()
    }

    pub fn login(&self, session: Session) {
        log::info!("Signed in as {}", session.user_name);
        self.session.set(Some(session));
    }

    pub fn logout(&self) {
        log::info!("Signed out");
        self.session.set(None);
    }

    /// Gateway carrying the current bearer token, read untracked
    pub fn gateway(&self) -> Gateway {
        Gateway::new(self.session.with_untracked(|s| s.as_ref().map(|s| s.token.clone())))
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
