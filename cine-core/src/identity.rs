use serde::{Deserialize, Serialize};

/// The signed-in visitor, as reported by the external identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
}

/// External identity provider contract.
///
/// The engine never persists credentials; it only asks who is signed in and,
/// for anonymous visitors, requests that the surrounding shell open its
/// sign-in flow.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<CurrentUser>;

    /// Ask the shell to open its external sign-in interaction
    fn prompt_sign_in(&self);
}

/// Fixed identity for demos and tests
pub struct StaticIdentity {
    user: Option<CurrentUser>,
}

impl StaticIdentity {
    pub fn signed_in(id: impl Into<String>) -> Self {
        Self {
            user: Some(CurrentUser { id: id.into() }),
        }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user.clone()
    }

    fn prompt_sign_in(&self) {
        tracing::info!("Sign-in requested for anonymous visitor");
    }
}
