use anyhow::{bail, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Resolves who is signed in. `current_user` is a cached-session read done
/// once at boot; `login`/`logout` may talk to a remote identity provider.
#[async_trait]
pub trait AuthGate: Send + Sync {
    fn current_user(&self) -> Option<Identity>;

    async fn login(&self, credentials: &Credentials) -> Result<Identity>;

    async fn logout(&self) -> Result<()>;
}

/// Session-in-memory gate for local shells and tests. `login` accepts any
/// non-empty credentials and derives the display name from the email.
#[derive(Debug)]
pub struct InMemoryAuthGate {
    session: RwLock<Option<Identity>>,
}

impl InMemoryAuthGate {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
        }
    }

    /// Start with an already-signed-in user, as after a remembered session.
    pub fn with_session(identity: Identity) -> Self {
        Self {
            session: RwLock::new(Some(identity)),
        }
    }
}

impl Default for InMemoryAuthGate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthGate for InMemoryAuthGate {
    fn current_user(&self) -> Option<Identity> {
        self.session.read().clone()
    }

    async fn login(&self, credentials: &Credentials) -> Result<Identity> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            bail!("email and password are required");
        }

        let name = credentials
            .email
            .split('@')
            .next()
            .filter(|part| !part.is_empty())
            .unwrap_or(&credentials.email)
            .to_string();
        let identity = Identity::new(name, credentials.email.clone());

        debug!(email = %identity.email, "session opened");
        *self.session.write() = Some(identity.clone());
        Ok(identity)
    }

    async fn logout(&self) -> Result<()> {
        debug!("session closed");
        *self.session.write() = None;
        Ok(())
    }
}
