//! Admin session lifecycle
//!
//! The session lives behind an injectable [`SessionProvider`] with an
//! explicit `init → subscribe → teardown` lifecycle instead of a
//! module-level singleton, so the admin area (and its tests) can run
//! against any provider. Session changes propagate over a watch channel;
//! the gate re-checks the moment the value changes.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::ClientResult;
use crate::http::CloudClient;

/// An authenticated admin session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub email: String,
    /// Unix timestamp (seconds) the session lapses at
    pub expires_at: i64,
}

/// Source of truth for the current session
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Exchange credentials for a session
    async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Session>;

    /// The current session, if any
    fn current(&self) -> Option<Session>;

    /// Clear the session
    async fn sign_out(&self);

    /// Subscribe to session changes (sign-in, sign-out, expiry)
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;

    /// Release background resources (expiry timers etc.)
    fn teardown(&self);
}

/// Provider backed by cafe-cloud's login endpoint
///
/// Token expiry is handled locally: a timer clears the session the moment
/// the token lapses, which flows out through the watch channel like any
/// other sign-out.
pub struct CloudSessionProvider {
    client: Arc<CloudClient>,
    tx: watch::Sender<Option<Session>>,
    expiry_task: Mutex<Option<tokio::task::JoinHandle<()>>>,
}

impl CloudSessionProvider {
    pub fn new(client: Arc<CloudClient>) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            client,
            tx,
            expiry_task: Mutex::new(None),
        }
    }

    fn abort_expiry_timer(&self) {
        if let Ok(mut guard) = self.expiry_task.lock()
            && let Some(task) = guard.take()
        {
            task.abort();
        }
    }

    fn arm_expiry_timer(&self, expires_at: i64) {
        self.abort_expiry_timer();

        let remaining = expires_at - now_secs();
        let tx = self.tx.clone();
        let client = self.client.clone();
        let task = tokio::spawn(async move {
            if remaining > 0 {
                tokio::time::sleep(std::time::Duration::from_secs(remaining as u64)).await;
            }
            tracing::info!("Admin session expired");
            client.set_token(None);
            let _ = tx.send(None);
        });

        if let Ok(mut guard) = self.expiry_task.lock() {
            *guard = Some(task);
        }
    }
}

fn now_secs() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[async_trait]
impl SessionProvider for CloudSessionProvider {
    async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Session> {
        let response = self.client.login(email, password).await?;
        let session = Session {
            token: response.token.clone(),
            email: response.email,
            expires_at: response.expires_at,
        };

        self.client.set_token(Some(response.token));
        let _ = self.tx.send(Some(session.clone()));
        self.arm_expiry_timer(session.expires_at);

        Ok(session)
    }

    fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    async fn sign_out(&self) {
        self.abort_expiry_timer();
        self.client.set_token(None);
        let _ = self.tx.send(None);
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }

    fn teardown(&self) {
        self.abort_expiry_timer();
    }
}

/// Where the admin shell should send the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Session present; render the admin area
    Allow(Session),
    /// No session; go to the login screen
    RedirectToLogin,
}

/// Guards the admin area behind an authenticated session
pub struct SessionGate<P: SessionProvider> {
    provider: Arc<P>,
}

impl<P: SessionProvider> SessionGate<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Check on mount: admit or redirect
    pub fn mount(&self) -> GateDecision {
        match self.provider.current() {
            Some(session) => GateDecision::Allow(session),
            None => GateDecision::RedirectToLogin,
        }
    }

    /// Watch for the session disappearing (expiry, external sign-out) for
    /// the lifetime of the admin area. Resolves with the redirect the
    /// moment the session becomes absent.
    pub async fn watch(&self) -> GateDecision {
        let mut rx = self.provider.subscribe();

        if self.provider.current().is_none() {
            return GateDecision::RedirectToLogin;
        }

        loop {
            if rx.changed().await.is_err() {
                // provider dropped; treat as signed out
                return GateDecision::RedirectToLogin;
            }
            if rx.borrow_and_update().is_none() {
                return GateDecision::RedirectToLogin;
            }
        }
    }
}
