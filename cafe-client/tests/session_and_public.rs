//! Session gate and public form flows against fake providers/stores

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cafe_client::screens::NewsletterForm;
use cafe_client::screens::public::SubscribeStore;
use cafe_client::session::{GateDecision, Session, SessionGate, SessionProvider};
use cafe_client::{ClientError, ClientResult};
use shared::models::NewsletterSubscriber;
use tokio::sync::watch;

// ========== Fake session provider ==========

struct FakeSessionProvider {
    tx: watch::Sender<Option<Session>>,
}

impl FakeSessionProvider {
    fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Simulate external expiry/sign-out (another tab, token lapse)
    fn expire(&self) {
        let _ = self.tx.send(None);
    }
}

#[async_trait]
impl SessionProvider for FakeSessionProvider {
    async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Session> {
        if password != "open-sesame" {
            return Err(ClientError::Unauthorized);
        }
        let session = Session {
            token: "fake-token".into(),
            email: email.into(),
            expires_at: i64::MAX,
        };
        let _ = self.tx.send(Some(session.clone()));
        Ok(session)
    }

    fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    async fn sign_out(&self) {
        let _ = self.tx.send(None);
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }

    fn teardown(&self) {}
}

#[tokio::test]
async fn unauthenticated_mount_redirects() {
    let provider = Arc::new(FakeSessionProvider::new());
    let gate = SessionGate::new(provider);
    assert_eq!(gate.mount(), GateDecision::RedirectToLogin);
}

#[tokio::test]
async fn signed_in_mount_allows() {
    let provider = Arc::new(FakeSessionProvider::new());
    provider
        .sign_in("pilot@365travelcafe.in", "open-sesame")
        .await
        .unwrap();

    let gate = SessionGate::new(provider);
    match gate.mount() {
        GateDecision::Allow(session) => assert_eq!(session.email, "pilot@365travelcafe.in"),
        other => panic!("expected Allow, got {other:?}"),
    }
}

#[tokio::test]
async fn bad_credentials_do_not_create_a_session() {
    let provider = Arc::new(FakeSessionProvider::new());
    let err = provider
        .sign_in("pilot@365travelcafe.in", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(provider.current().is_none());
}

#[tokio::test]
async fn external_signout_triggers_redirect_mid_session() {
    let provider = Arc::new(FakeSessionProvider::new());
    provider
        .sign_in("pilot@365travelcafe.in", "open-sesame")
        .await
        .unwrap();

    let gate = SessionGate::new(provider.clone());
    let watcher = tokio::spawn(async move { gate.watch().await });

    // give the watcher a chance to park on the channel
    tokio::task::yield_now().await;
    provider.expire();

    assert_eq!(watcher.await.unwrap(), GateDecision::RedirectToLogin);
}

#[tokio::test]
async fn signout_then_mount_redirects() {
    let provider = Arc::new(FakeSessionProvider::new());
    provider
        .sign_in("pilot@365travelcafe.in", "open-sesame")
        .await
        .unwrap();
    provider.sign_out().await;

    let gate = SessionGate::new(provider);
    assert_eq!(gate.mount(), GateDecision::RedirectToLogin);
}

// ========== Newsletter form ==========

struct FakeNewsletter {
    emails: Mutex<HashSet<String>>,
    calls: AtomicUsize,
}

impl FakeNewsletter {
    fn new() -> Self {
        Self {
            emails: Mutex::new(HashSet::new()),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SubscribeStore for &FakeNewsletter {
    async fn subscribe(&self, email: &str) -> ClientResult<NewsletterSubscriber> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut emails = self.emails.lock().unwrap();
        if !emails.insert(email.to_string()) {
            return Err(ClientError::Conflict("Email already subscribed".into()));
        }
        Ok(NewsletterSubscriber {
            id: emails.len() as i64,
            email: email.to_string(),
            created_at: 0,
        })
    }
}

#[tokio::test]
async fn invalid_email_is_rejected_before_any_remote_call() {
    let store = FakeNewsletter::new();
    let mut form = NewsletterForm::new(&store);
    form.email = "not-an-email".into();

    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(form.message(), Some("Please enter a valid email address."));
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn duplicate_subscription_gets_its_own_message() {
    let store = FakeNewsletter::new();
    let mut form = NewsletterForm::new(&store);

    form.email = "rahul@gmail.com".into();
    form.submit().await.unwrap();
    assert_eq!(form.message(), Some("Successfully subscribed!"));
    assert!(form.email.is_empty());

    form.email = "rahul@gmail.com".into();
    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, ClientError::Conflict(_)));
    assert_eq!(form.message(), Some("You are already subscribed!"));
    assert_eq!(store.calls.load(Ordering::SeqCst), 2);
}
