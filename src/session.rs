//! Session guard and authentication-state subscriptions

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::types::{AuthEvent, Result, Session, User};

/// Route unauthenticated visitors are sent to
pub const SIGN_IN_ROUTE: &str = "/auth";

/// Callback invoked on every authentication-state change
pub type AuthCallback = Arc<dyn Fn(AuthEvent, Option<Session>) + Send + Sync>;

/// Identity provider seen from the client
#[async_trait(?Send)]
pub trait AuthProvider {
    /// Current session, if any
    async fn get_session(&self) -> Result<Option<Session>>;

    /// Register for state changes; the listener lives as long as the
    /// returned [`Subscription`]
    fn on_auth_state_change(&self, callback: AuthCallback) -> Subscription;

    async fn sign_out(&self) -> Result<()>;
}

/// Handle to a registered listener.
///
/// Dropping it releases the listener; [`Subscription::unsubscribe`] does the
/// same explicitly. Release happens at most once.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, AuthCallback)>,
}

/// Listener registry shared by an [`AuthProvider`] implementation
#[derive(Clone, Default)]
pub struct AuthListeners {
    inner: Arc<Mutex<Registry>>,
}

impl AuthListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: AuthCallback) -> Subscription {
        let id = {
            let mut registry = self.inner.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, callback));
            id
        };

        let inner = Arc::clone(&self.inner);
        Subscription::new(move || {
            inner.lock().listeners.retain(|(lid, _)| *lid != id);
        })
    }

    /// Deliver an event to every listener
    pub fn emit(&self, event: AuthEvent, session: Option<Session>) {
        // Snapshot so callbacks may subscribe or unsubscribe re-entrantly
        let listeners: Vec<AuthCallback> = self
            .inner
            .lock()
            .listeners
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();

        tracing::debug!("auth event {:?} to {} listener(s)", event, listeners.len());
        for listener in listeners {
            listener(event, session.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Entry gate of the chat view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Unresolved,
    Authenticated(User),
    Unauthenticated,
}

impl GuardState {
    /// State after observing a session (or its absence)
    pub fn observe(session: Option<&Session>) -> Self {
        match session {
            Some(session) => GuardState::Authenticated(session.user.clone()),
            None => GuardState::Unauthenticated,
        }
    }

    /// Where to navigate, if anywhere
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GuardState::Unauthenticated => Some(SIGN_IN_ROUTE),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            GuardState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, GuardState::Unresolved)
    }
}

/// Receives every [`GuardState`] a [`SessionGuard`] resolves
pub type GuardCallback = Arc<dyn Fn(GuardState) + Send + Sync>;

/// Delivery side of a [`SessionGuard`], cloneable into async tasks.
///
/// Stops delivering once the guard is detached or dropped.
#[derive(Clone)]
pub struct GuardResolver {
    on_state: GuardCallback,
    active: Arc<AtomicBool>,
}

impl GuardResolver {
    fn deliver(&self, state: GuardState) {
        if self.active.load(Ordering::Acquire) {
            (self.on_state)(state);
        }
    }

    /// Look the session up once and deliver the result
    pub async fn resolve<P>(&self, provider: &P)
    where
        P: AuthProvider + ?Sized,
    {
        let session = provider.get_session().await.unwrap_or_else(|e| {
            tracing::warn!("Session lookup failed: {}", e);
            None
        });
        self.deliver(GuardState::observe(session.as_ref()));
    }
}

/// Entry gate wiring of a session-protected view.
///
/// Subscribes to auth-state changes on [`SessionGuard::attach`]; the first
/// lookup runs through [`GuardResolver::resolve`]. Whichever arrives first
/// resolves the gate and later events keep it current. Detaching (or
/// dropping) releases the subscription and silences pending lookups.
pub struct SessionGuard {
    resolver: GuardResolver,
    _subscription: Subscription,
}

impl SessionGuard {
    pub fn attach<P>(provider: &P, on_state: impl Fn(GuardState) + Send + Sync + 'static) -> Self
    where
        P: AuthProvider + ?Sized,
    {
        let resolver = GuardResolver {
            on_state: Arc::new(on_state),
            active: Arc::new(AtomicBool::new(true)),
        };

        let listener = resolver.clone();
        let subscription = provider.on_auth_state_change(Arc::new(move |event, session| {
            tracing::debug!("Session guard saw auth event {:?}", event);
            listener.deliver(GuardState::observe(session.as_ref()));
        }));

        Self {
            resolver,
            _subscription: subscription,
        }
    }

    pub fn resolver(&self) -> GuardResolver {
        self.resolver.clone()
    }

    /// Stop all updates and release the subscription
    pub fn detach(self) {}
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.resolver.active.store(false, Ordering::Release);
    }
}
