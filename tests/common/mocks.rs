//! Mock implementations for testing.
//!
//! Hand-written stand-ins for the seams the chat view talks through: the
//! remote chat function, the toast side channel, files handed over by the
//! browser and the identity provider.

#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Arc;

use async_trait::async_trait;
use docchat::api::ChatFunction;
use docchat::files::PickedFile;
use docchat::notify::{Notifier, Toast, ToastVariant};
use docchat::session::{AuthCallback, AuthListeners, AuthProvider, Subscription};
use docchat::types::{
    AppError, AuthEvent, ChatRequest, ChatResponse, Result, Session, UploadedFile, User,
};

/// What the mock chat function answers with
#[derive(Debug, Clone)]
enum Reply {
    Body(ChatResponse),
    TransportFailure(String),
}

/// Mock chat function that records every request it receives.
///
/// # Examples
///
/// ```ignore
/// let chat = MockChatFunction::answering("Answer");
/// let chat = MockChatFunction::with_error("boom");
/// let chat = MockChatFunction::failing("network down");
/// ```
pub struct MockChatFunction {
    reply: Reply,
    requests: RefCell<Vec<ChatRequest>>,
}

impl MockChatFunction {
    /// Respond with `{ content }`
    pub fn answering(content: &str) -> Self {
        Self::with_body(ChatResponse {
            content: Some(content.to_string()),
            error: None,
        })
    }

    /// Respond with `{ error }` in a successful body
    pub fn with_error(error: &str) -> Self {
        Self::with_body(ChatResponse {
            content: None,
            error: Some(error.to_string()),
        })
    }

    pub fn with_body(body: ChatResponse) -> Self {
        Self {
            reply: Reply::Body(body),
            requests: RefCell::new(vec![]),
        }
    }

    /// Fail before any body is returned
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Reply::TransportFailure(message.to_string()),
            requests: RefCell::new(vec![]),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl ChatFunction for MockChatFunction {
    async fn invoke(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.requests.borrow_mut().push(request.clone());
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::TransportFailure(msg) => Err(AppError::Transport(msg.clone())),
        }
    }
}

/// Notifier that keeps every toast it is given
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    pub fn errors(&self) -> Vec<Toast> {
        self.toasts
            .borrow()
            .iter()
            .filter(|t| t.variant == ToastVariant::Destructive)
            .cloned()
            .collect()
    }

    pub fn titles(&self) -> Vec<String> {
        self.toasts.borrow().iter().map(|t| t.title.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

/// In-memory file as the picker or a drop would hand it over
#[derive(Debug, Clone)]
pub struct FakeFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub body: Vec<u8>,
    pub unreadable: bool,
}

impl FakeFile {
    pub fn text(name: &str, mime: &str, body: &str) -> Self {
        Self {
            name: name.to_string(),
            mime: mime.to_string(),
            size: body.len() as u64,
            body: body.as_bytes().to_vec(),
            unreadable: false,
        }
    }

    /// A file whose reported size differs from its (empty) body
    pub fn sized(name: &str, mime: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            mime: mime.to_string(),
            size,
            body: vec![],
            unreadable: false,
        }
    }

    /// A file that fails to read
    pub fn unreadable(mut self) -> Self {
        self.unreadable = true;
        self
    }

    fn read_failure(&self) -> AppError {
        AppError::FileRead {
            name: self.name.clone(),
            reason: "NotReadableError".to_string(),
        }
    }
}

#[async_trait(?Send)]
impl PickedFile for FakeFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime(&self) -> String {
        self.mime.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn read_text(&self) -> Result<String> {
        if self.unreadable {
            return Err(self.read_failure());
        }
        Ok(String::from_utf8_lossy(&self.body).into_owned())
    }

    async fn read_bytes(&self) -> Result<Vec<u8>> {
        if self.unreadable {
            return Err(self.read_failure());
        }
        Ok(self.body.clone())
    }
}

/// Identity provider holding a session in memory
#[derive(Default)]
pub struct MockAuthProvider {
    session: RefCell<Option<Session>>,
    listeners: AuthListeners,
}

impl MockAuthProvider {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(email: &str) -> Self {
        let provider = Self::default();
        *provider.session.borrow_mut() = Some(session_for(email));
        provider
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Simulate the provider completing a sign-in
    pub fn sign_in(&self, email: &str) {
        let session = session_for(email);
        *self.session.borrow_mut() = Some(session.clone());
        self.listeners.emit(AuthEvent::SignedIn, Some(session));
    }
}

#[async_trait(?Send)]
impl AuthProvider for MockAuthProvider {
    async fn get_session(&self) -> Result<Option<Session>> {
        Ok(self.session.borrow().clone())
    }

    fn on_auth_state_change(&self, callback: AuthCallback) -> Subscription {
        self.listeners.subscribe(callback)
    }

    async fn sign_out(&self) -> Result<()> {
        self.session.borrow_mut().take();
        self.listeners.emit(AuthEvent::SignedOut, None);
        Ok(())
    }
}

pub fn session_for(email: &str) -> Session {
    Session {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        expires_at: i64::MAX,
        user: User {
            id: format!("id-{}", email),
            email: Some(email.to_string()),
        },
    }
}

pub fn uploaded(name: &str, content: &str) -> UploadedFile {
    UploadedFile {
        name: name.to_string(),
        content: content.to_string(),
        mime: "text/plain".to_string(),
    }
}

/// Shared callback counter for subscription tests
pub fn counting_callback() -> (AuthCallback, Arc<std::sync::atomic::AtomicUsize>) {
    let count = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let callback: AuthCallback = Arc::new(move |_, _| {
        c.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    });
    (callback, count)
}
