//! Conversation state and the submit round-trip
//!
//! A submission is split in two halves so the view can hold its state in
//! signals across the network await: [`ChatState::begin_submit`] applies the
//! optimistic update and yields the request, [`ChatState::finish_submit`]
//! applies the outcome. [`ChatState::submit`] runs both back to back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::ChatFunction;
use crate::files;
use crate::notify::Notifier;
use crate::types::{AppError, ChatRequest, ChatTurn, Message, Result, Role, UploadedFile};

/// Reply shown when the assistant returns empty content
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't generate a response.";

/// Error text used when a failure carries no message
pub const GENERIC_ERROR: &str = "Failed to get a response. Please try again.";

/// Outgoing content of the final user turn
pub fn compose_content(input: &str, files: &[UploadedFile]) -> String {
    if files.is_empty() {
        return input.to_string();
    }

    let documents = files
        .iter()
        .map(|f| format!("--- {} ---\n{}", f.name, f.content))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{input}\n\nUploaded documents:\n{documents}")
}

/// Prior transcript plus the new user turn with file context appended
pub fn compose_request(history: &[Message], input: &str, files: &[UploadedFile]) -> ChatRequest {
    let mut messages: Vec<ChatTurn> = history.iter().map(Message::turn).collect();
    messages.push(ChatTurn {
        role: Role::User,
        content: compose_content(input, files),
    });
    ChatRequest { messages }
}

/// Invoke the chat function and fold both failure channels into `Err`.
///
/// An empty `error` field counts as no error. A failure without a message
/// is reported as [`GENERIC_ERROR`].
pub async fn request_reply<C>(client: &C, request: &ChatRequest) -> Result<String>
where
    C: ChatFunction + ?Sized,
{
    let response = client.invoke(request).await.map_err(|e| match e {
        AppError::Transport(msg) if msg.trim().is_empty() => {
            AppError::Transport(GENERIC_ERROR.to_string())
        }
        other => other,
    })?;

    if let Some(error) = response.error.filter(|e| !e.is_empty()) {
        return Err(AppError::Remote(error));
    }

    match response.content {
        Some(content) if !content.is_empty() => Ok(content),
        _ => Ok(EMPTY_REPLY_FALLBACK.to_string()),
    }
}

/// Whether the owning view is still mounted.
///
/// Results that arrive after [`Liveness::kill`] are discarded.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn kill(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory state of the chat view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub files: Vec<UploadedFile>,
    pub is_loading: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Something to send and nothing in flight
    pub fn can_submit(&self, input: &str) -> bool {
        !self.is_loading && (!input.trim().is_empty() || !self.files.is_empty())
    }

    pub fn attach(&mut self, uploaded: impl IntoIterator<Item = UploadedFile>) {
        self.files.extend(uploaded);
    }

    pub fn remove_file(&mut self, index: usize) -> Option<UploadedFile> {
        files::remove_file(&mut self.files, index)
    }

    /// Append the user's message and enter the loading state.
    ///
    /// Returns `None` (and changes nothing) when submission is not allowed.
    pub fn begin_submit(&mut self, input: &str) -> Option<ChatRequest> {
        if !self.can_submit(input) {
            return None;
        }

        let request = compose_request(&self.messages, input, &self.files);
        self.messages.push(Message::user(input));
        self.is_loading = true;
        Some(request)
    }

    /// Apply the outcome of a submission; loading always ends here
    pub fn finish_submit(&mut self, outcome: Result<String>, notifier: &dyn Notifier) {
        match outcome {
            Ok(reply) => self.messages.push(Message::assistant(reply)),
            Err(e) => {
                tracing::error!("Chat request failed: {}", e);
                notifier.notify_error(&e);
            }
        }
        self.is_loading = false;
    }

    /// [`ChatState::finish_submit`] for a view that may have unmounted.
    ///
    /// Once `alive` is killed the outcome is dropped: no message, no toast and
    /// the state is left as it was. Returns whether the outcome was applied.
    pub fn finish_submit_if_alive(
        &mut self,
        alive: &Liveness,
        outcome: Result<String>,
        notifier: &dyn Notifier,
    ) -> bool {
        if !alive.is_alive() {
            tracing::debug!("Chat view unmounted, dropping reply");
            return false;
        }
        self.finish_submit(outcome, notifier);
        true
    }

    /// Full submit round-trip. Returns whether a request was sent.
    pub async fn submit<C>(&mut self, input: &str, client: &C, notifier: &dyn Notifier) -> bool
    where
        C: ChatFunction + ?Sized,
    {
        let Some(request) = self.begin_submit(input) else {
            return false;
        };
        let outcome = request_reply(client, &request).await;
        self.finish_submit(outcome, notifier);
        true
    }
}
