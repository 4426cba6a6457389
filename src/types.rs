//! Data model, wire types and the client error type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Message in the transcript
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// The role/content pair sent to the chat function
    pub fn turn(&self) -> ChatTurn {
        ChatTurn {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

/// A file that passed validation and is attached to outgoing messages.
///
/// `content` holds the decoded text for text and markdown files, and a
/// metadata placeholder for binary documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub content: String,
    #[serde(rename = "type")]
    pub mime: String,
}

/// One entry of the outgoing message list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// Body posted to the chat function
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
}

impl ChatRequest {
    /// Content of the final turn, the one carrying the file context
    pub fn last_content(&self) -> Option<&str> {
        self.messages.last().map(|turn| turn.content.as_str())
    }
}

/// Body returned by the chat function
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("Signed in")
    }
}

/// Provider session, persisted between page loads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) after which the access token is stale
    pub expires_at: i64,
    pub user: User,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.expires_at
    }
}

/// Authentication state change reported to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// Client error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("{name} is not a supported file type")]
    UnsupportedFileType { name: String },

    #[error("{name} exceeds the 10MB size limit")]
    FileTooLarge { name: String, size: u64 },

    #[error("Could not read {name}: {reason}")]
    FileRead { name: String, reason: String },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Remote(String),

    #[error("{0}")]
    Auth(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Short heading shown above the error description
    pub fn title(&self) -> &'static str {
        match self {
            AppError::UnsupportedFileType { .. } => "Unsupported file type",
            AppError::FileTooLarge { .. } => "File too large",
            AppError::FileRead { .. } => "Upload failed",
            AppError::Transport(_) | AppError::Remote(_) => "Error",
            AppError::Auth(_) => "Authentication error",
            AppError::Config(_) => "Configuration error",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
