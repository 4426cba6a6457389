//! Client for the managed backend: identity provider and chat function

use std::sync::Arc;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::session::{AuthCallback, AuthListeners, AuthProvider, Subscription};
use crate::types::{AppError, AuthEvent, ChatRequest, ChatResponse, Result, Session, User};

const STORAGE_KEY_SESSION: &str = "docchat_session";

/// Remote function that answers a conversation.
///
/// `Err` is the transport channel (the call itself failed); an `error`
/// field inside an `Ok` response is the application channel.
#[async_trait(?Send)]
pub trait ChatFunction {
    async fn invoke(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

/// Error bodies returned by the auth and functions endpoints
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: User,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        let expires_at = self.expires_at.unwrap_or_else(|| {
            chrono::Utc::now().timestamp() + self.expires_in.unwrap_or(3600)
        });
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

#[derive(Serialize)]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Result of a sign-up attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The project auto-confirms accounts; a session is active
    SignedIn(Session),
    /// A confirmation email was sent; no session yet
    ConfirmationRequired,
}

fn with_keys(req: RequestBuilder, anon_key: &str, token: Option<&str>) -> RequestBuilder {
    let bearer = format!("Bearer {}", token.unwrap_or(anon_key));
    req.header("apikey", anon_key)
        .header("Authorization", &bearer)
}

async fn failure_message(resp: Response) -> String {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => body
            .into_message()
            .unwrap_or_else(|| format!("Request failed with status {}", status)),
        Err(_) => format!("Request failed with status {}", status),
    }
}

/// POST a JSON body and decode a JSON reply
async fn post_json<T, R>(url: &str, body: &T, anon_key: &str, token: Option<&str>) -> Result<R>
where
    T: Serialize,
    R: DeserializeOwned,
{
    let req = with_keys(Request::post(url), anon_key, token)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| AppError::Transport(format!("Failed to serialize request: {}", e)))?;

    let resp = req
        .send()
        .await
        .map_err(|e| AppError::Transport(format!("Network error: {}", e)))?;

    if !resp.ok() {
        return Err(AppError::Transport(failure_message(resp).await));
    }

    resp.json::<R>()
        .await
        .map_err(|e| AppError::Transport(format!("Failed to parse response: {}", e)))
}

fn auth_error(err: AppError) -> AppError {
    match err {
        AppError::Transport(msg) => AppError::Auth(msg),
        other => other,
    }
}

/// Supabase GoTrue client with a browser-persisted session
#[derive(Clone)]
pub struct SupabaseAuth {
    config: Arc<ClientConfig>,
    listeners: AuthListeners,
}

impl SupabaseAuth {
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Self {
            config,
            listeners: AuthListeners::new(),
        }
    }

    fn stored_session() -> Option<Session> {
        LocalStorage::get::<Session>(STORAGE_KEY_SESSION).ok()
    }

    fn store_session(session: &Session) {
        if let Err(e) = LocalStorage::set(STORAGE_KEY_SESSION, session) {
            tracing::warn!("Failed to persist session: {}", e);
        }
    }

    fn clear_session() {
        LocalStorage::delete(STORAGE_KEY_SESSION);
    }

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let url = self.config.auth_url("token?grant_type=password");
        let body = PasswordCredentials { email, password };
        let token: TokenResponse = post_json(&url, &body, &self.config.supabase_anon_key, None)
            .await
            .map_err(auth_error)?;

        let session = token.into_session();
        Self::store_session(&session);
        tracing::info!("Signed in as {}", session.user.display_email());
        self.listeners.emit(AuthEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome> {
        let url = self.config.auth_url("signup");
        let body = PasswordCredentials { email, password };
        let reply: serde_json::Value = post_json(&url, &body, &self.config.supabase_anon_key, None)
            .await
            .map_err(auth_error)?;

        if reply.get("access_token").is_none() {
            tracing::info!("Sign-up pending email confirmation");
            return Ok(SignUpOutcome::ConfirmationRequired);
        }

        let token: TokenResponse = serde_json::from_value(reply)
            .map_err(|e| AppError::Auth(format!("Unexpected sign-up response: {}", e)))?;
        let session = token.into_session();
        Self::store_session(&session);
        self.listeners.emit(AuthEvent::SignedIn, Some(session.clone()));
        Ok(SignUpOutcome::SignedIn(session))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session> {
        let url = self.config.auth_url("token?grant_type=refresh_token");
        let body = RefreshRequest { refresh_token };
        let token: TokenResponse = post_json(&url, &body, &self.config.supabase_anon_key, None)
            .await
            .map_err(auth_error)?;
        Ok(token.into_session())
    }
}

#[async_trait(?Send)]
impl AuthProvider for SupabaseAuth {
    async fn get_session(&self) -> Result<Option<Session>> {
        let Some(session) = Self::stored_session() else {
            return Ok(None);
        };

        if !session.is_expired(chrono::Utc::now()) {
            return Ok(Some(session));
        }

        tracing::debug!("Stored session expired, refreshing");
        match self.refresh(&session.refresh_token).await {
            Ok(fresh) => {
                Self::store_session(&fresh);
                self.listeners
                    .emit(AuthEvent::TokenRefreshed, Some(fresh.clone()));
                Ok(Some(fresh))
            }
            Err(e) => {
                tracing::warn!("Session refresh failed: {}", e);
                Self::clear_session();
                self.listeners.emit(AuthEvent::SignedOut, None);
                Ok(None)
            }
        }
    }

    fn on_auth_state_change(&self, callback: AuthCallback) -> Subscription {
        self.listeners.subscribe(callback)
    }

    async fn sign_out(&self) -> Result<()> {
        if let Some(session) = Self::stored_session() {
            let url = self.config.auth_url("logout");
            let req = with_keys(
                Request::post(&url),
                &self.config.supabase_anon_key,
                Some(&session.access_token),
            );
            // The local session is dropped even if the server call fails
            match req.send().await {
                Ok(resp) if !resp.ok() => {
                    tracing::warn!("Logout returned status {}", resp.status())
                }
                Err(e) => tracing::warn!("Logout request failed: {}", e),
                Ok(_) => {}
            }
        }

        Self::clear_session();
        tracing::info!("Signed out");
        self.listeners.emit(AuthEvent::SignedOut, None);
        Ok(())
    }
}

/// Chat edge function, invoked with the caller's session token
#[derive(Clone)]
pub struct SupabaseChat {
    config: Arc<ClientConfig>,
    auth: SupabaseAuth,
}

impl SupabaseChat {
    pub fn new(config: Arc<ClientConfig>, auth: SupabaseAuth) -> Self {
        Self { config, auth }
    }
}

#[async_trait(?Send)]
impl ChatFunction for SupabaseChat {
    async fn invoke(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let token = self
            .auth
            .get_session()
            .await?
            .map(|session| session.access_token);

        tracing::debug!(
            "Invoking {} with {} message(s)",
            self.config.chat_function,
            request.messages.len()
        );
        post_json(
            &self.config.chat_url(),
            request,
            &self.config.supabase_anon_key,
            token.as_deref(),
        )
        .await
    }
}
