//! Client configuration
//!
//! Values are baked in at build time from `DOCCHAT_*` environment variables,
//! falling back to the defaults of a local Supabase development stack.

use crate::types::{AppError, Result};

const DEFAULT_SUPABASE_URL: &str = "http://localhost:54321";
const DEFAULT_CHAT_FUNCTION: &str = "chat";

/// Connection settings for the managed backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub supabase_url: String,
    /// Public anon key sent as the `apikey` header
    pub supabase_anon_key: String,
    /// Name of the edge function that answers chat requests
    pub chat_function: String,
}

impl ClientConfig {
    pub fn new(
        supabase_url: impl Into<String>,
        supabase_anon_key: impl Into<String>,
        chat_function: impl Into<String>,
    ) -> Self {
        Self {
            supabase_url: supabase_url.into().trim_end_matches('/').to_string(),
            supabase_anon_key: supabase_anon_key.into(),
            chat_function: chat_function.into(),
        }
    }

    /// Read the configuration captured at compile time
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("DOCCHAT_SUPABASE_URL").unwrap_or(DEFAULT_SUPABASE_URL),
            option_env!("DOCCHAT_SUPABASE_ANON_KEY").unwrap_or_default(),
            option_env!("DOCCHAT_CHAT_FUNCTION").unwrap_or(DEFAULT_CHAT_FUNCTION),
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.supabase_url.is_empty() {
            return Err(AppError::Config("Supabase URL is empty".to_string()));
        }
        if !(self.supabase_url.starts_with("http://") || self.supabase_url.starts_with("https://"))
        {
            return Err(AppError::Config(format!(
                "Supabase URL must be http(s): {}",
                self.supabase_url
            )));
        }
        if self.chat_function.trim().is_empty() {
            return Err(AppError::Config("chat function name is empty".to_string()));
        }
        Ok(())
    }

    /// Endpoint under `/auth/v1`
    pub fn auth_url(&self, path: &str) -> String {
        format!(
            "{}/auth/v1/{}",
            self.supabase_url,
            path.trim_start_matches('/')
        )
    }

    /// Endpoint of an edge function
    pub fn function_url(&self, name: &str) -> String {
        format!("{}/functions/v1/{}", self.supabase_url, name)
    }

    pub fn chat_url(&self) -> String {
        self.function_url(&self.chat_function)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
