//! Application context shared by all pages

use std::sync::Arc;

use crate::api::{SupabaseAuth, SupabaseChat};
use crate::config::ClientConfig;
use crate::notify::Toasts;

/// Global application state, provided once at the root
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ClientConfig>,
    /// Identity provider client
    pub auth: SupabaseAuth,
    /// Remote chat function
    pub chat: SupabaseChat,
    pub toasts: Toasts,
}

impl AppState {
    pub fn new(config: ClientConfig) -> Self {
        if let Err(e) = config.validate() {
            tracing::error!("{}", e);
        }

        let config = Arc::new(config);
        let auth = SupabaseAuth::new(Arc::clone(&config));
        let chat = SupabaseChat::new(Arc::clone(&config), auth.clone());

        Self {
            config,
            auth,
            chat,
            toasts: Toasts::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ClientConfig::from_build_env())
    }
}
