//! Toast notifications
//!
//! Errors and confirmations are reported through the [`Notifier`] side
//! channel instead of being returned to the event handlers that raised them.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::types::AppError;

/// How long a toast stays on screen
pub const TOAST_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A transient, dismissable notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, ToastVariant::Default)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, ToastVariant::Destructive)
    }

    pub fn from_error(err: &AppError) -> Self {
        Self::error(err.title(), err.to_string())
    }

    fn new(title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            variant,
        }
    }
}

/// Capability to surface a toast to the user
pub trait Notifier {
    fn notify(&self, toast: Toast);

    fn notify_error(&self, err: &AppError) {
        self.notify(Toast::from_error(err));
    }
}

/// Signal-backed toast queue rendered by the `Toaster` component
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    pub items: RwSignal<Vec<Toast>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(vec![]),
        }
    }

    pub fn dismiss(&self, id: &str) {
        // The owning view may already be gone when a timer fires
        self.items.try_update(|items| items.retain(|t| t.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toasts {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => tracing::debug!("toast: {}", toast.title),
            ToastVariant::Destructive => {
                tracing::warn!("toast: {} - {}", toast.title, toast.description)
            }
        }

        let id = toast.id.clone();
        self.items.update(|items| items.push(toast));

        let toasts = *self;
        Timeout::new(TOAST_TIMEOUT_MS, move || toasts.dismiss(&id)).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Collect(RefCell<Vec<Toast>>);

    impl Notifier for Collect {
        fn notify(&self, toast: Toast) {
            self.0.borrow_mut().push(toast);
        }
    }

    #[test]
    fn test_notify_error_uses_error_title_and_message() {
        let collect = Collect::default();
        collect.notify_error(&AppError::Remote("boom".to_string()));

        let toasts = collect.0.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Error");
        assert_eq!(toasts[0].description, "boom");
        assert_eq!(toasts[0].variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_info_toast_is_default_variant() {
        let toast = Toast::info("File uploaded", "a.txt");
        assert_eq!(toast.variant, ToastVariant::Default);
        assert!(!toast.id.is_empty());
    }
}
