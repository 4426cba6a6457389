//! Sign-in / sign-up page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api::SignUpOutcome;
use crate::components::{Header, LoadingSpinner};
use crate::notify::{Notifier, Toast};
use crate::session::AuthProvider;
use crate::state::AppState;
use crate::types::{AppError, Result};

/// Minimum password length accepted by the provider
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    /// `?mode=signup` selects sign-up, anything else sign-in
    pub fn from_query(mode: Option<&str>) -> Self {
        match mode {
            Some("signup") => AuthMode::SignUp,
            _ => AuthMode::SignIn,
        }
    }
}

/// Cheap checks before contacting the provider
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Auth("Enter a valid email address".to_string()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Auth(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let query = use_query_map();

    let mode = Memo::new(move |_| query.with(|q| AuthMode::from_query(q.get("mode").as_deref())));
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);

    // Already signed in: go straight to the chat
    let auth = state.auth.clone();
    let navigate_for_redirect = navigate.clone();
    spawn_local(async move {
        if let Ok(Some(_)) = auth.get_session().await {
            navigate_for_redirect("/chat", Default::default());
        }
    });

    let state_for_submit = state.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        let toasts = state_for_submit.toasts;

        if let Err(e) = validate_credentials(&email_val, &password_val) {
            toasts.notify_error(&e);
            return;
        }

        let auth = state_for_submit.auth.clone();
        let navigate = navigate.clone();
        let current = mode.get_untracked();

        spawn_local(async move {
            is_loading.set(true);

            let result = match current {
                AuthMode::SignIn => auth
                    .sign_in_with_password(&email_val, &password_val)
                    .await
                    .map(|_| true),
                AuthMode::SignUp => auth.sign_up(&email_val, &password_val).await.map(|outcome| {
                    match outcome {
                        SignUpOutcome::SignedIn(_) => true,
                        SignUpOutcome::ConfirmationRequired => false,
                    }
                }),
            };

            is_loading.try_set(false);

            match result {
                Ok(true) => navigate("/chat", Default::default()),
                Ok(false) => {
                    toasts.notify(Toast::info(
                        "Check your email",
                        "We sent you a confirmation link to finish signing up.",
                    ));
                    navigate("/auth", Default::default());
                }
                Err(e) => toasts.notify_error(&e),
            }
        });
    };

    let is_sign_up = move || mode.get() == AuthMode::SignUp;

    view! {
        <Title text=move || if is_sign_up() { "Sign up - DocChat" } else { "Sign in - DocChat" } />
        <div class="min-h-screen flex flex-col">
            <Header />

            <main class="flex-1 flex items-center justify-center px-4">
                <div class="w-full max-w-md p-8 bg-slate-900 border border-slate-800 rounded-2xl">
                    <h1 class="text-2xl font-bold text-center mb-2">
                        {move || if is_sign_up() { "Create your account" } else { "Welcome back" }}
                    </h1>
                    <p class="text-center text-slate-400 mb-8">
                        {move || if is_sign_up() {
                            "Start chatting with your documents"
                        } else {
                            "Sign in to continue"
                        }}
                    </p>

                    <form on:submit=on_submit class="space-y-4">
                        <div>
                            <label for="email" class="block text-sm font-medium mb-1">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                autocomplete="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                class="w-full px-4 py-2.5 bg-slate-950 border border-slate-800 rounded-lg
                                       focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium mb-1">"Password"</label>
                            <input
                                id="password"
                                type="password"
                                autocomplete=move || if is_sign_up() { "new-password" } else { "current-password" }
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                class="w-full px-4 py-2.5 bg-slate-950 border border-slate-800 rounded-lg
                                       focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            />
                        </div>

                        <button
                            type="submit"
                            disabled=move || is_loading.get()
                            class="w-full py-3 flex items-center justify-center gap-2 rounded-lg font-medium
                                   bg-indigo-600 hover:bg-indigo-700 disabled:bg-slate-700 transition-colors"
                        >
                            <Show when=move || is_loading.get()>
                                <LoadingSpinner />
                            </Show>
                            {move || if is_sign_up() { "Create Account" } else { "Sign In" }}
                        </button>
                    </form>

                    <p class="mt-6 text-center text-sm text-slate-400">
                        {move || if is_sign_up() {
                            view! { "Already have an account? " <a href="/auth" class="text-indigo-400 hover:underline">"Sign in"</a> }.into_any()
                        } else {
                            view! { "Don't have an account? " <a href="/auth?mode=signup" class="text-indigo-400 hover:underline">"Sign up"</a> }.into_any()
                        }}
                    </p>
                </div>
            </main>
        </div>
    }
}
