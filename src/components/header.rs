//! Header component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notify::Notifier;
use crate::session::AuthProvider;
use crate::state::AppState;

/// Main application header.
///
/// With an `email` the signed-in user and a sign-out button are shown,
/// otherwise links to the sign-in and sign-up routes.
#[component]
pub fn Header(#[prop(into, optional)] email: MaybeProp<String>) -> impl IntoView {
    let state = expect_context::<AppState>();

    let sign_out = move |_: leptos::ev::MouseEvent| {
        let auth = state.auth.clone();
        let toasts = state.toasts;
        spawn_local(async move {
            // The chat view's session listener handles the redirect
            if let Err(e) = auth.sign_out().await {
                toasts.notify_error(&e);
            }
        });
    };

    view! {
        <header class="h-16 sticky top-0 z-40 border-b border-slate-800 bg-slate-950/80 backdrop-blur">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                <a href="/" class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                    <span class="text-2xl">"📄"</span>
                    <span class="text-xl font-bold bg-gradient-to-r from-indigo-400 to-fuchsia-400 bg-clip-text text-transparent">
                        "DocChat"
                    </span>
                </a>

                <nav class="flex items-center gap-3">
                    {move || match email.get() {
                        Some(email) => {
                            let sign_out = sign_out.clone();
                            view! {
                                <span class="hidden sm:inline text-sm text-slate-400">{email}</span>
                                <button
                                    on:click=sign_out
                                    class="px-4 py-2 rounded-lg text-sm hover:bg-slate-800 transition-colors"
                                >
                                    "Sign Out"
                                </button>
                            }.into_any()
                        }
                        None => view! {
                            <a href="/auth" class="px-4 py-2 rounded-lg text-sm hover:bg-slate-800 transition-colors">
                                "Sign In"
                            </a>
                            <a
                                href="/auth?mode=signup"
                                class="px-4 py-2 rounded-lg text-sm font-medium bg-indigo-600 hover:bg-indigo-700 transition-colors"
                            >
                                "Get Started"
                            </a>
                        }.into_any(),
                    }}
                </nav>
            </div>
        </header>
    }
}
