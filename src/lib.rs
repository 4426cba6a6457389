//! DocChat - Leptos client for chatting about uploaded documents
//!
//! Signed-in users attach PDF, Office, text and markdown files and ask a
//! remote assistant about them. Authentication and the assistant itself live
//! behind a managed backend; this crate holds only the browser-side state.

pub mod api;
pub mod components;
pub mod config;
pub mod conversation;
pub mod files;
pub mod markdown;
pub mod notify;
pub mod pages;
pub mod session;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use components::Toaster;
use pages::{auth::AuthPage, chat::ChatPage, landing::LandingPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::default());

    view! {
        <Title text="DocChat" />
        <Router>
            <main class="min-h-screen bg-slate-950 text-slate-100">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/auth") view=AuthPage />
                    <Route path=path!("/chat") view=ChatPage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
