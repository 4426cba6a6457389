//! Loading indicators

use leptos::prelude::*;

/// Spinner loading indicator
#[component]
pub fn LoadingSpinner(
    #[prop(default = "w-5 h-5")] size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=format!("{} animate-spin text-indigo-400", size)
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            ></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}

/// Placeholder bubble while the assistant is answering
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-start gap-3 message-appear">
            <div class="w-8 h-8 rounded-full bg-gradient-to-br from-violet-500 to-fuchsia-600 flex items-center justify-center text-white text-sm font-medium shrink-0">
                "🤖"
            </div>
            <div class="px-4 py-3 bg-slate-800 rounded-2xl rounded-tl-sm">
                <LoadingSpinner />
            </div>
        </div>
    }
}

/// Shown while the session is being resolved
#[component]
pub fn FullPageLoading(
    #[prop(default = "Loading...")] message: &'static str,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="flex flex-col items-center gap-4">
                <LoadingSpinner size="w-10 h-10" />
                <p class="text-slate-400 font-medium">{message}</p>
            </div>
        </div>
    }
}
