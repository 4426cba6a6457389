//! Toast stack

use leptos::prelude::*;

use crate::notify::{Toast, ToastVariant};
use crate::state::AppState;

/// Renders the application's toast queue in the bottom-right corner
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<AppState>().toasts;

    view! {
        <div class="fixed bottom-4 right-4 z-[60] flex flex-col gap-2 w-80">
            {move || {
                toasts.items.get().into_iter().map(|toast: Toast| {
                    let id = toast.id.clone();
                    let tone = match toast.variant {
                        ToastVariant::Default => "bg-slate-800 border-slate-700",
                        ToastVariant::Destructive => "bg-red-950 border-red-800",
                    };
                    view! {
                        <div class=format!("border rounded-lg p-4 shadow-lg animate-fade-in {}", tone)>
                            <div class="flex items-start justify-between gap-2">
                                <div>
                                    <p class="font-semibold text-sm">{toast.title}</p>
                                    <p class="text-sm text-slate-300 mt-1 break-words">{toast.description}</p>
                                </div>
                                <button
                                    on:click=move |_| toasts.dismiss(&id)
                                    class="text-slate-500 hover:text-slate-200"
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>
                    }
                }).collect::<Vec<_>>()
            }}
        </div>
    }
}
