//! Full-viewport overlay shown while files are dragged over the chat

use leptos::prelude::*;

use crate::files::ACCEPT;

#[component]
pub fn DropOverlay() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 bg-indigo-950/80 backdrop-blur-sm pointer-events-none
                    flex items-center justify-center">
            <div class="border-2 border-dashed border-indigo-400 rounded-2xl px-16 py-12 text-center">
                <div class="text-5xl mb-4">"📂"</div>
                <p class="text-xl font-semibold text-indigo-100">"Drop files to upload"</p>
                <p class="text-sm text-indigo-300 mt-2">{ACCEPT.replace(',', " ")}</p>
            </div>
        </div>
    }
}
