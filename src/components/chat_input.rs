//! Chat input component

use leptos::prelude::*;

/// Enter submits; Shift+Enter falls through and inserts a newline
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Message textarea with attach and send buttons
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when the user submits
    on_submit: impl Fn() + 'static + Clone + Send + Sync,
    /// Called when the attach button is pressed
    on_attach: impl Fn() + 'static + Clone + Send + Sync,
    /// Whether a submission is allowed right now
    #[prop(into)]
    can_submit: Signal<bool>,
    /// Whether the input is disabled
    #[prop(into)]
    disabled: Signal<bool>,
    /// Placeholder text
    #[prop(default = "Ask about your documents...")]
    placeholder: &'static str,
) -> impl IntoView {
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if is_submit_key(&ev.key(), ev.shift_key()) {
                ev.prevent_default();
                if can_submit.get_untracked() {
                    on_submit();
                }
            }
        }
    };

    let on_button_click = move |_: leptos::ev::MouseEvent| {
        if can_submit.get_untracked() {
            on_submit();
        }
    };

    view! {
        <div class="flex items-end gap-3 p-4 bg-slate-900/60 backdrop-blur-sm border-t border-slate-800">
            <button
                on:click=move |_| on_attach()
                disabled=move || disabled.get()
                title="Attach documents"
                class="p-3 rounded-xl text-slate-400 hover:text-slate-100 hover:bg-slate-800
                       disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
            >
                <svg xmlns="http://www.w3.org/2000/svg" class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M15.172 7l-6.586 6.586a2 2 0 102.828 2.828l6.414-6.586a4 4 0 00-5.656-5.656l-6.415 6.585a6 6 0 108.486 8.486L20.5 13" />
                </svg>
            </button>

            <div class="flex-1 relative">
                <textarea
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    placeholder=placeholder
                    disabled=move || disabled.get()
                    rows="1"
                    class="w-full px-4 py-3 bg-slate-950 border border-slate-800 rounded-xl resize-none
                           text-slate-100 placeholder-slate-500
                           focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-transparent
                           disabled:opacity-50 disabled:cursor-not-allowed"
                    style="max-height: 200px;"
                ></textarea>
            </div>

            <button
                on:click=on_button_click
                disabled=move || !can_submit.get()
                class="p-3 bg-indigo-600 hover:bg-indigo-700 disabled:bg-slate-800
                       disabled:cursor-not-allowed rounded-xl transition-colors"
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="w-5 h-5 text-white"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <line x1="22" y1="2" x2="11" y2="13"></line>
                    <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                </svg>
            </button>
        </div>
    }
}
