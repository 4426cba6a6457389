//! Chat page - document upload and conversation
//!
//! Entry is gated on a session: the page subscribes to auth-state changes,
//! fetches the current session once, shows a loader until one of them
//! resolves and redirects to sign-in when there is no user. The subscription
//! and any in-flight work are released when the page unmounts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::{
    AttachedFiles, ChatInput, ChatMessage, DropOverlay, FullPageLoading, Header, TypingIndicator,
};
use crate::conversation::{request_reply, ChatState, Liveness};
use crate::files::{file_list_to_vec, ingest_files, DragTracker, ACCEPT};
use crate::session::{GuardState, SessionGuard};
use crate::state::AppState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let guard = RwSignal::new(GuardState::Unresolved);
    let chat = RwSignal::new(ChatState::new());
    let input = RwSignal::new(String::new());
    let drag = RwSignal::new(DragTracker::default());
    let alive = Liveness::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    // Session guard
    let session_guard = SessionGuard::attach(&state.auth, move |next| {
        guard.try_set(next);
    });
    let resolver = session_guard.resolver();
    let auth = state.auth.clone();
    spawn_local(async move {
        resolver.resolve(&auth).await;
    });

    let alive_for_cleanup = alive.clone();
    on_cleanup(move || {
        alive_for_cleanup.kill();
        session_guard.detach();
    });

    Effect::new(move |_| {
        if let Some(target) = guard.with(GuardState::redirect_target) {
            navigate(target, Default::default());
        }
    });

    let email = Signal::derive(move || {
        guard.with(|g| g.user().map(|u| u.display_email().to_string()))
    });
    let is_authenticated = move || guard.with(|g| g.user().is_some());

    // Auto-scroll to bottom when the transcript grows
    Effect::new(move |_| {
        let _ = chat.with(|c| (c.messages.len(), c.is_loading));
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    // Validate, decode and attach picked or dropped files
    let toasts = state.toasts;
    let alive_for_upload = alive.clone();
    let handle_files = move |list: web_sys::FileList| {
        let files = file_list_to_vec(&list);
        if files.is_empty() {
            return;
        }
        let alive = alive_for_upload.clone();
        spawn_local(async move {
            let uploaded = ingest_files(files, &toasts).await;
            if alive.is_alive() && !uploaded.is_empty() {
                chat.update(|c| c.attach(uploaded));
            }
        });
    };

    let on_file_change = {
        let handle_files = handle_files.clone();
        move |_: leptos::ev::Event| {
            let Some(el) = file_input_ref.get() else {
                return;
            };
            if let Some(list) = el.files() {
                handle_files(list);
            }
            // Allow picking the same file again
            el.set_value("");
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag.update(DragTracker::drag_over);
    };
    let on_drag_leave = move |_: leptos::ev::DragEvent| drag.update(DragTracker::drag_leave);
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag.update(DragTracker::dropped);
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            handle_files(list);
        }
    };

    let open_picker = move || {
        if let Some(el) = file_input_ref.get_untracked() {
            el.click();
        }
    };

    let remove_file = move |index: usize| {
        chat.update(|c| {
            if let Some(removed) = c.remove_file(index) {
                tracing::debug!("Removed attachment {}", removed.name);
            }
        });
    };

    // Optimistic append, then one round-trip to the chat function
    let state_for_send = state.clone();
    let alive_for_send = alive.clone();
    let send_message = move || {
        let text = input.get_untracked();
        let Some(request) = chat.try_update(|c| c.begin_submit(&text)).flatten() else {
            return;
        };
        input.set(String::new());

        let client = state_for_send.chat.clone();
        let toasts = state_for_send.toasts;
        let alive = alive_for_send.clone();
        spawn_local(async move {
            let outcome = request_reply(&client, &request).await;
            chat.try_update(|c| c.finish_submit_if_alive(&alive, outcome, &toasts));
        });
    };

    let can_submit = Signal::derive(move || chat.with(|c| input.with(|i| c.can_submit(i))));
    let is_loading = Signal::derive(move || chat.with(|c| c.is_loading));
    let files = Signal::derive(move || chat.with(|c| c.files.clone()));

    view! {
        <Title text="Chat - DocChat" />
        <Show when=is_authenticated fallback=|| view! { <FullPageLoading /> }>
            <div
                class="h-screen flex flex-col"
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop.clone()
            >
                <Header email=email />

                <Show when=move || drag.with(DragTracker::is_dragging)>
                    <DropOverlay />
                </Show>

                <input
                    node_ref=file_input_ref
                    type="file"
                    multiple
                    accept=ACCEPT
                    class="hidden"
                    on:change=on_file_change.clone()
                />

                // Messages area
                <div class="flex-1 overflow-y-auto px-4 py-6">
                    <div class="max-w-3xl mx-auto space-y-6">
                        {move || chat.with(|c| c.messages.is_empty()).then(|| view! { <EmptyState /> })}

                        {move || {
                            chat.with(|c| c.messages.clone())
                                .into_iter()
                                .map(|msg| view! { <ChatMessage message=msg /> })
                                .collect::<Vec<_>>()
                        }}

                        <Show when=move || is_loading.get()>
                            <TypingIndicator />
                        </Show>

                        // Scroll anchor
                        <div node_ref=messages_end_ref></div>
                    </div>
                </div>

                // Input area
                <div class="max-w-3xl w-full mx-auto">
                    <AttachedFiles files=files on_remove=remove_file />
                    <ChatInput
                        value=input
                        on_submit=send_message.clone()
                        on_attach=open_picker
                        can_submit=can_submit
                        disabled=is_loading
                        placeholder="Ask about your documents... (Shift+Enter for new line)"
                    />
                </div>
            </div>
        </Show>
    }
}

/// Shown before the first message
#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <div class="text-5xl mb-4">"📚"</div>
            <h2 class="text-2xl font-semibold mb-2">"What would you like to know?"</h2>
            <p class="text-slate-400 max-w-md mx-auto">
                "Attach documents with the paperclip or drag them here, then ask for a summary, "
                "key points or anything else about them."
            </p>
        </div>
    }
}
