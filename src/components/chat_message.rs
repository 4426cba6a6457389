//! Chat message component

use leptos::prelude::*;

use crate::markdown::render_markdown;
use crate::types::{Message, Role};

/// Render a single transcript entry.
///
/// User messages are shown verbatim; assistant replies are rendered as
/// markdown.
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.role == Role::User;
    let time = message.timestamp.format("%H:%M").to_string();

    let body = match message.role {
        Role::User => view! {
            <div class="whitespace-pre-wrap break-words">{message.content}</div>
        }
        .into_any(),
        Role::Assistant => view! {
            <div class="prose prose-invert prose-sm max-w-none break-words"
                inner_html=render_markdown(&message.content)
            ></div>
        }
        .into_any(),
    };

    view! {
        <div class=format!(
            "flex items-start gap-3 message-appear {}",
            if is_user { "flex-row-reverse" } else { "" }
        )>
            // Avatar
            <div class=format!(
                "w-8 h-8 rounded-full flex items-center justify-center text-white text-sm font-medium shrink-0 {}",
                if is_user {
                    "bg-gradient-to-br from-indigo-500 to-sky-500"
                } else {
                    "bg-gradient-to-br from-violet-500 to-fuchsia-600"
                }
            )>
                {if is_user { "👤" } else { "🤖" }}
            </div>

            <div class=format!(
                "flex flex-col gap-1 max-w-[80%] {}",
                if is_user { "items-end" } else { "items-start" }
            )>
                <div class=format!(
                    "px-4 py-3 rounded-2xl {}",
                    if is_user {
                        "bg-indigo-600 text-white rounded-tr-sm"
                    } else {
                        "bg-slate-800 text-slate-100 rounded-tl-sm"
                    }
                )>
                    {body}
                </div>

                <span class="text-xs text-slate-600 mt-1">{time}</span>
            </div>
        </div>
    }
}
