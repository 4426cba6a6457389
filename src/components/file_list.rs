//! Attached-file chips

use leptos::prelude::*;

use crate::types::UploadedFile;

fn file_icon(file: &UploadedFile) -> &'static str {
    match file.name.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("pdf") => "📕",
        Some("docx") => "📘",
        Some("pptx") => "📙",
        Some("xlsx") => "📗",
        _ => "📄",
    }
}

/// Files that will be sent with the next message
#[component]
pub fn AttachedFiles<F>(
    #[prop(into)] files: Signal<Vec<UploadedFile>>,
    on_remove: F,
) -> impl IntoView
where
    F: Fn(usize) + Clone + Send + Sync + 'static,
{
    move || {
        let files = files.get();
        if files.is_empty() {
            return view! {}.into_any();
        }

        let on_remove = on_remove.clone();
        view! {
            <div class="flex flex-wrap gap-2 px-4 pt-3">
                {files.into_iter().enumerate().map(|(index, file)| {
                    let on_remove = on_remove.clone();
                    let icon = file_icon(&file);
                    let title = file.name.clone();
                    let name = file.name;
                    view! {
                        <div class="flex items-center gap-2 px-3 py-1.5 bg-slate-800 border border-slate-700 rounded-lg text-sm">
                            <span>{icon}</span>
                            <span class="max-w-[12rem] truncate" title=title>{name}</span>
                            <button
                                on:click=move |_| on_remove(index)
                                class="text-slate-500 hover:text-red-400 transition-colors"
                                title="Remove file"
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        }.into_any()
    }
}
