use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::icons::{Check, Copy};

#[component]
pub fn CodeBlock(
    #[prop(into)] code: String,
    #[prop(into, default = "bash".to_string())] language: String,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let text = StoredValue::new(code.clone());

    let handle_copy = move |_| {
        let code = text.get_value();
        leptos::task::spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&code);
            if JsFuture::from(promise).await.is_err() {
                log::warn!("Clipboard write refused");
                return;
            }
            set_copied.set(true);
            let reset = wasm_bindgen::closure::Closure::once(move || set_copied.set(false));
            if window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    reset.as_ref().unchecked_ref(),
                    2000,
                )
                .is_ok()
            {
                reset.forget();
            }
        });
    };

    view! {
        <div class="relative group rounded-lg overflow-hidden bg-[var(--color-paper)] border border-slate-800 my-4">
            <div class="flex justify-between items-center px-4 py-2 bg-slate-800/50 border-b border-slate-800">
                <span class="text-xs text-[var(--color-text-muted)] font-mono">{language}</span>
                <button
                    on:click=handle_copy
                    aria-label="Copy to clipboard"
                    class="text-[var(--color-text-muted)] hover:text-white transition-colors"
                >
                    {move || {
                        if copied.get() {
                            view! { <Check class="w-4 h-4 text-[var(--color-success)]" /> }.into_any()
                        } else {
                            view! { <Copy class="w-4 h-4" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <div class="p-4 overflow-x-auto">
                <pre class="text-sm font-mono text-[var(--color-success)]">{code}</pre>
            </div>
        </div>
    }
}
