//! Toast Notification Component
//!
//! Dismissible error banner.

use leptos::*;

/// Error toast, shown while `message` holds a value
#[component]
pub fn Toast(
    #[prop(into)]
    message: Signal<Option<String>>,
    #[prop(into)]
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="fixed bottom-6 right-4 z-50">
            {move || {
                message.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg">
                        <span class="text-lg">"✕"</span>
                        <span class="text-sm font-medium">{msg}</span>
                        <button
                            on:click=move |_| on_dismiss.call(())
                            class="ml-2 text-white/80 hover:text-white"
                        >
                            "Dismiss"
                        </button>
                    </div>
                })
            }}
        </div>
    }
}
