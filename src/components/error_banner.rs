//! Error Banner Component
//!
//! Dismissible banner for failed backend operations.

use leptos::prelude::*;

/// Shows the current error message with a dismiss control, or nothing
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|msg| {
                view! {
                    <div class="error-banner">
                        <span class="error-banner-text">{msg}</span>
                        <button class="error-banner-dismiss" on:click=move |_| on_dismiss.run(())>
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
