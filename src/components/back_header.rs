//! Back Header Component
//!
//! Screen title with a back control, used by the registrar sub-screens.

use leptos::prelude::*;

#[component]
pub fn BackHeader(
    #[prop(into)] btn_label: String,
    #[prop(into)] header_title: String,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="back-header">
            <button class="back-btn" on:click=move |_| on_back.run(())>
                {btn_label}
            </button>
            <h1 class="back-header-title">{header_title}</h1>
        </div>
    }
}
