//! Label Field Component
//!
//! Inline label + description display row.

use leptos::prelude::*;

#[component]
pub fn LabelField(
    #[prop(into)] label: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="label-field">
            <span class="label-field-label">{label}</span>
            <span class="label-field-text">{description}</span>
        </div>
    }
}
