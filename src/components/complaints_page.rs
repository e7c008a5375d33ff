//! Complaints Page
//!
//! Registrar screen listing complaints with approve/reject resolution
//! and a refresh control.

use leptos::prelude::*;

use crate::components::{BackHeader, ComplaintWidget, ErrorBanner};
use crate::hooks::ComplaintsHandle;
use crate::models::{Complaint, Decision};
use crate::store::RegistrarStateStoreFields;

#[component]
pub fn ComplaintsPage(
    complaints: ComplaintsHandle,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let store = complaints.store;
    let loading = move || store.complaints_loading().get();
    let is_empty = move || store.complaints().get().is_empty();

    let on_result = move |(complaint, decision): (Complaint, Decision)| {
        complaints.resolve(complaint, decision);
    };

    view! {
        <div class="complaints-page">
            <BackHeader
                btn_label="Back to Management Page"
                header_title="Complaints"
                on_back=on_back
            />
            <ErrorBanner
                message=complaints.error
                on_dismiss=move |_| complaints.dismiss_error()
            />

            <For
                each=move || store.complaints().get()
                key=|complaint| complaint.id.clone()
                children=move |complaint| {
                    view! { <ComplaintWidget complaint=complaint on_result=on_result /> }
                }
            />

            <div class="complaints-footer">
                <Show when=loading>
                    <div class="spinner"></div>
                </Show>
                // never shown while a fetch is in flight
                <Show when=move || !loading() && is_empty()>
                    <p class="no-complaints">"There are no complaints."</p>
                </Show>
                <button
                    class="refresh-btn"
                    disabled=loading
                    on:click=move |_| complaints.refresh()
                >
                    "Refresh"
                </button>
            </div>
        </div>
    }
}
