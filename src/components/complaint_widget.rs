//! Complaint Widget Component
//!
//! Read-only display of one complaint with approve/reject actions.
//! The widget holds no state; the decision is forwarded to the
//! resolver capability owned by the page.

use leptos::prelude::*;

use crate::components::LabelField;
use crate::models::{Complaint, Decision, UserType};

#[component]
pub fn ComplaintWidget(
    complaint: Complaint,
    #[prop(into)] on_result: Callback<(Complaint, Decision)>,
) -> impl IntoView {
    // outcome is only shown when the reporter is an instructor
    let show_outcome = complaint.reporter.user_type == UserType::Instructor;
    let reporter = complaint.reporter.display();
    let offender = complaint.offender.display();
    let reason = complaint.reason.clone();
    let outcome = complaint.outcome.clone();

    let approve = {
        let complaint = complaint.clone();
        move |_| on_result.run((complaint.clone(), Decision::Approve))
    };
    let reject = move |_| on_result.run((complaint.clone(), Decision::Reject));

    view! {
        <div class="complaint">
            <div class="complaint-parties">
                <LabelField label="Reporter: " description=reporter />
                <LabelField label="Offender: " description=offender />
            </div>
            <LabelField label="Description: " description=reason />
            <Show when=move || show_outcome>
                <LabelField label="Outcome: " description=outcome.clone() />
            </Show>
            <div class="complaint-actions">
                <button class="approve-btn" on:click=approve>"✓"</button>
                <button class="reject-btn" on:click=reject>"✗"</button>
            </div>
        </div>
    }
}
