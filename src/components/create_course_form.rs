//! Create Course Form
//!
//! Multi-field course form with a repeating meeting-time sub-list,
//! overlap validation on submit, and a read-only success summary.
//! All state transitions go through the CourseDraft reducer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{BackHeader, ErrorBanner, LabelField};
use crate::draft::{CourseAction, CourseDraft, Field, SubmitPhase};
use crate::store::{RegistrarStateStoreFields, RegistrarStore};
use crate::time::to_12_hour;

/// Weekday options for the meeting-time selector
const DAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[component]
pub fn CreateCourseForm(
    store: RegistrarStore,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let (draft, set_draft) = signal(CourseDraft::default());
    let dispatch = move |action: CourseAction| {
        set_draft.update(|d| *d = std::mem::take(d).apply(action));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        dispatch(CourseAction::Submit);
        let current = draft.get_untracked();
        if current.phase != SubmitPhase::Submitting {
            return;
        }
        let req = current.to_request();
        spawn_local(async move {
            let result = api::create_course(&req).await;
            // the form may already be gone when the backend answers
            let _ = set_draft.try_update(|d| {
                let action = match result {
                    Ok(()) => CourseAction::SubmitSucceeded,
                    Err(e) => CourseAction::SubmitFailed(e),
                };
                *d = std::mem::take(d).apply(action);
            });
        });
    };

    view! {
        {move || if draft.get().phase == SubmitPhase::Succeeded {
            view! { <CourseSuccess store=store draft=draft on_back=on_back /> }.into_any()
        } else {
            view! {
                <div class="create-course-page">
                    <BackHeader
                        btn_label="Back to Management Page"
                        header_title="Create A Course"
                        on_back=on_back
                    />
                    <ErrorBanner
                        message=Signal::derive(move || draft.get().submit_error)
                        on_dismiss=move |_| dispatch(CourseAction::DismissError)
                    />

                    <form class="create-course-form" on:submit=on_submit>
                        <div class="form-group">
                            <label>"Course Name"</label>
                            <input
                                type="text"
                                placeholder="Enter Course Name"
                                required=true
                                prop:value=move || draft.get().course_name
                                on:input=move |ev| {
                                    dispatch(CourseAction::SetField(
                                        Field::CourseName,
                                        event_target_value(&ev),
                                    ));
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label>"Instructor"</label>
                            <select
                                required=true
                                on:change=move |ev| {
                                    dispatch(CourseAction::SelectInstructor(event_target_value(&ev)));
                                }
                            >
                                <option value="" disabled=true selected=true>
                                    "Select an Instructor"
                                </option>
                                <For
                                    each=move || store.instructors().get()
                                    key=|instructor| instructor.id.clone()
                                    children=move |instructor| {
                                        view! {
                                            <option value=instructor.encoded()>
                                                {instructor.name.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"Course Max Capacity"</label>
                            <input
                                type="number"
                                min="5"
                                required=true
                                prop:value=move || draft.get().max_capacity.to_string()
                                on:change=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    dispatch(CourseAction::SetField(Field::MaxCapacity, input.value()));
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label>"Course Times"</label>

                            <Show when=move || !draft.get().conflicts.is_empty()>
                                <div class="form-errors">
                                    <For
                                        each=move || draft.get().conflicts
                                        key=|pair| *pair
                                        children=move |(a, b)| {
                                            view! {
                                                <p class="form-error">
                                                    {format!("Meeting times {} and {} overlap", a + 1, b + 1)}
                                                </p>
                                            }
                                        }
                                    />
                                </div>
                            </Show>

                            <For
                                each=move || {
                                    draft.get().course_times.into_iter().enumerate().collect::<Vec<_>>()
                                }
                                key=|(idx, time)| (*idx, time.day.clone(), time.start.clone(), time.end.clone())
                                children=move |(idx, time)| {
                                    let in_conflict = move || {
                                        draft.get().conflicts.iter().any(|&(a, b)| a == idx || b == idx)
                                    };
                                    let row_class = move || {
                                        if in_conflict() { "course-time-row conflict" } else { "course-time-row" }
                                    };
                                    view! {
                                        <div class=row_class>
                                            <div class="course-time-info">
                                                <p class="course-time-day">{time.day.clone()}</p>
                                                <p class="course-time-range">
                                                    {format!("{} - {}", to_12_hour(&time.start), to_12_hour(&time.end))}
                                                </p>
                                            </div>
                                            <button
                                                type="button"
                                                class="remove-time-btn"
                                                on:click=move |_| dispatch(CourseAction::RemoveTime(idx))
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                }
                            />

                            <div class="add-time-row">
                                <select
                                    prop:value=move || draft.get().new_day
                                    on:change=move |ev| {
                                        dispatch(CourseAction::SetField(Field::NewDay, event_target_value(&ev)));
                                    }
                                >
                                    <option value="" disabled=true selected=true>"Select a Day"</option>
                                    {DAYS.iter().map(|day| view! {
                                        <option value=*day>{*day}</option>
                                    }).collect_view()}
                                </select>
                                <input
                                    type="time"
                                    prop:value=move || draft.get().new_start
                                    on:input=move |ev| {
                                        dispatch(CourseAction::SetField(Field::NewStart, event_target_value(&ev)));
                                    }
                                />
                                <span class="add-time-sep">"-"</span>
                                <input
                                    type="time"
                                    prop:value=move || draft.get().new_end
                                    on:input=move |ev| {
                                        dispatch(CourseAction::SetField(Field::NewEnd, event_target_value(&ev)));
                                    }
                                />
                                <button
                                    type="button"
                                    class=move || {
                                        if draft.get().add_time_error { "add-time-btn error" } else { "add-time-btn" }
                                    }
                                    on:click=move |_| dispatch(CourseAction::AddTime)
                                >
                                    "Add Time"
                                </button>
                            </div>
                        </div>

                        <button
                            type="submit"
                            class="submit-btn"
                            disabled=move || draft.get().phase == SubmitPhase::Submitting
                        >
                            "Create Course"
                        </button>
                    </form>
                </div>
            }.into_any()
        }}
    }
}

/// Read-only summary shown after a successful submission
#[component]
fn CourseSuccess(
    store: RegistrarStore,
    draft: ReadSignal<CourseDraft>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    // the draft is terminal once succeeded
    let d = draft.get_untracked();
    let instructor = format!("{} ({})", d.instructor_name, d.instructor_id);

    view! {
        <div class="success-alert">
            <h2>"Success!"</h2>
            <p>
                {move || {
                    let term = store.term().get();
                    format!("Successfully created course for the {} {} semester:", term.semester, term.year)
                }}
            </p>
            <hr />
            <LabelField label="Course Name: " description=d.course_name.clone() />
            <LabelField label="Course Instructor: " description=instructor />
            <LabelField label="Max Capacity: " description=d.max_capacity.to_string() />
            <p class="success-times-label">"Times:"</p>
            <ul class="success-times">
                {d.course_times.iter().map(|time| view! {
                    <li>{format!("{} | {} - {}", time.day, to_12_hour(&time.start), to_12_hour(&time.end))}</li>
                }).collect_view()}
            </ul>
            <button class="back-btn" on:click=move |_| on_back.run(())>
                "Back to Management Page"
            </button>
        </div>
    }
}
