//! Registrar Frontend App
//!
//! Top-level screen switcher; builds the shared store and capability
//! handles and passes them to each screen explicitly.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ComplaintsPage, CreateCourseForm};
use crate::hooks::{load_directory, use_complaints};
use crate::store::RegistrarState;

/// Registrar screen selection
#[derive(Clone, Copy, PartialEq)]
enum Screen {
    Management,
    Complaints,
    CreateCourse,
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(RegistrarState::default());
    let (screen, set_screen) = signal(Screen::Management);
    let complaints = use_complaints(store);

    // Load the instructor directory and current term once on startup
    Effect::new(move |_| {
        load_directory(store);
    });

    let to_management = move |_: ()| set_screen.set(Screen::Management);

    view! {
        <div class="app-layout">
            {move || match screen.get() {
                Screen::Management => view! {
                    <div class="management-page">
                        <h1>"Registrar Management"</h1>
                        <button class="nav-btn" on:click=move |_| set_screen.set(Screen::Complaints)>
                            "Complaints"
                        </button>
                        <button class="nav-btn" on:click=move |_| set_screen.set(Screen::CreateCourse)>
                            "Create A Course"
                        </button>
                    </div>
                }.into_any(),
                Screen::Complaints => view! {
                    <ComplaintsPage complaints=complaints on_back=to_management />
                }.into_any(),
                Screen::CreateCourse => view! {
                    <CreateCourseForm store=store on_back=to_management />
                }.into_any(),
            }}
        </div>
    }
}
