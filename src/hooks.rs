//! Capability Hooks
//!
//! Constructors for the externally-owned capabilities the screens
//! consume. Built once by the composing App and passed down as
//! explicit props, never looked up ambiently.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{Complaint, Decision};
use crate::store::{RegistrarStateStoreFields, RegistrarStore};

/// Complaint list capability: list and loading state plus refresh and
/// resolve operations. Resolution failures land in `error` for the
/// dismissible banner.
#[derive(Clone, Copy)]
pub struct ComplaintsHandle {
    pub store: RegistrarStore,
    pub error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
}

impl ComplaintsHandle {
    /// Re-fetch the complaint list from the backend
    pub fn refresh(&self) {
        let store = self.store;
        let set_error = self.set_error;
        *store.complaints_loading().write() = true;
        spawn_local(async move {
            match api::list_complaints().await {
                Ok(list) => {
                    web_sys::console::log_1(
                        &format!("[COMPLAINTS] Loaded {} complaints", list.len()).into(),
                    );
                    *store.complaints().write() = list;
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
            *store.complaints_loading().write() = false;
        });
    }

    /// Forward a decision to the backend resolver, then refresh the list
    pub fn resolve(&self, complaint: Complaint, decision: Decision) {
        let this = *self;
        spawn_local(async move {
            match api::resolve_complaint(&complaint, decision).await {
                Ok(()) => this.refresh(),
                Err(e) => {
                    let _ = this.set_error.try_set(Some(e));
                }
            }
        });
    }

    pub fn dismiss_error(&self) {
        self.set_error.set(None);
    }
}

/// Build the complaints capability and kick off the initial fetch
pub fn use_complaints(store: RegistrarStore) -> ComplaintsHandle {
    let (error, set_error) = signal(None);
    let handle = ComplaintsHandle { store, error, set_error };
    handle.refresh();
    handle
}

/// Load the instructor directory and current term into the store
pub fn load_directory(store: RegistrarStore) {
    spawn_local(async move {
        match api::list_instructors().await {
            Ok(list) => {
                web_sys::console::log_1(
                    &format!("[DIRECTORY] Loaded {} instructors", list.len()).into(),
                );
                *store.instructors().write() = list;
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("[DIRECTORY] {}", e).into());
            }
        }
        match api::fetch_term().await {
            Ok(term) => *store.term().write() = term,
            Err(e) => {
                web_sys::console::warn_1(&format!("[DIRECTORY] {}", e).into());
            }
        }
    });
}
