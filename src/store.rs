//! Shared Registrar State Store
//!
//! Externally-owned lists, using Leptos reactive_stores for
//! field-level reactivity. The store is created by App and handed to
//! screens through their capability props.

use reactive_stores::Store;

use crate::models::{Complaint, Instructor, TermInfo};

/// Registrar-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct RegistrarState {
    /// Complaints awaiting review
    pub complaints: Vec<Complaint>,
    /// True while a complaints fetch is in flight
    pub complaints_loading: bool,
    /// Non-suspended instructors for the course form
    pub instructors: Vec<Instructor>,
    /// Current term, display only
    pub term: TermInfo,
}

/// Type alias for the store
pub type RegistrarStore = Store<RegistrarState>;
