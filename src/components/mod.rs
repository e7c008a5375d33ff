//! UI Components
//!
//! Reusable Leptos components.

mod back_header;
mod complaint_widget;
mod complaints_page;
mod create_course_form;
mod error_banner;
mod label_field;

pub use back_header::BackHeader;
pub use complaint_widget::ComplaintWidget;
pub use complaints_page::ComplaintsPage;
pub use create_course_form::CreateCourseForm;
pub use error_banner::ErrorBanner;
pub use label_field::LabelField;
