//! Course Draft Reducer
//!
//! Pure `(draft, action) -> draft'` state machine behind the create-course
//! form. All form behavior lives here so it is testable without a DOM.

use crate::models::{CourseTime, CreateCourseRequest};
use crate::time::{find_conflicts, is_strictly_before};

/// Draft fields addressable by `SetField`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CourseName,
    MaxCapacity,
    NewDay,
    NewStart,
    NewEnd,
}

/// Submission lifecycle of one form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

/// Actions understood by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum CourseAction {
    SetField(Field, String),
    SelectInstructor(String),
    AddTime,
    RemoveTime(usize),
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
    DismissError,
}

/// Transient course record held by the form until submission succeeds
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDraft {
    pub course_name: String,
    pub instructor_id: String,
    pub instructor_name: String,
    pub max_capacity: u32,
    pub course_times: Vec<CourseTime>,
    pub new_day: String,
    pub new_start: String,
    pub new_end: String,
    pub add_time_error: bool,
    /// Index pairs of overlapping meeting times found at submit
    pub conflicts: Vec<(usize, usize)>,
    pub phase: SubmitPhase,
    pub submit_error: Option<String>,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            course_name: String::new(),
            instructor_id: String::new(),
            instructor_name: String::new(),
            max_capacity: 5,
            course_times: Vec::new(),
            new_day: String::new(),
            new_start: String::new(),
            new_end: String::new(),
            add_time_error: false,
            conflicts: Vec::new(),
            phase: SubmitPhase::Editing,
            submit_error: None,
        }
    }
}

impl CourseDraft {
    /// Apply one action, returning the next draft state
    pub fn apply(mut self, action: CourseAction) -> Self {
        match action {
            CourseAction::SetField(field, value) => self.set_field(field, value),
            CourseAction::SelectInstructor(encoded) => {
                // select option value is "id,name"
                if let Some((id, name)) = encoded.split_once(',') {
                    self.instructor_id = id.to_string();
                    self.instructor_name = name.to_string();
                }
            }
            CourseAction::AddTime => self.add_time(),
            CourseAction::RemoveTime(idx) => {
                if idx < self.course_times.len() {
                    self.course_times.remove(idx);
                }
            }
            CourseAction::Submit => self.submit(),
            CourseAction::SubmitSucceeded => {
                if self.phase == SubmitPhase::Submitting {
                    self.phase = SubmitPhase::Succeeded;
                }
            }
            CourseAction::SubmitFailed(message) => {
                if self.phase == SubmitPhase::Submitting {
                    self.phase = SubmitPhase::Editing;
                    self.submit_error = Some(message);
                }
            }
            CourseAction::DismissError => self.submit_error = None,
        }
        self
    }

    fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::CourseName => self.course_name = value,
            Field::MaxCapacity => {
                // keep the previous capacity on a non-numeric input
                if let Ok(n) = value.parse() {
                    self.max_capacity = n;
                }
            }
            Field::NewDay => self.new_day = value,
            Field::NewStart => self.new_start = value,
            Field::NewEnd => self.new_end = value,
        }
    }

    fn add_time(&mut self) {
        let valid = !self.new_day.is_empty()
            && !self.new_start.is_empty()
            && !self.new_end.is_empty()
            && is_strictly_before(&self.new_start, &self.new_end);
        if !valid {
            self.add_time_error = true;
            return;
        }
        self.course_times.push(CourseTime {
            day: std::mem::take(&mut self.new_day),
            start: std::mem::take(&mut self.new_start),
            end: std::mem::take(&mut self.new_end),
        });
        self.add_time_error = false;
    }

    fn submit(&mut self) {
        if self.phase != SubmitPhase::Editing {
            return;
        }
        self.conflicts = find_conflicts(&self.course_times);
        if !self.conflicts.is_empty() {
            return;
        }
        self.submit_error = None;
        self.phase = SubmitPhase::Submitting;
    }

    /// Request payload for the backend, built once the draft is submitting
    pub fn to_request(&self) -> CreateCourseRequest {
        CreateCourseRequest {
            course_name: self.course_name.clone(),
            instructor_id: self.instructor_id.clone(),
            max_capacity: self.max_capacity,
            course_times: self.course_times.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_time(day: &str, start: &str, end: &str) -> CourseDraft {
        CourseDraft::default()
            .apply(CourseAction::SetField(Field::NewDay, day.to_string()))
            .apply(CourseAction::SetField(Field::NewStart, start.to_string()))
            .apply(CourseAction::SetField(Field::NewEnd, end.to_string()))
            .apply(CourseAction::AddTime)
    }

    #[test]
    fn test_set_field_updates_only_named_key() {
        let draft = CourseDraft::default()
            .apply(CourseAction::SetField(Field::CourseName, "CS101".to_string()));
        assert_eq!(draft.course_name, "CS101");
        assert_eq!(draft.max_capacity, 5);
        assert!(draft.course_times.is_empty());
        assert_eq!(draft.phase, SubmitPhase::Editing);
    }

    #[test]
    fn test_set_capacity_keeps_previous_on_bad_input() {
        let draft = CourseDraft::default()
            .apply(CourseAction::SetField(Field::MaxCapacity, "10".to_string()))
            .apply(CourseAction::SetField(Field::MaxCapacity, "ten".to_string()));
        assert_eq!(draft.max_capacity, 10);
    }

    #[test]
    fn test_select_instructor_decodes_compound_value() {
        let draft = CourseDraft::default()
            .apply(CourseAction::SelectInstructor("i1,Alice".to_string()));
        assert_eq!(draft.instructor_id, "i1");
        assert_eq!(draft.instructor_name, "Alice");
    }

    #[test]
    fn test_add_time_appends_and_clears_transient_fields() {
        let draft = draft_with_time("Mon", "09:00", "10:00");
        assert_eq!(draft.course_times.len(), 1);
        assert_eq!(draft.course_times[0].day, "Mon");
        assert_eq!(draft.course_times[0].start, "09:00");
        assert_eq!(draft.course_times[0].end, "10:00");
        assert!(draft.new_day.is_empty());
        assert!(draft.new_start.is_empty());
        assert!(draft.new_end.is_empty());
        assert!(!draft.add_time_error);
    }

    #[test]
    fn test_add_time_rejects_missing_day() {
        let draft = CourseDraft::default()
            .apply(CourseAction::SetField(Field::NewStart, "09:00".to_string()))
            .apply(CourseAction::SetField(Field::NewEnd, "10:00".to_string()))
            .apply(CourseAction::AddTime);
        assert!(draft.course_times.is_empty());
        assert!(draft.add_time_error);
        // entered values stay for correction
        assert_eq!(draft.new_start, "09:00");
        assert_eq!(draft.new_end, "10:00");
    }

    #[test]
    fn test_add_time_rejects_inverted_range() {
        let draft = draft_with_time("Mon", "10:00", "09:00");
        assert!(draft.course_times.is_empty());
        assert!(draft.add_time_error);
        assert_eq!(draft.new_day, "Mon");
    }

    #[test]
    fn test_add_time_rejects_equal_start_and_end() {
        let draft = draft_with_time("Mon", "10:00", "10:00");
        assert!(draft.course_times.is_empty());
        assert!(draft.add_time_error);
    }

    #[test]
    fn test_add_time_clears_prior_error() {
        let draft = draft_with_time("Mon", "10:00", "09:00");
        assert!(draft.add_time_error);
        let draft = draft
            .apply(CourseAction::SetField(Field::NewStart, "09:00".to_string()))
            .apply(CourseAction::SetField(Field::NewEnd, "10:00".to_string()))
            .apply(CourseAction::AddTime);
        assert!(!draft.add_time_error);
        assert_eq!(draft.course_times.len(), 1);
    }

    #[test]
    fn test_remove_time_preserves_order() {
        let mut draft = draft_with_time("Mon", "09:00", "10:00");
        draft = draft
            .apply(CourseAction::SetField(Field::NewDay, "Tue".to_string()))
            .apply(CourseAction::SetField(Field::NewStart, "11:00".to_string()))
            .apply(CourseAction::SetField(Field::NewEnd, "12:00".to_string()))
            .apply(CourseAction::AddTime)
            .apply(CourseAction::SetField(Field::NewDay, "Wed".to_string()))
            .apply(CourseAction::SetField(Field::NewStart, "13:00".to_string()))
            .apply(CourseAction::SetField(Field::NewEnd, "14:00".to_string()))
            .apply(CourseAction::AddTime);
        let draft = draft.apply(CourseAction::RemoveTime(1));
        assert_eq!(draft.course_times.len(), 2);
        assert_eq!(draft.course_times[0].day, "Mon");
        assert_eq!(draft.course_times[1].day, "Wed");
    }

    #[test]
    fn test_remove_time_out_of_range_ignored() {
        let draft = draft_with_time("Mon", "09:00", "10:00")
            .apply(CourseAction::RemoveTime(5));
        assert_eq!(draft.course_times.len(), 1);
    }

    #[test]
    fn test_submit_happy_path() {
        let draft = CourseDraft::default()
            .apply(CourseAction::SelectInstructor("i1,Alice".to_string()))
            .apply(CourseAction::SetField(Field::CourseName, "CS101".to_string()))
            .apply(CourseAction::SetField(Field::MaxCapacity, "10".to_string()))
            .apply(CourseAction::SetField(Field::NewDay, "Mon".to_string()))
            .apply(CourseAction::SetField(Field::NewStart, "09:00".to_string()))
            .apply(CourseAction::SetField(Field::NewEnd, "10:00".to_string()))
            .apply(CourseAction::AddTime)
            .apply(CourseAction::Submit);
        assert_eq!(draft.phase, SubmitPhase::Submitting);

        let req = draft.to_request();
        assert_eq!(req.course_name, "CS101");
        assert_eq!(req.instructor_id, "i1");
        assert_eq!(req.max_capacity, 10);
        assert_eq!(req.course_times.len(), 1);
        assert_eq!(req.course_times[0].day, "Mon");
        assert_eq!(req.course_times[0].start, "09:00");
        assert_eq!(req.course_times[0].end, "10:00");
        assert_eq!(draft.instructor_name, "Alice");

        let draft = draft.apply(CourseAction::SubmitSucceeded);
        assert_eq!(draft.phase, SubmitPhase::Succeeded);
    }

    #[test]
    fn test_submit_rejects_overlapping_times() {
        let mut draft = draft_with_time("Mon", "09:00", "10:00");
        draft = draft
            .apply(CourseAction::SetField(Field::NewDay, "Mon".to_string()))
            .apply(CourseAction::SetField(Field::NewStart, "09:30".to_string()))
            .apply(CourseAction::SetField(Field::NewEnd, "10:30".to_string()))
            .apply(CourseAction::AddTime)
            .apply(CourseAction::Submit);
        assert_eq!(draft.phase, SubmitPhase::Editing);
        assert_eq!(draft.conflicts, vec![(0, 1)]);
    }

    #[test]
    fn test_submit_allows_touching_ranges() {
        let mut draft = draft_with_time("Mon", "09:00", "10:00");
        draft = draft
            .apply(CourseAction::SetField(Field::NewDay, "Mon".to_string()))
            .apply(CourseAction::SetField(Field::NewStart, "10:00".to_string()))
            .apply(CourseAction::SetField(Field::NewEnd, "11:00".to_string()))
            .apply(CourseAction::AddTime)
            .apply(CourseAction::Submit);
        assert_eq!(draft.phase, SubmitPhase::Submitting);
        assert!(draft.conflicts.is_empty());
    }

    #[test]
    fn test_conflicts_clear_after_removal_and_resubmit() {
        let mut draft = draft_with_time("Mon", "09:00", "10:00");
        draft = draft
            .apply(CourseAction::SetField(Field::NewDay, "Mon".to_string()))
            .apply(CourseAction::SetField(Field::NewStart, "09:30".to_string()))
            .apply(CourseAction::SetField(Field::NewEnd, "10:30".to_string()))
            .apply(CourseAction::AddTime)
            .apply(CourseAction::Submit);
        assert_eq!(draft.conflicts, vec![(0, 1)]);

        let draft = draft
            .apply(CourseAction::RemoveTime(1))
            .apply(CourseAction::Submit);
        assert!(draft.conflicts.is_empty());
        assert_eq!(draft.phase, SubmitPhase::Submitting);
    }

    #[test]
    fn test_submit_failed_returns_to_editing_preserving_fields() {
        let draft = draft_with_time("Mon", "09:00", "10:00")
            .apply(CourseAction::SetField(Field::CourseName, "CS101".to_string()))
            .apply(CourseAction::Submit)
            .apply(CourseAction::SubmitFailed("course service unavailable".to_string()));
        assert_eq!(draft.phase, SubmitPhase::Editing);
        assert_eq!(draft.submit_error.as_deref(), Some("course service unavailable"));
        assert_eq!(draft.course_name, "CS101");
        assert_eq!(draft.course_times.len(), 1);
    }

    #[test]
    fn test_dismiss_error() {
        let draft = draft_with_time("Mon", "09:00", "10:00")
            .apply(CourseAction::Submit)
            .apply(CourseAction::SubmitFailed("timeout".to_string()))
            .apply(CourseAction::DismissError);
        assert_eq!(draft.submit_error, None);
    }

    #[test]
    fn test_submit_is_noop_while_submitting() {
        let draft = draft_with_time("Mon", "09:00", "10:00")
            .apply(CourseAction::Submit)
            .apply(CourseAction::Submit);
        assert_eq!(draft.phase, SubmitPhase::Submitting);
    }

    #[test]
    fn test_succeeded_is_terminal() {
        let draft = draft_with_time("Mon", "09:00", "10:00")
            .apply(CourseAction::Submit)
            .apply(CourseAction::SubmitSucceeded)
            .apply(CourseAction::Submit)
            .apply(CourseAction::SubmitFailed("late".to_string()));
        assert_eq!(draft.phase, SubmitPhase::Succeeded);
        assert_eq!(draft.submit_error, None);
    }
}
