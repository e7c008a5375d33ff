//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Role of a party referenced by a complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Student,
    Instructor,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Instructor => "instructor",
        }
    }
}

/// Reporter or offender identity on a complaint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    pub user_type: UserType,
}

impl Party {
    /// Display form used by the complaint widget, e.g. "Alice (instructor)"
    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.user_type.as_str())
    }
}

/// Complaint record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub reporter: Party,
    pub offender: Party,
    pub reason: String,
    pub outcome: String,
}

/// Decision applied to a complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject => "reject",
        }
    }
}

/// Instructor directory entry (already filtered to non-suspended)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: String,
    pub name: String,
}

impl Instructor {
    /// Combined select-option value, decoded by the instructor field update
    pub fn encoded(&self) -> String {
        format!("{},{}", self.id, self.name)
    }
}

/// Current term, display only
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TermInfo {
    pub semester: String,
    pub year: u16,
}

/// One weekly meeting slot; start/end stored as 24-hour "HH:MM"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseTime {
    pub day: String,
    pub start: String,
    pub end: String,
}

/// Course-creation request sent to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub course_name: String,
    pub instructor_id: String,
    pub max_capacity: u32,
    pub course_times: Vec<CourseTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_serialization() {
        assert_eq!(UserType::Instructor.as_str(), "instructor");
        let parsed: UserType = serde_json::from_str("\"instructor\"").unwrap();
        assert_eq!(parsed, UserType::Instructor);
        assert_eq!(serde_json::to_string(&UserType::Student).unwrap(), "\"student\"");
    }

    #[test]
    fn test_decision_serialization() {
        assert_eq!(serde_json::to_string(&Decision::Approve).unwrap(), "\"approve\"");
        assert_eq!(serde_json::to_string(&Decision::Reject).unwrap(), "\"reject\"");
    }

    #[test]
    fn test_complaint_deserialization() {
        let json = r#"{
            "id": "c1",
            "reporter": { "name": "Alice", "userType": "instructor" },
            "offender": { "name": "Bob", "userType": "student" },
            "reason": "Disruptive behavior",
            "outcome": "Warning issued"
        }"#;
        let complaint: Complaint = serde_json::from_str(json).unwrap();
        assert_eq!(complaint.reporter.user_type, UserType::Instructor);
        assert_eq!(complaint.reporter.display(), "Alice (instructor)");
        assert_eq!(complaint.offender.display(), "Bob (student)");
    }

    #[test]
    fn test_instructor_encoded() {
        let instructor = Instructor { id: "i1".to_string(), name: "Alice".to_string() };
        assert_eq!(instructor.encoded(), "i1,Alice");
    }

    #[test]
    fn test_create_course_request_shape() {
        let req = CreateCourseRequest {
            course_name: "CS101".to_string(),
            instructor_id: "i1".to_string(),
            max_capacity: 10,
            course_times: vec![CourseTime {
                day: "Mon".to_string(),
                start: "09:00".to_string(),
                end: "10:00".to_string(),
            }],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"courseName\":\"CS101\""));
        assert!(json.contains("\"maxCapacity\":10"));
        assert!(json.contains("\"courseTimes\""));
    }
}
