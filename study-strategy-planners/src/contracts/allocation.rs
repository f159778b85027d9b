//! Hour Allocation Contracts
//!
//! Input and output schemas for proportional study-hour allocation.
//!
//! # Request Format
//!
//! ```json
//! {
//!   "total_hours": 10,
//!   "subjects": [
//!     {"name": "Math", "difficulty": 3},
//!     {"name": "History", "difficulty": 1}
//!   ]
//! }
//! ```
//!
//! # Response Format
//!
//! ```json
//! {
//!   "message": "Study hours allocated successfully",
//!   "total_subjects": 2,
//!   "total_hours": 10,
//!   "subjects": [
//!     {"name": "Math", "difficulty": 3.0, "allocated_hours": 7.5},
//!     {"name": "History", "difficulty": 1.0, "allocated_hours": 2.5}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Request for proportional study-hour allocation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AllocateHoursRequest {
    /// Total hour budget to distribute across subjects. Must be a positive
    /// integer; fractional JSON numbers are rejected at deserialization.
    #[validate(range(min = 1, message = "total_hours must be a positive integer"))]
    pub total_hours: i64,

    /// Subjects to allocate across. Must be non-empty.
    #[validate(length(min = 1, message = "subjects must be non-empty"))]
    pub subjects: Vec<Subject>,
}

/// A single subject in an allocation request.
///
/// Callers may attach arbitrary descriptive fields (name, notes, ...);
/// those round-trip untouched through `extra`. Only `difficulty` is
/// consumed and only `allocated_hours` is added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Relative weight of this subject. Presence is checked per subject so
    /// the error can name the offending element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<f64>,

    /// Share of the budget assigned to this subject. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_hours: Option<f64>,

    /// Caller-supplied passthrough fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response for a successful allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResponse {
    /// Human-readable status line.
    pub message: String,

    /// Number of subjects allocated.
    pub total_subjects: usize,

    /// The budget that was distributed, echoed back.
    pub total_hours: i64,

    /// The subjects, each now carrying `allocated_hours`.
    pub subjects: Vec<Subject>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subject_passthrough_fields_survive_roundtrip() {
        let subject: Subject = serde_json::from_value(json!({
            "name": "Math",
            "difficulty": 3,
            "priority": "high"
        }))
        .expect("deserialization failed");

        assert_eq!(subject.difficulty, Some(3.0));
        assert_eq!(subject.extra.get("name"), Some(&json!("Math")));

        let value = serde_json::to_value(&subject).expect("serialization failed");
        assert_eq!(value.get("priority"), Some(&json!("high")));
        // Not yet allocated, so the field must be absent rather than null.
        assert!(value.get("allocated_hours").is_none());
    }

    #[test]
    fn test_fractional_total_hours_is_rejected() {
        let result = serde_json::from_value::<AllocateHoursRequest>(json!({
            "total_hours": 10.5,
            "subjects": [{"difficulty": 1}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_non_positive_budget() {
        let request: AllocateHoursRequest = serde_json::from_value(json!({
            "total_hours": 0,
            "subjects": [{"difficulty": 1}]
        }))
        .expect("deserialization failed");
        assert!(request.validate().is_err());
    }
}
