//! Allocation Planner
//!
//! Distributes a fixed study-hour budget across subjects in proportion to
//! their difficulty: `allocated = difficulty / total_difficulty * budget`,
//! real-valued with no rounding, so the allocations always sum back to the
//! budget within floating-point tolerance.
//!
//! # Failure Modes
//!
//! - Non-positive budget or empty subject list: `INVALID_INPUT`
//! - A subject without `difficulty`: `MISSING_FIELD` (names the element)
//! - Difficulties summing to zero: `ARITHMETIC_FAULT` (the division would
//!   be undefined; rejected up front rather than surfaced as `inf`/`NaN`)

use tracing::{debug, info, instrument};
use validator::Validate;

use crate::contracts::allocation::{AllocateHoursRequest, AllocationResponse};
use crate::error::PlannerError;
use crate::planners::traits::{Planner, PlannerInfo};

/// Planner identifier.
pub const ALLOCATION_PLANNER_ID: &str = "allocation-planner";

/// Planner version (semantic versioning).
pub const ALLOCATION_PLANNER_VERSION: &str = "1.0.0";

/// Planner for proportional study-hour allocation.
#[derive(Debug, Clone, Default)]
pub struct AllocationPlanner;

impl AllocationPlanner {
    /// Create a new allocation planner.
    pub fn new() -> Self {
        Self
    }

    /// Sum the subject difficulties, reporting the first subject that
    /// lacks the field.
    fn total_difficulty(request: &AllocateHoursRequest) -> Result<f64, PlannerError> {
        let mut total = 0.0;
        for (index, subject) in request.subjects.iter().enumerate() {
            let difficulty = subject.difficulty.ok_or_else(|| {
                PlannerError::MissingField(format!("subjects[{index}].difficulty"))
            })?;
            total += difficulty;
        }
        Ok(total)
    }
}

impl Planner for AllocationPlanner {
    type Request = AllocateHoursRequest;
    type Response = AllocationResponse;

    fn info(&self) -> PlannerInfo {
        PlannerInfo {
            id: ALLOCATION_PLANNER_ID,
            version: ALLOCATION_PLANNER_VERSION,
            route: "/allocate_hours",
            description: "Allocates a study-hour budget across subjects in proportion to difficulty",
        }
    }

    fn validate(&self, request: &Self::Request) -> Result<(), PlannerError> {
        request.validate()?;
        let total = Self::total_difficulty(request)?;
        if total == 0.0 {
            return Err(PlannerError::ArithmeticFault(
                "total difficulty is zero".to_string(),
            ));
        }
        Ok(())
    }

    #[instrument(skip(self, request), fields(
        total_hours = request.total_hours,
        subjects = request.subjects.len()
    ))]
    fn execute(&self, mut request: Self::Request) -> Result<Self::Response, PlannerError> {
        let total_difficulty = Self::total_difficulty(&request)?;
        if total_difficulty == 0.0 {
            return Err(PlannerError::ArithmeticFault(
                "total difficulty is zero".to_string(),
            ));
        }

        for subject in &mut request.subjects {
            // validate() guarantees presence; checked again for direct callers.
            let difficulty = subject
                .difficulty
                .ok_or_else(|| PlannerError::MissingField("difficulty".to_string()))?;
            let allocated = difficulty / total_difficulty * request.total_hours as f64;
            subject.allocated_hours = Some(allocated);
            debug!(difficulty, allocated, "Subject allocated");
        }

        info!(
            total_subjects = request.subjects.len(),
            total_difficulty, "Study hours allocated"
        );

        Ok(AllocationResponse {
            message: "Study hours allocated successfully".to_string(),
            total_subjects: request.subjects.len(),
            total_hours: request.total_hours,
            subjects: request.subjects,
        })
    }
}
