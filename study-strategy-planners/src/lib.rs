//! Study Strategy Planners
//!
//! This crate provides the planning units for the Study Strategy API:
//! proportional study-hour allocation, OCEAN quiz-response averaging, and
//! threshold-based study-technique suggestion.
//!
//! All planners:
//!
//! - Are stateless and side-effect free
//! - Validate every input against typed contracts before computing
//! - Return deterministic output for identical input
//! - Report failures through the [`PlannerError`] taxonomy rather than
//!   collapsing them into a single catch-all
//!
//! # Usage
//!
//! ```rust
//! use study_strategy_planners::contracts::ocean::{CalculateOceanScoresRequest, QuizResponse};
//! use study_strategy_planners::planners::{OceanScorePlanner, Planner};
//!
//! let planner = OceanScorePlanner::new();
//! let response = planner.run(CalculateOceanScoresRequest {
//!     quiz_responses: vec![QuizResponse { trait_name: "openness".into(), score: 80.0 }],
//! })?;
//! assert_eq!(response.ocean_scores.openness, 80.0);
//! # Ok::<(), study_strategy_planners::PlannerError>(())
//! ```
//!
//! # Modules
//!
//! - [`contracts`]: request/response schemas
//! - [`planners`]: planner implementations
//! - [`error`]: the shared error taxonomy

#![warn(missing_docs)]

pub mod contracts;
pub mod error;
pub mod planners;

// Re-export commonly used types
pub use contracts::allocation::{AllocateHoursRequest, AllocationResponse, Subject};
pub use contracts::ocean::{
    CalculateOceanScoresRequest, OceanScores, OceanScoresResponse, QuizResponse,
};
pub use contracts::techniques::{SuggestTechniquesRequest, TechniquesResponse};
pub use error::PlannerError;
pub use planners::{
    AllocationPlanner, OceanScorePlanner, Planner, PlannerInfo, TechniquePlanner,
    ALLOCATION_PLANNER_ID, ALLOCATION_PLANNER_VERSION, OCEAN_PLANNER_ID, OCEAN_PLANNER_VERSION,
    TECHNIQUE_PLANNER_ID, TECHNIQUE_PLANNER_VERSION,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identity of every planner the service exposes, in route order.
///
/// Consumed by the server's landing page and `/planners` catalog route.
pub fn planner_catalog() -> Vec<PlannerInfo> {
    vec![
        AllocationPlanner::new().info(),
        OceanScorePlanner::new().info(),
        TechniquePlanner::new().info(),
    ]
}
