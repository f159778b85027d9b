//! OCEAN Score Planner
//!
//! Averages categorical quiz responses into the five Big Five trait
//! scores. Responses for recognized traits accumulate into that trait;
//! unrecognized traits are skipped without error. Every accumulator is
//! then divided by the TOTAL number of responses received, not by the
//! per-trait match count — the denominator is uniform across all five
//! traits.
//!
//! # Failure Modes
//!
//! - Empty response list: `INVALID_INPUT`
//! - An element missing `trait` or `score` never reaches this planner;
//!   the typed contract rejects it at deserialization

use tracing::{debug, info, instrument};
use validator::Validate;

use crate::contracts::ocean::{CalculateOceanScoresRequest, OceanScores, OceanScoresResponse};
use crate::error::PlannerError;
use crate::planners::traits::{Planner, PlannerInfo};

/// Planner identifier.
pub const OCEAN_PLANNER_ID: &str = "ocean-score-planner";

/// Planner version (semantic versioning).
pub const OCEAN_PLANNER_VERSION: &str = "1.0.0";

/// Planner for OCEAN quiz-response averaging.
#[derive(Debug, Clone, Default)]
pub struct OceanScorePlanner;

impl OceanScorePlanner {
    /// Create a new OCEAN score planner.
    pub fn new() -> Self {
        Self
    }
}

impl Planner for OceanScorePlanner {
    type Request = CalculateOceanScoresRequest;
    type Response = OceanScoresResponse;

    fn info(&self) -> PlannerInfo {
        PlannerInfo {
            id: OCEAN_PLANNER_ID,
            version: OCEAN_PLANNER_VERSION,
            route: "/calculate_ocean_scores",
            description: "Averages quiz responses into the five OCEAN personality trait scores",
        }
    }

    fn validate(&self, request: &Self::Request) -> Result<(), PlannerError> {
        request.validate()?;
        Ok(())
    }

    #[instrument(skip(self, request), fields(responses = request.quiz_responses.len()))]
    fn execute(&self, request: Self::Request) -> Result<Self::Response, PlannerError> {
        let response_count = request.quiz_responses.len();
        if response_count == 0 {
            return Err(PlannerError::InvalidInput(
                "quiz_responses must be non-empty".to_string(),
            ));
        }

        let mut scores = OceanScores::default();
        for response in &request.quiz_responses {
            match scores.slot_mut(&response.trait_name) {
                Some(slot) => *slot += response.score,
                None => {
                    debug!(trait_name = %response.trait_name, "Ignoring unrecognized trait");
                }
            }
        }

        // Uniform divisor: the full response count, including ignored and
        // off-trait responses.
        let divisor = response_count as f64;
        for trait_name in OceanScores::TRAITS {
            if let Some(slot) = scores.slot_mut(trait_name) {
                *slot /= divisor;
            }
        }

        info!(responses = response_count, "OCEAN scores calculated");

        Ok(OceanScoresResponse {
            message: "OCEAN personality scores calculated".to_string(),
            ocean_scores: scores,
        })
    }
}
