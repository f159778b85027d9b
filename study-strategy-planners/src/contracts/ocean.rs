//! OCEAN Scoring Contracts
//!
//! Input and output schemas for averaging quiz responses into the five
//! Big Five (OCEAN) trait scores.
//!
//! # Request Format
//!
//! ```json
//! {
//!   "quiz_responses": [
//!     {"trait": "openness", "score": 80},
//!     {"trait": "openness", "score": 60}
//!   ]
//! }
//! ```
//!
//! # Response Format
//!
//! ```json
//! {
//!   "message": "OCEAN personality scores calculated",
//!   "ocean_scores": {
//!     "openness": 70.0,
//!     "conscientiousness": 0.0,
//!     "extraversion": 0.0,
//!     "agreeableness": 0.0,
//!     "neuroticism": 0.0
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for OCEAN score calculation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CalculateOceanScoresRequest {
    /// Quiz responses to aggregate. Must be non-empty; every element must
    /// carry both `trait` and `score` (enforced at deserialization).
    #[validate(length(min = 1, message = "quiz_responses must be non-empty"))]
    pub quiz_responses: Vec<QuizResponse>,
}

/// A single quiz response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    /// Trait the response scores. Unrecognized traits are ignored during
    /// aggregation but still count toward the averaging denominator.
    #[serde(rename = "trait")]
    pub trait_name: String,

    /// Caller-supplied score. No bounds are enforced.
    pub score: f64,
}

/// The five OCEAN trait scores.
///
/// Produced by the scoring endpoint and accepted back as input by the
/// technique-suggestion endpoint; the caller carries it between calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OceanScores {
    /// Openness to experience
    pub openness: f64,
    /// Conscientiousness
    pub conscientiousness: f64,
    /// Extraversion
    pub extraversion: f64,
    /// Agreeableness
    pub agreeableness: f64,
    /// Neuroticism
    pub neuroticism: f64,
}

impl OceanScores {
    /// The fixed trait names, in canonical order.
    pub const TRAITS: [&'static str; 5] = [
        "openness",
        "conscientiousness",
        "extraversion",
        "agreeableness",
        "neuroticism",
    ];

    /// Mutable accumulator slot for a trait name, or `None` for an
    /// unrecognized trait.
    pub fn slot_mut(&mut self, trait_name: &str) -> Option<&mut f64> {
        match trait_name {
            "openness" => Some(&mut self.openness),
            "conscientiousness" => Some(&mut self.conscientiousness),
            "extraversion" => Some(&mut self.extraversion),
            "agreeableness" => Some(&mut self.agreeableness),
            "neuroticism" => Some(&mut self.neuroticism),
            _ => None,
        }
    }

    /// Read a trait score by name, or `None` for an unrecognized trait.
    pub fn get(&self, trait_name: &str) -> Option<f64> {
        match trait_name {
            "openness" => Some(self.openness),
            "conscientiousness" => Some(self.conscientiousness),
            "extraversion" => Some(self.extraversion),
            "agreeableness" => Some(self.agreeableness),
            "neuroticism" => Some(self.neuroticism),
            _ => None,
        }
    }
}

/// Response for a successful score calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OceanScoresResponse {
    /// Human-readable status line.
    pub message: String,

    /// The five averaged trait scores.
    pub ocean_scores: OceanScores,
}
