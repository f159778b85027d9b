//! Technique Suggestion Contracts
//!
//! Input and output schemas for threshold-based study-technique matching.
//!
//! The request carries the trait scores as a plain map rather than the
//! typed [`OceanScores`](super::ocean::OceanScores) struct: this endpoint
//! requires all five trait keys to be present while extra keys are
//! silently ignored, and the planner reports the first missing trait by
//! name. A map keeps both behaviors explicit.
//!
//! # Request Format
//!
//! ```json
//! {
//!   "ocean_scores": {
//!     "openness": 80,
//!     "conscientiousness": 40,
//!     "extraversion": 30,
//!     "agreeableness": 90,
//!     "neuroticism": 20
//!   }
//! }
//! ```
//!
//! # Response Format
//!
//! ```json
//! {
//!   "message": "Study techniques suggested",
//!   "techniques": ["Mind mapping, creative summarization"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request for technique suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestTechniquesRequest {
    /// Trait scores keyed by trait name. All five OCEAN traits are
    /// required; unrecognized keys are ignored.
    pub ocean_scores: BTreeMap<String, f64>,
}

/// Response for a successful suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniquesResponse {
    /// Human-readable status line.
    pub message: String,

    /// Matched technique strings in fixed rule order. May be empty.
    pub techniques: Vec<String>,
}
