//! Technique Planner
//!
//! Matches a five-trait OCEAN score vector against a fixed catalog of
//! threshold rules. The rules are independent and non-exclusive: all five
//! are evaluated unconditionally, in fixed order, and each appends its
//! technique when its condition holds. Zero or more may fire.
//!
//! # Failure Modes
//!
//! - Any of the five trait keys absent: `INVALID_INPUT` (names the first
//!   missing trait; extra keys are ignored)

use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use crate::contracts::ocean::OceanScores;
use crate::contracts::techniques::{SuggestTechniquesRequest, TechniquesResponse};
use crate::error::PlannerError;
use crate::planners::traits::{Planner, PlannerInfo};

/// Planner identifier.
pub const TECHNIQUE_PLANNER_ID: &str = "technique-planner";

/// Planner version (semantic versioning).
pub const TECHNIQUE_PLANNER_VERSION: &str = "1.0.0";

/// Direction of a threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Above,
    Below,
}

/// A single threshold rule in the technique catalog.
#[derive(Debug, Clone, Copy)]
struct TechniqueRule {
    trait_name: &'static str,
    comparison: Comparison,
    threshold: f64,
    technique: &'static str,
}

impl TechniqueRule {
    fn matches(&self, score: f64) -> bool {
        match self.comparison {
            Comparison::Above => score > self.threshold,
            Comparison::Below => score < self.threshold,
        }
    }
}

/// The fixed technique catalog. Order is part of the contract: matched
/// techniques appear in the response in this order.
const RULES: [TechniqueRule; 5] = [
    TechniqueRule {
        trait_name: "openness",
        comparison: Comparison::Above,
        threshold: 70.0,
        technique: "Mind mapping, creative summarization",
    },
    TechniqueRule {
        trait_name: "conscientiousness",
        comparison: Comparison::Above,
        threshold: 70.0,
        technique: "Pomodoro method, strict scheduling",
    },
    TechniqueRule {
        trait_name: "extraversion",
        comparison: Comparison::Below,
        threshold: 50.0,
        technique: "Solitary study, self-quizzing",
    },
    TechniqueRule {
        trait_name: "agreeableness",
        comparison: Comparison::Above,
        threshold: 70.0,
        technique: "Collaborative projects, peer learning",
    },
    TechniqueRule {
        trait_name: "neuroticism",
        comparison: Comparison::Above,
        threshold: 60.0,
        technique: "Frequent breaks, stress-relief exercises",
    },
];

/// Planner for threshold-based technique suggestion.
#[derive(Debug, Clone, Default)]
pub struct TechniquePlanner;

impl TechniquePlanner {
    /// Create a new technique planner.
    pub fn new() -> Self {
        Self
    }

    /// Check that every OCEAN trait key is present, in canonical order so
    /// the reported trait is deterministic.
    fn require_all_traits(scores: &BTreeMap<String, f64>) -> Result<(), PlannerError> {
        for trait_name in OceanScores::TRAITS {
            if !scores.contains_key(trait_name) {
                return Err(PlannerError::InvalidInput(format!(
                    "ocean_scores is missing trait '{trait_name}'"
                )));
            }
        }
        Ok(())
    }
}

impl Planner for TechniquePlanner {
    type Request = SuggestTechniquesRequest;
    type Response = TechniquesResponse;

    fn info(&self) -> PlannerInfo {
        PlannerInfo {
            id: TECHNIQUE_PLANNER_ID,
            version: TECHNIQUE_PLANNER_VERSION,
            route: "/suggest_techniques",
            description: "Suggests study techniques from OCEAN trait scores via fixed threshold rules",
        }
    }

    fn validate(&self, request: &Self::Request) -> Result<(), PlannerError> {
        Self::require_all_traits(&request.ocean_scores)
    }

    #[instrument(skip(self, request))]
    fn execute(&self, request: Self::Request) -> Result<Self::Response, PlannerError> {
        Self::require_all_traits(&request.ocean_scores)?;

        let mut techniques = Vec::new();
        for rule in &RULES {
            // require_all_traits guarantees the key exists.
            let score = request.ocean_scores[rule.trait_name];
            if rule.matches(score) {
                debug!(
                    trait_name = rule.trait_name,
                    score, "Threshold rule matched"
                );
                techniques.push(rule.technique.to_string());
            }
        }

        info!(matched = techniques.len(), "Study techniques suggested");

        Ok(TechniquesResponse {
            message: "Study techniques suggested".to_string(),
            techniques,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(scores: &[(&str, f64)]) -> SuggestTechniquesRequest {
        SuggestTechniquesRequest {
            ocean_scores: scores
                .iter()
                .map(|(name, score)| (name.to_string(), *score))
                .collect(),
        }
    }

    fn full_request(
        openness: f64,
        conscientiousness: f64,
        extraversion: f64,
        agreeableness: f64,
        neuroticism: f64,
    ) -> SuggestTechniquesRequest {
        request(&[
            ("openness", openness),
            ("conscientiousness", conscientiousness),
            ("extraversion", extraversion),
            ("agreeableness", agreeableness),
            ("neuroticism", neuroticism),
        ])
    }

    #[test]
    fn test_matches_preserve_rule_order() {
        let planner = TechniquePlanner::new();
        let response = planner
            .run(full_request(80.0, 40.0, 30.0, 90.0, 20.0))
            .unwrap();

        assert_eq!(
            response.techniques,
            vec![
                "Mind mapping, creative summarization",
                "Solitary study, self-quizzing",
                "Collaborative projects, peer learning",
            ]
        );
    }

    #[test]
    fn test_no_rule_fires() {
        let planner = TechniquePlanner::new();
        let response = planner
            .run(full_request(50.0, 50.0, 60.0, 50.0, 50.0))
            .unwrap();
        assert!(response.techniques.is_empty());
    }

    #[test]
    fn test_all_rules_fire() {
        let planner = TechniquePlanner::new();
        let response = planner
            .run(full_request(71.0, 71.0, 49.0, 71.0, 61.0))
            .unwrap();
        assert_eq!(response.techniques.len(), 5);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Boundary values must not fire: the comparisons are strict.
        let planner = TechniquePlanner::new();
        let response = planner
            .run(full_request(70.0, 70.0, 50.0, 70.0, 60.0))
            .unwrap();
        assert!(response.techniques.is_empty());
    }

    #[test]
    fn test_missing_trait_is_invalid_input() {
        let planner = TechniquePlanner::new();
        let err = planner.run(request(&[("openness", 0.0)])).unwrap_err();
        assert_eq!(
            err,
            PlannerError::InvalidInput("ocean_scores is missing trait 'conscientiousness'".into())
        );
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let planner = TechniquePlanner::new();
        let mut req = full_request(80.0, 40.0, 30.0, 90.0, 20.0);
        req.ocean_scores.insert("charisma".to_string(), 100.0);

        let response = planner.run(req).unwrap();
        assert_eq!(response.techniques.len(), 3);
    }
}
