//! Integration Tests for Study Strategy Planners
//!
//! These tests verify the end-to-end behavior of the planners against the
//! documented contract of the API.
//!
//! # Test Categories
//!
//! 1. **Contract Compliance**: request/response schema adherence
//! 2. **Computation**: the documented arithmetic and rule order
//! 3. **Determinism**: same inputs produce same outputs
//! 4. **Error Handling**: proper error kinds for each failure mode

use serde_json::json;

use study_strategy_planners::{
    contracts::ocean::QuizResponse,
    planner_catalog, AllocateHoursRequest, AllocationPlanner, CalculateOceanScoresRequest,
    OceanScorePlanner, Planner, PlannerError, SuggestTechniquesRequest, TechniquePlanner,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Create an allocation request from raw JSON, the way the HTTP layer does.
fn allocation_request(body: serde_json::Value) -> AllocateHoursRequest {
    serde_json::from_value(body).expect("fixture deserialization failed")
}

/// Create a quiz request over the given (trait, score) pairs.
fn quiz_request(responses: &[(&str, f64)]) -> CalculateOceanScoresRequest {
    CalculateOceanScoresRequest {
        quiz_responses: responses
            .iter()
            .map(|(trait_name, score)| QuizResponse {
                trait_name: trait_name.to_string(),
                score: *score,
            })
            .collect(),
    }
}

/// Create a technique request with all five traits present.
fn technique_request(scores: &[(&str, f64)]) -> SuggestTechniquesRequest {
    SuggestTechniquesRequest {
        ocean_scores: scores
            .iter()
            .map(|(name, score)| (name.to_string(), *score))
            .collect(),
    }
}

// ============================================================================
// CONTRACT COMPLIANCE
// ============================================================================

#[test]
fn test_allocation_response_shape() {
    let planner = AllocationPlanner::new();
    let response = planner
        .run(allocation_request(json!({
            "total_hours": 10,
            "subjects": [
                {"name": "Math", "difficulty": 3},
                {"name": "History", "difficulty": 1}
            ]
        })))
        .unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["message"], "Study hours allocated successfully");
    assert_eq!(value["total_subjects"], 2);
    assert_eq!(value["total_hours"], 10);
    assert_eq!(value["subjects"][0]["name"], "Math");
    assert_eq!(value["subjects"][0]["allocated_hours"], 7.5);
    assert_eq!(value["subjects"][1]["allocated_hours"], 2.5);
}

#[test]
fn test_ocean_response_carries_all_five_traits() {
    let planner = OceanScorePlanner::new();
    let response = planner.run(quiz_request(&[("openness", 80.0)])).unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["message"], "OCEAN personality scores calculated");
    for trait_name in [
        "openness",
        "conscientiousness",
        "extraversion",
        "agreeableness",
        "neuroticism",
    ] {
        assert!(
            value["ocean_scores"].get(trait_name).is_some(),
            "missing {trait_name}"
        );
    }
}

#[test]
fn test_scoring_output_feeds_suggestion_input() {
    // The caller pipes one endpoint's output into the next; the serialized
    // OceanScores must deserialize as a valid suggestion request.
    let scorer = OceanScorePlanner::new();
    let scored = scorer
        .run(quiz_request(&[("openness", 80.0), ("extraversion", 20.0)]))
        .unwrap();

    let body = json!({ "ocean_scores": serde_json::to_value(scored.ocean_scores).unwrap() });
    let request: SuggestTechniquesRequest = serde_json::from_value(body).unwrap();

    let suggester = TechniquePlanner::new();
    let response = suggester.run(request).unwrap();
    // openness 40 (80/2) fires nothing; extraversion 10 < 50 fires.
    assert_eq!(response.techniques, vec!["Solitary study, self-quizzing"]);
}

#[test]
fn test_planner_catalog_covers_every_route() {
    let routes: Vec<&str> = planner_catalog().iter().map(|p| p.route).collect();
    assert_eq!(
        routes,
        vec!["/allocate_hours", "/calculate_ocean_scores", "/suggest_techniques"]
    );
}

// ============================================================================
// COMPUTATION
// ============================================================================

#[test]
fn test_allocations_sum_to_budget_for_positive_difficulties() {
    let planner = AllocationPlanner::new();
    let response = planner
        .run(allocation_request(json!({
            "total_hours": 100,
            "subjects": [
                {"difficulty": 0.3}, {"difficulty": 2.7},
                {"difficulty": 5.0}, {"difficulty": 11.13}
            ]
        })))
        .unwrap();

    let sum: f64 = response
        .subjects
        .iter()
        .map(|s| s.allocated_hours.unwrap())
        .sum();
    assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
}

#[test]
fn test_ocean_averaging_uses_uniform_divisor() {
    let planner = OceanScorePlanner::new();
    let response = planner
        .run(quiz_request(&[
            ("openness", 80.0),
            ("openness", 60.0),
            ("agreeableness", 40.0),
            ("unknown_trait", 999.0),
        ]))
        .unwrap();

    // Every accumulator divides by 4: the total number of responses.
    assert_eq!(response.ocean_scores.openness, 35.0);
    assert_eq!(response.ocean_scores.agreeableness, 10.0);
    assert_eq!(response.ocean_scores.conscientiousness, 0.0);
}

#[test]
fn test_technique_order_matches_rule_order() {
    let planner = TechniquePlanner::new();
    let response = planner
        .run(technique_request(&[
            ("openness", 80.0),
            ("conscientiousness", 40.0),
            ("extraversion", 30.0),
            ("agreeableness", 90.0),
            ("neuroticism", 20.0),
        ]))
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

// ============================================================================
// DETERMINISM
// ============================================================================

#[test]
fn test_repeated_invocations_are_identical() {
    let allocator = AllocationPlanner::new();
    let body = json!({
        "total_hours": 17,
        "subjects": [{"difficulty": 2}, {"difficulty": 5}]
    });
    let first = allocator.run(allocation_request(body.clone())).unwrap();
    let second = allocator.run(allocation_request(body)).unwrap();
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[test]
fn test_allocation_error_kinds() {
    let planner = AllocationPlanner::new();

    let empty = planner
        .run(allocation_request(json!({"total_hours": 10, "subjects": []})))
        .unwrap_err();
    assert_eq!(empty.code(), "INVALID_INPUT");

    let zero_difficulty = planner
        .run(allocation_request(json!({
            "total_hours": 10,
            "subjects": [{"difficulty": 0}]
        })))
        .unwrap_err();
    assert_eq!(zero_difficulty.code(), "ARITHMETIC_FAULT");

    let missing = planner
        .run(allocation_request(json!({
            "total_hours": 10,
            "subjects": [{"name": "Math"}]
        })))
        .unwrap_err();
    assert_eq!(missing, PlannerError::MissingField("subjects[0].difficulty".into()));
}

#[test]
fn test_suggestion_requires_every_trait() {
    let planner = TechniquePlanner::new();
    let err = planner
        .run(technique_request(&[("openness", 0.0)]))
        .unwrap_err();
    assert_eq!(err.code(), "INVALID_INPUT");
    assert!(err.to_string().contains("conscientiousness"));
}
