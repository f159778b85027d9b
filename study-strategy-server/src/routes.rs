//! HTTP Routing Layer
//!
//! Builds the axum `Router` from an explicit [`Config`] value and maps
//! planner results onto the wire contract:
//!
//! - success: the planner's typed response as JSON, status 200
//! - `INVALID_INPUT` / `MISSING_FIELD` / malformed body: 400
//! - `ARITHMETIC_FAULT`: 422
//!
//! Every error body has the single shape `{"error": "<message>"}`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{instrument, warn};
use uuid::Uuid;

use study_strategy_planners::{
    planner_catalog, AllocateHoursRequest, AllocationPlanner, AllocationResponse,
    CalculateOceanScoresRequest, OceanScorePlanner, OceanScoresResponse, Planner, PlannerError,
    PlannerInfo, SuggestTechniquesRequest, TechniquePlanner, TechniquesResponse,
};

use crate::config::Config;

/// Shared application state: the three stateless planners plus the
/// configuration the router was built from.
#[derive(Clone)]
pub struct AppState {
    allocation: Arc<AllocationPlanner>,
    ocean: Arc<OceanScorePlanner>,
    techniques: Arc<TechniquePlanner>,
    config: Arc<Config>,
}

impl AppState {
    /// Create state from configuration. Planners hold no connections or
    /// caches, so construction cannot fail.
    pub fn new(config: Config) -> Self {
        Self {
            allocation: Arc::new(AllocationPlanner::new()),
            ocean: Arc::new(OceanScorePlanner::new()),
            techniques: Arc::new(TechniquePlanner::new()),
            config: Arc::new(config),
        }
    }
}

/// Build the service router.
pub fn router(config: Config) -> Router {
    let state = AppState::new(config);

    Router::new()
        // Landing page and catalog
        .route("/", get(home))
        .route("/planners", get(list_planners))
        // Health endpoints
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        // Planner endpoints
        .route("/allocate_hours", post(allocate_hours))
        .route("/calculate_ocean_scores", post(calculate_ocean_scores))
        .route("/suggest_techniques", post(suggest_techniques))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Wire-level error: a planner failure or a malformed request body.
pub enum ApiError {
    Planner(PlannerError),
    Body(JsonRejection),
}

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        Self::Planner(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::Planner(err) => {
                let status = match err {
                    PlannerError::InvalidInput(_) | PlannerError::MissingField(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    PlannerError::ArithmeticFault(_) => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (status, err.code(), err.to_string())
            }
            Self::Body(rejection) => (
                StatusCode::BAD_REQUEST,
                "MALFORMED_BODY",
                rejection.body_text(),
            ),
        };

        warn!(code, status = %status, error = %message, "Request rejected");
        (status, Json(json!({ "error": message }))).into_response()
    }
}

// =============================================================================
// Landing and Health Endpoints
// =============================================================================

/// GET / - HTML help text listing the planner routes.
async fn home(State(state): State<AppState>) -> Html<String> {
    let items: String = planner_catalog()
        .iter()
        .map(|planner| format!("    <li><code>{}</code> — {}</li>\n", planner.route, planner.description))
        .collect();

    Html(format!(
        "<h1>Welcome to the {name}</h1>\n\
         <p>POST JSON to the following endpoints:</p>\n\
         <ul>\n{items}</ul>\n",
        name = state.config.service_name,
    ))
}

/// GET /planners - JSON catalog of the planners.
async fn list_planners() -> Json<Vec<PlannerInfo>> {
    Json(planner_catalog())
}

/// Liveness probe - always returns OK if the process is running.
async fn health_check() -> &'static str {
    "OK"
}

/// Readiness probe - the planners need no warm-up, so readiness follows
/// liveness.
async fn readiness_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "READY")
}

// =============================================================================
// Planner Endpoints
// =============================================================================

/// POST /allocate_hours - Distribute a study-hour budget across subjects.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn allocate_hours(
    State(state): State<AppState>,
    payload: Result<Json<AllocateHoursRequest>, JsonRejection>,
) -> Result<Json<AllocationResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(state.allocation.run(request)?))
}

/// POST /calculate_ocean_scores - Average quiz responses into trait scores.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn calculate_ocean_scores(
    State(state): State<AppState>,
    payload: Result<Json<CalculateOceanScoresRequest>, JsonRejection>,
) -> Result<Json<OceanScoresResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(state.ocean.run(request)?))
}

/// POST /suggest_techniques - Match trait scores against the rule catalog.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn suggest_techniques(
    State(state): State<AppState>,
    payload: Result<Json<SuggestTechniquesRequest>, JsonRejection>,
) -> Result<Json<TechniquesResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(state.techniques.run(request)?))
}
