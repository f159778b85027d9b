//! Planner Traits
//!
//! The common seam every planner implements.

use serde::Serialize;

use crate::error::PlannerError;

/// Identity of a planner, used by the service catalog and landing page.
#[derive(Debug, Clone, Serialize)]
pub struct PlannerInfo {
    /// Unique planner identifier
    pub id: &'static str,

    /// Semantic version
    pub version: &'static str,

    /// HTTP route the planner is served on
    pub route: &'static str,

    /// Human-readable description
    pub description: &'static str,
}

/// Trait for all Study Strategy planners.
///
/// Every planner is a single-shot pure transformation: `validate` checks
/// the request's preconditions, `execute` performs the computation, and
/// `run` chains the two. Planners hold no mutable state, so repeating a
/// call with identical input yields identical output.
pub trait Planner {
    /// Request type for this planner
    type Request;

    /// Response type for this planner
    type Response;

    /// Get the planner's identity.
    fn info(&self) -> PlannerInfo;

    /// Validate request preconditions before any computation.
    fn validate(&self, request: &Self::Request) -> Result<(), PlannerError>;

    /// Execute the planner's core computation.
    ///
    /// Callers must have validated the request; `execute` may still fail
    /// on conditions only discoverable mid-computation.
    fn execute(&self, request: Self::Request) -> Result<Self::Response, PlannerError>;

    /// Full invocation cycle: validate, then execute.
    ///
    /// This is the primary entry point for planner invocation.
    fn run(&self, request: Self::Request) -> Result<Self::Response, PlannerError> {
        self.validate(&request)?;
        self.execute(request)
    }
}
