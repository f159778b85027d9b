//! Study Strategy Planners
//!
//! The three stateless computation units behind the API endpoints.
//! Every planner is a pure transformation from a validated request to a
//! response; none holds state or performs I/O.
//!
//! # Planner Types
//!
//! - `AllocationPlanner`: proportional study-hour allocation
//! - `OceanScorePlanner`: OCEAN quiz-response averaging
//! - `TechniquePlanner`: threshold-based technique suggestion

pub mod allocation;
pub mod ocean;
pub mod techniques;
pub mod traits;

pub use allocation::*;
pub use ocean::*;
pub use techniques::*;
pub use traits::*;
