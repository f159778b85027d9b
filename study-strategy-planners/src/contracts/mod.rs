//! Request/Response Contracts
//!
//! Typed schemas for every endpoint of the Study Strategy API. Requests
//! derive `Deserialize` and (where shape rules apply) `validator::Validate`;
//! responses derive `Serialize`. All validation happens before any
//! computation runs — handlers never reach into untyped JSON.
//!
//! # Available Contracts
//!
//! - [`allocation`]: study-hour allocation over weighted subjects
//! - [`ocean`]: OCEAN quiz-response averaging
//! - [`techniques`]: threshold-based technique suggestion

pub mod allocation;
pub mod ocean;
pub mod techniques;

pub use allocation::*;
pub use ocean::*;
pub use techniques::*;
