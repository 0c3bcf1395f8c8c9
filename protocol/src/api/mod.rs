//! API DTOs module
//!
//! Request and response types organized by endpoint group:
//! - `planner`: public analyze/generate/health endpoints
//! - `account`: authenticated per-user closet and saved-outfit endpoints

pub mod account;
pub mod planner;

pub use account::*;
pub use planner::*;
