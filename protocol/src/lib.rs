//! Wire types for the Closet Planner API
//!
//! This crate contains the data transfer objects exchanged with the remote
//! analysis/generation service, organized by domain:
//! - `common`: core closet and outfit structures shared across endpoints
//! - `api`: request and response types per endpoint group

pub mod api;
pub mod common;

pub use api::*;
pub use common::*;
