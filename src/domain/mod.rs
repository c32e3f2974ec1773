//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `layout` - Priority scoring, risk policy, and layout distribution

pub mod foundation;
pub mod layout;
