//! Shared domain primitives for the layout engine.
//!
//! Value objects and enums used across scoring, policy, and distribution.
//! All construction goes through validated constructors; invalid input is a
//! configuration error, never a recoverable runtime condition.

mod dissonance;
mod emphasis;
mod errors;
mod region;
mod risk;
mod timestamp;
mod urgency;

pub use dissonance::DissonanceScore;
pub use emphasis::Emphasis;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use region::Region;
pub use risk::{RiskLevel, Trajectory};
pub use timestamp::Timestamp;
pub use urgency::Urgency;
