//! Urgency enum representing upstream-assigned time-sensitivity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-sensitivity of an element's content, assigned by an upstream
/// collaborator (crisis detection, emotion analysis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    /// Returns all urgency classes in ascending order.
    pub fn all() -> &'static [Urgency] {
        &[
            Urgency::None,
            Urgency::Low,
            Urgency::Medium,
            Urgency::High,
            Urgency::Critical,
        ]
    }

    /// Base scoring weight.
    pub fn weight(&self) -> i64 {
        match self {
            Urgency::None => 0,
            Urgency::Low => 25,
            Urgency::Medium => 50,
            Urgency::High => 75,
            Urgency::Critical => 100,
        }
    }

    /// True for the class carrying the critical-visibility guarantee.
    pub fn is_critical(&self) -> bool {
        matches!(self, Urgency::Critical)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Urgency::None => "none",
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}
