//! Risk level and trajectory assigned by upstream assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The user's currently assessed psychological risk tier.
///
/// The primary safety-policy driver: it selects the active
/// [`RiskPolicy`](crate::domain::layout::RiskPolicy) and amplifies urgency
/// in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Returns all risk levels in ascending severity.
    pub fn all() -> &'static [RiskLevel] {
        &[
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ]
    }

    /// Urgency multiplier as an integer percent.
    ///
    /// Integer percent keeps priorities exact: `base * pct / 100` with no
    /// float rounding. Identical urgency scores higher as risk rises.
    pub fn multiplier_percent(&self) -> i64 {
        match self {
            RiskLevel::Low => 50,
            RiskLevel::Medium => 100,
            RiskLevel::High => 150,
            RiskLevel::Critical => 200,
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Low
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}

/// Direction of the user's assessed trajectory between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trajectory {
    Improving,
    Stable,
    Declining,
    Volatile,
}

impl Default for Trajectory {
    fn default() -> Self {
        Trajectory::Stable
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trajectory::Improving => "improving",
            Trajectory::Stable => "stable",
            Trajectory::Declining => "declining",
            Trajectory::Volatile => "volatile",
        };
        write!(f, "{}", s)
    }
}
