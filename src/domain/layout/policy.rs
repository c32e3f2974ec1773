//! Risk Policy - per-risk-level layout constraints.
//!
//! The single place where clinical-safety tuning happens. The distributor
//! consults the active policy and must never special-case risk level itself.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RiskLevel, ValidationError};

/// Layout constraints for one risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Cap on the combined hero + primary element count.
    pub max_visible: usize,
    pub show_secondary: bool,
    pub show_footer: bool,
    /// Compact mode reduces visual load; caps hero to one element.
    pub compact: bool,
}

/// Immutable, versioned mapping from risk level to policy.
///
/// Injected into the distributor as a value so tests can supply alternate
/// tables without global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPolicyTable {
    pub version: u32,
    low: RiskPolicy,
    medium: RiskPolicy,
    high: RiskPolicy,
    critical: RiskPolicy,
}

impl RiskPolicyTable {
    /// Builds a custom table, enforcing capacity monotonicity:
    /// `critical <= high <= medium <= low`, each at least 1.
    pub fn new(
        version: u32,
        low: RiskPolicy,
        medium: RiskPolicy,
        high: RiskPolicy,
        critical: RiskPolicy,
    ) -> Result<Self, ValidationError> {
        if critical.max_visible == 0 {
            return Err(ValidationError::invalid_format(
                "risk_policy_table",
                "max_visible must be at least 1 at every risk level",
            ));
        }
        let caps = [
            critical.max_visible,
            high.max_visible,
            medium.max_visible,
            low.max_visible,
        ];
        if caps.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ValidationError::invalid_format(
                "risk_policy_table",
                "max_visible must not decrease as risk falls",
            ));
        }
        Ok(Self {
            version,
            low,
            medium,
            high,
            critical,
        })
    }

    /// The active policy for a risk level. Total: every level has a row.
    pub fn policy(&self, risk_level: RiskLevel) -> RiskPolicy {
        match risk_level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
            RiskLevel::Critical => self.critical,
        }
    }
}

impl Default for RiskPolicyTable {
    /// The authoritative clinical policy table.
    fn default() -> Self {
        Self {
            version: 1,
            low: RiskPolicy {
                max_visible: 12,
                show_secondary: true,
                show_footer: true,
                compact: false,
            },
            medium: RiskPolicy {
                max_visible: 8,
                show_secondary: true,
                show_footer: true,
                compact: false,
            },
            high: RiskPolicy {
                max_visible: 5,
                show_secondary: true,
                show_footer: false,
                compact: true,
            },
            critical: RiskPolicy {
                max_visible: 3,
                show_secondary: false,
                show_footer: false,
                compact: true,
            },
        }
    }
}
