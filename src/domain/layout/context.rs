//! Risk context consumed by one layout computation, and the safety-tag
//! vocabulary used by the named boost rules.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::element::ElementName;
use crate::domain::foundation::{DissonanceScore, RiskLevel, Trajectory};

/// The decision input for one layout computation.
///
/// All values arrive pre-validated from upstream classifiers; the engine
/// treats them as authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutContext {
    pub risk_level: RiskLevel,
    pub trajectory: Trajectory,
    pub dissonance_score: DissonanceScore,
    /// Sessions completed to date; consumed only by named boost rules.
    #[serde(default)]
    pub session_count: u32,
    /// Triggers observed this session; consumed only by named boost rules.
    #[serde(default)]
    pub trigger_count: u32,
}

impl LayoutContext {
    /// Creates a context with zeroed auxiliary counters.
    pub fn new(
        risk_level: RiskLevel,
        trajectory: Trajectory,
        dissonance_score: DissonanceScore,
    ) -> Self {
        Self {
            risk_level,
            trajectory,
            dissonance_score,
            session_count: 0,
            trigger_count: 0,
        }
    }

    /// Sets the auxiliary counters.
    pub fn with_counters(mut self, session_count: u32, trigger_count: u32) -> Self {
        self.session_count = session_count;
        self.trigger_count = trigger_count;
        self
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(RiskLevel::default(), Trajectory::default(), DissonanceScore::ZERO)
    }
}

/// Named sets of element names recognized by the safety-boost rules.
///
/// Immutable value injected into the scorer and distributor, never a mutable
/// singleton, so tests can supply alternate vocabularies. Matching is by
/// exact element name; the payload is never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyTags {
    /// Crisis resources: +50 unconditionally, forced into the mobile list.
    pub crisis_resources: HashSet<ElementName>,
    /// Safety check-ins: +50 unconditionally.
    pub safety_checks: HashSet<ElementName>,
    /// Dissonance indicators: +30 while the score is elevated.
    pub dissonance_indicators: HashSet<ElementName>,
    /// Progress celebrations: +20 while improving, excluded while declining.
    pub progress_celebrations: HashSet<ElementName>,
}

static DEFAULT_TAGS: Lazy<SafetyTags> = Lazy::new(|| SafetyTags {
    crisis_resources: names(&["crisis_resources", "crisis_hotline"]),
    safety_checks: names(&["safety_check_in", "safety_plan"]),
    dissonance_indicators: names(&["dissonance_indicator"]),
    progress_celebrations: names(&["progress_celebration"]),
});

fn names(raw: &[&str]) -> HashSet<ElementName> {
    raw.iter()
        .map(|n| ElementName::new(*n).expect("static tag names are non-empty"))
        .collect()
}

impl SafetyTags {
    /// The standard Haven vocabulary.
    pub fn standard() -> &'static SafetyTags {
        &DEFAULT_TAGS
    }

    /// An empty vocabulary; no boost rule fires.
    pub fn none() -> Self {
        Self {
            crisis_resources: HashSet::new(),
            safety_checks: HashSet::new(),
            dissonance_indicators: HashSet::new(),
            progress_celebrations: HashSet::new(),
        }
    }

    pub fn is_crisis_resource(&self, name: &ElementName) -> bool {
        self.crisis_resources.contains(name)
    }

    pub fn is_safety_check(&self, name: &ElementName) -> bool {
        self.safety_checks.contains(name)
    }

    pub fn is_dissonance_indicator(&self, name: &ElementName) -> bool {
        self.dissonance_indicators.contains(name)
    }

    pub fn is_progress_celebration(&self, name: &ElementName) -> bool {
        self.progress_celebrations.contains(name)
    }

    /// Whether the element carries either unconditional safety boost.
    pub fn is_safety_critical(&self, name: &ElementName) -> bool {
        self.is_crisis_resource(name) || self.is_safety_check(name)
    }
}
