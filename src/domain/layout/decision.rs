//! Layout Decision - the engine's sole output.

use serde::{Deserialize, Serialize};

use super::element::ElementName;
use crate::domain::foundation::{Region, RiskLevel};

/// Complete placement decision: five named, ordered element-name lists.
///
/// Desktop regions are mutually exclusive; the mobile list is computed
/// independently and may repeat desktop members. Empty regions are empty
/// lists, never errors; the renderer simply omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDecision {
    pub hero: Vec<ElementName>,
    pub primary: Vec<ElementName>,
    pub secondary: Vec<ElementName>,
    pub footer: Vec<ElementName>,
    pub mobile: Vec<ElementName>,
    /// Risk level the decision was computed under.
    pub risk_level: RiskLevel,
    /// Compact mode flag from the active policy.
    pub compact: bool,
}

impl LayoutDecision {
    /// Empty decision for a risk level.
    pub fn empty(risk_level: RiskLevel, compact: bool) -> Self {
        Self {
            hero: Vec::new(),
            primary: Vec::new(),
            secondary: Vec::new(),
            footer: Vec::new(),
            mobile: Vec::new(),
            risk_level,
            compact,
        }
    }

    /// The ordered name list for a region.
    pub fn region(&self, region: Region) -> &[ElementName] {
        match region {
            Region::Hero => &self.hero,
            Region::Primary => &self.primary,
            Region::Secondary => &self.secondary,
            Region::Footer => &self.footer,
            Region::Mobile => &self.mobile,
        }
    }

    /// The desktop region holding a name, if any.
    pub fn desktop_region_of(&self, name: &ElementName) -> Option<Region> {
        Region::desktop()
            .iter()
            .find(|region| self.region(**region).contains(name))
            .copied()
    }

    /// Whether any desktop region contains the name.
    pub fn desktop_contains(&self, name: &ElementName) -> bool {
        self.desktop_region_of(name).is_some()
    }

    /// Total elements placed on desktop.
    pub fn desktop_len(&self) -> usize {
        Region::desktop().iter().map(|r| self.region(*r).len()).sum()
    }

    /// True when no region holds any element.
    pub fn is_empty(&self) -> bool {
        Region::all().iter().all(|r| self.region(*r).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::element::ElementName;

    fn name(s: &str) -> ElementName {
        ElementName::new(s).unwrap()
    }

    fn sample() -> LayoutDecision {
        LayoutDecision {
            hero: vec![name("crisis_resources")],
            primary: vec![name("mood_tracker"), name("journal")],
            secondary: vec![name("exercises")],
            footer: Vec::new(),
            mobile: vec![name("crisis_resources"), name("mood_tracker")],
            risk_level: RiskLevel::Medium,
            compact: false,
        }
    }

    #[test]
    fn region_lookup_returns_ordered_lists() {
        let decision = sample();
        assert_eq!(decision.region(Region::Hero), &[name("crisis_resources")]);
        assert_eq!(
            decision.region(Region::Primary),
            &[name("mood_tracker"), name("journal")]
        );
        assert!(decision.region(Region::Footer).is_empty());
    }

    #[test]
    fn desktop_region_of_finds_placement() {
        let decision = sample();
        assert_eq!(
            decision.desktop_region_of(&name("crisis_resources")),
            Some(Region::Hero)
        );
        assert_eq!(
            decision.desktop_region_of(&name("exercises")),
            Some(Region::Secondary)
        );
        assert_eq!(decision.desktop_region_of(&name("missing")), None);
    }

    #[test]
    fn desktop_contains_ignores_mobile_only_entries() {
        let mut decision = sample();
        decision.mobile.push(name("mobile_only"));
        assert!(!decision.desktop_contains(&name("mobile_only")));
    }

    #[test]
    fn desktop_len_sums_desktop_regions() {
        assert_eq!(sample().desktop_len(), 4);
    }

    #[test]
    fn empty_decision_is_empty() {
        let decision = LayoutDecision::empty(RiskLevel::Critical, true);
        assert!(decision.is_empty());
        assert_eq!(decision.desktop_len(), 0);
        assert!(decision.compact);
    }

    #[test]
    fn decision_serializes_with_snake_case_regions() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("hero").is_some());
        assert!(json.get("mobile").is_some());
        assert_eq!(json["risk_level"], "medium");
    }
}
