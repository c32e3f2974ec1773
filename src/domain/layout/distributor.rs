//! Layout Distributor - partitions scored elements into named regions.

use tracing::debug;

use super::context::{LayoutContext, SafetyTags};
use super::decision::LayoutDecision;
use super::element::{Element, ElementName, ElementSet};
use super::policy::{RiskPolicy, RiskPolicyTable};
use super::scoring::{PriorityScorer, PRIMARY_THRESHOLD, SECONDARY_THRESHOLD};
use crate::domain::foundation::{Emphasis, Trajectory};

/// Cap on the mobile list before forced critical inserts.
pub const MOBILE_MAX_ELEMENTS: usize = 7;

/// Pure layout computation: scores, sorts, and partitions elements under the
/// active risk policy.
///
/// Every call is independent and side-effect-free; two calls with identical
/// inputs produce identical decisions. Capacity and truncation are designed
/// behavior, never error states.
///
/// Safety guarantees, honored at every risk level:
/// - an element with critical urgency is always placed in hero or primary on
///   desktop and at the front of the mobile list;
/// - the critical-visibility guarantee outranks both the `max_visible` cap
///   and the mobile length cap.
#[derive(Debug, Clone)]
pub struct LayoutDistributor {
    policies: RiskPolicyTable,
    tags: SafetyTags,
    mobile_cap: usize,
}

impl LayoutDistributor {
    /// Creates a distributor over an injected policy table and tag
    /// vocabulary.
    pub fn new(policies: RiskPolicyTable, tags: SafetyTags) -> Self {
        Self {
            policies,
            tags,
            mobile_cap: MOBILE_MAX_ELEMENTS,
        }
    }

    /// Overrides the mobile length cap (configuration seam; the default is
    /// [`MOBILE_MAX_ELEMENTS`]).
    pub fn with_mobile_cap(mut self, cap: usize) -> Self {
        self.mobile_cap = cap;
        self
    }

    /// The active policy table.
    pub fn policies(&self) -> &RiskPolicyTable {
        &self.policies
    }

    /// The safety-tag vocabulary in effect.
    pub fn tags(&self) -> &SafetyTags {
        &self.tags
    }

    /// Computes a fresh layout decision for the element set and context.
    pub fn distribute(&self, elements: &ElementSet, context: &LayoutContext) -> LayoutDecision {
        let policy = self.policies.policy(context.risk_level);
        let scored = self.score_and_sort(elements, context);

        let mut decision = LayoutDecision::empty(context.risk_level, policy.compact);
        self.assign_desktop(&scored, &policy, &mut decision);
        decision.mobile = self.assign_mobile(&scored);

        debug!(
            risk_level = %context.risk_level,
            candidates = scored.len(),
            desktop = decision.desktop_len(),
            mobile = decision.mobile.len(),
            "layout decision computed"
        );

        decision
    }

    /// Filters terminal elements and sorts the rest by descending priority.
    ///
    /// The sort is stable, so equal priorities keep declaration order. A
    /// progress-celebration element is excluded outright while the
    /// trajectory is declining; a celebration surfaced to a declining user
    /// is a safety defect, not a ranking question.
    fn score_and_sort<'a>(
        &self,
        elements: &'a ElementSet,
        context: &LayoutContext,
    ) -> Vec<(&'a Element, i64)> {
        let scorer = PriorityScorer::new(&self.tags);
        let declining = context.trajectory == Trajectory::Declining;

        let mut scored: Vec<(&Element, i64)> = elements
            .renderable()
            .filter(|e| !(declining && self.tags.is_progress_celebration(&e.name)))
            .map(|e| (e, scorer.score(e, context)))
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
    }

    fn assign_desktop(
        &self,
        scored: &[(&Element, i64)],
        policy: &RiskPolicy,
        decision: &mut LayoutDecision,
    ) {
        let hero_cap = if policy.compact { 1 } else { usize::MAX };
        let mut placed = 0usize;

        for (element, priority) in scored {
            match self.desktop_target(element, *priority, policy) {
                DesktopTarget::HeroOrPrimary { prefers_hero } => {
                    let over_cap = placed >= policy.max_visible;
                    if over_cap && !element.urgency.is_critical() {
                        debug!(element = %element.name, "dropped by max_visible cap");
                        continue;
                    }
                    if prefers_hero && decision.hero.len() < hero_cap {
                        decision.hero.push(element.name.clone());
                    } else {
                        decision.primary.push(element.name.clone());
                    }
                    placed += 1;
                }
                DesktopTarget::Secondary => decision.secondary.push(element.name.clone()),
                DesktopTarget::Footer => decision.footer.push(element.name.clone()),
                DesktopTarget::Dropped(region) => {
                    debug!(element = %element.name, region, "dropped: region disabled by policy");
                }
            }
        }
    }

    fn desktop_target(&self, element: &Element, priority: i64, policy: &RiskPolicy) -> DesktopTarget {
        // Critical urgency is pinned to hero/primary regardless of emphasis.
        if element.urgency.is_critical() {
            return DesktopTarget::HeroOrPrimary {
                prefers_hero: element.emphasis.is_hero_class(),
            };
        }

        if element.emphasis.is_hero_class() {
            return DesktopTarget::HeroOrPrimary { prefers_hero: true };
        }
        if element.emphasis == Emphasis::Primary || priority >= PRIMARY_THRESHOLD {
            return DesktopTarget::HeroOrPrimary { prefers_hero: false };
        }
        if priority >= SECONDARY_THRESHOLD || element.emphasis == Emphasis::Secondary {
            return if policy.show_secondary {
                DesktopTarget::Secondary
            } else {
                DesktopTarget::Dropped("secondary")
            };
        }
        if policy.show_footer {
            DesktopTarget::Footer
        } else {
            DesktopTarget::Dropped("footer")
        }
    }

    /// Builds the mobile ordering: every critical-urgency or crisis-resource
    /// element first, in priority order, then the remaining sorted elements
    /// until the mobile cap is reached.
    ///
    /// Forced elements are never displaced, so the list exceeds the cap only
    /// when the forced elements alone do: `|mobile| <= max(cap, forced)`.
    fn assign_mobile(&self, scored: &[(&Element, i64)]) -> Vec<ElementName> {
        let is_forced = |element: &Element| {
            element.urgency.is_critical() || self.tags.is_crisis_resource(&element.name)
        };

        let mut mobile: Vec<ElementName> = scored
            .iter()
            .filter(|(e, _)| is_forced(e))
            .map(|(e, _)| e.name.clone())
            .collect();

        for (element, _) in scored.iter().filter(|(e, _)| !is_forced(e)) {
            if mobile.len() >= self.mobile_cap {
                break;
            }
            mobile.push(element.name.clone());
        }
        mobile
    }
}

enum DesktopTarget {
    HeroOrPrimary { prefers_hero: bool },
    Secondary,
    Footer,
    Dropped(&'static str),
}

impl Default for LayoutDistributor {
    fn default() -> Self {
        Self::new(RiskPolicyTable::default(), SafetyTags::standard().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DissonanceScore, RiskLevel, Urgency};

    fn context(risk: RiskLevel) -> LayoutContext {
        LayoutContext::new(risk, Trajectory::Stable, DissonanceScore::ZERO)
    }

    fn element(name: &str, emphasis: Emphasis, urgency: Urgency) -> Element {
        Element::new(name, emphasis, urgency).unwrap()
    }

    fn name(s: &str) -> ElementName {
        ElementName::new(s).unwrap()
    }

    fn set(elements: Vec<Element>) -> ElementSet {
        ElementSet::new(elements).unwrap()
    }

    #[test]
    fn hidden_and_invisible_elements_appear_nowhere() {
        let distributor = LayoutDistributor::default();
        let elements = set(vec![
            element("shown", Emphasis::Primary, Urgency::Medium),
            element("hidden", Emphasis::Hidden, Urgency::Critical),
            element("killed", Emphasis::Banner, Urgency::Critical).invisible(),
        ]);

        let decision = distributor.distribute(&elements, &context(RiskLevel::Low));

        for terminal in ["hidden", "killed"] {
            assert!(!decision.desktop_contains(&name(terminal)));
            assert!(!decision.mobile.contains(&name(terminal)));
        }
        assert!(decision.desktop_contains(&name("shown")));
    }

    #[test]
    fn banner_and_takeover_route_to_hero() {
        let distributor = LayoutDistributor::default();
        let elements = set(vec![
            element("takeover", Emphasis::Takeover, Urgency::Low),
            element("banner", Emphasis::Banner, Urgency::Low),
            element("card", Emphasis::Minimal, Urgency::Low),
        ]);

        let decision = distributor.distribute(&elements, &context(RiskLevel::Low));

        assert_eq!(decision.hero, vec![name("takeover"), name("banner")]);
        assert!(!decision.hero.contains(&name("card")));
    }

    #[test]
    fn primary_emphasis_and_high_priority_route_to_primary() {
        let distributor = LayoutDistributor::default();
        let elements = set(vec![
            element("primary_card", Emphasis::Primary, Urgency::None),
            // 75 * 1.5 + 20 = 132 >= 100
            element("hot_card", Emphasis::Secondary, Urgency::High),
        ]);

        let decision = distributor.distribute(&elements, &context(RiskLevel::High));

        assert!(decision.primary.contains(&name("primary_card")));
        assert!(decision.primary.contains(&name("hot_card")));
    }

    #[test]
    fn low_priority_elements_fall_to_secondary_then_footer() {
        let distributor = LayoutDistributor::default();
        let elements = set(vec![
            // 50 * 1.0 + 20 = 70 -> secondary band
            element("mid_card", Emphasis::Secondary, Urgency::Medium),
            // 0 * 1.0 + 10 = 10 -> footer band
            element("cold_card", Emphasis::Minimal, Urgency::None),
        ]);

        let decision = distributor.distribute(&elements, &context(RiskLevel::Medium));

        assert_eq!(decision.secondary, vec![name("mid_card")]);
        assert_eq!(decision.footer, vec![name("cold_card")]);
    }

    #[test]
    fn disabled_region_drops_elements_instead_of_demoting() {
        let distributor = LayoutDistributor::default();
        // At critical risk: show_secondary = false, show_footer = false.
        let elements = set(vec![
            element("anchor", Emphasis::Primary, Urgency::High),
            // 0 * 2.0 + 20 = 20 -> secondary band, disabled
            element("mid_card", Emphasis::Secondary, Urgency::None),
            // 0 * 2.0 + 10 = 10 -> footer band, disabled
            element("cold_card", Emphasis::Minimal, Urgency::None),
        ]);

        let decision = distributor.distribute(&elements, &context(RiskLevel::Critical));

        assert!(decision.secondary.is_empty());
        assert!(decision.footer.is_empty());
        assert!(!decision.desktop_contains(&name("mid_card")));
        assert!(!decision.desktop_contains(&name("cold_card")));
        // Dropped from this computation, not hidden permanently: the same
        // element returns once risk de-escalates.
        let relaxed = distributor.distribute(&elements, &context(RiskLevel::Low));
        assert!(relaxed.desktop_contains(&name("cold_card")));
    }

    #[test]
    fn max_visible_caps_combined_hero_and_primary() {
        let distributor = LayoutDistributor::default();
        let mut cards = vec![element("banner", Emphasis::Banner, Urgency::High)];
        for i in 0..9 {
            cards.push(element(
                &format!("card_{i}"),
                Emphasis::Primary,
                Urgency::Medium,
            ));
        }

        // High risk: max_visible = 5, compact.
        let decision = distributor.distribute(&set(cards), &context(RiskLevel::High));

        assert_eq!(decision.hero.len() + decision.primary.len(), 5);
        assert_eq!(decision.hero, vec![name("banner")]);
    }

    #[test]
    fn compact_mode_caps_hero_to_one_and_spills_to_primary() {
        let distributor = LayoutDistributor::default();
        let elements = set(vec![
            element("takeover", Emphasis::Takeover, Urgency::High),
            element("banner_a", Emphasis::Banner, Urgency::High),
            element("banner_b", Emphasis::Banner, Urgency::Medium),
        ]);

        let decision = distributor.distribute(&elements, &context(RiskLevel::High));

        assert_eq!(decision.hero, vec![name("takeover")]);
        assert_eq!(decision.primary, vec![name("banner_a"), name("banner_b")]);
    }

    #[test]
    fn critical_urgency_lands_in_hero_or_primary_regardless_of_emphasis() {
        let distributor = LayoutDistributor::default();
        for risk in RiskLevel::all() {
            let elements = set(vec![
                element("whisper", Emphasis::Minimal, Urgency::Critical),
                element("card", Emphasis::Primary, Urgency::Medium),
            ]);

            let decision = distributor.distribute(&elements, &context(*risk));
            let region = decision.desktop_region_of(&name("whisper"));
            assert!(
                matches!(
                    region,
                    Some(crate::domain::foundation::Region::Hero)
                        | Some(crate::domain::foundation::Region::Primary)
                ),
                "critical element must stay visible at {risk}"
            );
        }
    }

    #[test]
    fn critical_elements_survive_the_max_visible_cap() {
        let distributor = LayoutDistributor::default();
        let mut cards = Vec::new();
        for i in 0..5 {
            cards.push(element(
                &format!("alert_{i}"),
                Emphasis::Primary,
                Urgency::Critical,
            ));
        }

        // Critical risk: max_visible = 3, but the guarantee outranks the cap.
        let decision = distributor.distribute(&set(cards), &context(RiskLevel::Critical));

        for i in 0..5 {
            assert!(decision.desktop_contains(&name(&format!("alert_{i}"))));
        }
    }

    #[test]
    fn mobile_caps_at_seven_without_forced_elements() {
        let distributor = LayoutDistributor::default();
        let cards: Vec<Element> = (0..12)
            .map(|i| element(&format!("card_{i}"), Emphasis::Secondary, Urgency::Medium))
            .collect();

        let decision = distributor.distribute(&set(cards), &context(RiskLevel::Low));

        assert_eq!(decision.mobile.len(), MOBILE_MAX_ELEMENTS);
    }

    #[test]
    fn mobile_forces_critical_elements_to_the_front() {
        let distributor = LayoutDistributor::default();
        let mut cards: Vec<Element> = (0..10)
            .map(|i| element(&format!("card_{i}"), Emphasis::Primary, Urgency::High))
            .collect();
        // At low risk this scores 60 against the cards' 67, so it would fall
        // outside the top seven without the forced insert.
        cards.push(element("quiet_alarm", Emphasis::Minimal, Urgency::Critical));

        let decision = distributor.distribute(&set(cards), &context(RiskLevel::Low));

        assert_eq!(decision.mobile[0], name("quiet_alarm"));
        assert_eq!(decision.mobile.len(), MOBILE_MAX_ELEMENTS);
    }

    #[test]
    fn mobile_forced_inserts_displace_the_tail_up_to_the_cap() {
        let distributor = LayoutDistributor::default();
        let mut cards: Vec<Element> = (0..7)
            .map(|i| element(&format!("card_{i}"), Emphasis::Primary, Urgency::High))
            .collect();
        cards.push(element("alert_a", Emphasis::Minimal, Urgency::Critical));
        cards.push(element("alert_b", Emphasis::Minimal, Urgency::Critical));

        let decision = distributor.distribute(&set(cards), &context(RiskLevel::Low));

        assert_eq!(decision.mobile.len(), MOBILE_MAX_ELEMENTS);
        assert_eq!(decision.mobile[0], name("alert_a"));
        assert_eq!(decision.mobile[1], name("alert_b"));
        // Two lowest-priority cards were displaced.
        assert!(!decision.mobile.contains(&name("card_5")));
        assert!(!decision.mobile.contains(&name("card_6")));
    }

    #[test]
    fn mobile_exceeds_the_cap_only_when_forced_elements_alone_do() {
        let distributor = LayoutDistributor::default();
        let mut elements: Vec<Element> = (0..8)
            .map(|i| element(&format!("alert_{i}"), Emphasis::Primary, Urgency::Critical))
            .collect();
        elements.push(element("card", Emphasis::Secondary, Urgency::Medium));

        let decision = distributor.distribute(&set(elements), &context(RiskLevel::Medium));

        assert_eq!(decision.mobile.len(), 8);
        assert!(!decision.mobile.contains(&name("card")));
    }

    #[test]
    fn crisis_resource_is_forced_into_mobile_even_without_urgency() {
        let distributor = LayoutDistributor::default();
        let mut cards: Vec<Element> = (0..8)
            .map(|i| element(&format!("card_{i}"), Emphasis::Primary, Urgency::High))
            .collect();
        cards.push(element("crisis_resources", Emphasis::Minimal, Urgency::None));

        let decision = distributor.distribute(&set(cards), &context(RiskLevel::Low));

        assert_eq!(decision.mobile[0], name("crisis_resources"));
    }

    #[test]
    fn progress_celebration_is_excluded_while_declining() {
        let distributor = LayoutDistributor::default();
        let elements = set(vec![
            element("progress_celebration", Emphasis::Primary, Urgency::Medium),
            element("journal", Emphasis::Primary, Urgency::Medium),
        ]);

        let declining = LayoutContext::new(
            RiskLevel::Low,
            Trajectory::Declining,
            DissonanceScore::ZERO,
        );
        let decision = distributor.distribute(&elements, &declining);

        assert!(!decision.desktop_contains(&name("progress_celebration")));
        assert!(!decision.mobile.contains(&name("progress_celebration")));
        assert!(decision.desktop_contains(&name("journal")));

        // Still eligible on any other trajectory.
        let improving = LayoutContext::new(
            RiskLevel::Low,
            Trajectory::Improving,
            DissonanceScore::ZERO,
        );
        let decision = distributor.distribute(&elements, &improving);
        assert!(decision.desktop_contains(&name("progress_celebration")));
    }

    #[test]
    fn empty_candidate_set_yields_empty_decision() {
        let distributor = LayoutDistributor::default();
        let decision = distributor.distribute(&ElementSet::empty(), &context(RiskLevel::High));
        assert!(decision.is_empty());
    }

    #[test]
    fn distribute_is_deterministic() {
        let distributor = LayoutDistributor::default();
        let elements = set(vec![
            element("crisis_resources", Emphasis::Banner, Urgency::Critical),
            element("a", Emphasis::Secondary, Urgency::Medium),
            element("b", Emphasis::Secondary, Urgency::Medium),
            element("c", Emphasis::Minimal, Urgency::Low),
        ]);
        let ctx = context(RiskLevel::Medium);

        let first = distributor.distribute(&elements, &ctx);
        let second = distributor.distribute(&elements, &ctx);

        assert_eq!(first, second);
    }

    #[test]
    fn equal_priorities_keep_declaration_order() {
        let distributor = LayoutDistributor::default();
        let elements = set(vec![
            element("a", Emphasis::Secondary, Urgency::Medium),
            element("b", Emphasis::Secondary, Urgency::Medium),
            element("c", Emphasis::Secondary, Urgency::Medium),
        ]);

        let decision = distributor.distribute(&elements, &context(RiskLevel::Medium));

        assert_eq!(decision.secondary, vec![name("a"), name("b"), name("c")]);
    }

    #[test]
    fn crisis_scenario_at_critical_risk() {
        // One critical banner plus nine medium cards at critical risk:
        // hero holds exactly the crisis banner, primary at most two more,
        // secondary and footer stay empty, mobile leads with the banner.
        let distributor = LayoutDistributor::default();
        let mut elements = vec![element(
            "crisis_resources",
            Emphasis::Banner,
            Urgency::Critical,
        )];
        for i in 0..9 {
            elements.push(element(
                &format!("card_{i}"),
                Emphasis::Secondary,
                Urgency::Medium,
            ));
        }

        let decision = distributor.distribute(&set(elements), &context(RiskLevel::Critical));

        assert_eq!(decision.hero, vec![name("crisis_resources")]);
        assert!(decision.primary.len() <= 2);
        assert!(decision.secondary.is_empty());
        assert!(decision.footer.is_empty());
        assert_eq!(decision.mobile[0], name("crisis_resources"));
    }
}
