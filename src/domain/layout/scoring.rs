//! Priority Scorer - numeric priority for each candidate element.

use super::context::{LayoutContext, SafetyTags};
use super::element::Element;

/// Priority at or above this routes an element to the primary region.
pub const PRIMARY_THRESHOLD: i64 = 100;

/// Priority at or above this routes an element to the secondary region.
pub const SECONDARY_THRESHOLD: i64 = 50;

/// Unconditional boost for crisis-resource and safety-check elements.
const SAFETY_BOOST: i64 = 50;

/// Boost for dissonance indicators while the score is elevated.
const DISSONANCE_BOOST: i64 = 30;

/// Boost for progress celebrations while the trajectory is improving.
const CELEBRATION_BOOST: i64 = 20;

/// Computes a deterministic integer priority for each candidate element.
///
/// Priority = urgency weight x risk multiplier + emphasis bonus + named
/// boosts. The risk multiplier is the safety amplifier: identical urgency
/// produces higher priority as assessed risk rises. Ties are broken by
/// declaration order downstream (stable sort), so the total order is
/// reproducible.
pub struct PriorityScorer<'a> {
    tags: &'a SafetyTags,
}

impl<'a> PriorityScorer<'a> {
    /// Creates a scorer over the given safety-tag vocabulary.
    pub fn new(tags: &'a SafetyTags) -> Self {
        Self { tags }
    }

    /// Scores one element against the current context.
    ///
    /// The caller is responsible for filtering terminal elements first;
    /// scoring a hidden element is meaningless but not an error.
    pub fn score(&self, element: &Element, context: &LayoutContext) -> i64 {
        let base = element.urgency.weight();
        let mut priority = base * context.risk_level.multiplier_percent() / 100;

        priority += element.emphasis.bonus();
        priority += self.boosts(element, context);

        priority
    }

    fn boosts(&self, element: &Element, context: &LayoutContext) -> i64 {
        let mut total = 0;

        if self.tags.is_safety_critical(&element.name) {
            total += SAFETY_BOOST;
        }
        if self.tags.is_dissonance_indicator(&element.name)
            && context.dissonance_score.is_elevated()
        {
            total += DISSONANCE_BOOST;
        }
        if self.tags.is_progress_celebration(&element.name)
            && context.trajectory == crate::domain::foundation::Trajectory::Improving
        {
            total += CELEBRATION_BOOST;
        }

        total
    }
}
