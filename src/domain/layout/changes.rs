//! Advisory change notices between successive layout decisions.
//!
//! The notice lists only high/critical-severity changes; it is advisory,
//! not authoritative. The renderer decides whether and how to surface it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::context::SafetyTags;
use super::decision::LayoutDecision;
use super::element::ElementName;
use crate::domain::foundation::{Region, Timestamp};

/// What happened to one element between two decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Newly present in the interface.
    Appeared,
    /// No longer present anywhere.
    Removed,
    /// Moved between desktop regions.
    Moved { from: Region, to: Region },
}

/// Severity of a reported change. Lower severities are not reported at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeSeverity {
    High,
    Critical,
}

/// One reported change with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceChange {
    pub element: ElementName,
    pub kind: ChangeKind,
    pub severity: ChangeSeverity,
    pub reason: String,
}

/// The advisory notice produced alongside each decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceChangeNotice {
    pub changes: Vec<InterfaceChange>,
    pub generated_at: Timestamp,
}

impl InterfaceChangeNotice {
    /// Notice with no reportable changes.
    pub fn empty() -> Self {
        Self {
            changes: Vec::new(),
            generated_at: Timestamp::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Computes the advisory diff between two decisions.
pub struct LayoutDiff;

impl LayoutDiff {
    /// Diffs `current` against `previous`.
    ///
    /// The first computation has no previous decision and yields an empty
    /// notice. Severity: any change touching a crisis-resource or
    /// safety-check element is critical; appearance, removal, or movement
    /// involving the hero or primary region is high; everything else is
    /// omitted.
    pub fn diff(
        previous: Option<&LayoutDecision>,
        current: &LayoutDecision,
        tags: &SafetyTags,
    ) -> InterfaceChangeNotice {
        let previous = match previous {
            Some(p) => p,
            None => return InterfaceChangeNotice::empty(),
        };

        let mut changes = Vec::new();
        let before = all_names(previous);
        let after = all_names(current);

        for name in after.iter() {
            if !before.contains(name) {
                push_presence_change(&mut changes, name, current, tags, ChangeKind::Appeared);
            }
        }
        for name in before.iter() {
            if !after.contains(name) {
                push_presence_change(&mut changes, name, previous, tags, ChangeKind::Removed);
            }
        }
        for name in after.intersection(&before) {
            let from = previous.desktop_region_of(name);
            let to = current.desktop_region_of(name);
            if let (Some(from), Some(to)) = (from, to) {
                if from != to {
                    push_move_change(&mut changes, name, from, to, tags);
                }
            }
        }

        InterfaceChangeNotice {
            changes,
            generated_at: Timestamp::now(),
        }
    }
}

fn all_names(decision: &LayoutDecision) -> BTreeSet<ElementName> {
    Region::all()
        .iter()
        .flat_map(|r| decision.region(*r).iter().cloned())
        .collect()
}

fn involves_prominent_region(decision: &LayoutDecision, name: &ElementName) -> bool {
    matches!(
        decision.desktop_region_of(name),
        Some(Region::Hero) | Some(Region::Primary)
    )
}

fn push_presence_change(
    changes: &mut Vec<InterfaceChange>,
    name: &ElementName,
    placement: &LayoutDecision,
    tags: &SafetyTags,
    kind: ChangeKind,
) {
    let verb = if matches!(kind, ChangeKind::Appeared) {
        "entered the interface"
    } else {
        "left the interface"
    };

    let severity = if tags.is_safety_critical(name) {
        ChangeSeverity::Critical
    } else if involves_prominent_region(placement, name) {
        ChangeSeverity::High
    } else {
        return;
    };

    changes.push(InterfaceChange {
        element: name.clone(),
        kind,
        severity,
        reason: format!("{name} {verb} at {} risk", placement.risk_level),
    });
}

fn push_move_change(
    changes: &mut Vec<InterfaceChange>,
    name: &ElementName,
    from: Region,
    to: Region,
    tags: &SafetyTags,
) {
    let severity = if tags.is_safety_critical(name) {
        ChangeSeverity::Critical
    } else if matches!(from, Region::Hero | Region::Primary)
        || matches!(to, Region::Hero | Region::Primary)
    {
        ChangeSeverity::High
    } else {
        return;
    };

    changes.push(InterfaceChange {
        element: name.clone(),
        kind: ChangeKind::Moved { from, to },
        severity,
        reason: format!("{name} moved from {from} to {to}"),
    });
}
