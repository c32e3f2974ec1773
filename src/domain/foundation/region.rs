//! Region enum naming the five placement buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named placement bucket in the layout decision.
///
/// `Hero`, `Primary`, `Secondary`, and `Footer` are mutually exclusive on
/// desktop; `Mobile` is an independent ordering that may repeat desktop
/// members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Hero,
    Primary,
    Secondary,
    Footer,
    Mobile,
}

impl Region {
    /// Returns all regions in rendering precedence order.
    pub fn all() -> &'static [Region] {
        &[
            Region::Hero,
            Region::Primary,
            Region::Secondary,
            Region::Footer,
            Region::Mobile,
        ]
    }

    /// Desktop regions only, in precedence order.
    pub fn desktop() -> &'static [Region] {
        &[Region::Hero, Region::Primary, Region::Secondary, Region::Footer]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Region::Hero => "hero",
            Region::Primary => "primary",
            Region::Secondary => "secondary",
            Region::Footer => "footer",
            Region::Mobile => "mobile",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_excludes_mobile() {
        assert!(!Region::desktop().contains(&Region::Mobile));
        assert_eq!(Region::desktop().len(), 4);
    }

    #[test]
    fn all_lists_five_regions() {
        assert_eq!(Region::all().len(), 5);
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&Region::Hero).unwrap(), "\"hero\"");
    }
}
