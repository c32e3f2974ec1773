//! Emphasis enum representing an element's intrinsic visual weight class.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared visual weight of an interface element.
///
/// `Hidden` is terminal: it removes the element from scoring and from every
/// region, independent of priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Hidden,
    Minimal,
    Secondary,
    Primary,
    Banner,
    Takeover,
}

impl Emphasis {
    /// Returns all emphasis classes in ascending visual weight.
    pub fn all() -> &'static [Emphasis] {
        &[
            Emphasis::Hidden,
            Emphasis::Minimal,
            Emphasis::Secondary,
            Emphasis::Primary,
            Emphasis::Banner,
            Emphasis::Takeover,
        ]
    }

    /// Scoring bonus, monotonic in visual weight.
    ///
    /// Hidden contributes nothing; a hidden element never reaches the
    /// scorer in the first place.
    pub fn bonus(&self) -> i64 {
        match self {
            Emphasis::Hidden => 0,
            Emphasis::Minimal => 10,
            Emphasis::Secondary => 20,
            Emphasis::Primary => 30,
            Emphasis::Banner => 40,
            Emphasis::Takeover => 50,
        }
    }

    /// True for the terminal class that removes an element entirely.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Emphasis::Hidden)
    }

    /// True for classes routed to the hero region.
    pub fn is_hero_class(&self) -> bool {
        matches!(self, Emphasis::Banner | Emphasis::Takeover)
    }
}

impl fmt::Display for Emphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Emphasis::Hidden => "hidden",
            Emphasis::Minimal => "minimal",
            Emphasis::Secondary => "secondary",
            Emphasis::Primary => "primary",
            Emphasis::Banner => "banner",
            Emphasis::Takeover => "takeover",
        };
        write!(f, "{}", s)
    }
}
