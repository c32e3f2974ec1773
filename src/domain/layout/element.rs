//! Candidate interface elements and the validated element set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::foundation::{Emphasis, Urgency, ValidationError};

/// Stable identifier of an interface element, unique within a set.
///
/// Non-empty after trimming; the same semantic element keeps the same name
/// across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementName(String);

impl ElementName {
    /// Creates a validated element name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("element_name"));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate interface unit.
///
/// The payload is opaque to the engine; only the name participates in
/// safety-boost matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: ElementName,
    /// Explicit kill-switch, independent of scoring.
    pub visible: bool,
    pub emphasis: Emphasis,
    pub urgency: Urgency,
    /// Opaque data handed through to the renderer.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Element {
    /// Creates a visible element with an empty payload.
    pub fn new(
        name: impl Into<String>,
        emphasis: Emphasis,
        urgency: Urgency,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ElementName::new(name)?,
            visible: true,
            emphasis,
            urgency,
            payload: serde_json::Value::Null,
        })
    }

    /// Sets the opaque renderer payload.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// Marks the element invisible.
    pub fn invisible(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Whether the element participates in scoring and placement at all.
    ///
    /// `visible = false` or `emphasis = hidden` is terminal: the element is
    /// removed from every region, not merely ranked low.
    pub fn is_renderable(&self) -> bool {
        self.visible && !self.emphasis.is_hidden()
    }
}

/// An ordered set of candidate elements with unique names.
///
/// Declaration order is preserved; it is the tie-break for equal priorities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSet {
    elements: Vec<Element>,
}

impl ElementSet {
    /// Builds a set, failing fast on duplicate names.
    pub fn new(elements: Vec<Element>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for element in &elements {
            if !seen.insert(element.name.clone()) {
                return Err(ValidationError::duplicate(
                    "element_name",
                    element.name.as_str(),
                ));
            }
        }
        Ok(Self { elements })
    }

    /// Empty set.
    pub fn empty() -> Self {
        Self { elements: Vec::new() }
    }

    /// Elements in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Elements that survive the terminal visibility filter,
    /// in declaration order.
    pub fn renderable(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.is_renderable())
    }

    /// Looks up an element by name.
    pub fn get(&self, name: &ElementName) -> Option<&Element> {
        self.elements.iter().find(|e| &e.name == name)
    }

    /// Number of declared elements, including non-renderable ones.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when no elements are declared.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
