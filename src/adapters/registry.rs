//! Element registry - dynamic dispatch from stable names to presentation
//! factories.
//!
//! Registered at startup and validated against the declared element set so
//! unknown names are caught early rather than only at render time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::layout::ElementName;

/// What a factory produces for the presentation layer. Opaque to the
/// engine; the renderer hands it to the actual view code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationUnit {
    pub element: ElementName,
    pub content: serde_json::Value,
}

/// Constructor for one element's presentation, fed the element's payload.
pub type ElementFactory = Box<dyn Fn(&serde_json::Value) -> PresentationUnit + Send + Sync>;

/// Immutable mapping from element names to presentation factories.
pub struct ElementRegistry {
    factories: HashMap<ElementName, ElementFactory>,
}

impl ElementRegistry {
    /// Starts building a registry.
    pub fn builder() -> ElementRegistryBuilder {
        ElementRegistryBuilder::default()
    }

    /// Looks up the factory for a name.
    ///
    /// A miss is the caller's signal to show nothing for that element;
    /// the renderer logs and skips it.
    pub fn resolve(&self, name: &ElementName) -> Option<&ElementFactory> {
        self.factories.get(name)
    }

    /// Checks every declared name against the registry at startup.
    ///
    /// Returns a configuration error naming the unregistered elements, so a
    /// missing visual implementation is surfaced before any user sees a
    /// blank region.
    pub fn validate<'a>(
        &self,
        declared: impl Iterator<Item = &'a ElementName>,
    ) -> Result<(), DomainError> {
        let missing: Vec<String> = declared
            .filter(|name| !self.factories.contains_key(*name))
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            warn!(missing = ?missing, "elements declared without presentation code");
            Err(DomainError::new(
                ErrorCode::ElementNotFound,
                format!("No presentation registered for: {}", missing.join(", ")),
            ))
        }
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Builder collecting name/factory pairs before the registry is frozen.
#[derive(Default)]
pub struct ElementRegistryBuilder {
    factories: HashMap<ElementName, ElementFactory>,
}

impl ElementRegistryBuilder {
    /// Registers a factory under a stable element name.
    ///
    /// Re-registering a name replaces the previous factory.
    pub fn register<F>(mut self, name: ElementName, factory: F) -> Self
    where
        F: Fn(&serde_json::Value) -> PresentationUnit + Send + Sync + 'static,
    {
        self.factories.insert(name, Box::new(factory));
        self
    }

    /// Registers a factory that echoes the payload as content.
    pub fn register_passthrough(self, name: ElementName) -> Self {
        let element = name.clone();
        self.register(name, move |payload| PresentationUnit {
            element: element.clone(),
            content: payload.clone(),
        })
    }

    /// Freezes the registry.
    pub fn build(self) -> ElementRegistry {
        ElementRegistry {
            factories: self.factories,
        }
    }
}
