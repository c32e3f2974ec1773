//! In-memory renderer driving the element registry.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, Region};
use crate::domain::layout::{ElementSet, LayoutDecision};
use crate::ports::{ElementRenderer, RenderState, RenderedElement};

use super::registry::ElementRegistry;

/// Renderer that resolves each placed name through the registry.
///
/// Unknown names are logged and skipped; a missing visual implementation
/// never fails the whole screen. Each element starts as a placeholder and
/// flips to ready once its factory has produced content.
pub struct InMemoryRenderer {
    registry: ElementRegistry,
    elements: ElementSet,
}

impl InMemoryRenderer {
    /// Creates a renderer over a frozen registry and the declared elements.
    pub fn new(registry: ElementRegistry, elements: ElementSet) -> Self {
        Self { registry, elements }
    }
}

#[async_trait]
impl ElementRenderer for InMemoryRenderer {
    async fn render_decision(
        &self,
        decision: &LayoutDecision,
    ) -> Result<Vec<RenderedElement>, DomainError> {
        let mut rendered = Vec::new();

        for region in Region::all() {
            for name in decision.region(*region) {
                let factory = match self.registry.resolve(name) {
                    Some(f) => f,
                    None => {
                        warn!(element = %name, region = %region, "unknown element name, skipping");
                        rendered.push(RenderedElement {
                            name: name.clone(),
                            region: *region,
                            state: RenderState::Skipped,
                        });
                        continue;
                    }
                };

                let payload = self
                    .elements
                    .get(name)
                    .map(|e| e.payload.clone())
                    .unwrap_or(serde_json::Value::Null);
                let unit = factory(&payload);
                debug!(element = %unit.element, region = %region, "element ready");

                rendered.push(RenderedElement {
                    name: name.clone(),
                    region: *region,
                    state: RenderState::Ready,
                });
            }
        }

        Ok(rendered)
    }
}
