//! ElementRenderer port for presenting a layout decision.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Region};
use crate::domain::layout::{ElementName, LayoutDecision};

/// Presentation state of one element.
///
/// Rendering is deferred per element: the renderer shows a placeholder
/// while presentation code is being fetched, then swaps the content in.
/// The deferral never blocks computation of the next layout decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderState {
    /// Placeholder shown while presentation code loads.
    Loading,
    /// Content is on screen.
    Ready,
    /// No presentation code registered for the name; element was skipped.
    Skipped,
}

/// One element as placed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedElement {
    pub name: ElementName,
    pub region: Region,
    pub state: RenderState,
}

/// Renderer boundary.
///
/// The engine hands over only element names per region. An unknown name is
/// a logged skip, never a fatal error: a missing visual implementation must
/// not take down the screen for a user who may be in crisis.
#[async_trait]
pub trait ElementRenderer: Send + Sync {
    /// Presents a complete layout decision, region by region.
    async fn render_decision(
        &self,
        decision: &LayoutDecision,
    ) -> Result<Vec<RenderedElement>, DomainError>;
}
