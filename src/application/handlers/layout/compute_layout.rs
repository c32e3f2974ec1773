//! ComputeLayout - command handler producing a fresh layout decision.

use tracing::{info, warn};

use crate::domain::foundation::DomainError;
use crate::domain::layout::{
    Element, ElementSet, InterfaceChangeNotice, LayoutContext, LayoutDecision, LayoutDiff,
    LayoutDistributor,
};

/// Command to recompute the layout for a context change.
///
/// Carries the raw element declarations; validation happens in the handler
/// so a malformed set fails fast before any scoring.
#[derive(Debug, Clone)]
pub struct ComputeLayoutCommand {
    pub elements: Vec<Element>,
    pub context: LayoutContext,
    /// The decision currently on screen, for the advisory change notice.
    pub previous: Option<LayoutDecision>,
}

/// The decision plus its advisory change notice.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutcome {
    pub decision: LayoutDecision,
    pub notice: InterfaceChangeNotice,
}

/// Handler for recomputing the layout.
///
/// Pure and stateless: safe to call concurrently; the caller applies the
/// latest outcome and discards stale ones. On a validation error the caller
/// keeps the last-known-good decision on screen rather than blanking the
/// interface.
pub struct ComputeLayoutHandler {
    distributor: LayoutDistributor,
}

impl ComputeLayoutHandler {
    pub fn new(distributor: LayoutDistributor) -> Self {
        Self { distributor }
    }

    pub fn handle(&self, command: ComputeLayoutCommand) -> Result<LayoutOutcome, DomainError> {
        let elements = ElementSet::new(command.elements).map_err(|err| {
            warn!(error = %err, "rejected malformed element set");
            DomainError::from(err)
        })?;

        let decision = self.distributor.distribute(&elements, &command.context);
        let notice = LayoutDiff::diff(
            command.previous.as_ref(),
            &decision,
            self.distributor.tags(),
        );

        info!(
            risk_level = %command.context.risk_level,
            desktop = decision.desktop_len(),
            mobile = decision.mobile.len(),
            reported_changes = notice.changes.len(),
            "layout recomputed"
        );

        Ok(LayoutOutcome { decision, notice })
    }
}

impl Default for ComputeLayoutHandler {
    fn default() -> Self {
        Self::new(LayoutDistributor::default())
    }
}
