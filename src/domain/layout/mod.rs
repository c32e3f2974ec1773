//! Layout decision engine.
//!
//! # Module Organization
//!
//! - `element` - Candidate interface units and the validated element set
//! - `context` - Risk context and safety-tag vocabulary for a computation
//! - `scoring` - Priority scorer (urgency x risk + emphasis + named boosts)
//! - `policy` - Risk policy table (region visibility, capacity, compact)
//! - `distributor` - Region assignment, capacity caps, mobile ordering
//! - `decision` - The engine's sole output value
//! - `changes` - Advisory diff between successive decisions
//!
//! The engine is a pure function of (elements, context): every decision is
//! recomputed from scratch, with no retained state.

mod changes;
mod context;
mod decision;
mod distributor;
mod element;
mod policy;
mod scoring;

pub use changes::{ChangeKind, ChangeSeverity, InterfaceChange, InterfaceChangeNotice, LayoutDiff};
pub use context::{LayoutContext, SafetyTags};
pub use decision::LayoutDecision;
pub use distributor::{LayoutDistributor, MOBILE_MAX_ELEMENTS};
pub use element::{Element, ElementName, ElementSet};
pub use policy::{RiskPolicy, RiskPolicyTable};
pub use scoring::{PriorityScorer, PRIMARY_THRESHOLD, SECONDARY_THRESHOLD};
