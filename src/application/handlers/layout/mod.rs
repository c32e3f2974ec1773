//! Layout computation handlers.

mod compute_layout;

pub use compute_layout::{ComputeLayoutCommand, ComputeLayoutHandler, LayoutOutcome};
