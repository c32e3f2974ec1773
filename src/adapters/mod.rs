//! Adapters - Implementations of ports.
//!
//! - `registry` - Explicit mapping from element names to presentation
//!   factories, validated at startup
//! - `renderer` - In-memory renderer driving the registry

mod registry;
mod renderer;

pub use registry::{ElementFactory, ElementRegistry, ElementRegistryBuilder, PresentationUnit};
pub use renderer::InMemoryRenderer;
