//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! The only asynchronous boundary in this subsystem is the renderer, which
//! may defer element presentation while fetching per-element code.

mod element_renderer;

pub use element_renderer::{ElementRenderer, RenderState, RenderedElement};
