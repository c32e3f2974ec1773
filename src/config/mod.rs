//! Engine configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values load with the `HAVEN_` prefix and
//! nested values use double underscores as separators
//! (e.g. `HAVEN_MOBILE__MAX_ELEMENTS=5`).

mod engine;
mod error;

pub use engine::{EngineConfig, MobileConfig};
pub use error::{ConfigError, ValidationError};
